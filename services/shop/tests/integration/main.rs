mod helpers;

mod admin_test;
mod cart_test;
mod catalog_test;
mod checkout_test;
