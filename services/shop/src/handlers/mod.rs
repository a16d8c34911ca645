use axum::Form;
use axum::extract::rejection::FormRejection;

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod health;
pub mod local_image;
pub mod preview;
pub mod relay;

/// First value of a repeated query key.
pub(crate) fn first(values: Vec<String>) -> Option<String> {
    values.into_iter().next()
}

/// Query and form values submitted empty count as missing.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A body that is absent or not url-encoded reads as a form with every field
/// missing, so handlers report the missing field instead of a 415.
pub(crate) fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(value)) => value,
        Err(rejection) => {
            tracing::debug!(%rejection, "form body rejected, using empty form");
            T::default()
        }
    }
}
