//! Newtype wrappers for row identifiers.
//!
//! Every table uses a `SERIAL` primary key, so all ids wrap `i32`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! serial_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Parse a client-supplied id the way the shop has always done it:
            /// anything that is not a plain integer becomes id `0`, which never
            /// matches a row.
            pub fn parse_lenient(s: &str) -> Self {
                s.parse().unwrap_or(Self(0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }
    };
}

serial_id!(
    /// Identifies a user account.
    UserId
);

serial_id!(
    /// Identifies a catalog product.
    ProductId
);

serial_id!(
    /// Identifies a row in a user's cart.
    CartItemId
);

serial_id!(
    /// Identifies a placed order.
    OrderId
);
