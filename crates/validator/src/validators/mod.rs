//! Built-in validators
//!
//! Ready-to-use constraint primitives for form fields.
//!
//! # Categories
//!
//! - **String**: length, regex, email, URL, hostname
//! - **Sets**: enum membership, reserved values
//! - **Time**: in the future, not in the future, within a horizon
//! - **Logical**: boolean flags
//!
//! Array-of(constraint) is the [`Each`](crate::combinators::Each) combinator.
//!
//! # Examples
//!
//! ```
//! use shortlink_validator::prelude::*;
//!
//! let charset = matches_regex("[A-Za-z0-9_-]+").unwrap();
//! assert!(charset.validate("my-link").is_ok());
//! assert!(length_range(3, 50).unwrap().validate("ab").is_err());
//! ```

// String validators
pub mod content;
pub mod hostname;
pub mod length;

// Set validators
pub mod one_of;

// Time validators
pub mod time;

// Logical validators
pub mod boolean;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{
    LengthRange, MaxLength, MinLength, NotEmpty, length_range, max_length, min_length, not_empty,
};

pub use content::{Email, MatchesRegex, Url, email, matches_regex, url};

pub use hostname::{Hostname, hostname};

pub use one_of::{NotIn, OneOf, not_in, one_of};

pub use time::{
    Horizon, InFuture, NotAfter, NotInFuture, in_future, not_after_years, not_in_future,
};

pub use boolean::{IsFalse, IsTrue, is_false, is_true};
