//! # shortlink-validator
//!
//! Declarative form validation for the shortlink admin.
//!
//! Forms arrive as already-deserialized JSON. A [`Schema`](schema::Schema)
//! declares what each field must look like; [`validate_form`] checks a value
//! against it and returns either the normalized data or a flat map from
//! field path to message. Bad input is never an `Err` or a panic.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use shortlink_validator::prelude::*;
//!
//! let schema = Schema::builder("link")
//!     .field(
//!         "long_url",
//!         FieldSchema::string()
//!             .required()
//!             .check_with(url().json(), "Please enter a valid URL (including http:// or https://)"),
//!     )
//!     .field(
//!         "custom_code",
//!         FieldSchema::string()
//!             .blank_is_absent()
//!             .check(length_range(3, 50).unwrap().json()),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let outcome = validate_form(&schema, &json!({ "long_url": "not-a-url", "custom_code": "ab" }));
//! let errors = outcome.errors().unwrap();
//! assert_eq!(errors.get("long_url"), Some("Please enter a valid URL (including http:// or https://)"));
//! assert_eq!(errors.get("custom_code"), Some("Must be at least 3 characters"));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//! Typed validators are lifted onto JSON with
//! [`ValidateExt::json`](foundation::ValidateExt::json).
//!
//! ## Built-in Validators
//!
//! - **String**: [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`LengthRange`](validators::LengthRange),
//!   [`MatchesRegex`](validators::MatchesRegex), [`Email`](validators::Email),
//!   [`Url`](validators::Url), [`Hostname`](validators::Hostname)
//! - **Sets**: [`OneOf`](validators::OneOf), [`NotIn`](validators::NotIn)
//! - **Time**: [`InFuture`](validators::InFuture), [`NotInFuture`](validators::NotInFuture),
//!   [`NotAfter`](validators::NotAfter)
//! - **Boolean**: [`IsTrue`](validators::IsTrue), [`IsFalse`](validators::IsFalse)
//! - **Arrays**: [`Each`](combinators::Each)

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod executor;
pub mod factory;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;

pub use executor::{FieldOutcome, FormOutcome, validate_field, validate_form, validate_update};
pub use factory::{FieldValidator, create_field_validator};
