//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`, `AsValidatable`
//! - **Errors**: `ValidationError` for one failed constraint, `FieldFailure`
//!   for a failure at a location, `ErrorMap` for the flat per-field report
//! - **Paths**: `FieldPath`, rendered dot-joined
//! - **Time**: `Clock`, the source of "now" for date constraints
//!
//! # Architecture
//!
//! Typed validators (`Validate<Input = str>`, `Validate<Input = bool>` ...)
//! compose with combinators and are lifted onto `serde_json::Value` at the
//! schema boundary. Constraint failures are values, never panics.

pub mod clock;
pub mod error;
pub mod error_map;
pub mod path;
pub mod traits;
pub mod validatable;

pub use clock::Clock;
pub use error::{ErrorParams, ValidationError};
pub use error_map::{ErrorMap, FieldFailure, GENERAL_KEY};
pub use path::{FieldPath, PathSegment};
pub use traits::{Validate, ValidateExt};
pub use validatable::{AsValidatable, json_type_name, parse_datetime};
