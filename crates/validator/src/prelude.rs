//! Prelude module for convenient imports.
//!
//! Provides a single `use shortlink_validator::prelude::*;` import that
//! brings in the traits, schema types, executor entry points, validators
//! and combinators.
//!
//! # Examples
//!
//! ```
//! use shortlink_validator::prelude::*;
//!
//! let code = FieldSchema::string()
//!     .check(length_range(3, 50).unwrap().json())
//!     .check(not_in(["api", "admin"]).json());
//! assert!(validate_field(&code, &serde_json::json!("my-link")).is_valid());
//! assert!(!validate_field(&code, &serde_json::json!("admin")).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, paths
// ============================================================================

pub use crate::foundation::{
    AsValidatable, Clock, ErrorMap, FieldFailure, FieldPath, Validate, ValidateExt,
    ValidationError,
};

// ============================================================================
// SCHEMA + EXECUTOR
// ============================================================================

pub use crate::schema::{
    FieldKind, FieldSchema, Refinement, Schema, SchemaDefinitionError, Slot, Transform, refine,
};

pub use crate::executor::{FieldOutcome, FormOutcome, validate_field, validate_form, validate_update};
pub use crate::factory::{FieldValidator, create_field_validator};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    Email, Horizon, Hostname, InFuture, IsFalse, IsTrue, LengthRange, MatchesRegex, MaxLength,
    MinLength, NotAfter, NotEmpty, NotIn, NotInFuture, OneOf, Url, email, hostname, in_future,
    is_false, is_true, length_range, matches_regex, max_length, min_length, not_after_years,
    not_empty, not_in, not_in_future, one_of, url,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{Each, Json, each, json};
