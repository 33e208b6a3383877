//! Declarative schemas
//!
//! A [`Schema`] maps field names to [`FieldSchema`]s. Each field has a base
//! [`FieldKind`], presence rules, [`Transform`]s and an ordered list of
//! [`Refinement`]s. Schemas are plain values: [`Schema::extend`] builds a
//! new one from an existing one without touching it.
//!
//! ```
//! use serde_json::json;
//! use shortlink_validator::prelude::*;
//!
//! let schema = Schema::builder("analytics_export")
//!     .field("format", FieldSchema::string().required().check(one_of(["json", "csv"]).unwrap().json()))
//!     .build()
//!     .unwrap();
//!
//! let outcome = validate_form(&schema, &json!({ "format": "xml" }));
//! assert_eq!(outcome.errors().unwrap().get("format"), Some("Must be one of: json, csv"));
//! ```

mod error;
mod field;
mod object;
mod refinement;
mod slot;

pub use error::SchemaDefinitionError;
pub use field::{FieldKind, FieldSchema, Transform};
pub use object::{Schema, SchemaBuilder};
pub use refinement::{DynValidator, Refinement, refine};
pub use slot::Slot;
