//! Combinators for composing validators
//!
//! - [`Each`]: every element of a slice is validated, failures keep their index
//! - [`Json`]: lifts a typed validator onto `serde_json::Value`
//!
//! Most code reaches these through [`ValidateExt`](crate::foundation::ValidateExt).

pub mod each;
pub mod json;

pub use each::{Each, each};
pub use json::{Json, json};
