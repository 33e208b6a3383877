//! # shortlink-forms
//!
//! The link shortener's named forms, built on `shortlink-validator`.
//!
//! [`FormRegistry`] builds every schema once from a [`FormsConfig`] and
//! validates data by [`FormKind`]. The schema builders in [`schemas`] and
//! the fragments in [`prebuilt`] are public for callers that compose their
//! own forms.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use shortlink_forms::{FormKind, FormRegistry, FormsConfig};
//!
//! let config = FormsConfig::from_toml_str(r#"base_domains = ["go2.video"]"#).unwrap();
//! let registry = FormRegistry::new(&config).unwrap();
//!
//! let outcome = registry.validate(
//!     FormKind::LinkCreation,
//!     &json!({ "long_url": "https://example.com", "base_domain": "go2.video", "custom_code": "ab" }),
//! );
//! assert_eq!(
//!     outcome.errors().unwrap().get("custom_code"),
//!     Some("Must be at least 3 characters")
//! );
//! ```

#![allow(clippy::result_large_err)]

pub mod config;
pub mod error;
pub mod prebuilt;
pub mod registry;
pub mod schemas;

pub use config::{BASE_DOMAINS_ENV, FormsConfig};
pub use error::{ConfigError, FormsError};
pub use prebuilt::{custom_code_validator, email_validator, password_validator, url_validator};
pub use registry::{FormKind, FormRegistry};
