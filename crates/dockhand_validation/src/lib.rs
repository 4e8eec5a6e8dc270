//! # dockhand_validation
//!
//! Configuration validation for Dockhand.
//!
//! Two concerns live here:
//!
//! - [`ConfigValidator`]: deterministic, field-by-field validation of
//!   user-supplied configuration values against a template's schema.
//! - [`is_port_available`]: a bounded-timeout TCP probe used for
//!   deployment-readiness checks. Port conflicts are a deployment-time
//!   concern, so the probe is a separate operation rather than a per-field
//!   check.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use dockhand_validation::ConfigValidator;
//!
//! let fields = Vec::new();
//! let config = HashMap::new();
//!
//! let result = ConfigValidator::validate_configuration(&fields, &config);
//! assert!(result.valid);
//! ```

pub mod ports;
pub mod validator;

pub use ports::{is_port_available, PROBE_HOST, PROBE_TIMEOUT};
pub use validator::{ConfigValidator, ValidationError, ValidationResult};
