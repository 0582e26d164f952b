//! Outbound services.
//!
//! # Services
//!
//! - [`relay`] - Mail relay that forwards contact form submissions as email

pub mod relay;

pub use relay::{ContactRelay, FormSubmitRelay, RelayError};
