//! Core types for Folio.
//!
//! This module provides the portfolio content model and type-safe wrappers
//! around its identifiers.

pub mod content;
pub mod icon;
pub mod id;

pub use content::*;
pub use icon::{IconParseError, ServiceIcon};
pub use id::*;
