//! Folio Core - Shared content model.
//!
//! This crate provides the types used across all Folio components:
//! - `site` - Public portfolio pages and the content admin
//! - `cli` - Command-line tools for resetting, exporting and importing content
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access, no HTTP clients. Persistence lives in the `site` crate behind a
//! storage port.
//!
//! # Modules
//!
//! - [`types`] - Portfolio entities, typed ids and service icons
//! - [`seed`] - Default content used when nothing has been saved yet
//! - [`text`] - Delimited-text transforms used by the admin editors
//! - [`section`] - The closed set of admin sections
//! - [`contact`] - Contact form fields, relay payload and submission state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod contact;
pub mod section;
pub mod seed;
pub mod text;
pub mod types;

pub use contact::{ContactForm, ContactStatus, RelayPayload};
pub use section::AdminSection;
pub use seed::seed;
pub use types::*;
