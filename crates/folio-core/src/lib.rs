//! folio-core - Core library for folio.
//!
//! This crate provides the building blocks for the portfolio backend:
//! the static profile record, the pattern-matching chat responder,
//! client metadata parsing, and best-effort notification delivery.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use folio_core::{ProfileRecord, Responder};
//!
//! let profile = Arc::new(ProfileRecord::bundled());
//! let responder = Responder::new(profile);
//!
//! let reply = responder.respond("What are your automation skills?");
//! assert!(reply.contains("Selenium"));
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod profile;
pub mod responder;

// Re-export commonly used types
pub use client::{ClientInfo, DeviceInfo, DeviceType, SourcePlatform};
pub use config::NotifyConfig;
pub use error::{FolioError, FolioResult};
pub use notify::{DownloadEvent, Notifier, VisitEvent};
pub use profile::ProfileRecord;
pub use responder::Responder;
