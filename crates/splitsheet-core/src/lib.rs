//! Core domain model for splitsheet.
//!
//! This crate defines the music-rights data model (Song, Contributor,
//! Split, ISWC), dashboard alerts, and the in-memory [`Catalog`] that
//! every query runs against.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::Catalog;
pub use error::{Error, Result};
