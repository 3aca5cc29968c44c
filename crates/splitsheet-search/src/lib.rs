//! Catalog search for splitsheet.
//!
//! Runs free-text queries over a [`splitsheet_core::Catalog`], derives the
//! writers and publishers behind the matching songs, and aggregates
//! ownership splits for song detail and contributor dashboards.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod dashboard;
pub mod engine;
pub mod error;
pub mod ownership;
pub mod request;

pub use dashboard::Dashboard;
pub use engine::{search, ResultType, SearchResult, SelectedResults};
pub use error::SearchError;
pub use ownership::OwnershipSummary;
pub use request::SearchRequest;
