//! Core library for the `weather-lookup` tool.
//!
//! This crate defines:
//! - Configuration handling
//! - The weather endpoint abstraction and its HTTP implementation
//! - The per-city result list and the lookup component that owns it
//!
//! It is used by `weather-lookup`, but can also drive other front ends.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod store;

pub use config::Config;
pub use error::FetchError;
pub use lookup::{NO_DATA, QUICK_PICKS, RowView, SearchOutcome, TableView, WeatherLookup};
pub use model::{Reading, RecordId, WeatherRecord, WeatherReport, data_age_hours};
pub use provider::{WeatherProvider, http::HttpProvider, provider_from_config};
pub use store::{Merge, ResultStore};
