pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::PlaidClient;
pub use config::AppConfig;
pub use domain::table::DataTable;
pub use utils::error::{FetchError, Result};
