pub mod format;
pub mod lookup;
pub mod poller;

pub use crate::domain::table::{Column, DataTable, Row};
pub use crate::utils::error::Result;
pub use lookup::Index;
pub use poller::{poll_until_ready, PollerConfig};
