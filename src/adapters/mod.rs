// Adapters layer: concrete clients for external systems.

pub mod plaid;

pub use plaid::PlaidClient;
