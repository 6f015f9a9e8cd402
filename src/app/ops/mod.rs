//! Fetch operations: one per exposed endpoint.
//!
//! Every operation follows the same shape — issue one to three remote
//! calls in sequence, then project the final response into a
//! `DataTable`. The operations register themselves in `registry()` as
//! trait objects and a single generic handler drives them; nothing else
//! knows one operation from another.

use crate::adapters::PlaidClient;
use crate::config::AppConfig;
use crate::domain::table::DataTable;
use crate::utils::error::Result;
use async_trait::async_trait;

pub mod accounts;
pub mod assets;
pub mod auth;
pub mod identity;
pub mod investments;
pub mod item;
pub mod liabilities;
pub mod payment;
pub mod transactions;
pub mod transfer;

/// Shared dependencies handed to every operation: the API client plus
/// the read-only process configuration.
pub struct FetchContext {
    pub client: PlaidClient,
    pub config: AppConfig,
}

#[async_trait]
pub trait FetchOperation: Send + Sync {
    /// Route segment and log label for the operation.
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable>;
}

/// The full operation catalogue.
pub fn registry() -> Vec<Box<dyn FetchOperation>> {
    vec![
        Box::new(auth::Auth),
        Box::new(transactions::Transactions),
        Box::new(identity::Identity),
        Box::new(investments::Holdings),
        Box::new(investments::InvestmentsTransactions),
        Box::new(accounts::Balance),
        Box::new(accounts::Accounts),
        Box::new(item::Item),
        Box::new(liabilities::Liabilities),
        Box::new(payment::Payment),
        Box::new(assets::Assets),
        Box::new(transfer::Transfer),
        Box::new(accounts::Verification),
    ]
}
