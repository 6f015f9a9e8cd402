use super::{FetchContext, FetchOperation};
use crate::core::{format, DataTable, Result};
use crate::domain::plaid::{Account, AccountsGetResponse};
use async_trait::async_trait;

pub struct Accounts;

#[async_trait]
impl FetchOperation for Accounts {
    fn name(&self) -> &'static str {
        "accounts"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let response = ctx.client.accounts_get().await?;
        project_accounts(&response)
    }
}

fn project_accounts(response: &AccountsGetResponse) -> Result<DataTable> {
    let mut table = DataTable::new(&["Name", "Balance/r", "Subtype", "Mask"]);
    for account in &response.accounts {
        table.push_row(vec![
            account.name.clone(),
            format::currency(current_balance(account)),
            account.subtype.clone().unwrap_or_default(),
            account.mask.clone().unwrap_or_default(),
        ])?;
    }
    Ok(table)
}

pub struct Balance;

#[async_trait]
impl FetchOperation for Balance {
    fn name(&self) -> &'static str {
        "balance"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let response = ctx.client.accounts_balance_get().await?;
        project_balances(&response, &["Name", "AccountId", "Balance/r"])
    }
}

/// Same remote call and cells as `balance`, different column titles.
/// Kept as its own route so the client UI's wire contract holds.
pub struct Verification;

#[async_trait]
impl FetchOperation for Verification {
    fn name(&self) -> &'static str {
        "verification"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let response = ctx.client.accounts_balance_get().await?;
        project_balances(&response, &["Description", "Current Amount/r", "Currency"])
    }
}

fn project_balances(response: &AccountsGetResponse, titles: &[&str]) -> Result<DataTable> {
    let mut table = DataTable::new(titles);
    for account in &response.accounts {
        table.push_row(vec![
            account.name.clone(),
            account.account_id.clone(),
            format::currency(current_balance(account)),
        ])?;
    }
    Ok(table)
}

fn current_balance(account: &Account) -> Option<f64> {
    account.balances.as_ref().and_then(|b| b.current)
}
