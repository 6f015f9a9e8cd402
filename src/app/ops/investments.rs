use super::{FetchContext, FetchOperation};
use crate::core::{format, DataTable, Index, Result};
use crate::domain::plaid::{InvestmentsHoldingsGetResponse, InvestmentsTransactionsGetResponse};
use async_trait::async_trait;
use chrono::{Duration, Local};

pub struct Holdings;

#[async_trait]
impl FetchOperation for Holdings {
    fn name(&self) -> &'static str {
        "holdings"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let response = ctx.client.investments_holdings_get().await?;
        project_holdings(&response)
    }
}

/// Each holding joins both sibling collections: the account for its mask
/// and the security for its display name.
fn project_holdings(response: &InvestmentsHoldingsGetResponse) -> Result<DataTable> {
    let accounts = Index::build(&response.accounts, |a| Some(a.account_id.as_str()));
    let securities = Index::build(&response.securities, |s| Some(s.security_id.as_str()));

    let mut table = DataTable::new(&["Mask", "Name", "Quantity/r", "Close Price/r", "Value/r"]);
    for holding in &response.holdings {
        let account = accounts.get(Some(holding.account_id.as_str()));
        let security = securities.get(Some(holding.security_id.as_str()));
        table.push_row(vec![
            account.and_then(|a| a.mask.clone()).unwrap_or_default(),
            security.and_then(|s| s.name.clone()).unwrap_or_default(),
            format::quantity(holding.quantity),
            format::currency(Some(holding.institution_price)),
            format::currency(Some(holding.institution_value)),
        ])?;
    }
    Ok(table)
}

pub struct InvestmentsTransactions;

#[async_trait]
impl FetchOperation for InvestmentsTransactions {
    fn name(&self) -> &'static str {
        "investments_transactions"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let end_date = Local::now().date_naive();
        let start_date = end_date - Duration::days(ctx.config.fetch.window_days);

        let response = ctx
            .client
            .investments_transactions_get(start_date, end_date, ctx.config.fetch.page_size)
            .await?;
        project_investment_transactions(&response)
    }
}

fn project_investment_transactions(
    response: &InvestmentsTransactionsGetResponse,
) -> Result<DataTable> {
    let securities = Index::build(&response.securities, |s| Some(s.security_id.as_str()));

    let mut table = DataTable::new(&["Name", "Amount/r", "Date/r", "Ticker"]);
    for transaction in &response.investment_transactions {
        let security = securities.get(transaction.security_id.as_deref());
        table.push_row(vec![
            transaction.name.clone(),
            format::currency(Some(transaction.amount)),
            format::short_date(transaction.date),
            security
                .and_then(|s| s.ticker_symbol.clone())
                .unwrap_or_default(),
        ])?;
    }
    Ok(table)
}
