use super::{FetchContext, FetchOperation};
use crate::core::{format, poll_until_ready, DataTable, Result};
use crate::domain::plaid::AssetReportGetResponse;
use async_trait::async_trait;

/// Kicks off asset-report generation, then polls the fetch endpoint
/// until the report stops answering not-ready. The attempt cap and
/// interval come from `[poller]` configuration.
pub struct Assets;

#[async_trait]
impl FetchOperation for Assets {
    fn name(&self) -> &'static str {
        "assets"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let created = ctx.client.asset_report_create(&ctx.config.assets).await?;
        let token = created.asset_report_token;

        let poller = ctx.config.poller.to_poller_config();
        let response =
            poll_until_ready(&poller, || ctx.client.asset_report_get(&token)).await?;

        project(&response)
    }
}

fn project(response: &AssetReportGetResponse) -> Result<DataTable> {
    let mut table = DataTable::new(&[
        "Account",
        "Transactions/r",
        "Balance/r",
        "Days Available/r",
    ]);
    for item in &response.report.items {
        for account in &item.accounts {
            table.push_row(vec![
                account.name.clone(),
                account.transactions.len().to_string(),
                format::currency(account.balances.current),
                format::whole_number(account.days_available),
            ])?;
        }
    }
    Ok(table)
}
