use super::{FetchContext, FetchOperation};
use crate::core::{format, DataTable, Index, Result};
use crate::domain::plaid::AuthGetResponse;
use async_trait::async_trait;

pub struct Auth;

#[async_trait]
impl FetchOperation for Auth {
    fn name(&self) -> &'static str {
        "auth"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let response = ctx.client.auth_get().await?;
        project(&response)
    }
}

/// One row per ACH number; the owning account record is joined in for
/// its display name and current balance.
fn project(response: &AuthGetResponse) -> Result<DataTable> {
    let accounts = Index::build(&response.accounts, |a| Some(a.account_id.as_str()));

    let mut table = DataTable::new(&["Name", "Balance/r", "Account #", "Routing #"]);
    for number in &response.numbers.ach {
        let account = accounts.get(number.account_id.as_deref());
        table.push_row(vec![
            account.map(|a| a.name.clone()).unwrap_or_default(),
            format::currency(account.and_then(|a| a.balances.as_ref()).and_then(|b| b.current)),
            number.account.clone(),
            number.routing.clone(),
        ])?;
    }
    Ok(table)
}
