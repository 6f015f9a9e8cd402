use super::{FetchContext, FetchOperation};
use crate::core::{format, DataTable, Index, Result};
use crate::domain::plaid::{Account, LiabilitiesGetResponse};
use async_trait::async_trait;

pub struct Liabilities;

#[async_trait]
impl FetchOperation for Liabilities {
    fn name(&self) -> &'static str {
        "liabilities"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let response = ctx.client.liabilities_get().await?;
        project(&response)
    }
}

/// Credit, student-loan, and mortgage liabilities concatenate into one
/// table in that order. Credit rows show the last statement balance;
/// the other two kinds fall back to the account's current balance.
fn project(response: &LiabilitiesGetResponse) -> Result<DataTable> {
    let accounts = Index::build(&response.accounts, |a| Some(a.account_id.as_str()));
    let account_name = |id: Option<&str>| {
        accounts
            .get(id)
            .map(|a: &Account| a.name.clone())
            .unwrap_or_default()
    };
    let account_balance = |id: Option<&str>| {
        accounts
            .get(id)
            .and_then(|a| a.balances.as_ref())
            .and_then(|b| b.current)
    };

    let mut table = DataTable::new(&["Type", "Account", "Balance/r"]);

    for credit in response.liabilities.credit.iter().flatten() {
        table.push_row(vec![
            "Credit".to_string(),
            account_name(credit.account_id.as_deref()),
            format::currency(credit.last_statement_balance),
        ])?;
    }
    for student in response.liabilities.student.iter().flatten() {
        table.push_row(vec![
            "Student Loan".to_string(),
            account_name(student.account_id.as_deref()),
            format::currency(account_balance(student.account_id.as_deref())),
        ])?;
    }
    for mortgage in response.liabilities.mortgage.iter().flatten() {
        table.push_row(vec![
            "Mortgage".to_string(),
            account_name(mortgage.account_id.as_deref()),
            format::currency(account_balance(mortgage.account_id.as_deref())),
        ])?;
    }

    Ok(table)
}
