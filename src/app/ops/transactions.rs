use super::{FetchContext, FetchOperation};
use crate::core::{format, DataTable, Result};
use crate::domain::plaid::TransactionsGetResponse;
use async_trait::async_trait;
use chrono::{Duration, Local};

pub struct Transactions;

#[async_trait]
impl FetchOperation for Transactions {
    fn name(&self) -> &'static str {
        "transactions"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let end_date = Local::now().date_naive();
        let start_date = end_date - Duration::days(ctx.config.fetch.window_days);

        let response = ctx
            .client
            .transactions_get(start_date, end_date, ctx.config.fetch.page_size)
            .await?;
        project(&response)
    }
}

fn project(response: &TransactionsGetResponse) -> Result<DataTable> {
    let mut table = DataTable::new(&["Name", "Amount/r", "Date/r", "Category", "Channel"]);
    for transaction in &response.transactions {
        table.push_row(vec![
            transaction.name.clone(),
            format::currency(Some(transaction.amount)),
            format::short_date(transaction.date),
            format::join_categories(transaction.category.as_deref()),
            transaction.payment_channel.clone(),
        ])?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plaid::Transaction;
    use chrono::NaiveDate;

    #[test]
    fn test_projects_transaction_fields() {
        let response = TransactionsGetResponse {
            accounts: vec![],
            transactions: vec![Transaction {
                account_id: "a1".to_string(),
                name: "Tectra Inc".to_string(),
                amount: 500.0,
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                category: Some(vec!["Food".to_string(), "Restaurants".to_string()]),
                payment_channel: "in store".to_string(),
            }],
        };

        let table = project(&response).unwrap();
        assert_eq!(table.columns.len(), 5);
        assert_eq!(
            table.rows[0].cells,
            vec!["Tectra Inc", "$500.00", "1/5/2024", "Food:Restaurants", "in store"]
        );
    }

    #[test]
    fn test_missing_category_renders_empty() {
        let response = TransactionsGetResponse {
            accounts: vec![],
            transactions: vec![Transaction {
                account_id: "a1".to_string(),
                name: "ACH Electronic CreditGUSTO PAY 123456".to_string(),
                amount: -5850.0,
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                category: None,
                payment_channel: "online".to_string(),
            }],
        };

        let table = project(&response).unwrap();
        assert_eq!(table.rows[0].cells[1], "-$5,850.00");
        assert_eq!(table.rows[0].cells[3], "");
    }
}
