use super::{FetchContext, FetchOperation};
use crate::core::{format, DataTable, Result};
use crate::domain::plaid::PaymentGetResponse;
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// Lists payments, then fetches the detail record of the most recent
/// one. An empty payment list is a hard failure, not an empty table:
/// the detail call would have nothing to ask for.
pub struct Payment;

#[async_trait]
impl FetchOperation for Payment {
    fn name(&self) -> &'static str {
        "payment"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let list = ctx.client.payment_initiation_payment_list().await?;
        let payment_id = list
            .payments
            .first()
            .map(|p| p.payment_id.clone())
            .ok_or(FetchError::MissingData("payment list is empty"))?;

        let response = ctx
            .client
            .payment_initiation_payment_get(&payment_id)
            .await?;
        project(&payment_id, &response)
    }
}

fn project(payment_id: &str, response: &PaymentGetResponse) -> Result<DataTable> {
    let mut table = DataTable::new(&[
        "Payment ID",
        "Amount/r",
        "Status",
        "Status Update",
        "Recipient ID",
    ]);
    table.push_row(vec![
        payment_id.to_string(),
        format::currency(response.amount.as_ref().map(|a| a.value)),
        response.status.clone(),
        format::month_day(&response.last_status_update),
        response.recipient_id.clone(),
    ])?;
    Ok(table)
}
