use super::{FetchContext, FetchOperation};
use crate::core::{DataTable, Result};
use crate::domain::plaid::TransferGetResponse;
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// The longest sequence in the catalogue: pick an account, authorize a
/// transfer against it, create the transfer under that authorization,
/// then read the final record back. Each step feeds an identifier into
/// the next, so the calls never overlap.
pub struct Transfer;

#[async_trait]
impl FetchOperation for Transfer {
    fn name(&self) -> &'static str {
        "transfer"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let accounts = ctx.client.accounts_get().await?;
        let account_id = accounts
            .accounts
            .first()
            .map(|a| a.account_id.clone())
            .ok_or(FetchError::MissingData("item has no accounts to transfer against"))?;

        let authorization = ctx
            .client
            .transfer_authorization_create(&account_id, &ctx.config.transfer)
            .await?;
        let authorization_id = authorization.authorization.id;
        tracing::info!("transfer authorization ok: {}", authorization_id);

        let created = ctx
            .client
            .transfer_create(&account_id, &authorization_id, &ctx.config.transfer)
            .await?;
        let transfer_id = created.transfer.id;
        tracing::info!("transfer created: {}", transfer_id);

        let response = ctx.client.transfer_get(&transfer_id).await?;
        project(&response)
    }
}

fn project(response: &TransferGetResponse) -> Result<DataTable> {
    let transfer = &response.transfer;
    let mut table = DataTable::new(&[
        "Transfer ID",
        "Amount/r",
        "Type",
        "ACH Class",
        "Network",
        "Status",
    ]);
    table.push_row(vec![
        transfer.id.clone(),
        transfer.amount.clone(),
        transfer.transfer_type.clone(),
        transfer.ach_class.clone(),
        transfer.network.clone(),
        transfer.status.clone(),
    ])?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plaid::Transfer as PlaidTransfer;

    #[test]
    fn test_projects_fetched_transfer() {
        let response = TransferGetResponse {
            transfer: PlaidTransfer {
                id: "transfer-id-1".to_string(),
                amount: "1.34".to_string(),
                transfer_type: "credit".to_string(),
                ach_class: "ppd".to_string(),
                network: "ach".to_string(),
                status: "pending".to_string(),
            },
        };

        let table = project(&response).unwrap();
        assert_eq!(
            table.rows[0].cells,
            vec!["transfer-id-1", "1.34", "credit", "ppd", "ach", "pending"]
        );
    }
}
