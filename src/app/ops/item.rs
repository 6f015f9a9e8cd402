use super::{FetchContext, FetchOperation};
use crate::core::{DataTable, Result};
use crate::domain::plaid::{InstitutionsGetByIdResponse, ItemGetResponse};
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// Two-step sequence: the item record names an institution id, which a
/// second call resolves to the institution's display record.
pub struct Item;

#[async_trait]
impl FetchOperation for Item {
    fn name(&self) -> &'static str {
        "item"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let item_response = ctx.client.item_get().await?;
        let institution_id = item_response
            .item
            .institution_id
            .as_deref()
            .ok_or(FetchError::MissingData("item carries no institution id"))?;

        let institution_response = ctx.client.institutions_get_by_id(institution_id).await?;
        project(&item_response, &institution_response)
    }
}

fn project(
    item: &ItemGetResponse,
    institution: &InstitutionsGetByIdResponse,
) -> Result<DataTable> {
    let mut table = DataTable::new(&[
        "Institution Name",
        "Billed Products",
        "Available Products",
    ]);
    table.push_row(vec![
        institution.institution.name.clone(),
        item.item.billed_products.join(","),
        item.item.available_products.join(","),
    ])?;
    Ok(table)
}
