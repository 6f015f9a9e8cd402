use super::{FetchContext, FetchOperation};
use crate::core::{format, DataTable, Result};
use crate::domain::plaid::IdentityGetResponse;
use async_trait::async_trait;

pub struct Identity;

#[async_trait]
impl FetchOperation for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }

    async fn run(&self, ctx: &FetchContext) -> Result<DataTable> {
        let response = ctx.client.identity_get().await?;
        project(&response)
    }
}

/// One row per owner per account; each multi-valued field collapses into
/// a single comma-joined cell.
fn project(response: &IdentityGetResponse) -> Result<DataTable> {
    let mut table = DataTable::new(&["Names", "Emails", "Phone Numbers", "Addresses"]);
    for account in &response.accounts {
        for owner in &account.owners {
            table.push_row(vec![
                format::join_comma(owner.names.iter().map(String::as_str)),
                format::join_comma(owner.emails.iter().map(|e| e.data.as_str())),
                format::join_comma(owner.phone_numbers.iter().map(|p| p.data.as_str())),
                format::join_comma(
                    owner
                        .addresses
                        .iter()
                        .map(|a| a.data.street.as_deref().unwrap_or_default()),
                ),
            ])?;
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plaid::{AddressData, IdentityAccount, Owner, OwnerAddress, OwnerContact};

    #[test]
    fn test_projects_one_row_per_owner() {
        let owner = Owner {
            names: vec!["Alberta Bobbeth Charleson".to_string()],
            emails: vec![
                OwnerContact {
                    data: "accountholder0@example.com".to_string(),
                },
                OwnerContact {
                    data: "extraordinarily.long.email.username.123456@reallylonghostname.com"
                        .to_string(),
                },
            ],
            phone_numbers: vec![OwnerContact {
                data: "1112223333".to_string(),
            }],
            addresses: vec![OwnerAddress {
                data: AddressData {
                    street: Some("2992 Cameron Road".to_string()),
                },
            }],
        };
        let response = IdentityGetResponse {
            accounts: vec![IdentityAccount {
                account_id: "a1".to_string(),
                owners: vec![owner],
            }],
        };

        let table = project(&response).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells[0], "Alberta Bobbeth Charleson");
        assert_eq!(
            table.rows[0].cells[1],
            "accountholder0@example.com, extraordinarily.long.email.username.123456@reallylonghostname.com"
        );
        assert_eq!(table.rows[0].cells[3], "2992 Cameron Road");
    }
}
