//! HTTP adapter for the Plaid API.
//!
//! Every product endpoint is a POST carrying the client credentials in
//! the body. A non-2xx response with a parseable error object becomes
//! `FetchError::Plaid`, carrying the upstream object for verbatim
//! propagation; anything else non-2xx is a transport-class failure.

use crate::config::{AssetsConfig, PlaidConfig, TransferConfig};
use crate::domain::plaid::*;
use crate::utils::error::{FetchError, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PlaidClient {
    http: Client,
    base_url: String,
    client_id: String,
    secret: String,
    access_token: String,
}

impl PlaidClient {
    pub fn new(config: &PlaidConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            client_id: config.client_id.clone(),
            secret: config.secret.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// 在請求主體加上憑證；`with_token` 控制是否附帶 access_token
    fn with_credentials(&self, body: Value, with_token: bool) -> Value {
        let mut object = match body {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        object.insert("client_id".to_string(), json!(self.client_id));
        object.insert("secret".to_string(), json!(self.secret));
        if with_token {
            object.insert("access_token".to_string(), json!(self.access_token));
        }
        Value::Object(object)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        tracing::debug!("{} -> {}", path, status);

        let bytes = response.bytes().await?;
        if !status.is_success() {
            if let Ok(error) = serde_json::from_slice::<PlaidApiError>(&bytes) {
                return Err(FetchError::Plaid(error));
            }
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn auth_get(&self) -> Result<AuthGetResponse> {
        self.post("/auth/get", self.with_credentials(json!({}), true))
            .await
    }

    pub async fn transactions_get(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        count: u32,
    ) -> Result<TransactionsGetResponse> {
        let body = json!({
            "start_date": start_date.to_string(),
            "end_date": end_date.to_string(),
            "options": {"count": count},
        });
        self.post("/transactions/get", self.with_credentials(body, true))
            .await
    }

    pub async fn identity_get(&self) -> Result<IdentityGetResponse> {
        self.post("/identity/get", self.with_credentials(json!({}), true))
            .await
    }

    pub async fn investments_holdings_get(&self) -> Result<InvestmentsHoldingsGetResponse> {
        self.post(
            "/investments/holdings/get",
            self.with_credentials(json!({}), true),
        )
        .await
    }

    pub async fn investments_transactions_get(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        count: u32,
    ) -> Result<InvestmentsTransactionsGetResponse> {
        let body = json!({
            "start_date": start_date.to_string(),
            "end_date": end_date.to_string(),
            "options": {"count": count},
        });
        self.post(
            "/investments/transactions/get",
            self.with_credentials(body, true),
        )
        .await
    }

    pub async fn accounts_get(&self) -> Result<AccountsGetResponse> {
        self.post("/accounts/get", self.with_credentials(json!({}), true))
            .await
    }

    pub async fn accounts_balance_get(&self) -> Result<AccountsGetResponse> {
        self.post(
            "/accounts/balance/get",
            self.with_credentials(json!({}), true),
        )
        .await
    }

    pub async fn item_get(&self) -> Result<ItemGetResponse> {
        self.post("/item/get", self.with_credentials(json!({}), true))
            .await
    }

    /// Institution lookup is keyed by institution id, not by an item, so
    /// no access token goes on this request.
    pub async fn institutions_get_by_id(
        &self,
        institution_id: &str,
    ) -> Result<InstitutionsGetByIdResponse> {
        let body = json!({
            "institution_id": institution_id,
            "country_codes": ["US"],
        });
        self.post(
            "/institutions/get_by_id",
            self.with_credentials(body, false),
        )
        .await
    }

    pub async fn liabilities_get(&self) -> Result<LiabilitiesGetResponse> {
        self.post("/liabilities/get", self.with_credentials(json!({}), true))
            .await
    }

    pub async fn payment_initiation_payment_list(&self) -> Result<PaymentListResponse> {
        self.post(
            "/payment_initiation/payment/list",
            self.with_credentials(json!({}), false),
        )
        .await
    }

    pub async fn payment_initiation_payment_get(
        &self,
        payment_id: &str,
    ) -> Result<PaymentGetResponse> {
        let body = json!({"payment_id": payment_id});
        self.post(
            "/payment_initiation/payment/get",
            self.with_credentials(body, false),
        )
        .await
    }

    /// Asset reports span items, so the token rides in `access_tokens`
    /// rather than the usual top-level field.
    pub async fn asset_report_create(
        &self,
        assets: &AssetsConfig,
    ) -> Result<AssetReportCreateResponse> {
        let body = json!({
            "access_tokens": [self.access_token],
            "days_requested": assets.days_requested,
            "options": {
                "client_report_id": assets.client_report_id,
                "user": {
                    "client_user_id": assets.client_user_id,
                    "first_name": assets.first_name,
                    "middle_name": assets.middle_name,
                    "last_name": assets.last_name,
                    "ssn": assets.ssn,
                    "phone_number": assets.phone_number,
                    "email": assets.email,
                },
            },
        });
        self.post("/asset_report/create", self.with_credentials(body, false))
            .await
    }

    pub async fn asset_report_get(&self, asset_report_token: &str) -> Result<AssetReportGetResponse> {
        let body = json!({"asset_report_token": asset_report_token});
        self.post("/asset_report/get", self.with_credentials(body, false))
            .await
    }

    pub async fn transfer_authorization_create(
        &self,
        account_id: &str,
        transfer: &TransferConfig,
    ) -> Result<TransferAuthorizationCreateResponse> {
        let body = json!({
            "account_id": account_id,
            "amount": transfer.amount,
            "network": "ach",
            "ach_class": "ppd",
            "type": "credit",
            "user": {
                "legal_name": transfer.legal_name,
                "phone_number": transfer.phone_number,
                "email_address": transfer.email_address,
            },
        });
        self.post(
            "/transfer/authorization/create",
            self.with_credentials(body, true),
        )
        .await
    }

    pub async fn transfer_create(
        &self,
        account_id: &str,
        authorization_id: &str,
        transfer: &TransferConfig,
    ) -> Result<TransferCreateResponse> {
        let body = json!({
            "idempotency_key": transfer.idempotency_key,
            "account_id": account_id,
            "authorization_id": authorization_id,
            "amount": transfer.amount,
            "network": "ach",
            "ach_class": "ppd",
            "type": "credit",
            "user": {
                "legal_name": transfer.legal_name,
                "phone_number": transfer.phone_number,
                "email_address": transfer.email_address,
            },
        });
        self.post("/transfer/create", self.with_credentials(body, true))
            .await
    }

    pub async fn transfer_get(&self, transfer_id: &str) -> Result<TransferGetResponse> {
        let body = json!({"transfer_id": transfer_id});
        self.post("/transfer/get", self.with_credentials(body, true))
            .await
    }
}
