//! Response shapes for the slice of the Plaid API this service consumes.
//!
//! Only the fields the projectors actually read are modeled; everything
//! else in a response is ignored by serde. All types are read-only for
//! the duration of one request and never mutated.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Upstream error object
// ============================================================================

/// Structured error returned by Plaid with a non-2xx status.
///
/// The flattened `extra` map keeps any fields we do not model so the
/// object can be passed back to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaidApiError {
    pub error_type: String,
    pub error_code: String,
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl std::fmt::Display for PlaidApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}: {}",
            self.error_type, self.error_code, self.error_message
        )
    }
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Balances {
    pub available: Option<f64>,
    pub current: Option<f64>,
    pub iso_currency_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub name: String,
    pub mask: Option<String>,
    pub subtype: Option<String>,
    pub balances: Option<Balances>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsGetResponse {
    pub accounts: Vec<Account>,
}

// ============================================================================
// Auth (ACH routing numbers)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AchNumber {
    pub account_id: Option<String>,
    pub account: String,
    pub routing: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthNumbers {
    #[serde(default)]
    pub ach: Vec<AchNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthGetResponse {
    pub accounts: Vec<Account>,
    pub numbers: AuthNumbers,
}

// ============================================================================
// Transactions
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub account_id: String,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Option<Vec<String>>,
    pub payment_channel: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsGetResponse {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
}

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerContact {
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressData {
    pub street: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerAddress {
    pub data: AddressData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub emails: Vec<OwnerContact>,
    #[serde(default)]
    pub phone_numbers: Vec<OwnerContact>,
    #[serde(default)]
    pub addresses: Vec<OwnerAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityAccount {
    pub account_id: String,
    #[serde(default)]
    pub owners: Vec<Owner>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityGetResponse {
    pub accounts: Vec<IdentityAccount>,
}

// ============================================================================
// Investments
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
    pub security_id: String,
    pub name: Option<String>,
    pub ticker_symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Holding {
    pub account_id: String,
    pub security_id: String,
    pub quantity: f64,
    pub institution_price: f64,
    pub institution_value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvestmentsHoldingsGetResponse {
    pub accounts: Vec<Account>,
    pub holdings: Vec<Holding>,
    pub securities: Vec<Security>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvestmentTransaction {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub security_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvestmentsTransactionsGetResponse {
    pub investment_transactions: Vec<InvestmentTransaction>,
    pub securities: Vec<Security>,
}

// ============================================================================
// Item / institutions
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub institution_id: Option<String>,
    #[serde(default)]
    pub billed_products: Vec<String>,
    #[serde(default)]
    pub available_products: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemGetResponse {
    pub item: Item,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Institution {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionsGetByIdResponse {
    pub institution: Institution,
}

// ============================================================================
// Liabilities
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreditLiability {
    pub account_id: Option<String>,
    pub last_statement_balance: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentLoanLiability {
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MortgageLiability {
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Liabilities {
    #[serde(default)]
    pub credit: Option<Vec<CreditLiability>>,
    #[serde(default)]
    pub student: Option<Vec<StudentLoanLiability>>,
    #[serde(default)]
    pub mortgage: Option<Vec<MortgageLiability>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiabilitiesGetResponse {
    pub accounts: Vec<Account>,
    pub liabilities: Liabilities,
}

// ============================================================================
// Payment initiation
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSummary {
    pub payment_id: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PaymentListResponse {
    #[serde(default)]
    pub payments: Vec<PaymentSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentAmount {
    pub currency: String,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentGetResponse {
    pub amount: Option<PaymentAmount>,
    pub status: String,
    pub last_status_update: DateTime<Utc>,
    pub recipient_id: String,
}

// ============================================================================
// Asset reports
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AssetReportCreateResponse {
    pub asset_report_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetReportAccount {
    pub name: String,
    /// Only the count is projected; individual transactions stay opaque.
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
    pub balances: Balances,
    pub days_available: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetReportItem {
    #[serde(default)]
    pub accounts: Vec<AssetReportAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetReport {
    #[serde(default)]
    pub items: Vec<AssetReportItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetReportGetResponse {
    pub report: AssetReport,
}

// ============================================================================
// Transfers
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TransferAuthorization {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferAuthorizationCreateResponse {
    pub authorization: TransferAuthorization,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transfer {
    pub id: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub transfer_type: String,
    pub ach_class: String,
    pub network: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferCreateResponse {
    pub transfer: Transfer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferGetResponse {
    pub transfer: Transfer,
}
