use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub tax_id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DepositRequest {
    pub amount: Decimal,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WithdrawRequest {
    pub amount: Decimal,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatementDateRequest {
    pub date: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BalanceResponse {
    pub balance: Decimal,
}
