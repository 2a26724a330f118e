//! Handler functions
//!
//! Every handler that touches an account resolves the tax id through the
//! service first; the service reports `CustomerNotFound` before any read
//! or mutation proceeds. The whole service sits behind one async mutex,
//! so withdraw's balance check and its append cannot interleave with
//! another request.

use crate::errors::{WebServiceLedgerError, WebServiceStringError};
use finapi_common::account_service::AccountService;
use finapi_common::errors::{EMPTY_NAME_MSG, EMPTY_TAX_ID_MSG};
use finapi_common::validation;
use finapi_common::{
    BalanceResponse, CreateAccountRequest, DepositRequest, StatementDateRequest,
    UpdateAccountRequest, WithdrawRequest,
};
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::Mutex;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

/// **Basic input validation for a request-supplied string field**
///
/// Checks for:
/// - An empty string.
fn require_non_empty(value: &str, valid: fn(&str) -> bool, msg: &str) -> Result<(), Rejection> {
    if valid(value) {
        Ok(())
    } else {
        log::warn!("{} Got: \"{}\"", msg, value);
        Err(warp::reject::custom(WebServiceStringError(msg.to_string())))
    }
}

/// The `statement` handler
///
/// Responds with the account's full statement, in insertion order.
///
/// GET /statement
pub async fn statement(
    tax_id: String,
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Rejection> {
    log::debug!("statement; tax_id = {}", tax_id);

    let account_service = account_service.lock().await;
    match account_service.statement(&tax_id) {
        Ok(statement) => Ok(warp::reply::json(&statement)),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}

/// The `statement_by_date` handler
///
/// Responds with the statement entries recorded on the requested
/// calendar day.
///
/// GET /statement/date?date=YYYY-MM-DD
pub async fn statement_by_date(
    tax_id: String,
    request: StatementDateRequest,
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Rejection> {
    log::debug!("statement_by_date; tax_id = {}, request = {:?}", tax_id, request);

    let account_service = account_service.lock().await;
    match account_service.statement_by_date(&tax_id, &request.date) {
        Ok(statement) => Ok(warp::reply::json(&statement)),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}

/// The `account` handler
///
/// Responds with the account record.
///
/// GET /account
pub async fn account(
    tax_id: String,
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Rejection> {
    log::debug!("account; tax_id = {}", tax_id);

    let account_service = account_service.lock().await;
    match account_service.account(&tax_id) {
        Ok(account) => Ok(warp::reply::json(account)),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}

/// The `balance_of` handler
///
/// Responds with the account's balance, recomputed from the statement.
///
/// GET /balance
pub async fn balance_of(
    tax_id: String,
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Rejection> {
    log::debug!("balance_of; tax_id = {}", tax_id);

    let account_service = account_service.lock().await;
    match account_service.balance_of(&tax_id) {
        Ok(balance) => Ok(warp::reply::json(&BalanceResponse { balance })),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}

/// The `all_accounts` handler
///
/// Responds with all accounts, ordered by tax id.
///
/// GET /accounts
pub async fn all_accounts(
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Infallible> {
    log::debug!("all_accounts");

    let account_service = account_service.lock().await;
    let accounts = account_service.all_accounts();
    Ok(warp::reply::json(&accounts))
}

/// The `create_account` handler
///
/// POST /account
pub async fn create_account(
    request: CreateAccountRequest,
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Rejection> {
    log::debug!("create_account; request = {:?}", request);

    require_non_empty(&request.tax_id, validation::is_valid_tax_id, EMPTY_TAX_ID_MSG)?;
    require_non_empty(&request.name, validation::is_valid_name, EMPTY_NAME_MSG)?;

    let mut account_service = account_service.lock().await;
    match account_service.create_account(&request.tax_id, &request.name) {
        Ok(_) => Ok(warp::reply::with_status(warp::reply(), StatusCode::CREATED)),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}

/// The `deposit` handler
///
/// Appends a credit entry with the current timestamp.
///
/// POST /deposit
pub async fn deposit(
    tax_id: String,
    request: DepositRequest,
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Rejection> {
    log::debug!("deposit; tax_id = {}, request = {:?}", tax_id, request);

    let mut account_service = account_service.lock().await;
    match account_service.deposit(&tax_id, request.amount, request.description) {
        Ok(()) => Ok(warp::reply::with_status(warp::reply(), StatusCode::CREATED)),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}

/// The `withdraw` handler
///
/// Appends a debit entry, unless the balance is lower than the requested
/// amount, in which case nothing is appended.
///
/// POST /withdraw
pub async fn withdraw(
    tax_id: String,
    request: WithdrawRequest,
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Rejection> {
    log::debug!("withdraw; tax_id = {}, request = {:?}", tax_id, request);

    let mut account_service = account_service.lock().await;
    match account_service.withdraw(&tax_id, request.amount) {
        Ok(()) => Ok(warp::reply::with_status(warp::reply(), StatusCode::CREATED)),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}

/// The `update_account` handler
///
/// Updates the account holder's display name.
///
/// PUT /account
pub async fn update_account(
    tax_id: String,
    request: UpdateAccountRequest,
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Rejection> {
    log::debug!("update_account; tax_id = {}, request = {:?}", tax_id, request);

    require_non_empty(&request.name, validation::is_valid_name, EMPTY_NAME_MSG)?;

    let mut account_service = account_service.lock().await;
    match account_service.update_account(&tax_id, &request.name) {
        Ok(_) => Ok(warp::reply::with_status(warp::reply(), StatusCode::CREATED)),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}

/// The `delete_account` handler
///
/// Responds with the remaining accounts.
///
/// DELETE /account
pub async fn delete_account(
    tax_id: String,
    account_service: Arc<Mutex<AccountService>>,
) -> Result<impl Reply, Rejection> {
    log::debug!("delete_account; tax_id = {}", tax_id);

    let mut account_service = account_service.lock().await;
    match account_service.delete_account(&tax_id) {
        Ok(remaining) => Ok(warp::reply::json(&remaining)),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}
