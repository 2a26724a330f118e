//! The route table
//!
//! Built as a function of the shared service state so both the binary and
//! the end-to-end tests can drive the exact same filters.

use crate::{errors, handlers};
use finapi_common::account_service::AccountService;
use finapi_common::StatementDateRequest;
use std::sync::Arc;
use tokio::sync::Mutex;
use warp::{Filter, Reply};

/// The request header that identifies the account on every
/// account-scoped route
pub const TAX_ID_HEADER: &str = "x-tax-id";

/// **Builds the complete route table over the given service state**
pub fn routes(
    account_service: Arc<Mutex<AccountService>>,
) -> impl Filter<Extract = (impl Reply,), Error = std::convert::Infallible> + Clone {
    let account_service_state = warp::any().map(move || account_service.clone());

    let statement_by_date = warp::path!("statement" / "date")
        .and(warp::get())
        .and(warp::header::<String>(TAX_ID_HEADER))
        .and(warp::query::<StatementDateRequest>())
        .and(account_service_state.clone())
        .and_then(handlers::statement_by_date);

    let statement = warp::path!("statement")
        .and(warp::get())
        .and(warp::header::<String>(TAX_ID_HEADER))
        .and(account_service_state.clone())
        .and_then(handlers::statement);

    let get_account = warp::path!("account")
        .and(warp::get())
        .and(warp::header::<String>(TAX_ID_HEADER))
        .and(account_service_state.clone())
        .and_then(handlers::account);

    let balance = warp::path!("balance")
        .and(warp::get())
        .and(warp::header::<String>(TAX_ID_HEADER))
        .and(account_service_state.clone())
        .and_then(handlers::balance_of);

    let all_accounts = warp::path!("accounts")
        .and(warp::get())
        .and(account_service_state.clone())
        .and_then(handlers::all_accounts);

    let create_account = warp::path!("account")
        .and(warp::post())
        .and(warp::body::content_length_limit(1024 * 16))
        .and(warp::body::json())
        .and(account_service_state.clone())
        .and_then(handlers::create_account);

    let deposit = warp::path!("deposit")
        .and(warp::post())
        .and(warp::header::<String>(TAX_ID_HEADER))
        .and(warp::body::content_length_limit(1024 * 16))
        .and(warp::body::json())
        .and(account_service_state.clone())
        .and_then(handlers::deposit);

    let withdraw = warp::path!("withdraw")
        .and(warp::post())
        .and(warp::header::<String>(TAX_ID_HEADER))
        .and(warp::body::content_length_limit(1024 * 16))
        .and(warp::body::json())
        .and(account_service_state.clone())
        .and_then(handlers::withdraw);

    let update_account = warp::path!("account")
        .and(warp::put())
        .and(warp::header::<String>(TAX_ID_HEADER))
        .and(warp::body::content_length_limit(1024 * 16))
        .and(warp::body::json())
        .and(account_service_state.clone())
        .and_then(handlers::update_account);

    let delete_account = warp::path!("account")
        .and(warp::delete())
        .and(warp::header::<String>(TAX_ID_HEADER))
        .and(account_service_state.clone())
        .and_then(handlers::delete_account);

    statement_by_date
        .or(statement)
        .or(get_account)
        .or(balance)
        .or(all_accounts)
        .or(create_account)
        .or(deposit)
        .or(withdraw)
        .or(update_account)
        .or(delete_account)
        .recover(errors::handle_rejection)
}
