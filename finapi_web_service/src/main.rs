//! The "FinAPI Web Service's" entry point.

use finapi_common::account_service::AccountService;
use finapi_web_service::routes::routes;
use std::env;
use std::sync::Arc;
use tokio::sync::Mutex;
use warp::Filter;

/// The "FinAPI Web Service's" entry point.
#[tokio::main]
async fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "finapi=info");
    }
    pretty_env_logger::init();

    let log = warp::log("finapi");

    let account_service = Arc::new(Mutex::new(AccountService::new()));

    // Start up the server
    warp::serve(routes(account_service).with(log))
        .run(([127, 0, 0, 1], 3333))
        .await;
}
