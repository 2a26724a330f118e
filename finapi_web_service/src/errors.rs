use finapi_common::errors::LedgerError;
use serde::Serialize;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::{Rejection, Reply};

#[derive(Debug)]
pub struct WebServiceLedgerError(pub LedgerError);

impl Reject for WebServiceLedgerError {}

#[derive(Debug)]
pub struct WebServiceStringError(pub String);

impl Reject for WebServiceStringError {}

/// The JSON body of every error response
#[derive(Serialize)]
struct ErrorMessage {
    error: String,
}

/// **Converts rejections into JSON error responses**
///
/// The four domain errors are all request-level validation failures and map
/// to 400, as do malformed bodies and a missing tax id header. Anything
/// unrecognized becomes a 500.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(WebServiceLedgerError(ledger_err)) = err.find() {
        (StatusCode::BAD_REQUEST, ledger_err.to_string())
    } else if let Some(WebServiceStringError(msg)) = err.find() {
        (StatusCode::BAD_REQUEST, msg.clone())
    } else if let Some(body_err) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, body_err.to_string())
    } else if let Some(header_err) = err.find::<warp::reject::MissingHeader>() {
        (StatusCode::BAD_REQUEST, header_err.to_string())
    } else if let Some(query_err) = err.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, query_err.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else {
        log::error!("unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    let json = warp::reply::json(&ErrorMessage { error: message });
    Ok(warp::reply::with_status(json, code))
}
