pub mod account_service;
pub mod accounts;
pub mod errors;
pub mod requests;
pub mod statement;
pub mod validation;

pub use requests::*;
