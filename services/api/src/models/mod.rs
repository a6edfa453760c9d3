//! Models returned by the MeSomb API.

mod application;
mod common;
mod contribution;
mod paginated;
mod transaction;
mod wallet;

pub use application::{Application, Balance};
pub use common::{Customer, Location, Product};
pub use contribution::{Contribution, ContributionResponse};
pub use paginated::Paginated;
pub use transaction::{Transaction, TransactionResponse, TransactionStatus};
pub use wallet::{Wallet, WalletTransaction};

use mesomb_core::{Error, Result};
use serde::de::DeserializeOwned;

/// Decode a success body into `T`.
///
/// Missing required fields or wrong types fail with `MalformedResponse`.
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        Error::malformed_response(format!("failed to decode response: {e}")).with_source(e)
    })
}
