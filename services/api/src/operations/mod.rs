//! Typed operations of the three MeSomb product lines.

mod fundraising;
mod payment;
mod wallet;

pub use fundraising::{ContributionRequest, FundraisingOperation};
pub use payment::{AirtimeRequest, CollectRequest, DepositRequest, PaymentOperation, SecurityAction};
pub use wallet::{MoneyRequest, WalletOperation, WalletRequest};

/// Source used by transaction lookups when the caller has no preference.
pub const DEFAULT_SOURCE: &str = "MESOMB";

/// Default country of operations.
pub const DEFAULT_COUNTRY: &str = "CM";

/// Default currency of operations.
pub const DEFAULT_CURRENCY: &str = "XAF";

/// Build `ids=a,b&source=S`.
fn joined_ids_query(ids: &[&str], source: &str) -> String {
    format!("ids={}&source={source}", ids.join(","))
}

/// Build `ids=a&ids=b&source=S`.
fn repeated_ids_query(ids: &[&str], source: &str) -> String {
    let mut query: String = ids.iter().map(|id| format!("ids={id}&")).collect();
    query.push_str("source=");
    query.push_str(source);
    query
}
