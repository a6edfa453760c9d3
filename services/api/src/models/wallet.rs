use mesomb_core::time::DateTime;
use serde::Deserialize;

use super::TransactionStatus;

/// A wallet held by a provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wallet {
    pub id: i64,
    pub number: String,
    pub country: String,
    pub status: String,
    #[serde(default)]
    pub last_activity: Option<DateTime>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub first_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone_number: String,
    pub gender: String,
}

/// A movement on a wallet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletTransaction {
    pub id: i64,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    /// `1` for credit, `-1` for debit.
    pub direction: i8,
    pub wallet: i64,
    #[serde(default)]
    pub balance_after: Option<f64>,
    pub date: DateTime,
    pub country: String,
    #[serde(default)]
    pub fin_trx_id: Option<String>,
}
