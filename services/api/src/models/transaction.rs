use mesomb_core::time::DateTime;
use serde::{Deserialize, Serialize};

use super::{Customer, Location, Product};

/// Lifecycle state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Success,
    Failed,
    Pending,
    /// Any status this client does not know about.
    #[serde(other)]
    Other,
}

/// A payment transaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub pk: String,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub fees: Option<f64>,
    pub b_party: String,
    #[serde(default)]
    pub message: Option<String>,
    pub service: String,
    #[serde(default)]
    pub reference: Option<String>,
    pub ts: DateTime,
    pub country: String,
    pub currency: String,
    #[serde(default)]
    pub fin_trx_id: Option<String>,
    #[serde(default)]
    pub trxamount: Option<f64>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Transaction {
    pub fn is_success(&self) -> bool {
        self.status == TransactionStatus::Success
    }

    pub fn is_failed(&self) -> bool {
        self.status == TransactionStatus::Failed
    }

    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }
}

/// Answer to a collect, deposit or airtime purchase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
    pub transaction: Transaction,
    #[serde(default)]
    pub reference: Option<String>,
    pub status: String,
}

impl TransactionResponse {
    /// Whether the API accepted the operation.
    pub fn is_operation_success(&self) -> bool {
        self.success
    }

    /// Whether the operator completed the transaction.
    pub fn is_transaction_success(&self) -> bool {
        self.transaction.is_success()
    }
}
