use mesomb_core::time::DateTime;
use serde::Deserialize;

use super::{Customer, Location, TransactionStatus};

/// A contribution to a fund.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contribution {
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
    pub contributor: Option<Customer>,
}

impl Contribution {
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

/// Answer to a contribution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContributionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub contribution: Contribution,
    pub status: String,
}

impl ContributionResponse {
    /// Whether the API accepted the operation.
    pub fn is_operation_success(&self) -> bool {
        self.success
    }

    /// Whether the operator completed the contribution.
    pub fn is_contribution_success(&self) -> bool {
        self.contribution.is_success()
    }
}
