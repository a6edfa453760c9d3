use http::Method;
use mesomb_core::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use super::{joined_ids_query, DEFAULT_COUNTRY, DEFAULT_CURRENCY};
use crate::executor::{to_body, OperationMode, ProductLine, RequestExecutor, RequestOptions};
use crate::models::{Contribution, ContributionResponse, Location};
use crate::Config;

/// Contribute to a fund.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionRequest {
    pub amount: f64,
    pub service: String,
    pub payer: String,
    pub country: String,
    pub currency: String,
    pub conversion: bool,
    /// Hide the contributor on the fund page.
    pub anonymous: bool,
    pub accept_terms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "trxID", skip_serializing_if = "Option::is_none")]
    pub trx_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Map<String, Value>>,
}

impl ContributionRequest {
    /// Create a public contribution in XAF from Cameroon, terms accepted.
    pub fn new(amount: f64, service: impl Into<String>, payer: impl Into<String>) -> Self {
        Self {
            amount,
            service: service.into(),
            payer: payer.into(),
            country: DEFAULT_COUNTRY.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            conversion: false,
            anonymous: false,
            accept_terms: true,
            location: None,
            trx_id: None,
            full_name: None,
            contact: None,
        }
    }

    /// Set anonymous
    pub fn with_anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }

    /// Set location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set trx id
    pub fn with_trx_id(mut self, trx_id: impl Into<String>) -> Self {
        self.trx_id = Some(trx_id.into());
        self
    }

    /// Set full name, e.g. `{"first_name": .., "last_name": ..}`
    pub fn with_full_name(mut self, full_name: Map<String, Value>) -> Self {
        self.full_name = Some(full_name);
        self
    }

    /// Set contact, e.g. `{"email": .., "phone_number": ..}`
    pub fn with_contact(mut self, contact: Map<String, Value>) -> Self {
        self.contact = Some(contact);
        self
    }
}

/// FundraisingOperation drives the fundraising product line.
#[derive(Debug, Clone)]
pub struct FundraisingOperation {
    executor: RequestExecutor,
}

impl FundraisingOperation {
    /// Create a fundraising client.
    ///
    /// `config` must carry the credential and the fund key.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        Ok(Self {
            executor: RequestExecutor::new(ctx, config, ProductLine::Fundraising)?,
        })
    }

    /// Contribute to the fund. Synchronous unless `opts` says otherwise.
    pub async fn make_contribution(
        &self,
        req: &ContributionRequest,
        mut opts: RequestOptions,
    ) -> Result<ContributionResponse> {
        opts.mode.get_or_insert(OperationMode::Synchronous);
        self.executor
            .execute_json(
                Method::POST,
                "fundraising/contribute/",
                Some(to_body(req)?),
                opts,
            )
            .await
    }

    pub async fn get_contributions(&self, ids: &[&str], source: &str) -> Result<Vec<Contribution>> {
        let endpoint = format!(
            "fundraising/contributions/?{}",
            joined_ids_query(ids, source)
        );
        self.executor
            .execute_json(Method::GET, &endpoint, None, RequestOptions::default())
            .await
    }

    pub async fn check_contributions(
        &self,
        ids: &[&str],
        source: &str,
    ) -> Result<Vec<Contribution>> {
        let endpoint = format!(
            "fundraising/contributions/check/?{}",
            joined_ids_query(ids, source)
        );
        self.executor
            .execute_json(Method::GET, &endpoint, None, RequestOptions::default())
            .await
    }
}
