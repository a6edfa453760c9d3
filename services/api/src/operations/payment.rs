use http::Method;
use log::debug;
use mesomb_core::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use super::{joined_ids_query, DEFAULT_COUNTRY, DEFAULT_CURRENCY};
use crate::executor::{to_body, OperationMode, ProductLine, RequestExecutor, RequestOptions};
use crate::models::{Application, Customer, Location, Product, Transaction, TransactionResponse};
use crate::Config;

/// Merchant used by airtime purchases when none is given.
pub const DEFAULT_AIRTIME_MERCHANT: &str = "AIRTIME";

/// Collect money from a payer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectRequest {
    pub amount: f64,
    pub service: String,
    pub payer: String,
    pub country: String,
    pub currency: String,
    /// Whether fees are included in `amount`.
    pub fees: bool,
    pub conversion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    /// Caller reference, sent as `X-MeSomb-TrxID`.
    #[serde(rename = "trxID", skip_serializing_if = "Option::is_none")]
    pub trx_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CollectRequest {
    /// Create a collect in XAF from Cameroon, fees included.
    pub fn new(amount: f64, service: impl Into<String>, payer: impl Into<String>) -> Self {
        Self {
            amount,
            service: service.into(),
            payer: payer.into(),
            country: DEFAULT_COUNTRY.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            fees: true,
            conversion: false,
            location: None,
            customer: None,
            products: None,
            trx_id: None,
            extra: Map::new(),
        }
    }

    /// Set country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set whether fees are included
    pub fn with_fees(mut self, fees: bool) -> Self {
        self.fees = fees;
        self
    }

    /// Set conversion
    pub fn with_conversion(mut self, conversion: bool) -> Self {
        self.conversion = conversion;
        self
    }

    /// Set location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set customer
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Set products
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Some(products);
        self
    }

    /// Set trx id
    pub fn with_trx_id(mut self, trx_id: impl Into<String>) -> Self {
        self.trx_id = Some(trx_id.into());
        self
    }

    /// Add an extra body field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Deposit money to a receiver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositRequest {
    pub amount: f64,
    pub service: String,
    pub receiver: String,
    pub country: String,
    pub currency: String,
    #[serde(rename = "trxID", skip_serializing_if = "Option::is_none")]
    pub trx_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DepositRequest {
    /// Create a deposit in XAF to Cameroon.
    pub fn new(amount: f64, service: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            amount,
            service: service.into(),
            receiver: receiver.into(),
            country: DEFAULT_COUNTRY.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            trx_id: None,
            extra: Map::new(),
        }
    }

    /// Set country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set trx id
    pub fn with_trx_id(mut self, trx_id: impl Into<String>) -> Self {
        self.trx_id = Some(trx_id.into());
        self
    }

    /// Add an extra body field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Buy airtime for a receiver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirtimeRequest {
    pub amount: f64,
    pub service: String,
    pub receiver: String,
    pub merchant: String,
    pub country: String,
    pub currency: String,
    #[serde(rename = "trxID", skip_serializing_if = "Option::is_none")]
    pub trx_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AirtimeRequest {
    /// Create an airtime purchase from the default merchant.
    pub fn new(amount: f64, service: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            amount,
            service: service.into(),
            receiver: receiver.into(),
            merchant: DEFAULT_AIRTIME_MERCHANT.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            trx_id: None,
            extra: Map::new(),
        }
    }

    /// Set merchant
    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = merchant.into();
        self
    }

    /// Set trx id
    pub fn with_trx_id(mut self, trx_id: impl Into<String>) -> Self {
        self.trx_id = Some(trx_id.into());
        self
    }
}

/// Change applied to a security setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SecurityAction {
    Set,
    Unset,
}

#[derive(Serialize)]
struct SecurityBody<'a> {
    field: &'a str,
    action: SecurityAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a Value>,
}

/// PaymentOperation drives the payment product line.
#[derive(Debug, Clone)]
pub struct PaymentOperation {
    executor: RequestExecutor,
}

impl PaymentOperation {
    /// Create a payment client.
    ///
    /// `config` must carry the credential and the application key.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        Ok(Self {
            executor: RequestExecutor::new(ctx, config, ProductLine::Payment)?,
        })
    }

    /// Collect money from a payer. Synchronous unless `opts` says otherwise.
    pub async fn make_collect(
        &self,
        req: &CollectRequest,
        mut opts: RequestOptions,
    ) -> Result<TransactionResponse> {
        opts.mode.get_or_insert(OperationMode::Synchronous);
        debug!("collect {} {} from {}", req.amount, req.currency, req.payer);
        self.executor
            .execute_json(Method::POST, "payment/collect/", Some(to_body(req)?), opts)
            .await
    }

    /// Deposit money to a receiver.
    pub async fn make_deposit(
        &self,
        req: &DepositRequest,
        opts: RequestOptions,
    ) -> Result<TransactionResponse> {
        self.executor
            .execute_json(Method::POST, "payment/deposit/", Some(to_body(req)?), opts)
            .await
    }

    /// Buy airtime.
    pub async fn purchase_airtime(
        &self,
        req: &AirtimeRequest,
        opts: RequestOptions,
    ) -> Result<TransactionResponse> {
        self.executor
            .execute_json(Method::POST, "payment/airtime/", Some(to_body(req)?), opts)
            .await
    }

    /// Update a security setting of the application.
    ///
    /// `value` is never sent with [`SecurityAction::Unset`].
    pub async fn update_security(
        &self,
        field: &str,
        action: SecurityAction,
        value: Option<&Value>,
    ) -> Result<Application> {
        let body = SecurityBody {
            field,
            action,
            value: value.filter(|_| action == SecurityAction::Set),
        };
        self.executor
            .execute_json(
                Method::POST,
                "payment/security/",
                Some(to_body(&body)?),
                RequestOptions::default(),
            )
            .await
    }

    /// Fetch the application status and balances.
    pub async fn get_status(&self) -> Result<Application> {
        self.executor
            .execute_json(Method::GET, "payment/status/", None, RequestOptions::default())
            .await
    }

    /// Fetch transactions by id.
    pub async fn get_transactions(&self, ids: &[&str], source: &str) -> Result<Vec<Transaction>> {
        let endpoint = format!("payment/transactions/?{}", joined_ids_query(ids, source));
        self.executor
            .execute_json(Method::GET, &endpoint, None, RequestOptions::default())
            .await
    }

    /// Re-check transactions with the operators and return their latest state.
    pub async fn check_transactions(&self, ids: &[&str], source: &str) -> Result<Vec<Transaction>> {
        let endpoint = format!(
            "payment/transactions/check/?{}",
            joined_ids_query(ids, source)
        );
        self.executor
            .execute_json(Method::GET, &endpoint, None, RequestOptions::default())
            .await
    }
}
