use http::Method;
use mesomb_core::{Context, Result};
use serde::Serialize;

use super::{repeated_ids_query, DEFAULT_COUNTRY};
use crate::executor::{to_body, ProductLine, RequestExecutor, RequestOptions};
use crate::models::{Paginated, Wallet, WalletTransaction};
use crate::Config;

/// Wallet owner details, used to create or update a wallet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletRequest {
    pub last_name: String,
    pub phone_number: String,
    pub country: String,
    /// `MAN` or `WOMAN`.
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Wallet number, generated by the API when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

impl WalletRequest {
    /// Create a request for a wallet in Cameroon.
    pub fn new(
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            country: DEFAULT_COUNTRY.to_string(),
            gender: gender.into(),
            first_name: None,
            email: None,
            number: None,
        }
    }

    /// Set country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }
}

/// Amount moved on a wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyRequest {
    pub amount: f64,
    pub message: Option<String>,
    /// Caller reference of the movement.
    pub external_id: Option<String>,
}

impl MoneyRequest {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            message: None,
            external_id: None,
        }
    }

    /// Set message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set external id
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }
}

#[derive(Serialize)]
struct AdjustBody<'a> {
    amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    force: Option<bool>,
    direction: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<&'a str>,
}

#[derive(Serialize)]
struct TransferBody<'a> {
    amount: f64,
    to: i64,
    force: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<&'a str>,
}

/// WalletOperation drives the wallet product line.
#[derive(Debug, Clone)]
pub struct WalletOperation {
    executor: RequestExecutor,
}

impl WalletOperation {
    /// Create a wallet client.
    ///
    /// `config` must carry the credential and the provider key.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        Ok(Self {
            executor: RequestExecutor::new(ctx, config, ProductLine::Wallet)?,
        })
    }

    pub async fn create_wallet(&self, req: &WalletRequest) -> Result<Wallet> {
        self.executor
            .execute_json(
                Method::POST,
                "wallet/wallets/",
                Some(to_body(req)?),
                RequestOptions::default(),
            )
            .await
    }

    pub async fn get_wallet(&self, id: i64) -> Result<Wallet> {
        self.executor
            .execute_json(
                Method::GET,
                &format!("wallet/wallets/{id}/"),
                None,
                RequestOptions::default(),
            )
            .await
    }

    /// List wallets, `page` starting at 1.
    pub async fn get_wallets(&self, page: u32) -> Result<Paginated<Wallet>> {
        self.executor
            .execute_json(
                Method::GET,
                &format!("wallet/wallets/?page={page}"),
                None,
                RequestOptions::default(),
            )
            .await
    }

    pub async fn update_wallet(&self, id: i64, req: &WalletRequest) -> Result<Wallet> {
        self.executor
            .execute_json(
                Method::PUT,
                &format!("wallet/wallets/{id}/"),
                Some(to_body(req)?),
                RequestOptions::default(),
            )
            .await
    }

    pub async fn delete_wallet(&self, id: i64) -> Result<()> {
        self.executor
            .execute(
                Method::DELETE,
                &format!("wallet/wallets/{id}/"),
                None,
                RequestOptions::default(),
            )
            .await?;
        Ok(())
    }

    /// Credit a wallet.
    pub async fn add_money(&self, wallet: i64, req: &MoneyRequest) -> Result<WalletTransaction> {
        self.adjust(wallet, req, 1, None).await
    }

    /// Debit a wallet. `force` allows the balance to go negative.
    pub async fn remove_money(
        &self,
        wallet: i64,
        req: &MoneyRequest,
        force: bool,
    ) -> Result<WalletTransaction> {
        self.adjust(wallet, req, -1, Some(force)).await
    }

    async fn adjust(
        &self,
        wallet: i64,
        req: &MoneyRequest,
        direction: i8,
        force: Option<bool>,
    ) -> Result<WalletTransaction> {
        let body = AdjustBody {
            amount: req.amount,
            force,
            direction,
            message: req.message.as_deref(),
            external_id: req.external_id.as_deref(),
        };
        self.executor
            .execute_json(
                Method::POST,
                &format!("wallet/wallets/{wallet}/adjust/"),
                Some(to_body(&body)?),
                RequestOptions::default(),
            )
            .await
    }

    /// Move money from wallet `from` to wallet `to`.
    pub async fn transfer_money(
        &self,
        from: i64,
        to: i64,
        req: &MoneyRequest,
        force: bool,
    ) -> Result<WalletTransaction> {
        let body = TransferBody {
            amount: req.amount,
            to,
            force,
            message: req.message.as_deref(),
            external_id: req.external_id.as_deref(),
        };
        self.executor
            .execute_json(
                Method::POST,
                &format!("wallet/wallets/{from}/transfer/"),
                Some(to_body(&body)?),
                RequestOptions::default(),
            )
            .await
    }

    /// List wallet movements, optionally restricted to one wallet.
    pub async fn list_transactions(
        &self,
        page: u32,
        wallet: Option<i64>,
    ) -> Result<Paginated<WalletTransaction>> {
        let mut endpoint = format!("wallet/transactions/?page={page}");
        if let Some(wallet) = wallet {
            endpoint.push_str(&format!("&wallet={wallet}"));
        }
        self.executor
            .execute_json(Method::GET, &endpoint, None, RequestOptions::default())
            .await
    }

    /// Search wallet movements by id.
    pub async fn get_transactions(
        &self,
        ids: &[&str],
        source: &str,
    ) -> Result<Vec<WalletTransaction>> {
        let endpoint = format!(
            "wallet/transactions/search/?{}",
            repeated_ids_query(ids, source)
        );
        self.executor
            .execute_json(Method::GET, &endpoint, None, RequestOptions::default())
            .await
    }

    pub async fn get_transaction(&self, id: i64) -> Result<WalletTransaction> {
        self.executor
            .execute_json(
                Method::GET,
                &format!("wallet/transactions/{id}/"),
                None,
                RequestOptions::default(),
            )
            .await
    }
}
