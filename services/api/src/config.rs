use std::fmt::{Debug, Formatter};

use mesomb_core::utils::Redact;
use mesomb_core::{Context, Error, Result};

use crate::constants::*;
use crate::Credential;

/// Config carries all the configuration for a MeSomb client.
///
/// A client owns its config; two clients with different keys can live side
/// by side without sharing any state.
#[derive(Clone, Default)]
pub struct Config {
    /// Base url of the API, [`DEFAULT_API_BASE`] if unset.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MESOMB_API_BASE`]
    pub api_base: Option<String>,
    /// Version path segment, [`DEFAULT_API_VERSION`] if unset.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MESOMB_API_VERSION`]
    pub api_version: Option<String>,
    /// Signing algorithm name written in the `Authorization` header,
    /// [`DEFAULT_ALGORITHM`] if unset.
    pub algorithm: Option<String>,
    /// Language sent as `Accept-Language`, [`DEFAULT_LANGUAGE`] if unset.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MESOMB_LANGUAGE`]
    pub language: Option<String>,
    /// Prefix endpoint paths with the language: `{api_base}/{language}/api/...`.
    pub locale_in_path: bool,
    /// Maximum number of retries.
    ///
    /// Kept for compatibility with other MeSomb clients. No request path
    /// reads it; every call is sent exactly once.
    pub max_network_retries: u32,
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MESOMB_ACCESS_KEY`]
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MESOMB_SECRET_KEY`]
    pub secret_key: Option<String>,
    /// Application key for payment operations.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MESOMB_APPLICATION_KEY`]
    pub application_key: Option<String>,
    /// Provider key for wallet operations.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MESOMB_PROVIDER_KEY`]
    pub provider_key: Option<String>,
    /// Fund key for fundraising operations.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MESOMB_FUND_KEY`]
    pub fund_key: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_base, a trailing `/` is dropped.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into().trim_end_matches('/').to_string());
        self
    }

    /// Set api_version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Set algorithm
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set locale_in_path
    pub fn with_locale_in_path(mut self, locale_in_path: bool) -> Self {
        self.locale_in_path = locale_in_path;
        self
    }

    /// Set max_network_retries
    pub fn with_max_network_retries(mut self, max_network_retries: u32) -> Self {
        self.max_network_retries = max_network_retries;
        self
    }

    /// Set access_key
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set application_key
    pub fn with_application_key(mut self, application_key: impl Into<String>) -> Self {
        self.application_key = Some(application_key.into());
        self
    }

    /// Set provider_key
    pub fn with_provider_key(mut self, provider_key: impl Into<String>) -> Self {
        self.provider_key = Some(provider_key.into());
        self
    }

    /// Set fund_key
    pub fn with_fund_key(mut self, fund_key: impl Into<String>) -> Self {
        self.fund_key = Some(fund_key.into());
        self
    }

    /// Load config from env.
    ///
    /// Values set before this call are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(MESOMB_ACCESS_KEY) {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MESOMB_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MESOMB_APPLICATION_KEY) {
            self.application_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MESOMB_PROVIDER_KEY) {
            self.provider_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MESOMB_FUND_KEY) {
            self.fund_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MESOMB_API_BASE) {
            self.api_base
                .get_or_insert(v.trim_end_matches('/').to_string());
        }
        if let Some(v) = ctx.env_var(MESOMB_API_VERSION) {
            self.api_version.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MESOMB_LANGUAGE) {
            self.language.get_or_insert(v);
        }

        self
    }

    /// Base url of the API.
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Version path segment.
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    /// Signing algorithm name.
    pub fn algorithm(&self) -> &str {
        self.algorithm.as_deref().unwrap_or(DEFAULT_ALGORITHM)
    }

    /// Language tag.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Build the credential from access and secret key.
    pub fn credential(&self) -> Result<Credential> {
        match (&self.access_key, &self.secret_key) {
            (Some(ak), Some(sk)) => Ok(Credential::new(ak, sk)),
            _ => Err(Error::config_invalid(
                "access_key and secret_key must be both set",
            )),
        }
    }

    /// Build the full url of an endpoint.
    ///
    /// `payment/collect/` becomes `{api_base}/api/{api_version}/payment/collect/`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if self.locale_in_path {
            format!(
                "{}/{}/api/{}/{}",
                self.api_base(),
                self.language(),
                self.api_version(),
                endpoint
            )
        } else {
            format!("{}/api/{}/{}", self.api_base(), self.api_version(), endpoint)
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_base", &self.api_base())
            .field("api_version", &self.api_version())
            .field("algorithm", &self.algorithm())
            .field("language", &self.language())
            .field("locale_in_path", &self.locale_in_path)
            .field("max_network_retries", &self.max_network_retries)
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("application_key", &self.application_key)
            .field("provider_key", &self.provider_key)
            .field("fund_key", &self.fund_key)
            .finish()
    }
}
