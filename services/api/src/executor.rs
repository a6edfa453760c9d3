//! Request execution: url building, signing, sending and error classification.

use std::fmt;

use bytes::Bytes;
use http::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderName, HeaderValue, Method, StatusCode};
use log::debug;
use mesomb_core::nonce::{generate, DEFAULT_NONCE_LENGTH};
use mesomb_core::time::{format_timestamp, now, DateTime};
use mesomb_core::{Context, Error, Result, SigningRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::*;
use crate::models::parse_response;
use crate::{Config, Credential, RequestSigner};

/// JSON object sent as request body.
///
/// Keys keep their insertion order on the wire.
pub type RequestBody = Map<String, Value>;

/// The product line issuing a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductLine {
    /// Collections, deposits, airtime: identified by an application key.
    Payment,
    /// Wallet management: identified by a provider key.
    Wallet,
    /// Fundraising contributions: identified by a fund key.
    Fundraising,
}

impl ProductLine {
    /// Header carrying the product key.
    pub fn key_header(&self) -> HeaderName {
        HeaderName::from_static(match self {
            ProductLine::Payment => X_MESOMB_APPLICATION,
            ProductLine::Wallet => X_MESOMB_PROVIDER,
            ProductLine::Fundraising => X_MESOMB_FUND,
        })
    }

    /// Product key for this line, read from config.
    fn key<'a>(&self, config: &'a Config) -> Option<&'a str> {
        match self {
            ProductLine::Payment => config.application_key.as_deref(),
            ProductLine::Wallet => config.provider_key.as_deref(),
            ProductLine::Fundraising => config.fund_key.as_deref(),
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductLine::Payment => write!(f, "payment"),
            ProductLine::Wallet => write!(f, "wallet"),
            ProductLine::Fundraising => write!(f, "fundraising"),
        }
    }
}

/// How the API should process a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationMode {
    /// Wait for the operator before answering.
    #[default]
    Synchronous,
    /// Answer immediately with a pending transaction.
    Asynchronous,
}

impl OperationMode {
    /// Value of the `X-MeSomb-OperationMode` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationMode::Synchronous => "synchronous",
            OperationMode::Asynchronous => "asynchronous",
        }
    }
}

/// Per call options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Sent as `X-MeSomb-OperationMode` when set.
    pub mode: Option<OperationMode>,
    /// Nonce to use, a fresh one is generated when unset.
    pub nonce: Option<String>,
    /// Signing time, current time when unset.
    pub time: Option<DateTime>,
}

impl RequestOptions {
    /// Set mode
    pub fn with_mode(mut self, mode: OperationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set nonce
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Set time
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

/// RequestExecutor turns a logical API call into a signed HTTP request and
/// classifies the response.
///
/// It holds nothing mutable: concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    ctx: Context,
    config: Config,
    product: ProductLine,
    target: String,
    credential: Credential,
    signer: RequestSigner,
}

impl RequestExecutor {
    /// Create an executor for `product`.
    ///
    /// Fails with `ConfigInvalid` if the credential or the product key is
    /// missing from `config`.
    pub fn new(ctx: Context, config: Config, product: ProductLine) -> Result<Self> {
        let credential = config.credential()?;
        let target = product
            .key(&config)
            .ok_or_else(|| Error::config_invalid(format!("{product} key must be set")))?
            .to_string();
        let signer = RequestSigner::new(SIGNING_SERVICE).with_algorithm(config.algorithm());

        Ok(Self {
            ctx,
            config,
            product,
            target,
            credential,
            signer,
        })
    }

    /// The config this executor was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The product line this executor signs for.
    pub fn product(&self) -> ProductLine {
        self.product
    }

    /// Execute the call and return the raw response body.
    ///
    /// A `trxID` entry of `body` is sent as `X-MeSomb-TrxID` instead of a
    /// body field. Status >= 400 turns into a classified error.
    pub async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<RequestBody>,
        opts: RequestOptions,
    ) -> Result<String> {
        let url = self.config.endpoint_url(endpoint);
        let now = opts.time.unwrap_or_else(now);
        let nonce = opts
            .nonce
            .unwrap_or_else(|| generate(DEFAULT_NONCE_LENGTH));

        // GET ignores the body entirely, trxID included.
        let mut signing = SigningRequest::build(method.clone(), &url)?;
        let (trx_id, payload) = if method == Method::GET {
            (None, None)
        } else {
            signing.header_insert(CONTENT_TYPE, CONTENT_TYPE_JSON);
            match body {
                Some(mut body) => (take_trx_id(&mut body)?, Some(serialize_body(&body)?)),
                None => (None, None),
            }
        };
        let authorization = self.signer.sign(
            &mut signing,
            &self.credential,
            now,
            &nonce,
            payload.as_deref(),
        )?;

        let mut req = http::Request::builder()
            .method(method.clone())
            .uri(&url)
            .body(payload.map(Bytes::from).unwrap_or_default())?;
        let headers = req.headers_mut();
        if method != Method::GET {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        }
        headers.insert(
            HeaderName::from_static(X_MESOMB_DATE),
            HeaderValue::from_str(&format_timestamp(now))?,
        );
        headers.insert(
            HeaderName::from_static(X_MESOMB_NONCE),
            HeaderValue::from_str(&nonce)?,
        );
        headers.insert(AUTHORIZATION, {
            let mut value = HeaderValue::from_str(&authorization)?;
            value.set_sensitive(true);
            value
        });
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(self.config.language())?);
        headers.insert(
            HeaderName::from_static(X_MESOMB_SOURCE),
            HeaderValue::from_static(SOURCE),
        );
        headers.insert(self.product.key_header(), HeaderValue::from_str(&self.target)?);
        if let Some(mode) = opts.mode {
            headers.insert(
                HeaderName::from_static(X_MESOMB_OPERATION_MODE),
                HeaderValue::from_static(mode.as_str()),
            );
        }
        if let Some(trx_id) = trx_id {
            headers.insert(
                HeaderName::from_static(X_MESOMB_TRX_ID),
                HeaderValue::from_str(&trx_id)?,
            );
        }

        debug!("sending {method} {url}");
        let resp = self.ctx.http_send_as_string(req).await?;
        let status = resp.status();
        if status.as_u16() >= 400 {
            debug!("{method} {url} failed with status {status}");
            return Err(classify_error(status, resp.body()));
        }

        Ok(resp.into_body())
    }

    /// Execute the call and decode the response body into `T`.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<RequestBody>,
        opts: RequestOptions,
    ) -> Result<T> {
        let resp = self.execute(method, endpoint, body, opts).await?;
        parse_response(&resp)
    }
}

/// Serialize a request body to the JSON text that is both signed and sent.
pub fn serialize_body(body: &RequestBody) -> Result<String> {
    serde_json::to_string(body)
        .map_err(|e| Error::request_invalid("failed to serialize request body").with_source(e))
}

/// Convert a serializable request into a body object.
///
/// Fields keep their declaration order.
pub fn to_body<T: Serialize>(value: &T) -> Result<RequestBody> {
    match serde_json::to_value(value) {
        Ok(Value::Object(body)) => Ok(body),
        Ok(other) => Err(Error::request_invalid(format!(
            "request body must be a JSON object, got {other}"
        ))),
        Err(e) => Err(Error::request_invalid("failed to serialize request body").with_source(e)),
    }
}

/// Remove `trxID` from the body, keeping the order of the other fields.
///
/// The returned value is what goes into `X-MeSomb-TrxID`.
pub fn take_trx_id(body: &mut RequestBody) -> Result<Option<String>> {
    match body.shift_remove(TRX_ID_FIELD) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(v) => Err(Error::request_invalid(format!(
            "{TRX_ID_FIELD} must be a string or a number, got {v}"
        ))),
    }
}

/// Classify a failed response into the MeSomb error taxonomy.
///
/// A JSON body provides `detail` as message and `code` as machine code;
/// anything else keeps the raw body as message.
pub fn classify_error(status: StatusCode, body: &str) -> Error {
    let mut message = body.to_string();
    let mut code = None;
    if body.starts_with('{') {
        if let Ok(Value::Object(data)) = serde_json::from_str::<Value>(body) {
            if let Some(detail) = data.get("detail").and_then(Value::as_str) {
                message = detail.to_string();
            }
            code = match data.get("code") {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            };
        }
    }

    let err = match status {
        StatusCode::NOT_FOUND => return Error::service_not_found(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return Error::permission_denied(message)
        }
        StatusCode::BAD_REQUEST => Error::invalid_client_request(message),
        _ => Error::server_error(message),
    };
    match code {
        Some(code) => err.with_code(code),
        None => err,
    }
}
