use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use mesomb_api::Config;
use mesomb_core::time::{from_timestamp_millis, DateTime};
use mesomb_core::{Context, Error, HttpSend, Result};

pub const ACCESS_KEY: &str = "c6c40b76-8119-4e93-81bf-bfb55417b392";
pub const SECRET_KEY: &str = "fe8c2445-810f-4caa-95c9-778d51580163";
pub const APPLICATION_KEY: &str = "2bb525516ba8d4cf4c1d8d5e5f2a7b4d";
pub const PROVIDER_KEY: &str = "a1dc7a7391c538788043";
pub const FUND_KEY: &str = "fa0c4f4fd0bc04e13cf0";

/// A request seen by [`MockHttpSend`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Default)]
struct State {
    requests: Vec<Recorded>,
    responses: VecDeque<(StatusCode, String)>,
}

/// HttpSend that records requests and replays canned responses in order.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    state: Arc<Mutex<State>>,
}

impl MockHttpSend {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.state
            .lock()
            .expect("lock must succeed")
            .responses
            .push_back((
                StatusCode::from_u16(status).expect("status must be valid"),
                body.to_string(),
            ));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().expect("lock must succeed").requests.clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("a request must be sent")
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        let mut state = self.state.lock().expect("lock must succeed");
        state.requests.push(Recorded {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body: String::from_utf8_lossy(&body).to_string(),
        });

        let (status, body) = state
            .responses
            .pop_front()
            .ok_or_else(|| Error::unexpected("connection reset by peer"))?;
        let resp = http::Response::builder()
            .status(status)
            .body(Bytes::from(body))?;
        Ok(resp)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn config() -> Config {
    Config::new()
        .with_api_base("http://127.0.0.1:8000")
        .with_access_key(ACCESS_KEY)
        .with_secret_key(SECRET_KEY)
        .with_application_key(APPLICATION_KEY)
        .with_provider_key(PROVIDER_KEY)
        .with_fund_key(FUND_KEY)
}

pub fn context(mock: &MockHttpSend) -> Context {
    Context::new().with_http_send(mock.clone())
}

/// 2023-01-16T00:00:00Z
pub fn signing_time() -> DateTime {
    from_timestamp_millis(1673827200000).expect("must be valid")
}

pub const TRANSACTION: &str = r#"{
    "pk": "a483a9c6-8c57-4e33-8bd2-2c4e3ca2c4e6",
    "status": "SUCCESS",
    "type": "PAYMENT",
    "amount": 98.0,
    "fees": 2.0,
    "b_party": "237670000000",
    "service": "MTN",
    "ts": "2023-05-24T10:14:47Z",
    "country": "CM",
    "currency": "XAF",
    "fin_trx_id": "1323432",
    "trxamount": 100.0
}"#;

pub fn transaction_response() -> String {
    format!(
        r#"{{"success": true, "message": "ok", "status": "SUCCESS", "reference": "REF-1", "transaction": {TRANSACTION}}}"#
    )
}

pub const APPLICATION: &str = r#"{
    "key": "2bb525516ba8d4cf4c1d8d5e5f2a7b4d",
    "name": "Meudocta Shop",
    "countries": ["CM"],
    "balances": [{"country": "CM", "service": "MTN", "value": 1000.0, "currency": "XAF"}],
    "security": {"check_fees": true}
}"#;
