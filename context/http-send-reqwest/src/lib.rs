// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Reqwest-based HTTP transport for the MeSomb client.
//!
//! This crate provides `ReqwestHttpSend`, which implements the `HttpSend`
//! trait from `mesomb_core` on top of a `reqwest::Client`.
//!
//! ## Example
//!
//! ```no_run
//! use mesomb_core::{Context, OsEnv};
//! use mesomb_http_send_reqwest::ReqwestHttpSend;
//!
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use mesomb_core::{Error, HttpSend, Result};
use reqwest::Client;

/// Timeout applied to every request unless changed with [`ReqwestHttpSend::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-based implementation of the `HttpSend` trait.
///
/// Every request carries its own timeout, [`DEFAULT_TIMEOUT`] unless
/// changed with [`ReqwestHttpSend::with_timeout`]. Requests are sent once;
/// there is no retry.
#[derive(Debug, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
    timeout: Duration,
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        Self::new(Client::default())
    }
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the timeout applied to each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let mut req = reqwest::Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to build http request").with_source(e))?;
        *req.timeout_mut() = Some(self.timeout);

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::unexpected("failed to send http request").with_source(e))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::unexpected("failed to read http response").with_source(e))?;

        let mut builder = http::Response::builder().status(status);
        if let Some(h) = builder.headers_mut() {
            *h = headers;
        }
        Ok(builder.body(body)?)
    }
}
