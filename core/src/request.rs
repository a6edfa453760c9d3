use std::collections::BTreeMap;
use std::fmt::Write;

use http::Method;
use http::Uri;

use crate::{Error, Result};

/// Signing context for request.
///
/// Headers are kept in a `BTreeMap` keyed by lower-cased name, so iteration
/// is always in byte order no matter how they were inserted.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// URL scheme, `http` or `https`.
    pub scheme: String,
    /// URL host without port.
    pub host: String,
    /// Port, only when written explicitly in the URL.
    pub port: Option<u16>,
    /// Raw URL path.
    pub path: String,
    /// Raw query string without the leading `?`, empty if none.
    pub query: String,
    /// Headers that take part in the signature.
    pub headers: BTreeMap<String, String>,
}

impl SigningRequest {
    /// Build a signing context from method and absolute url.
    pub fn build(method: Method, url: &str) -> Result<Self> {
        let uri: Uri = url.parse()?;

        let scheme = uri
            .scheme_str()
            .ok_or_else(|| Error::malformed_url(format!("url without scheme: {url}")))?
            .to_string();
        let host = uri
            .host()
            .ok_or_else(|| Error::malformed_url(format!("url without host: {url}")))?
            .to_string();

        Ok(SigningRequest {
            method,
            scheme,
            host,
            port: uri.port_u16().filter(|p| *p > 0),
            path: uri.path().to_string(),
            query: uri.query().unwrap_or_default().to_string(),
            headers: BTreeMap::new(),
        })
    }

    /// Insert a header, the name is lower-cased.
    ///
    /// Returns the previous value if the header was already present.
    pub fn header_insert(
        &mut self,
        name: impl AsRef<str>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into())
    }

    /// Value of the `host` entry: `{scheme}://{host}[:{port}]`.
    pub fn host_value(&self) -> String {
        let mut s = format!("{}://{}", self.scheme, self.host);
        if let Some(port) = self.port {
            // Writing into a String never fails.
            let _ = write!(s, ":{port}");
        }
        s
    }

    /// Get header names as sorted vector.
    pub fn header_name_to_vec_sorted(&self) -> Vec<&str> {
        self.headers.keys().map(|k| k.as_str()).collect()
    }

    /// Convert sorted headers to string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a:b\nc:d"
    /// ```
    pub fn header_to_string(&self, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(64);

        for (idx, (k, v)) in self.headers.iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(k);
            s.push_str(sep);
            s.push_str(v);
        }

        s
    }

    /// Get the path form-urlencoded with `/` kept literal.
    ///
    /// Every byte other than alphanumerics and `*-._` is percent encoded and
    /// space turns into `+`, then `%2F` is decoded back to `/`.
    pub fn path_encoded(&self) -> String {
        form_urlencoded::byte_serialize(self.path.as_bytes())
            .collect::<String>()
            .replace("%2F", "/")
    }
}
