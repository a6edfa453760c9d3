use std::fmt::Write;

use http::header::HOST;
use log::debug;
use mesomb_core::hash::{hex_hmac_sha1, hex_sha1};
use mesomb_core::time::{format_date, format_timestamp, DateTime};
use mesomb_core::{Result, SigningRequest};

use crate::constants::{DEFAULT_ALGORITHM, X_MESOMB_DATE, X_MESOMB_NONCE};
use crate::Credential;

/// Payload hashed when a request carries no body.
const EMPTY_PAYLOAD: &str = "{}";

/// RequestSigner that implements the MeSomb request signature.
///
/// The canonical request is built the SigV4 way, hashed with SHA1 and signed
/// with HMAC-SHA1 keyed by the secret key. Signing is a pure function of its
/// inputs: no clock is read and no state is kept.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    algorithm: String,
}

impl RequestSigner {
    /// Create a new signer for `service`.
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
        }
    }

    /// Specify the algorithm name written in the string to sign and the
    /// `Authorization` header.
    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = algorithm.to_string();
        self
    }

    /// Sign the request and return the `Authorization` header value.
    ///
    /// `host`, `x-mesomb-date` and `x-mesomb-nonce` are inserted into
    /// `req.headers`, overriding any caller value. `body` must be the exact
    /// JSON text that goes on the wire.
    pub fn sign(
        &self,
        req: &mut SigningRequest,
        cred: &Credential,
        now: DateTime,
        nonce: &str,
        body: Option<&str>,
    ) -> Result<String> {
        let timestamp = format_timestamp(now);

        // canonicalize headers
        let host = req.host_value();
        req.header_insert(HOST, host);
        req.header_insert(X_MESOMB_DATE, timestamp.as_str());
        req.header_insert(X_MESOMB_NONCE, nonce);

        let signed_headers = req.header_name_to_vec_sorted().join(";");
        let creq = canonical_request_string(req, &signed_headers, body)?;
        debug!("calculated canonical request: {creq}");

        // Scope: "20230116/payment/mesomb_request"
        let scope = format!("{}/{}/mesomb_request", format_date(now), self.service);
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // HMAC-SHA1
        // 1673827200
        // 20230116/payment/mesomb_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{}", self.algorithm)?;
            writeln!(f, "{timestamp}")?;
            writeln!(f, "{scope}")?;
            write!(f, "{}", hex_sha1(creq.as_bytes()))?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signature = hex_hmac_sha1(cred.secret_key.as_bytes(), string_to_sign.as_bytes())?;

        Ok(format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            self.algorithm, cred.access_key, scope, signed_headers, signature
        ))
    }
}

/// Hex SHA1 of the body text, `{}` standing in for a missing body.
///
/// Escaped slashes (`\/`) are hashed as plain `/`.
pub fn payload_hash(body: Option<&str>) -> String {
    let body = body.unwrap_or(EMPTY_PAYLOAD).replace("\\/", "/");
    hex_sha1(body.as_bytes())
}

fn canonical_request_string(
    req: &SigningRequest,
    signed_headers: &str,
    body: Option<&str>,
) -> Result<String> {
    // 512 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(512);

    writeln!(f, "{}", req.method)?;
    writeln!(f, "{}", req.path_encoded())?;
    writeln!(f, "{}", req.query)?;
    writeln!(f, "{}", req.header_to_string(":", "\n"))?;
    writeln!(f, "{signed_headers}")?;
    write!(f, "{}", payload_hash(body))?;

    Ok(f)
}
