use anyhow::Result;
use http::Method;
use mesomb_api::{
    payload_hash, ProductLine, RequestExecutor, RequestOptions, RequestSigner, SIGNING_SERVICE,
};
use mesomb_core::{Context, ErrorKind, SigningRequest};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

fn options() -> RequestOptions {
    RequestOptions::default()
        .with_nonce("fihser")
        .with_time(signing_time())
}

#[tokio::test]
async fn test_get_matches_known_signature() -> Result<()> {
    init_logger();
    let mock = MockHttpSend::default().reply(200, "{}");
    let executor = RequestExecutor::new(
        context(&mock),
        config().with_locale_in_path(true),
        ProductLine::Payment,
    )?;

    executor
        .execute(Method::GET, "payment/collect/", None, options())
        .await?;

    let req = mock.last();
    assert_eq!(req.uri, "http://127.0.0.1:8000/en/api/v1.1/payment/collect/");
    assert_eq!(
        req.header("authorization"),
        Some("HMAC-SHA1 Credential=c6c40b76-8119-4e93-81bf-bfb55417b392/20230116/payment/mesomb_request, SignedHeaders=host;x-mesomb-date;x-mesomb-nonce, Signature=92866ff78427c739c1d48c9223a6133cde46ab5d")
    );
    assert_eq!(req.header("x-mesomb-date"), Some("1673827200"));
    assert_eq!(req.header("x-mesomb-nonce"), Some("fihser"));
    assert_eq!(req.header("content-type"), None);
    assert_eq!(req.body, "");
    Ok(())
}

#[tokio::test]
async fn test_post_sends_exactly_what_was_signed() -> Result<()> {
    init_logger();
    let mock = MockHttpSend::default().reply(201, "{}");
    let executor = RequestExecutor::new(context(&mock), config(), ProductLine::Payment)?;

    let body = json!({
        "amount": 100.0,
        "service": "MTN",
        "payer": "670000000",
        "trxID": "1",
        "location": {"town": "Douala", "country": "Cameroun"}
    });
    executor
        .execute(
            Method::POST,
            "payment/collect/",
            body.as_object().cloned(),
            options(),
        )
        .await?;

    let req = mock.last();
    assert_eq!(req.method, Method::POST);
    assert_eq!(
        req.body,
        r#"{"amount":100.0,"service":"MTN","payer":"670000000","location":{"town":"Douala","country":"Cameroun"}}"#
    );
    assert_eq!(req.header("x-mesomb-trxid"), Some("1"));
    assert_eq!(
        req.header("content-type"),
        Some("application/json; charset=utf-8")
    );

    // Re-sign the recorded request independently.
    let mut signing = SigningRequest::build(Method::POST, &req.uri)?;
    signing.header_insert("content-type", "application/json; charset=utf-8");
    let expected = RequestSigner::new(SIGNING_SERVICE).sign(
        &mut signing,
        &config().credential()?,
        signing_time(),
        "fihser",
        Some(&req.body),
    )?;
    assert_eq!(req.header("authorization"), Some(expected.as_str()));
    assert!(expected.contains("SignedHeaders=content-type;host;x-mesomb-date;x-mesomb-nonce,"));
    Ok(())
}

#[tokio::test]
async fn test_post_without_body_hashes_empty_object() -> Result<()> {
    let mock = MockHttpSend::default().reply(204, "");
    let executor = RequestExecutor::new(context(&mock), config(), ProductLine::Wallet)?;

    executor
        .execute(Method::DELETE, "wallet/wallets/1/", None, options())
        .await?;

    let req = mock.last();
    assert_eq!(req.body, "");

    let mut signing = SigningRequest::build(Method::DELETE, &req.uri)?;
    signing.header_insert("content-type", "application/json; charset=utf-8");
    let expected = RequestSigner::new(SIGNING_SERVICE).sign(
        &mut signing,
        &config().credential()?,
        signing_time(),
        "fihser",
        None,
    )?;
    assert_eq!(req.header("authorization"), Some(expected.as_str()));
    assert_eq!(payload_hash(None), payload_hash(Some("{}")));
    Ok(())
}

#[tokio::test]
async fn test_ambient_headers() -> Result<()> {
    let mock = MockHttpSend::default().reply(200, "{}").reply(200, "{}");
    let executor = RequestExecutor::new(
        context(&mock),
        config().with_language("fr"),
        ProductLine::Fundraising,
    )?;

    executor
        .execute(
            Method::GET,
            "fundraising/contributions/",
            None,
            RequestOptions::default().with_mode(mesomb_api::OperationMode::Asynchronous),
        )
        .await?;
    executor
        .execute(
            Method::GET,
            "fundraising/contributions/",
            None,
            RequestOptions::default(),
        )
        .await?;

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 2);
    let (first, second) = (&reqs[0], &reqs[1]);

    assert_eq!(first.header("x-mesomb-fund"), Some(FUND_KEY));
    assert_eq!(first.header("x-mesomb-application"), None);
    assert_eq!(first.header("accept-language"), Some("fr"));
    assert_eq!(first.header("x-mesomb-operationmode"), Some("asynchronous"));
    assert_eq!(second.header("x-mesomb-operationmode"), None);
    assert!(first
        .header("x-mesomb-source")
        .is_some_and(|v| v.starts_with("MeSombRust/")));

    // Fresh nonces are 40 alphanumerics and differ per request.
    let a = first.header("x-mesomb-nonce").unwrap_or_default();
    let b = second.header("x-mesomb-nonce").unwrap_or_default();
    assert_eq!(a.len(), 40);
    assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(a, b);

    assert!(first.headers["authorization"].is_sensitive());
    Ok(())
}

#[tokio::test]
async fn test_numeric_trx_id_is_lifted() -> Result<()> {
    let mock = MockHttpSend::default().reply(200, "{}");
    let executor = RequestExecutor::new(context(&mock), config(), ProductLine::Payment)?;

    executor
        .execute(
            Method::POST,
            "payment/deposit/",
            json!({"amount": 10, "trxID": 42}).as_object().cloned(),
            options(),
        )
        .await?;

    let req = mock.last();
    assert_eq!(req.header("x-mesomb-trxid"), Some("42"));
    assert_eq!(req.body, r#"{"amount":10}"#);
    Ok(())
}

#[tokio::test]
async fn test_get_ignores_body_and_trx_id() -> Result<()> {
    let mock = MockHttpSend::default().reply(200, "{}");
    let executor = RequestExecutor::new(
        context(&mock),
        config().with_locale_in_path(true),
        ProductLine::Payment,
    )?;

    executor
        .execute(
            Method::GET,
            "payment/collect/",
            json!({"amount": 10, "trxID": "1"}).as_object().cloned(),
            options(),
        )
        .await?;

    let req = mock.last();
    assert_eq!(req.header("x-mesomb-trxid"), None);
    assert_eq!(req.header("content-type"), None);
    assert_eq!(req.body, "");
    // Same signature as a GET without any body.
    assert!(req
        .header("authorization")
        .is_some_and(|v| v.ends_with("Signature=92866ff78427c739c1d48c9223a6133cde46ab5d")));
    Ok(())
}

#[tokio::test]
async fn test_errors_are_classified() -> Result<()> {
    let mock = MockHttpSend::default()
        .reply(404, r#"{"detail":"Application not found","code":"not_found"}"#)
        .reply(401, r#"{"detail":"Invalid signature"}"#)
        .reply(403, "Forbidden")
        .reply(
            400,
            r#"{"detail":"The amount should be greater than 10 XAF","code":"amount-too-low"}"#,
        )
        .reply(500, "<html>Internal Server Error</html>");
    let executor = RequestExecutor::new(context(&mock), config(), ProductLine::Payment)?;

    let mut errors = Vec::new();
    for _ in 0..5 {
        errors.push(
            executor
                .execute(Method::GET, "payment/status/", None, RequestOptions::default())
                .await
                .unwrap_err(),
        );
    }

    assert_eq!(errors[0].kind(), ErrorKind::ServiceNotFound);
    assert_eq!(errors[0].message(), "Application not found");

    assert_eq!(errors[1].kind(), ErrorKind::PermissionDenied);
    assert_eq!(errors[1].message(), "Invalid signature");

    assert_eq!(errors[2].kind(), ErrorKind::PermissionDenied);
    assert_eq!(errors[2].message(), "Forbidden");

    assert_eq!(errors[3].kind(), ErrorKind::InvalidClientRequest);
    assert_eq!(errors[3].code(), Some("amount-too-low"));

    assert_eq!(errors[4].kind(), ErrorKind::ServerError);
    assert_eq!(errors[4].message(), "<html>Internal Server Error</html>");
    assert_eq!(errors[4].code(), None);

    assert!(errors.iter().all(|e| e.is_api_error()));
    Ok(())
}

#[tokio::test]
async fn test_transport_error_is_not_retried() -> Result<()> {
    let mock = MockHttpSend::default();
    let executor = RequestExecutor::new(
        context(&mock),
        config().with_max_network_retries(3),
        ProductLine::Payment,
    )?;

    let err = executor
        .execute(Method::GET, "payment/status/", None, RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(mock.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_missing_credential() {
    let config = mesomb_api::Config::new().with_application_key(APPLICATION_KEY);
    let err = RequestExecutor::new(Context::new(), config, ProductLine::Payment).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
