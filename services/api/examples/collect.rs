use anyhow::Result;
use http::Method;
use mesomb_api::models::Location;
use mesomb_api::operations::{CollectRequest, PaymentOperation};
use mesomb_api::{Config, Credential, RequestOptions, RequestSigner, SIGNING_SERVICE};
use mesomb_core::nonce::{generate, DEFAULT_NONCE_LENGTH};
use mesomb_core::time::now;
use mesomb_core::{Context, OsEnv, SigningRequest};
use mesomb_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);

    let req = CollectRequest::new(100.0, "MTN", "670000000")
        .with_location(Location::new("Douala").with_country("Cameroun"))
        .with_trx_id("ORDER-1");

    // Without keys, only show what a signed request looks like.
    if config.credential().is_err() || config.application_key.is_none() {
        println!("MESOMB_ACCESS_KEY, MESOMB_SECRET_KEY or MESOMB_APPLICATION_KEY not set, demo mode");

        // Same body the executor sends: trxID travels as a header.
        let mut body = mesomb_api::to_body(&req)?;
        let trx_id = mesomb_api::take_trx_id(&mut body)?;
        let body = mesomb_api::serialize_body(&body)?;
        let mut signing =
            SigningRequest::build(Method::POST, &config.endpoint_url("payment/collect/"))?;
        signing.header_insert("content-type", "application/json; charset=utf-8");
        let authorization = RequestSigner::new(SIGNING_SERVICE).sign(
            &mut signing,
            &Credential::new("demo-access-key", "demo-secret-key"),
            now(),
            &generate(DEFAULT_NONCE_LENGTH),
            Some(&body),
        )?;
        println!("Authorization: {authorization}");
        if let Some(trx_id) = trx_id {
            println!("X-MeSomb-TrxID: {trx_id}");
        }
        println!("Body: {body}");
        return Ok(());
    }

    let payment = PaymentOperation::new(ctx, config)?;
    match payment.make_collect(&req, RequestOptions::default()).await {
        Ok(resp) => println!(
            "collect done: operation success {}, transaction success {}",
            resp.is_operation_success(),
            resp.is_transaction_success()
        ),
        Err(err) => println!(
            "collect failed: {} ({}), code {:?}",
            err,
            err.kind(),
            err.code()
        ),
    }
    Ok(())
}
