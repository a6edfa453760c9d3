use anyhow::Result;
use http::Method;
use mesomb_api::operations::{MoneyRequest, WalletOperation, WalletRequest};
use pretty_assertions::assert_eq;

use crate::common::*;

const WALLET: &str = r#"{
    "id": 228,
    "number": "9876543210",
    "country": "CM",
    "status": "ACTIVE",
    "last_activity": null,
    "balance": 0.0,
    "first_name": "Dan",
    "last_name": "Fisher",
    "email": "dan@example.com",
    "phone_number": "+237677550000",
    "gender": "MAN"
}"#;

const WALLET_TRANSACTION: &str = r#"{
    "id": 3061,
    "status": "SUCCESS",
    "type": "CREDIT",
    "amount": 1000.0,
    "direction": 1,
    "wallet": 228,
    "balance_after": 1000.0,
    "date": "2024-03-01T12:00:00Z",
    "country": "CM"
}"#;

fn wallet_request() -> WalletRequest {
    WalletRequest::new("Fisher", "+237677550000", "MAN")
        .with_first_name("Dan")
        .with_email("dan@example.com")
}

#[tokio::test]
async fn test_create_and_update_wallet() -> Result<()> {
    init_logger();
    let mock = MockHttpSend::default().reply(201, WALLET).reply(200, WALLET);
    let ops = WalletOperation::new(context(&mock), config())?;

    let wallet = ops.create_wallet(&wallet_request()).await?;
    assert_eq!(wallet.id, 228);
    assert_eq!(wallet.last_activity, None);

    let sent = mock.last();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.uri, "http://127.0.0.1:8000/api/v1.1/wallet/wallets/");
    assert_eq!(sent.header("x-mesomb-provider"), Some(PROVIDER_KEY));
    assert_eq!(
        sent.body,
        r#"{"last_name":"Fisher","phone_number":"+237677550000","country":"CM","gender":"MAN","first_name":"Dan","email":"dan@example.com"}"#
    );

    ops.update_wallet(228, &wallet_request().with_number("9876543210"))
        .await?;
    let sent = mock.last();
    assert_eq!(sent.method, Method::PUT);
    assert_eq!(sent.uri, "http://127.0.0.1:8000/api/v1.1/wallet/wallets/228/");
    assert!(sent.body.ends_with(r#""number":"9876543210"}"#));
    Ok(())
}

#[tokio::test]
async fn test_get_and_delete_wallet() -> Result<()> {
    let page = format!(r#"{{"count": 1, "next": null, "previous": null, "results": [{WALLET}]}}"#);
    let mock = MockHttpSend::default()
        .reply(200, WALLET)
        .reply(200, &page)
        .reply(204, "");
    let ops = WalletOperation::new(context(&mock), config())?;

    assert_eq!(ops.get_wallet(228).await?.number, "9876543210");
    assert_eq!(
        mock.last().uri,
        "http://127.0.0.1:8000/api/v1.1/wallet/wallets/228/"
    );

    let page = ops.get_wallets(2).await?;
    assert!(!page.has_next());
    assert_eq!(page.results.len(), 1);
    assert_eq!(
        mock.last().uri,
        "http://127.0.0.1:8000/api/v1.1/wallet/wallets/?page=2"
    );

    ops.delete_wallet(228).await?;
    let sent = mock.last();
    assert_eq!(sent.method, Method::DELETE);
    assert_eq!(sent.uri, "http://127.0.0.1:8000/api/v1.1/wallet/wallets/228/");
    Ok(())
}

#[tokio::test]
async fn test_adjust_money() -> Result<()> {
    let mock = MockHttpSend::default()
        .reply(200, WALLET_TRANSACTION)
        .reply(200, WALLET_TRANSACTION);
    let ops = WalletOperation::new(context(&mock), config())?;

    let trx = ops
        .add_money(228, &MoneyRequest::new(1000.0).with_external_id("EXT-1"))
        .await?;
    assert_eq!(trx.direction, 1);
    let sent = mock.last();
    assert_eq!(
        sent.uri,
        "http://127.0.0.1:8000/api/v1.1/wallet/wallets/228/adjust/"
    );
    assert_eq!(
        sent.body,
        r#"{"amount":1000.0,"direction":1,"external_id":"EXT-1"}"#
    );

    ops.remove_money(228, &MoneyRequest::new(50.0).with_message("fee"), true)
        .await?;
    assert_eq!(
        mock.last().body,
        r#"{"amount":50.0,"force":true,"direction":-1,"message":"fee"}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_transfer_money() -> Result<()> {
    let mock = MockHttpSend::default().reply(200, WALLET_TRANSACTION);
    let ops = WalletOperation::new(context(&mock), config())?;

    ops.transfer_money(228, 229, &MoneyRequest::new(300.0), false)
        .await?;

    let sent = mock.last();
    assert_eq!(
        sent.uri,
        "http://127.0.0.1:8000/api/v1.1/wallet/wallets/228/transfer/"
    );
    assert_eq!(sent.body, r#"{"amount":300.0,"to":229,"force":false}"#);
    Ok(())
}

#[tokio::test]
async fn test_wallet_transactions() -> Result<()> {
    let page = format!(
        r#"{{"count": 3, "next": "http://127.0.0.1:8000/api/v1.1/wallet/transactions/?page=2", "previous": null, "results": [{WALLET_TRANSACTION}]}}"#
    );
    let list = format!("[{WALLET_TRANSACTION}]");
    let mock = MockHttpSend::default()
        .reply(200, &page)
        .reply(200, &page)
        .reply(200, &list)
        .reply(200, WALLET_TRANSACTION);
    let ops = WalletOperation::new(context(&mock), config())?;

    assert!(ops.list_transactions(1, None).await?.has_next());
    assert_eq!(
        mock.last().uri,
        "http://127.0.0.1:8000/api/v1.1/wallet/transactions/?page=1"
    );

    ops.list_transactions(1, Some(228)).await?;
    assert_eq!(
        mock.last().uri,
        "http://127.0.0.1:8000/api/v1.1/wallet/transactions/?page=1&wallet=228"
    );

    assert_eq!(ops.get_transactions(&["1", "2"], "MESOMB").await?.len(), 1);
    assert_eq!(
        mock.last().uri,
        "http://127.0.0.1:8000/api/v1.1/wallet/transactions/search/?ids=1&ids=2&source=MESOMB"
    );

    assert_eq!(ops.get_transaction(3061).await?.id, 3061);
    assert_eq!(
        mock.last().uri,
        "http://127.0.0.1:8000/api/v1.1/wallet/transactions/3061/"
    );
    Ok(())
}
