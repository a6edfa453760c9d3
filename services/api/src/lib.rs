//! MeSomb mobile-money API client.
//!
//! Every request is signed with the MeSomb HMAC-SHA1 scheme and sent through
//! the [`HttpSend`](mesomb_core::HttpSend) carried by a [`Context`](mesomb_core::Context).
//!
//! ## Example
//!
//! ```no_run
//! use mesomb_api::operations::{CollectRequest, PaymentOperation};
//! use mesomb_api::{Config, RequestOptions};
//! use mesomb_core::Context;
//!
//! # async fn collect(ctx: Context) -> mesomb_core::Result<()> {
//! let config = Config::new()
//!     .with_access_key("access")
//!     .with_secret_key("secret")
//!     .with_application_key("application");
//! let payment = PaymentOperation::new(ctx, config)?;
//!
//! let resp = payment
//!     .make_collect(
//!         &CollectRequest::new(100.0, "MTN", "670000000"),
//!         RequestOptions::default(),
//!     )
//!     .await?;
//! println!("transaction succeeded: {}", resp.is_transaction_success());
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::payload_hash;
pub use sign_request::RequestSigner;

mod executor;
pub use executor::classify_error;
pub use executor::OperationMode;
pub use executor::ProductLine;
pub use executor::RequestBody;
pub use executor::RequestExecutor;
pub use executor::RequestOptions;
pub use executor::{serialize_body, take_trx_id, to_body};

pub mod models;
pub mod operations;

mod constants;
pub use constants::SIGNING_SERVICE;
pub use constants::SOURCE;
