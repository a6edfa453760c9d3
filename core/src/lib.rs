//! Core components for signing MeSomb API requests.
//!
//! This crate provides the foundational types shared by the MeSomb client.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **SigningRequest**: The canonical view of a request (method, url parts, sorted headers)
//! - **Error**: The closed error taxonomy returned by every fallible operation
//!
//! ## Example
//!
//! ```
//! use http::Method;
//! use mesomb_core::SigningRequest;
//!
//! # fn main() -> mesomb_core::Result<()> {
//! let mut req = SigningRequest::build(
//!     Method::GET,
//!     "https://mesomb.hachther.com/api/v1.1/payment/status/",
//! )?;
//! req.header_insert("X-MeSomb-Nonce", "fihser");
//!
//! assert_eq!(req.host_value(), "https://mesomb.hachther.com");
//! assert_eq!(req.header_name_to_vec_sorted(), vec!["x-mesomb-nonce"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: SHA1 and HMAC-SHA1 hex digests
//! - [`time`]: Time formatting utilities
//! - [`nonce`]: Random nonce generation
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod nonce;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

mod request;
pub use request::SigningRequest;
