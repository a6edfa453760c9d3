// Headers used by the MeSomb API.
pub const X_MESOMB_DATE: &str = "x-mesomb-date";
pub const X_MESOMB_NONCE: &str = "x-mesomb-nonce";
pub const X_MESOMB_SOURCE: &str = "x-mesomb-source";
pub const X_MESOMB_APPLICATION: &str = "x-mesomb-application";
pub const X_MESOMB_PROVIDER: &str = "x-mesomb-provider";
pub const X_MESOMB_FUND: &str = "x-mesomb-fund";
pub const X_MESOMB_OPERATION_MODE: &str = "x-mesomb-operationmode";
pub const X_MESOMB_TRX_ID: &str = "x-mesomb-trxid";

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Body field lifted into [`X_MESOMB_TRX_ID`] before signing.
pub const TRX_ID_FIELD: &str = "trxID";

/// Service name in the signing scope, shared by every product line.
pub const SIGNING_SERVICE: &str = "payment";

pub const SOURCE: &str = concat!("MeSombRust/", env!("CARGO_PKG_VERSION"));

// Defaults.
pub const DEFAULT_API_BASE: &str = "https://mesomb.hachther.com";
pub const DEFAULT_API_VERSION: &str = "v1.1";
pub const DEFAULT_ALGORITHM: &str = "HMAC-SHA1";
pub const DEFAULT_LANGUAGE: &str = "en";

// Env values used by the MeSomb client.
pub const MESOMB_ACCESS_KEY: &str = "MESOMB_ACCESS_KEY";
pub const MESOMB_SECRET_KEY: &str = "MESOMB_SECRET_KEY";
pub const MESOMB_APPLICATION_KEY: &str = "MESOMB_APPLICATION_KEY";
pub const MESOMB_PROVIDER_KEY: &str = "MESOMB_PROVIDER_KEY";
pub const MESOMB_FUND_KEY: &str = "MESOMB_FUND_KEY";
pub const MESOMB_API_BASE: &str = "MESOMB_API_BASE";
pub const MESOMB_API_VERSION: &str = "MESOMB_API_VERSION";
pub const MESOMB_LANGUAGE: &str = "MESOMB_LANGUAGE";
