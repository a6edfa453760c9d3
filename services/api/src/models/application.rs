use serde::Deserialize;
use serde_json::{Map, Value};

/// Balance of an application for one country and service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    pub country: String,
    pub service: String,
    pub value: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// A payment application, as returned by the status and security endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Application {
    pub key: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub balances: Vec<Balance>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub security: Option<Map<String, Value>>,
}

impl Application {
    /// Sum the balances matching `country` and `service`.
    ///
    /// `None` matches any value.
    pub fn balance(&self, country: Option<&str>, service: Option<&str>) -> f64 {
        self.balances
            .iter()
            .filter(|b| country.map_or(true, |c| b.country == c))
            .filter(|b| service.map_or(true, |s| b.service == s))
            .map(|b| b.value)
            .sum()
    }

    /// Value of a security setting, if present.
    pub fn security_field(&self, name: &str) -> Option<&Value> {
        self.security.as_ref().and_then(|s| s.get(name))
    }
}
