use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely typed field as it arrives from the upstream API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    #[default]
    Missing,
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(Scalar::Missing, Scalar::Number)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{}", i)
                } else if let Some(u) = n.as_u64() {
                    write!(f, "{}", u)
                } else {
                    // f64 Display drops the trailing ".0" that serde_json keeps
                    write!(f, "{}", n.as_f64().unwrap_or_default())
                }
            }
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Missing => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralInfo {
    pub coin: Scalar,
    pub full_name: Scalar,
    pub launch_date: Scalar,
    pub algorithm: Scalar,
    pub proof_type: Scalar,
    pub price_usd: Scalar,
    pub market_cap_usd: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PriceRecord {
    pub coin: Scalar,
    pub price_usd: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewsItem {
    pub title: Scalar,
    pub source: Scalar,
    pub link: Scalar,
    pub time_utc: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SentimentRecord {
    pub symbol: Scalar,
    pub interpretation: Scalar,
    pub score: Option<f64>,
}
