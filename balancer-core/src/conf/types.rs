use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level balancer configuration, as read from `balancer.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BalancerConfig {
    /// Selection algorithm name. Unknown or absent selects weighted round robin.
    #[serde(default)]
    pub algor: Option<String>,

    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
}

impl BalancerConfig {
    pub fn new(algor: Option<&str>, endpoints: Vec<EndpointConfig>) -> Self {
        Self {
            algor: algor.map(str::to_owned),
            endpoints,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from_config(self.algor.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    pub name: String,

    /// e.g. "10.0.0.1:8080"
    #[serde(rename = "addr", alias = "address")]
    pub address: String,

    /// Zero or negative keeps the endpoint out of rotation.
    #[serde(default)]
    pub weight: i32,
}

impl EndpointConfig {
    pub fn new(name: impl Into<String>, address: impl Into<String>, weight: i32) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    RoundRobin,
    #[default]
    WeightedRoundRobin,
}

impl Algorithm {
    /// Exact match on the recognized config names.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "round_robin" => Some(Self::RoundRobin),
            "weighted_round_robin" => Some(Self::WeightedRoundRobin),
            _ => None,
        }
    }

    /// Anything unrecognized, including no value at all, falls back to
    /// weighted round robin.
    pub fn from_config(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::WeightedRoundRobin => "weighted_round_robin",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
