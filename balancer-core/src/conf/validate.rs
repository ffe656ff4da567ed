use crate::conf::types::{Algorithm, BalancerConfig};
use std::collections::HashSet;
use thiserror::Error;

/// Config findings that do not stop a selector from being built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("unrecognized algorithm '{value}', using {fallback}")]
    UnknownAlgorithm { value: String, fallback: Algorithm },

    #[error("endpoint '{name}' has weight {weight} and will never be selected")]
    NonPositiveWeight { name: String, weight: i32 },

    #[error("duplicate endpoint name '{name}'")]
    DuplicateName { name: String },

    #[error("no endpoint has a positive weight; every selection will fail")]
    NoSelectableEndpoint,
}

pub fn validate(config: &BalancerConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(value) = config.algor.as_deref()
        && Algorithm::parse(value).is_none()
    {
        warnings.push(ConfigWarning::UnknownAlgorithm {
            value: value.to_owned(),
            fallback: Algorithm::from_config(None),
        });
    }

    let mut seen = HashSet::new();
    for endpoint in &config.endpoints {
        if endpoint.weight <= 0 {
            warnings.push(ConfigWarning::NonPositiveWeight {
                name: endpoint.name.clone(),
                weight: endpoint.weight,
            });
        }

        if !seen.insert(endpoint.name.as_str()) {
            warnings.push(ConfigWarning::DuplicateName {
                name: endpoint.name.clone(),
            });
        }
    }

    if config.endpoints.iter().all(|e| e.weight <= 0) {
        warnings.push(ConfigWarning::NoSelectableEndpoint);
    }

    warnings
}
