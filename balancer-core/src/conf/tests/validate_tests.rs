use crate::conf::{Algorithm, BalancerConfig, ConfigWarning, EndpointConfig, validate};
use pretty_assertions::assert_eq;

fn endpoint(name: &str, weight: i32) -> EndpointConfig {
    EndpointConfig::new(name, format!("{name}.internal:80"), weight)
}

#[test]
fn clean_config_has_no_warnings() {
    // Arrange
    let config = BalancerConfig::new(
        Some("weighted_round_robin"),
        vec![endpoint("a", 3), endpoint("b", 1)],
    );

    // Act
    let warnings = validate(&config);

    // Assert
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn absent_algorithm_is_not_a_warning() {
    let config = BalancerConfig::new(None, vec![endpoint("a", 1)]);

    assert!(validate(&config).is_empty());
}

#[test]
fn unknown_algorithm_is_reported_with_fallback() {
    // Arrange
    let config = BalancerConfig::new(Some("random"), vec![endpoint("a", 1)]);

    // Act
    let warnings = validate(&config);

    // Assert
    assert_eq!(
        warnings,
        vec![ConfigWarning::UnknownAlgorithm {
            value: "random".into(),
            fallback: Algorithm::WeightedRoundRobin,
        }]
    );
}

#[test]
fn non_positive_weights_are_reported() {
    // Arrange
    let config = BalancerConfig::new(
        None,
        vec![endpoint("a", 0), endpoint("b", -2), endpoint("c", 1)],
    );

    // Act
    let warnings = validate(&config);

    // Assert
    assert_eq!(
        warnings,
        vec![
            ConfigWarning::NonPositiveWeight {
                name: "a".into(),
                weight: 0,
            },
            ConfigWarning::NonPositiveWeight {
                name: "b".into(),
                weight: -2,
            },
        ]
    );
}

#[test]
fn duplicate_names_are_reported_once_per_repeat() {
    // Arrange
    let config = BalancerConfig::new(
        None,
        vec![endpoint("a", 1), endpoint("a", 1), endpoint("b", 1)],
    );

    // Act
    let warnings = validate(&config);

    // Assert
    assert_eq!(
        warnings,
        vec![ConfigWarning::DuplicateName { name: "a".into() }]
    );
}

#[test]
fn config_without_selectable_endpoint_is_reported() {
    let empty = BalancerConfig::default();
    assert_eq!(validate(&empty), vec![ConfigWarning::NoSelectableEndpoint]);

    let all_zero = BalancerConfig::new(None, vec![endpoint("a", 0)]);
    assert_eq!(
        validate(&all_zero).last(),
        Some(&ConfigWarning::NoSelectableEndpoint)
    );
}
