use crate::cli::pick::{PickArgs, pick, run};
use crate::conf::{BalancerConfig, EndpointConfig};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn weighted_config() -> BalancerConfig {
    BalancerConfig::new(
        None,
        vec![
            EndpointConfig::new("a", "10.0.0.1:80", 3),
            EndpointConfig::new("b", "10.0.0.2:80", 2),
            EndpointConfig::new("c", "10.0.0.3:80", 1),
        ],
    )
}

fn output(config: &BalancerConfig, args: &PickArgs) -> String {
    let mut out = Vec::new();
    pick(config, args, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn pick_prints_one_line_per_selection() {
    // Arrange
    let args = PickArgs {
        count: 6,
        ..Default::default()
    };

    // Act
    let text = output(&weighted_config(), &args);

    // Assert
    let names: Vec<&str> = text
        .lines()
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "a", "c", "a", "b"]);
    assert_eq!(text.lines().next(), Some("a\t10.0.0.1:80"));
}

#[test]
fn pick_json_includes_algorithm_and_state() {
    // Arrange
    let args = PickArgs {
        count: 2,
        json: true,
        show_state: true,
        ..Default::default()
    };

    // Act
    let text = output(&weighted_config(), &args);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    // Assert
    assert_eq!(value["algorithm"], "weighted_round_robin");
    assert_eq!(value["picks"][0]["seq"], 1);
    assert_eq!(value["picks"][1]["name"], "b");
    assert_eq!(value["state"][0]["current"], 3);
    assert_eq!(value["state"][1]["current"], 0);
}

#[test]
fn pick_json_omits_state_unless_requested() {
    let args = PickArgs {
        count: 1,
        json: true,
        ..Default::default()
    };

    let text = output(&weighted_config(), &args);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert!(value.get("state").is_none());
}

#[test]
fn pick_fails_when_nothing_is_eligible() {
    // Arrange
    let config = BalancerConfig::new(None, vec![EndpointConfig::new("a", "10.0.0.1:80", 0)]);
    let mut out = Vec::new();

    // Act
    let err = pick(&config, &PickArgs::default(), &mut out).unwrap_err();

    // Assert
    assert!(err.to_string().contains("selection 1 of 10 failed"));
    assert!(out.is_empty());
}

#[test]
fn pick_with_huge_count_returns_error_instead_of_aborting() {
    // Arrange
    let config = BalancerConfig::new(None, vec![EndpointConfig::new("a", "10.0.0.1:80", 0)]);
    let args = PickArgs {
        count: usize::MAX,
        ..Default::default()
    };
    let mut out = Vec::new();

    // Act
    let result = pick(&config, &args, &mut out);

    // Assert
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("selection 1 of "));
    assert!(out.is_empty());
}

#[test]
fn pick_json_reports_round_robin_algorithm() {
    let config = BalancerConfig::new(Some("round_robin"), weighted_config().endpoints);
    let args = PickArgs {
        count: 4,
        json: true,
        ..Default::default()
    };

    let text = output(&config, &args);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["algorithm"], "round_robin");
    assert_eq!(value["picks"][3]["name"], "a");
}

#[test]
fn run_applies_algorithm_override() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("balancer.toml");
    fs::write(
        &path,
        r#"
algor = "weighted_round_robin"

[[endpoints]]
name = "a"
addr = "10.0.0.1:80"
weight = 3

[[endpoints]]
name = "b"
addr = "10.0.0.2:80"
weight = 1
"#,
    )
    .unwrap();
    let args = PickArgs {
        config: path,
        count: 4,
        algorithm: Some("round_robin".into()),
        ..Default::default()
    };
    let mut out = Vec::new();

    // Act
    run(args, &mut out).unwrap();

    // Assert
    let text = String::from_utf8(out).unwrap();
    let names: Vec<&str> = text.lines().map(|l| &l[..1]).collect();
    assert_eq!(names, vec!["a", "b", "a", "b"]);
}
