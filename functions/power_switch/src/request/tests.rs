use super::*;
use lambda_http::aws_lambda_events::query_map::QueryMap;
use std::collections::HashMap;

// Helper to build an event carrying the given query parameters
fn event_with(pairs: &[(&str, &str)]) -> Request {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in pairs {
        map.insert(key.to_string(), vec![value.to_string()]);
    }
    Request::default().with_query_string_parameters(QueryMap::from(map))
}

// Test extraction of all three parameters
#[test]
fn test_extracts_all_parameters() {
    let event = event_with(&[("action", "start"), ("target", "docker"), ("name", "web")]);
    let request = PowerRequest::from_event(&event);

    assert_eq!(request.action.as_deref(), Some("start"));
    assert_eq!(request.target.as_deref(), Some("docker"));
    assert_eq!(request.name.as_deref(), Some("web"));
}

// Test the default target
#[test]
fn test_target_defaults_to_ec2() {
    let event = event_with(&[("action", "stop")]);
    let request = PowerRequest::from_event(&event);

    assert_eq!(request.target, None);
    assert_eq!(request.target(), "ec2");
}

// Test that an explicit target wins over the default
#[test]
fn test_explicit_target_is_kept() {
    let event = event_with(&[("target", "docker")]);
    let request = PowerRequest::from_event(&event);

    assert_eq!(request.target(), "docker");
}

// Test that an event without any query map parses as all-absent
#[test]
fn test_missing_query_map_is_empty() {
    let request = PowerRequest::from_event(&Request::default());

    assert_eq!(request.action, None);
    assert_eq!(request.target, None);
    assert_eq!(request.name, None);
    assert_eq!(request.target(), "ec2");
}
