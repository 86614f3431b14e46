//! Tests for the optional `serde` integration.

#![cfg(feature = "serde")]

use request_uri::{AbsoluteUri, Path, Query, QueryParameter, UserInfo};

#[test]
fn absolute_uri_serializes_as_string() {
    let uri = AbsoluteUri::new("host.com", None, Some(5000))
        .unwrap()
        .with_path_segments(["a"])
        .unwrap()
        .with_query_pairs([("v", "<>")])
        .unwrap();
    let json = serde_json::to_string(&uri).unwrap();
    assert_eq!(json, r#""http://host.com:5000/a?v=%3C%3E""#);
}

#[test]
fn path_roundtrip() {
    let path = Path::new(["one", "two"]).unwrap();
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, r#"["one","two"]"#);
    let back: Path = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);
}

#[test]
fn path_with_empty_segment_is_rejected() {
    let result: Result<Path, _> = serde_json::from_str(r#"["one",""]"#);
    assert!(result.is_err());
}

#[test]
fn query_keeps_order_and_duplicates() {
    let json = r#"[{"field_name":"b","value":"1"},{"field_name":"a","value":"2"},{"field_name":"b","value":"3"}]"#;
    let query: Query = serde_json::from_str(json).unwrap();
    assert_eq!(query.to_string(), "b=1&a=2&b=3");
    assert_eq!(serde_json::to_string(&query).unwrap(), json);
}

#[test]
fn query_parameter_with_empty_value_is_rejected() {
    let result: Result<QueryParameter, _> =
        serde_json::from_str(r#"{"field_name":"name","value":""}"#);
    assert!(result.is_err());
}

#[test]
fn user_info_roundtrip() {
    let user = UserInfo::new("username", "password").unwrap();
    let json = serde_json::to_string(&user).unwrap();
    assert_eq!(json, r#"{"username":"username","password":"password"}"#);
    let back: UserInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_info_with_empty_username_is_rejected() {
    let result: Result<UserInfo, _> =
        serde_json::from_str(r#"{"username":"","password":"password"}"#);
    assert!(result.is_err());
}

#[test]
fn components_from_config_build_a_uri() {
    let path: Path = serde_json::from_str(r#"["v1","items"]"#).unwrap();
    let query: Query = serde_json::from_str(r#"[{"field_name":"q","value":"a b"}]"#).unwrap();

    let uri = AbsoluteUri::new("api.example.com", Some("https"), None)
        .unwrap()
        .with_path(path)
        .with_query(query);

    assert_eq!(uri.to_uri_string(), "https://api.example.com/v1/items?q=a%20b");
}
