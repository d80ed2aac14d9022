use super::*;

// =============================================================
// DashboardSnapshot
// =============================================================

fn snapshot_json() -> serde_json::Value {
    serde_json::json!({
        "total_clouds": 2,
        "total_ips": 512,
        "used_ips": 300.0,
        "free_ips": 212,
        "usage_percentage": 58.59,
        "last_update": "2025-01-15T10:30:00",
        "clouds": [{
            "cloud_name": "vcd",
            "total_pools": 1,
            "total_ips": 256,
            "used_ips": 200,
            "free_ips": 56,
            "usage_percentage": 78.1,
            "pools": [{
                "name": "public-1",
                "network": "87.255.215.0/24",
                "cloud_name": "vcd",
                "total_ips": 256,
                "used_ips": 200,
                "free_ips": 56,
                "usage_percentage": 78.1,
                "used_addresses": [],
                "free_addresses": ["87.255.215.10", "87.255.215.11"]
            }]
        }],
        "all_allocations": [{
            "ip_address": "87.255.215.5",
            "org_name": "Acme",
            "allocation_type": "EDGE",
            "cloud_name": "vcd",
            "pool_name": "public-1"
        }],
        "conflicts": {
            "10.0.0.5": [{
                "ip_address": "10.0.0.5",
                "clouds": ["vcd", "vcd01"],
                "pools": ["p1", "p2"],
                "organizations": ["Acme", "Globex"],
                "conflict_type": "DUPLICATE_ALLOCATION"
            }]
        }
    })
}

#[test]
fn snapshot_parses_full_payload() {
    let snapshot: DashboardSnapshot = serde_json::from_value(snapshot_json()).unwrap();
    assert_eq!(snapshot.total_clouds, 2);
    assert_eq!(snapshot.used_ips, 300);
    assert_eq!(snapshot.clouds[0].pools[0].free_addresses.len(), 2);
    assert_eq!(snapshot.all_allocations[0].entity_name, None);
    assert!(snapshot.has_conflicts());
    assert_eq!(snapshot.conflicts["10.0.0.5"][0].clouds, vec!["vcd", "vcd01"]);
}

#[test]
fn snapshot_missing_collections_default_to_empty() {
    let snapshot: DashboardSnapshot = serde_json::from_value(serde_json::json!({
        "total_clouds": 0,
        "total_ips": 0,
        "used_ips": 0,
        "free_ips": 0,
        "usage_percentage": 0.0
    }))
    .unwrap();
    assert!(snapshot.clouds.is_empty());
    assert!(snapshot.all_allocations.is_empty());
    assert!(!snapshot.has_conflicts());
    assert_eq!(snapshot.last_update, None);
}

#[test]
fn snapshot_rejects_fractional_counts() {
    let result = serde_json::from_value::<DashboardSnapshot>(serde_json::json!({ "total_ips": 1.5 }));
    assert!(result.is_err());
}

#[test]
fn snapshot_rejects_negative_counts() {
    let result = serde_json::from_value::<DashboardSnapshot>(serde_json::json!({ "free_ips": -3 }));
    assert!(result.is_err());
}

#[test]
fn snapshot_cloud_lookup_by_name() {
    let snapshot: DashboardSnapshot = serde_json::from_value(snapshot_json()).unwrap();
    assert_eq!(snapshot.cloud("vcd").map(|c| c.total_ips), Some(256));
    assert!(snapshot.cloud("vcd02").is_none());
}

#[test]
fn cloud_usage_percentage_may_be_null() {
    let cloud: CloudStats = serde_json::from_value(serde_json::json!({
        "cloud_name": "vcd02",
        "usage_percentage": null
    }))
    .unwrap();
    assert_eq!(cloud.usage_percentage, None);
    assert_eq!(cloud.total_ips, 0);
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn token_pair_refresh_token_optional() {
    let pair: TokenPair = serde_json::from_value(serde_json::json!({ "access_token": "a1" })).unwrap();
    assert_eq!(pair.access_token, "a1");
    assert_eq!(pair.refresh_token, None);
}

#[test]
fn verify_response_parses_username() {
    let verify: VerifyResponse =
        serde_json::from_value(serde_json::json!({ "valid": true, "username": "admin" })).unwrap();
    assert!(verify.valid);
    assert_eq!(verify.username.as_deref(), Some("admin"));
}

#[test]
fn login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest { username: "admin", password: "pw" }).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "admin", "password": "pw" }));
}

#[test]
fn error_detail_message_string_and_structured() {
    let plain: ErrorDetail = serde_json::from_value(serde_json::json!({ "detail": "Bad creds" })).unwrap();
    assert_eq!(plain.message(), "Bad creds");

    let structured: ErrorDetail =
        serde_json::from_value(serde_json::json!({ "detail": [{ "loc": ["body"] }] })).unwrap();
    assert_eq!(structured.message(), r#"[{"loc":["body"]}]"#);
}

// =============================================================
// Notes
// =============================================================

#[test]
fn note_parses_with_optional_fields_missing() {
    let note: Note = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Hidden IP",
        "content": "Secondary NIC"
    }))
    .unwrap();
    assert_eq!(note.id, 7);
    assert!(note.tags.is_empty());
    assert!(!note.is_pinned);
}

#[test]
fn note_payload_serializes_absent_fields_as_null() {
    let payload = NotePayload {
        title: "t".to_owned(),
        content: "c".to_owned(),
        ip_address: None,
        cloud_name: Some("vcd".to_owned()),
        pool_name: None,
    };
    let body = serde_json::to_value(payload).unwrap();
    assert_eq!(body["ip_address"], serde_json::Value::Null);
    assert_eq!(body["cloud_name"], "vcd");
}
