//! Integration tests for ACL policy resolution through the public API

use pretty_assertions::assert_eq;
use rustcoord_acl::{
    create_policy, AclEntry, AclId, AclPolicy, AclPolicyConfig, AclProviderKind, PermissionSet,
    SaslAclPolicy, Scheme,
};
use std::io::Write;
use std::sync::Arc;

#[test]
fn sasl_policy_returns_owner_then_world_read() {
    let policy = SaslAclPolicy::new("svc-orders").unwrap();
    let acl = policy.default_acl();

    let expected = [
        AclEntry::new(PermissionSet::all(), AclId::sasl("svc-orders")),
        AclEntry::new(PermissionSet::read_only(), AclId::anyone()),
    ];
    assert_eq!(acl, &expected[..]);

    // Directly usable as the client's wire-level ACL format
    assert_eq!(acl[0].as_wire_triple(), ("sasl", "svc-orders", 0b11111));
    assert_eq!(acl[1].as_wire_triple(), ("world", "anyone", 0b00001));
}

#[test]
fn resolution_is_path_independent_for_sasl() {
    let policy = SaslAclPolicy::new("svc-orders").unwrap();
    let default = policy.default_acl().to_vec();

    let paths = [
        "",
        "/",
        "/a/b/c",
        "/topics/orders",
        "//double//slash",
        "no-leading-slash",
        "/trailing/",
        "päth/with/ümlauts\t",
    ];
    for path in paths {
        assert_eq!(policy.acl_for_path(path), &default[..], "path {path:?}");
    }
}

#[test]
fn repeated_resolution_never_drifts() {
    let policy = SaslAclPolicy::new("svc-orders").unwrap();
    let first = policy.default_acl().to_vec();

    for _ in 0..100 {
        assert_eq!(policy.default_acl(), &first[..]);
        assert_eq!(policy.acl_for_path("/topics/orders"), &first[..]);
    }
}

#[test]
fn distinct_principals_stay_isolated() {
    let a = SaslAclPolicy::new("svc-a").unwrap();
    let b = SaslAclPolicy::new("svc-b").unwrap();

    assert_eq!(a.default_acl()[0].id, AclId::sasl("svc-a"));
    assert_eq!(b.default_acl()[0].id, AclId::sasl("svc-b"));
}

#[test]
fn concurrent_resolution_needs_no_synchronization() {
    let policy: Arc<dyn AclPolicy> = Arc::new(SaslAclPolicy::new("svc-orders").unwrap());
    let expected = policy.default_acl().to_vec();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let policy = policy.clone();
            let expected = expected.clone();
            std::thread::spawn(move || {
                for n in 0..1_000 {
                    let path = format!("/topics/t-{i}-{n}");
                    assert_eq!(policy.acl_for_path(&path), &expected[..]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn factory_builds_each_provider() {
    let open = AclPolicyConfig::default();
    assert_eq!(create_policy(&open).unwrap().name(), "open");

    let sasl = AclPolicyConfig {
        provider: AclProviderKind::Sasl,
        principal: Some("svc-orders".to_string()),
        ..Default::default()
    };
    let policy = create_policy(&sasl).unwrap();
    assert_eq!(policy.name(), "sasl");
    assert_eq!(policy.default_acl().len(), 2);
}

#[test]
fn factory_rejects_missing_principal() {
    let config = AclPolicyConfig {
        provider: AclProviderKind::Sasl,
        ..Default::default()
    };
    assert!(create_policy(&config).is_err());
}

#[test]
fn config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        provider = "pattern"

        [[fallback]]
        scheme = "world"
        id = "anyone"
        permissions = "r"

        [[rules]]
        path = "/topics/**"

        [[rules.entries]]
        scheme = "sasl"
        id = "svc-orders"
        permissions = "cdrwa"

        [[rules.entries]]
        scheme = "world"
        id = "anyone"
        permissions = "r"
        "#
    )
    .unwrap();

    let config = AclPolicyConfig::from_file(file.path().to_str().unwrap()).unwrap();
    let policy = create_policy(&config).unwrap();

    assert_eq!(policy.name(), "pattern");

    let topic_acl = policy.acl_for_path("/topics/orders/partitions/0");
    assert_eq!(topic_acl.len(), 2);
    assert_eq!(topic_acl[0].id, AclId::sasl("svc-orders"));
    assert_eq!(topic_acl[1].id, AclId::anyone());

    let other_acl = policy.acl_for_path("/brokers/ids/0");
    assert_eq!(other_acl, &[AclEntry::world_read()][..]);
}

#[test]
fn entries_serialize_in_admin_json_shape() {
    let entry = AclEntry::new(PermissionSet::all(), AclId::sasl("svc-orders"));
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "permissions": "cdrwa",
            "id": { "scheme": "sasl", "id": "svc-orders" }
        })
    );

    let back: AclEntry = serde_json::from_value(json).unwrap();
    assert_eq!(back, entry);
    assert_eq!(back.id.scheme, Scheme::Sasl);
}
