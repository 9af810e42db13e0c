//! Unit tests for the Credentials resource family codec.

use fabric_mcp::codec::credentials::Credentials;
use fabric_mcp::codec::DecodeError;
use serde_json::json;

fn all_variants() -> Vec<Credentials> {
    vec![
        Credentials::Anonymous,
        Credentials::Basic {
            username: "svc".into(),
            password: "p@ss".into(),
        },
        Credentials::Key {
            key: "k-123".into(),
        },
        Credentials::ServicePrincipal {
            tenant_id: "tenant-1".into(),
            client_id: "client-1".into(),
            client_secret: "secret-1".into(),
        },
        Credentials::OAuth2 {
            access_token: "tok".into(),
        },
        Credentials::Windows {
            username: "DOMAIN\\svc".into(),
            password: "winpass".into(),
        },
        Credentials::WindowsWithoutImpersonation,
        Credentials::WorkspaceIdentity,
    ]
}

#[test]
fn every_variant_round_trips() {
    for original in all_variants() {
        let wire = original.encode();
        let decoded = Credentials::decode(&wire).expect("decode");
        assert_eq!(decoded, original, "variant {}", original.discriminator());
    }
}

#[test]
fn basic_scenario_decodes_and_encodes_minimally() {
    // The concrete contract scenario: a Basic payload with exactly the
    // two variant fields.
    let payload = json!({
        "credentialType": "Basic",
        "username": "svc",
        "password": "p@ss"
    });

    let decoded = Credentials::decode(&payload).expect("decode basic");
    assert_eq!(
        decoded,
        Credentials::Basic {
            username: "svc".into(),
            password: "p@ss".into(),
        }
    );
    assert_eq!(decoded.discriminator(), "Basic");

    let wire = decoded.encode();
    let map = wire.as_object().expect("object");
    assert_eq!(map.len(), 3, "discriminator plus the two basic fields");
    for foreign in [
        "tenantId",
        "servicePrincipalClientId",
        "servicePrincipalSecret",
        "accessToken",
        "key",
    ] {
        assert!(!map.contains_key(foreign), "leaked field {foreign}");
    }
}

#[test]
fn unknown_discriminator_fails_loud() {
    let payload = json!({ "credentialType": "Kerberos" });
    let err = Credentials::decode(&payload).expect_err("must fail");
    assert_eq!(
        err,
        DecodeError::UnknownDiscriminator {
            value: "Kerberos".into()
        }
    );
}

#[test]
fn missing_discriminator_is_a_missing_field() {
    let payload = json!({ "username": "svc" });
    let err = Credentials::decode(&payload).expect_err("must fail");
    assert_eq!(
        err,
        DecodeError::MissingRequiredField {
            variant: "Credentials",
            field: "credentialType"
        }
    );
}

#[test]
fn missing_required_field_names_variant_and_field() {
    let payload = json!({ "credentialType": "Basic", "username": "svc" });
    let err = Credentials::decode(&payload).expect_err("must fail");
    assert_eq!(
        err,
        DecodeError::MissingRequiredField {
            variant: "Basic",
            field: "password"
        }
    );
}

#[test]
fn wrongly_typed_field_is_a_type_mismatch() {
    let payload = json!({ "credentialType": "Basic", "username": 42, "password": "x" });
    let err = Credentials::decode(&payload).expect_err("must fail");
    assert_eq!(
        err,
        DecodeError::TypeMismatch {
            field: "username",
            expected: "a string"
        }
    );
}

#[test]
fn unknown_extra_fields_are_ignored() {
    // Forward compatibility: additive API changes must not break decode.
    let payload = json!({
        "credentialType": "Key",
        "key": "k-123",
        "futureField": { "nested": true }
    });
    let decoded = Credentials::decode(&payload).expect("decode");
    assert_eq!(decoded, Credentials::Key { key: "k-123".into() });
}

#[test]
fn unit_variants_encode_only_the_discriminator() {
    for variant in [
        Credentials::Anonymous,
        Credentials::WindowsWithoutImpersonation,
        Credentials::WorkspaceIdentity,
    ] {
        let wire = variant.encode();
        let map = wire.as_object().expect("object");
        assert_eq!(map.len(), 1, "variant {}", variant.discriminator());
        assert_eq!(
            map.get("credentialType").and_then(|v| v.as_str()),
            Some(variant.discriminator())
        );
    }
}

#[test]
fn service_principal_emits_exact_field_names() {
    let wire = Credentials::ServicePrincipal {
        tenant_id: "t".into(),
        client_id: "c".into(),
        client_secret: "s".into(),
    }
    .encode();
    let map = wire.as_object().expect("object");
    assert_eq!(map.get("tenantId").and_then(|v| v.as_str()), Some("t"));
    assert_eq!(
        map.get("servicePrincipalClientId").and_then(|v| v.as_str()),
        Some("c")
    );
    assert_eq!(
        map.get("servicePrincipalSecret").and_then(|v| v.as_str()),
        Some("s")
    );
    assert!(!map.contains_key("username"));
    assert!(!map.contains_key("password"));
}

#[test]
fn explicit_null_required_field_counts_as_missing() {
    let payload = json!({ "credentialType": "Key", "key": null });
    let err = Credentials::decode(&payload).expect_err("must fail");
    assert_eq!(
        err,
        DecodeError::MissingRequiredField {
            variant: "Key",
            field: "key"
        }
    );
}

#[test]
fn non_object_payload_is_rejected() {
    let err = Credentials::decode(&json!("Basic")).expect_err("must fail");
    assert!(matches!(err, DecodeError::TypeMismatch { .. }));
}
