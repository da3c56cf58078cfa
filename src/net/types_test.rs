use super::*;

// =============================================================
// SessionUser
// =============================================================

#[test]
fn session_user_name_defaults_to_email_local_part() {
    let user = SessionUser::from_login("ops@example.com", "tok-1");
    assert_eq!(user.email, "ops@example.com");
    assert_eq!(user.name, "ops");
    assert_eq!(user.token, "tok-1");
}

#[test]
fn session_user_name_falls_back_to_full_email() {
    let user = SessionUser::from_login("no-at-sign", "tok-1");
    assert_eq!(user.name, "no-at-sign");
}

// =============================================================
// Serde shapes
// =============================================================

#[test]
fn subscription_plan_uses_screaming_case() {
    assert_eq!(
        serde_json::to_string(&SubscriptionPlan::Enterprise).unwrap(),
        "\"ENTERPRISE\""
    );
    let plan: SubscriptionPlan = serde_json::from_str("\"FREE\"").unwrap();
    assert_eq!(plan, SubscriptionPlan::Free);
}

#[test]
fn tenant_deserializes_with_missing_optionals() {
    let json = r#"{
        "id": "t-1",
        "domain": "acme.com",
        "name": "Acme",
        "email": "admin@acme.com",
        "active": true,
        "subscriptionPlan": "BASIC"
    }"#;
    let tenant: Tenant = serde_json::from_str(json).unwrap();
    assert_eq!(tenant.id, "t-1");
    assert_eq!(tenant.subscription_plan, SubscriptionPlan::Basic);
    assert!(tenant.phone_number.is_none());
    assert!(tenant.created_at.is_none());
}

#[test]
fn tenant_registration_serializes_camel_case() {
    let reg = TenantRegistration {
        name: "Acme".to_owned(),
        domain: "acme.com".to_owned(),
        email: "a@acme.com".to_owned(),
        phone_number: Some("555".to_owned()),
        address: None,
    };
    let json = serde_json::to_string(&reg).unwrap();
    assert!(json.contains("\"phoneNumber\":\"555\""));
}

#[test]
fn message_response_tolerates_empty_body() {
    let resp: MessageResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.message.is_empty());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn domain_validation_accepts_common_shapes() {
    assert!(is_valid_domain("acme.com"));
    assert!(is_valid_domain("my-company.com.br"));
    assert!(is_valid_domain("a1.example.io"));
}

#[test]
fn domain_validation_rejects_bad_shapes() {
    assert!(!is_valid_domain("acme"));
    assert!(!is_valid_domain("Acme.com"));
    assert!(!is_valid_domain("-acme.com"));
    assert!(!is_valid_domain("acme-.com"));
    assert!(!is_valid_domain("acme..com"));
    assert!(!is_valid_domain("acme.c"));
    assert!(!is_valid_domain("acme.c0m"));
}

#[test]
fn email_validation() {
    assert!(is_valid_email("ops@example.com"));
    assert!(!is_valid_email("ops"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ops@nodot"));
    assert!(!is_valid_email("ops@.com"));
}

#[test]
fn registration_validate_collects_all_errors() {
    let reg = TenantRegistration {
        name: "ab".to_owned(),
        domain: "bad_domain".to_owned(),
        email: "not-an-email".to_owned(),
        phone_number: None,
        address: None,
    };
    let errors = reg.validate().unwrap_err();
    assert_eq!(errors.len(), 3);

    let good = TenantRegistration {
        name: "Acme Corp".to_owned(),
        domain: "acme.com".to_owned(),
        email: "admin@acme.com".to_owned(),
        phone_number: None,
        address: None,
    };
    assert!(good.validate().is_ok());
}
