use super::*;

fn tenant(id: &str, name: &str, domain: &str, email: &str, active: bool, plan: SubscriptionPlan) -> Tenant {
    Tenant {
        id: id.to_owned(),
        domain: domain.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        active,
        subscription_plan: plan,
        phone_number: None,
        address: None,
        display_name: None,
        logo_url: None,
        max_users: None,
        created_at: None,
        updated_at: None,
        timezone: None,
        locale: None,
        currency_code: None,
    }
}

fn sample() -> TenantListState {
    let mut state = TenantListState::default();
    state.set_tenants(vec![
        tenant("1", "Acme Corp", "acme.com", "admin@acme.com", true, SubscriptionPlan::Premium),
        tenant("2", "Globex", "globex.io", "ops@globex.io", false, SubscriptionPlan::Free),
        tenant("3", "Initech", "initech.com", "it@initech.com", true, SubscriptionPlan::Basic),
    ]);
    state
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn search_matches_name_domain_and_email() {
    let mut state = sample();

    state.set_search("acme");
    assert_eq!(state.filtered().len(), 1);
    assert_eq!(state.filtered()[0].id, "1");

    state.set_search("globex.io");
    assert_eq!(state.filtered()[0].id, "2");

    state.set_search("it@initech");
    assert_eq!(state.filtered()[0].id, "3");
}

#[test]
fn search_is_case_insensitive() {
    let mut state = sample();
    state.set_search("ACME");
    assert_eq!(state.filtered().len(), 1);
}

#[test]
fn status_filter() {
    let mut state = sample();

    state.set_status_filter(StatusFilter::Active);
    assert_eq!(state.filtered().len(), 2);

    state.set_status_filter(StatusFilter::Inactive);
    assert_eq!(state.filtered().len(), 1);
    assert_eq!(state.filtered()[0].id, "2");

    state.set_status_filter(StatusFilter::All);
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn plan_filter() {
    let mut state = sample();
    state.set_plan_filter(Some(SubscriptionPlan::Free));
    assert_eq!(state.filtered().len(), 1);
    assert_eq!(state.filtered()[0].id, "2");
}

#[test]
fn filters_combine() {
    let mut state = sample();
    state.set_search("com");
    state.set_status_filter(StatusFilter::Active);
    state.set_plan_filter(Some(SubscriptionPlan::Basic));
    assert_eq!(state.filtered().len(), 1);
    assert_eq!(state.filtered()[0].id, "3");
}

// =============================================================
// Pagination
// =============================================================

fn many(count: usize) -> TenantListState {
    let mut state = TenantListState::default();
    let tenants = (0..count)
        .map(|i| {
            tenant(
                &format!("t{i}"),
                &format!("Tenant {i}"),
                &format!("t{i}.com"),
                &format!("a@t{i}.com"),
                true,
                SubscriptionPlan::Free,
            )
        })
        .collect();
    state.set_tenants(tenants);
    state
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(many(0).total_pages(), 0);
    assert_eq!(many(10).total_pages(), 1);
    assert_eq!(many(11).total_pages(), 2);
    assert_eq!(many(25).total_pages(), 3);
}

#[test]
fn page_items_respects_page_size() {
    let mut state = many(25);
    assert_eq!(state.page_items().len(), PAGE_SIZE);

    state.change_page(3);
    let last_page = state.page_items();
    assert_eq!(last_page.len(), 5);
    assert_eq!(last_page[0].id, "t20");
}

#[test]
fn change_page_ignores_out_of_range() {
    let mut state = many(25);
    state.change_page(0);
    assert_eq!(state.page, 1);
    state.change_page(4);
    assert_eq!(state.page, 1);
    state.change_page(2);
    assert_eq!(state.page, 2);
}

#[test]
fn filter_changes_reset_to_first_page() {
    let mut state = many(25);
    state.change_page(3);
    state.set_search("Tenant 1");
    assert_eq!(state.page, 1);

    state.change_page(1);
    state.set_status_filter(StatusFilter::Active);
    assert_eq!(state.page, 1);
}

// =============================================================
// Email masking & visibility
// =============================================================

#[test]
fn mask_email_keeps_up_to_three_chars() {
    assert_eq!(mask_email("administrator@acme.com"), "adm***@acme.com");
    assert_eq!(mask_email("joao@acme.com"), "j***@acme.com");
    assert_eq!(mask_email("ab@acme.com"), "***@acme.com");
}

#[test]
fn mask_email_malformed_is_fully_hidden() {
    assert_eq!(mask_email("not-an-email"), "***@***");
    assert_eq!(mask_email("@acme.com"), "***@***");
    assert_eq!(mask_email("user@"), "***@***");
}

#[test]
fn email_visibility_toggles_per_tenant() {
    let mut state = sample();
    assert!(!state.is_email_visible("1"));

    state.toggle_email_visibility("1");
    assert!(state.is_email_visible("1"));
    assert!(!state.is_email_visible("2"));

    state.toggle_email_visibility("1");
    assert!(!state.is_email_visible("1"));
}

// =============================================================
// Status toggle
// =============================================================

#[test]
fn apply_status_toggle_flips_one_tenant() {
    let mut state = sample();
    state.apply_status_toggle("2");
    assert!(state.tenants[1].active);
    state.apply_status_toggle("2");
    assert!(!state.tenants[1].active);

    // Unknown id is a no-op.
    state.apply_status_toggle("nope");
}
