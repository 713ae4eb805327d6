//! Scenario tests across parser, checker and provider

use super::checker::RoleChecker;
use super::predicate::{AllMatchMode, PredicateNameParser, DEFAULT_PREFIX};
use super::session::{SessionUser, StaticUserProvider, UserProvider};
use std::cell::Cell;

fn check(parser: &PredicateNameParser, provider: &impl UserProvider, name: &str) -> bool {
    let Some(predicate) = parser.parse(name) else {
        return false;
    };
    let granted = provider
        .current_user()
        .and_then(|user| user.granted_roles().ok().flatten());
    RoleChecker::evaluate_predicate(granted.as_ref(), &predicate)
}

#[test]
fn test_back_office_scenario() {
    let parser = PredicateNameParser::standard().unwrap();
    let manager = StaticUserProvider::new(SessionUser::with_encoded_roles(r#"["MANAGER","EDITOR"]"#));
    let admin = StaticUserProvider::new(SessionUser::with_encoded_roles(r#"["ADMIN"]"#));
    let nobody = StaticUserProvider::anonymous();

    // Menu visible to admins and managers
    assert!(check(&parser, &manager, "userHasRoleAdminOrManager"));
    assert!(check(&parser, &admin, "userHasRoleAdminOrManager"));
    assert!(!check(&parser, &nobody, "userHasRoleAdminOrManager"));

    // Settings page for admins only
    assert!(!check(&parser, &manager, "userHasRoleAdmin"));
    assert!(check(&parser, &admin, "userHasRoleAdmin"));

    // Publishing needs two of the roles
    assert!(check(&parser, &manager, "userHasRoleManagerAndEditor"));
    assert!(!check(&parser, &admin, "userHasRoleManagerAndEditor"));
}

#[test]
fn test_pair_mode_three_way_and() {
    let parser = PredicateNameParser::standard().unwrap();
    let two = StaticUserProvider::new(SessionUser::with_roles(["ADMIN", "MANAGER"]));

    // Only two of three granted, still passes under the fixed pair count
    assert!(check(&parser, &two, "userHasRoleAdminAndManagerAndEditor"));
}

#[test]
fn test_every_mode_three_way_and() {
    let parser = PredicateNameParser::new(DEFAULT_PREFIX, AllMatchMode::Every).unwrap();
    let two = StaticUserProvider::new(SessionUser::with_roles(["ADMIN", "MANAGER"]));
    let three = StaticUserProvider::new(SessionUser::with_roles(["ADMIN", "MANAGER", "EDITOR"]));

    assert!(!check(&parser, &two, "userHasRoleAdminAndManagerAndEditor"));
    assert!(check(&parser, &three, "userHasRoleAdminAndManagerAndEditor"));
}

#[test]
fn test_user_without_role_claim() {
    let parser = PredicateNameParser::standard().unwrap();
    let provider = StaticUserProvider::new(SessionUser::default().with_info("id", 42));

    assert!(!check(&parser, &provider, "userHasRoleAdmin"));
}

#[test]
fn test_provider_consulted_per_check() {
    let parser = PredicateNameParser::standard().unwrap();
    let signed_in = Cell::new(false);
    let provider = || {
        signed_in
            .get()
            .then(|| SessionUser::with_roles(["ADMIN"]))
    };

    assert!(!check(&parser, &provider, "userHasRoleAdmin"));
    signed_in.set(true);
    assert!(check(&parser, &provider, "userHasRoleAdmin"));
    signed_in.set(false);
    assert!(!check(&parser, &provider, "userHasRoleAdmin"));
}

#[test]
fn test_separator_only_payload_fails_closed() {
    let parser = PredicateNameParser::standard().unwrap();
    let provider = StaticUserProvider::new(SessionUser::with_roles(["ADMIN"]));

    assert!(!check(&parser, &provider, "user_has_role__or_"));
    assert!(!check(&parser, &provider, "user_has_role__and_"));
}

#[test]
fn test_malformed_claim_denies_zero_minimum() {
    let parser = PredicateNameParser::standard().unwrap();
    let provider = StaticUserProvider::new(SessionUser::with_encoded_roles("not json"));
    let granted = provider
        .current_user()
        .and_then(|user| user.granted_roles().ok().flatten());

    assert!(granted.is_none());
    assert!(!RoleChecker::evaluate(granted.as_ref(), &[], 0));
    assert!(!check(&parser, &provider, "userHasRoleAdmin"));
}
