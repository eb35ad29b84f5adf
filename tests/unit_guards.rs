//! Guard helpers checked against every role/status combination.

use chrono::Utc;
use uuid::Uuid;

use lifelink::middleware::role::{ensure_active, ensure_owner_or_admin, ensure_role};
use lifelink::modules::users::model::{User, UserRole, UserStatus};

fn make_user(role: UserRole, status: UserStatus) -> User {
    User {
        id: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        role,
        status,
        login_count: 1,
        blood_group: None,
        district: None,
        shop_name: None,
        shop_address: None,
        role_request_type: None,
        role_request_status: None,
        role_requested_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_ensure_role_exact_match() {
    let user = make_user(UserRole::Admin, UserStatus::Active);
    assert!(ensure_role(&user, UserRole::Admin).is_ok());

    let user = make_user(UserRole::Merchant, UserStatus::Active);
    assert!(ensure_role(&user, UserRole::Merchant).is_ok());

    let user = make_user(UserRole::Customer, UserStatus::Active);
    assert!(ensure_role(&user, UserRole::Customer).is_ok());
}

#[test]
fn test_ensure_role_denies_every_non_admin() {
    for role in [UserRole::Merchant, UserRole::Customer] {
        let user = make_user(role, UserStatus::Active);
        assert!(ensure_role(&user, UserRole::Admin).is_err());
    }
}

#[test]
fn test_ensure_role_denies_customer_on_merchant_routes() {
    let user = make_user(UserRole::Customer, UserStatus::Active);
    assert!(ensure_role(&user, UserRole::Merchant).is_err());
}

#[test]
fn test_ensure_active_allows_active_only() {
    let user = make_user(UserRole::Customer, UserStatus::Active);
    assert!(ensure_active(&user).is_ok());
}

#[test]
fn test_ensure_active_denies_pending_and_blocked_regardless_of_role() {
    for role in [UserRole::Admin, UserRole::Merchant, UserRole::Customer] {
        for status in [UserStatus::Pending, UserStatus::Blocked] {
            let user = make_user(role, status);
            assert!(ensure_active(&user).is_err());
        }
    }
}

#[test]
fn test_owner_may_touch_own_record() {
    let user = make_user(UserRole::Customer, UserStatus::Active);
    assert!(ensure_owner_or_admin(&user, user.id).is_ok());
}

#[test]
fn test_admin_may_touch_any_record() {
    let admin = make_user(UserRole::Admin, UserStatus::Active);
    assert!(ensure_owner_or_admin(&admin, Uuid::new_v4()).is_ok());
}

#[test]
fn test_non_owner_is_denied() {
    for role in [UserRole::Merchant, UserRole::Customer] {
        let user = make_user(role, UserStatus::Active);
        assert!(ensure_owner_or_admin(&user, Uuid::new_v4()).is_err());
    }
}
