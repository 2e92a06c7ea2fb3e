use crate::generated::*;

#[test]
fn registry_resolves_annotated_tables() {
    assert_eq!(resolve_table_name("crate::domain::Route").unwrap(), "routes");
    assert_eq!(
        resolve_table_name("crate::domain::TestUser").unwrap(),
        "test-users"
    );
}

#[test]
fn unknown_identity_error_enumerates_known_tables() {
    // Waypoint is mappable but carries no table annotation
    let err = resolve_table_name("crate::domain::Waypoint").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("crate::domain::Waypoint"));
    assert!(message.contains("crate::domain::Route"));
    assert!(message.contains("crate::domain::TestUser"));
    assert_eq!(KNOWN_TABLE_ENTITIES.len(), 2);
}

#[test]
fn field_constants_name_their_own_field() {
    assert_eq!(route_fields::USER_ID, "user_id");
    assert_eq!(route_fields::ROUTE_GEOMETRY, "route_geometry");
    assert_eq!(waypoint_fields::LAT, "lat");
    assert_eq!(test_user_fields::CREATED_AT, "created_at");
}
