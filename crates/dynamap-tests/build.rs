//! Runs the real generation pipeline over the fixture schema and drops the
//! generated codecs into `OUT_DIR` for inclusion by `src/lib.rs`.

use dynamap_schema::source::{EntityDecl, FieldDecl, StaticSource, TableDecl};
use dynamap_schema::types::{DeclaredType, Primitive};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = schema();
    dynamap_build::build!(source);

    Ok(())
}

fn schema() -> StaticSource {
    StaticSource::new(vec![
        // declared before its dependencies on purpose: the resolver must
        // reorder emission so dependency codecs exist first
        route(),
        waypoint(),
        route_geometry(),
        route_metadata(),
        route_instruction(),
        test_user(),
        test_profile(),
    ])
    .with_enums([
        "crate::domain::Difficulty",
        "crate::domain::GeometryType",
        "crate::domain::RouteType",
        "crate::domain::WaypointType",
    ])
}

fn route() -> EntityDecl {
    EntityDecl::new(
        "crate::domain::Route",
        vec![
            FieldDecl::new("user_id", opt_string()),
            FieldDecl::new("route_id", opt_string()),
            FieldDecl::new("name", opt_string()),
            FieldDecl::new("description", opt_string()),
            FieldDecl::new("kind", opt_named("crate::domain::RouteType")),
            FieldDecl::new("difficulty", opt_named("crate::domain::Difficulty")),
            FieldDecl::new("routing_profile", opt_string()),
            FieldDecl::new(
                "waypoints",
                DeclaredType::list(DeclaredType::named("crate::domain::Waypoint")),
            ),
            FieldDecl::new("route_geometry", opt_named("crate::domain::RouteGeometry")),
            FieldDecl::new("metadata", opt_named("crate::domain::RouteMetadata")),
            FieldDecl::new("created_at", opt_timestamp()),
            FieldDecl::new("updated_at", opt_timestamp()),
            FieldDecl::new("last_used", opt_timestamp()),
            FieldDecl::new("tags", string_list()),
        ],
    )
    .with_table(TableDecl::named("routes"))
}

fn waypoint() -> EntityDecl {
    EntityDecl::new(
        "crate::domain::Waypoint",
        vec![
            FieldDecl::new("lat", DeclaredType::Scalar(Primitive::F64)),
            FieldDecl::new("lng", DeclaredType::Scalar(Primitive::F64)),
            FieldDecl::new("name", opt_string()),
            FieldDecl::new("description", opt_string()),
            FieldDecl::new("kind", opt_named("crate::domain::WaypointType")),
        ],
    )
}

fn route_geometry() -> EntityDecl {
    EntityDecl::new(
        "crate::domain::RouteGeometry",
        vec![
            FieldDecl::new("kind", opt_named("crate::domain::GeometryType")),
            FieldDecl::new(
                "coordinates",
                DeclaredType::list(DeclaredType::list(DeclaredType::Scalar(Primitive::F64))),
            ),
        ],
    )
}

fn route_metadata() -> EntityDecl {
    let fields = [
        "distance",
        "duration",
        "elevation_gain",
        "elevation_loss",
        "min_elevation",
        "max_elevation",
        "average_speed",
    ];

    EntityDecl::new(
        "crate::domain::RouteMetadata",
        fields
            .iter()
            .map(|ident| FieldDecl::new(*ident, opt_f64()))
            .collect(),
    )
}

fn route_instruction() -> EntityDecl {
    EntityDecl::new(
        "crate::domain::RouteInstruction",
        vec![
            FieldDecl::new("text", opt_string()),
            FieldDecl::new("distance", opt_f64()),
            FieldDecl::new("duration", opt_f64()),
            FieldDecl::new("kind", opt_string()),
            FieldDecl::new(
                "waypoint_indices",
                DeclaredType::list(DeclaredType::Scalar(Primitive::I32)),
            ),
        ],
    )
}

fn test_user() -> EntityDecl {
    EntityDecl::new(
        "crate::domain::TestUser",
        vec![
            FieldDecl::new("user_id", opt_string()),
            FieldDecl::new("email", opt_string()),
            FieldDecl::new("name", opt_string()),
            FieldDecl::new(
                "age",
                DeclaredType::optional(DeclaredType::Scalar(Primitive::I32)),
            ),
            FieldDecl::new(
                "active",
                DeclaredType::optional(DeclaredType::Scalar(Primitive::Bool)),
            ),
            FieldDecl::new("created_at", opt_timestamp()),
            FieldDecl::new("tags", string_list()),
            FieldDecl::new("profile", opt_named("crate::domain::TestProfile")),
        ],
    )
    .with_table(TableDecl::named("test-users"))
}

fn test_profile() -> EntityDecl {
    EntityDecl::new(
        "crate::domain::TestProfile",
        vec![
            FieldDecl::new("bio", opt_string()),
            FieldDecl::new("location", opt_string()),
            FieldDecl::new("website", opt_string()),
            FieldDecl::new(
                "followers",
                DeclaredType::optional(DeclaredType::Scalar(Primitive::I32)),
            ),
            FieldDecl::new(
                "following",
                DeclaredType::optional(DeclaredType::Scalar(Primitive::I32)),
            ),
        ],
    )
}

fn opt_string() -> DeclaredType {
    DeclaredType::optional(DeclaredType::named("String"))
}

fn opt_f64() -> DeclaredType {
    DeclaredType::optional(DeclaredType::Scalar(Primitive::F64))
}

fn opt_named(path: &str) -> DeclaredType {
    DeclaredType::optional(DeclaredType::named(path))
}

fn opt_timestamp() -> DeclaredType {
    DeclaredType::optional(DeclaredType::named("Timestamp"))
}

fn string_list() -> DeclaredType {
    DeclaredType::list(DeclaredType::named("String"))
}
