//! Fixture domain types the generated codecs map.
//!
//! Field shapes intentionally cover every mapping strategy: bare scalars,
//! optional scalars, instants, enums, string/number lists, a coordinate
//! matrix, and nested entities.

use derive_more::{Display, FromStr};
use dynamap::prelude::Timestamp;

///
/// RouteType
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, PartialEq)]
pub enum RouteType {
    Walking,
    Cycling,
    CyclingRegular,
    Driving,
    Hiking,
    MountainBiking,
    Running,
    Wheelchair,
}

///
/// Difficulty
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, PartialEq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
    Expert,
}

///
/// WaypointType
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, PartialEq)]
pub enum WaypointType {
    Start,
    End,
    Intermediate,
    Landmark,
    Checkpoint,
    Accommodation,
    Restaurant,
    GasStation,
    Parking,
    Viewpoint,
    Emergency,
}

///
/// GeometryType
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, PartialEq)]
pub enum GeometryType {
    LineString,
    Point,
    Polygon,
}

///
/// Waypoint
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<WaypointType>,
}

///
/// RouteGeometry
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteGeometry {
    pub kind: Option<GeometryType>,
    pub coordinates: Vec<Vec<f64>>,
}

///
/// RouteMetadata
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteMetadata {
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    pub elevation_gain: Option<f64>,
    pub elevation_loss: Option<f64>,
    pub min_elevation: Option<f64>,
    pub max_elevation: Option<f64>,
    pub average_speed: Option<f64>,
}

///
/// Route
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    pub user_id: Option<String>,
    pub route_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<RouteType>,
    pub difficulty: Option<Difficulty>,
    pub routing_profile: Option<String>,
    pub waypoints: Vec<Waypoint>,
    pub route_geometry: Option<RouteGeometry>,
    pub metadata: Option<RouteMetadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub last_used: Option<Timestamp>,
    pub tags: Vec<String>,
}

///
/// RouteInstruction
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteInstruction {
    pub text: Option<String>,
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    pub kind: Option<String>,
    pub waypoint_indices: Vec<i32>,
}

///
/// TestProfile
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestProfile {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub followers: Option<i32>,
    pub following: Option<i32>,
}

///
/// TestUser
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestUser {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub active: Option<bool>,
    pub created_at: Option<Timestamp>,
    pub tags: Vec<String>,
    pub profile: Option<TestProfile>,
}
