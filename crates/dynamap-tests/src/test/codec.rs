//! Behavior of the generated codecs, exercised end-to-end: the structs and
//! functions under test come straight out of the build-script pipeline run.

use crate::domain::*;
use crate::generated::*;
use dynamap::prelude::*;

#[test]
fn waypoint_round_trips_fully_populated() {
    let codec = WaypointCodec::assemble();
    let waypoint = Waypoint {
        lat: 45.5,
        lng: -122.25,
        name: Some("Summit".to_string()),
        description: Some("The top".to_string()),
        kind: Some(WaypointType::Viewpoint),
    };

    let encoded = codec.encode(Some(&waypoint)).unwrap();
    assert_eq!(codec.decode(Some(&encoded)), Some(waypoint));
}

#[test]
fn absent_or_non_map_input_decodes_to_absent() {
    let codec = WaypointCodec::assemble();

    assert_eq!(codec.encode(None), None);
    assert_eq!(codec.decode(None), None);
    assert_eq!(codec.decode(Some(&AttributeValue::boolean(true))), None);
}

#[test]
fn omitted_optional_fields_leave_no_wire_keys() {
    let codec = WaypointCodec::assemble();
    let waypoint = Waypoint {
        lat: 1.0,
        lng: 2.0,
        ..Default::default()
    };

    let item = codec.encode_item(Some(&waypoint)).unwrap();
    assert!(item.contains_key("lat"));
    assert!(item.contains_key("lng"));
    assert!(!item.contains_key("name"));
    assert!(!item.contains_key("description"));
    assert!(!item.contains_key("kind"));
}

#[test]
fn bogus_enum_name_is_left_unset_on_decode() {
    let codec = WaypointCodec::assemble();
    let mut item = Attributes::new();
    item.insert("lat".to_string(), AttributeValue::number(45.5_f64));
    item.insert("kind".to_string(), AttributeValue::string("BOGUS"));

    let decoded = codec.decode_item(&item).unwrap();
    assert_eq!(decoded.lat, 45.5);
    assert_eq!(decoded.kind, None);
}

#[test]
fn unparsable_numbers_and_instants_are_skipped() {
    let codec = TestUserCodec::assemble();
    let mut item = Attributes::new();
    item.insert("age".to_string(), AttributeValue::N("not-a-number".to_string()));
    item.insert(
        "created_at".to_string(),
        AttributeValue::string("not-a-date"),
    );
    item.insert("name".to_string(), AttributeValue::string("Ada"));

    let decoded = codec.decode_item(&item).unwrap();
    assert_eq!(decoded.age, None);
    assert_eq!(decoded.created_at, None);
    assert_eq!(decoded.name.as_deref(), Some("Ada"));
}

#[test]
fn string_lists_encode_as_string_sets_only_when_non_empty() {
    let codec = TestUserCodec::assemble();
    let mut user = TestUser::default();

    let item = codec.encode_item(Some(&user)).unwrap();
    assert!(!item.contains_key("tags"));

    user.tags = vec!["alpha".to_string(), "beta".to_string()];
    let item = codec.encode_item(Some(&user)).unwrap();
    assert_eq!(
        item.get("tags"),
        Some(&AttributeValue::string_set(vec![
            "alpha".to_string(),
            "beta".to_string(),
        ]))
    );
}

#[test]
fn coordinate_matrix_drops_empty_inner_lists() {
    let codec = RouteGeometryCodec::assemble();
    let geometry = RouteGeometry {
        kind: Some(GeometryType::LineString),
        coordinates: vec![vec![1.0, 2.0], vec![], vec![3.5]],
    };

    let item = codec.encode_item(Some(&geometry)).unwrap();
    let outer = item.get("coordinates").unwrap().as_list().unwrap();
    assert_eq!(outer.len(), 2);

    // the empty inner list is gone for good; everything else survives
    let decoded = codec.decode_item(&item).unwrap();
    assert_eq!(decoded.coordinates, vec![vec![1.0, 2.0], vec![3.5]]);
    assert_eq!(decoded.kind, Some(GeometryType::LineString));
}

#[test]
fn number_list_round_trips_and_drops_unparsable_elements() {
    let codec = RouteInstructionCodec::assemble();
    let instruction = RouteInstruction {
        text: Some("turn left".to_string()),
        waypoint_indices: vec![0, 3, 7],
        ..Default::default()
    };

    let item = codec.encode_item(Some(&instruction)).unwrap();
    assert_eq!(codec.decode_item(&item), Some(instruction));

    let mut item = Attributes::new();
    item.insert(
        "waypoint_indices".to_string(),
        AttributeValue::list(vec![
            AttributeValue::N("1".to_string()),
            AttributeValue::N("two".to_string()),
            AttributeValue::N("3".to_string()),
        ]),
    );
    let decoded = codec.decode_item(&item).unwrap();
    assert_eq!(decoded.waypoint_indices, vec![1, 3]);
}

#[test]
fn empty_collections_leave_no_wire_keys() {
    let codec = RouteGeometryCodec::assemble();
    let item = codec.encode_item(Some(&RouteGeometry::default())).unwrap();
    assert!(!item.contains_key("coordinates"));

    let codec = RouteInstructionCodec::assemble();
    let item = codec
        .encode_item(Some(&RouteInstruction::default()))
        .unwrap();
    assert!(!item.contains_key("waypoint_indices"));
}

#[test]
fn nested_codec_composes_with_its_own_encoding() {
    let route_codec = RouteCodec::assemble();
    let geometry_codec = RouteGeometryCodec::assemble();

    let geometry = RouteGeometry {
        kind: Some(GeometryType::Point),
        coordinates: vec![vec![7.0, 8.0]],
    };
    let route = Route {
        route_geometry: Some(geometry.clone()),
        ..Default::default()
    };

    let decoded = route_codec
        .decode(route_codec.encode(Some(&route)).as_ref())
        .unwrap();
    let direct = geometry_codec.decode(geometry_codec.encode(Some(&geometry)).as_ref());
    assert_eq!(decoded.route_geometry, direct);
}

#[test]
fn route_round_trips_through_the_full_dependency_graph() {
    let codec = RouteCodec::assemble();
    let route = Route {
        user_id: Some("user-1".to_string()),
        route_id: Some("route-9".to_string()),
        name: Some("Ridge loop".to_string()),
        description: None,
        kind: Some(RouteType::Hiking),
        difficulty: Some(Difficulty::Moderate),
        routing_profile: Some("foot-hiking".to_string()),
        waypoints: vec![
            Waypoint {
                lat: 47.1,
                lng: 11.3,
                name: Some("Trailhead".to_string()),
                description: None,
                kind: Some(WaypointType::Start),
            },
            Waypoint {
                lat: 47.2,
                lng: 11.4,
                ..Default::default()
            },
        ],
        route_geometry: Some(RouteGeometry {
            kind: Some(GeometryType::LineString),
            coordinates: vec![vec![47.1, 11.3], vec![47.2, 11.4]],
        }),
        metadata: Some(RouteMetadata {
            distance: Some(12.5),
            duration: Some(3.25),
            ..Default::default()
        }),
        created_at: Timestamp::from_unix_timestamp(1_700_000_000).ok(),
        updated_at: None,
        last_used: None,
        tags: vec!["alpine".to_string()],
    };

    let encoded = codec.encode(Some(&route)).unwrap();
    assert_eq!(codec.decode(Some(&encoded)), Some(route));
}

#[test]
fn empty_waypoint_list_round_trips_to_default() {
    let codec = RouteCodec::assemble();
    let route = Route {
        name: Some("bare".to_string()),
        ..Default::default()
    };

    let item = codec.encode_item(Some(&route)).unwrap();
    assert!(!item.contains_key("waypoints"));
    assert_eq!(codec.decode_item(&item), Some(route));
}

#[test]
fn batch_wrappers_filter_absent_results() {
    let codec = WaypointCodec::assemble();
    let waypoints = vec![
        Waypoint {
            lat: 1.0,
            ..Default::default()
        },
        Waypoint {
            lat: 2.0,
            ..Default::default()
        },
    ];

    let items = codec.encode_items(&waypoints);
    assert_eq!(items.len(), 2);
    assert_eq!(codec.decode_items(&items), waypoints);

    // an empty item decodes to absent rather than an all-default value
    assert_eq!(codec.decode_item(&Attributes::new()), None);
}
