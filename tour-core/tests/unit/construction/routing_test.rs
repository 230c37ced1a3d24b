use super::*;
use crate::helpers::*;

fn create_route_builder() -> RouteBuilder {
    RouteBuilder::new(test_depot(), 1.3, 0.05)
}

#[test]
fn can_order_deliveries_by_nearest_neighbor() {
    let deliveries =
        vec![test_delivery_at("far", 0.3, 1.), test_delivery_at("near", 0.1, 1.), test_delivery_at("mid", 0.2, 1.)];

    let route = create_route_builder().nearest_neighbor(&deliveries);

    assert_eq!(get_delivery_ids(&route), vec!["near", "mid", "far"]);
}

#[test]
fn can_break_nearest_neighbor_ties_by_input_order() {
    let deliveries = vec![test_delivery_at("south", -0.1, 1.), test_delivery_at("north", 0.1, 1.)];
    let reversed = vec![deliveries[1].clone(), deliveries[0].clone()];

    let builder = create_route_builder();

    assert_eq!(get_delivery_ids(&builder.nearest_neighbor(&deliveries)), vec!["south", "north"]);
    assert_eq!(get_delivery_ids(&builder.nearest_neighbor(&reversed)), vec!["north", "south"]);
}

#[test]
fn can_keep_input_order_for_same_location() {
    let deliveries = vec![test_delivery_at("d1", 0.1, 1.), test_delivery_at("d2", 0.1, 1.), test_delivery_at("d3", 0.1, 1.)];

    let route = create_route_builder().nearest_neighbor(&deliveries);

    assert_eq!(get_delivery_ids(&route), vec!["d1", "d2", "d3"]);
}

#[test]
fn can_untangle_zig_zag_route_with_two_opt() {
    let mut route =
        vec![test_delivery_at("far", 0.3, 1.), test_delivery_at("near", 0.1, 1.), test_delivery_at("mid", 0.2, 1.)];
    let builder = create_route_builder();
    let original_length = builder.path_length(&route);

    builder.improve(&mut route);

    assert_eq!(get_delivery_ids(&route), vec!["near", "mid", "far"]);
    assert!(builder.path_length(&route) < original_length);
}

#[test]
fn can_keep_route_which_cannot_be_improved() {
    let deliveries = vec![
        test_delivery_at_coord("e1", 0., 0.05, 1.),
        test_delivery_at_coord("w1", 0., -0.06, 1.),
        test_delivery_at_coord("w2", 0., -0.5, 1.),
        test_delivery_at_coord("w3", 0., -1., 1.),
    ];
    let builder = create_route_builder();
    let mut route = builder.nearest_neighbor(&deliveries);
    let initial_length = builder.path_length(&route);

    builder.improve(&mut route);

    assert_eq!(get_delivery_ids(&route), vec!["e1", "w1", "w2", "w3"]);
    assert!(builder.path_length(&route) <= initial_length);
}

#[test]
fn can_ignore_improvement_below_threshold() {
    let deliveries = vec![test_delivery_at_coord("a", 0.1, 0.0001, 1.), test_delivery_at_coord("b", 0.1, 0., 1.)];
    let mut route = deliveries.clone();

    RouteBuilder::new(test_depot(), 1.3, 10.).improve(&mut route);

    assert_eq!(route, deliveries);
}

#[test]
fn can_never_make_route_longer() {
    let builder = create_route_builder();
    let deliveries = (0..30)
        .map(|idx| {
            let idx = idx as Float;
            test_delivery_at_coord(&format!("d{idx}"), (idx * 7.3) % 1.1 - 0.5, (idx * 3.7) % 1.3 - 0.6, 1.)
        })
        .collect::<Vec<_>>();

    let mut route = builder.nearest_neighbor(&deliveries);
    let initial_length = builder.path_length(&route);
    builder.improve(&mut route);

    assert!(builder.path_length(&route) <= initial_length + 1E-9);
    assert_eq!(route.len(), deliveries.len());
}

#[test]
fn can_calculate_path_length_from_depot() {
    let builder = create_route_builder();
    let route = vec![test_delivery_at("d1", 0.1, 1.), test_delivery_at("d2", 0.2, 1.)];

    let expected = distance_km(&test_depot(), &route[1].location);

    assert!((builder.path_length(&route) - expected).abs() < 1E-9);
    assert!((builder.road_distance(&route) - expected * 1.3).abs() < 1E-9);
    assert_eq!(builder.path_length(&[]), 0.);
}

#[test]
fn can_build_tour_from_bucket() {
    let bucket = vec![
        test_delivery_with_city("d1", 0.2, 300., "Celle"),
        test_delivery_with_city("d2", 0.1, 200., "Burgdorf"),
    ];

    let tour = create_route_builder().build_tour(2, &bucket, 1300.);

    assert_eq!(tour.id, "tour_2");
    assert_eq!(tour.name, "2. Celle");
    assert_eq!(tour.stops.iter().map(|order| order.id.as_str()).collect::<Vec<_>>(), vec!["d2", "d1"]);
    assert_eq!(tour.total_weight, 500.);
    assert_eq!(tour.max_weight, 1300.);
    assert_eq!(tour.utilization, 38);
    assert_eq!(tour.heading.as_deref(), Some("N"));
    assert_eq!(tour.description, "Burgdorf -> Celle");
    let expected_distance = distance_km(&test_depot(), &bucket[0].location) * 1.3;
    assert!((tour.estimated_distance_km - expected_distance).abs() < 1E-9);
}

#[test]
fn can_build_empty_tour_from_empty_bucket() {
    let tour = create_route_builder().build_tour(3, &[], 1300.);

    assert!(tour.is_empty());
    assert_eq!(tour.name, "3.");
    assert_eq!(tour.total_weight, 0.);
    assert_eq!(tour.utilization, 0);
    assert_eq!(tour.estimated_distance_km, 0.);
    assert_eq!(tour.heading, None);
    assert_eq!(tour.description, "");
}
