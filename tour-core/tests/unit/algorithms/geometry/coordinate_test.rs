use super::*;

fn round(value: Float) -> Float {
    (value * 10.).round() / 10.
}

fn hannover() -> Coordinate {
    Coordinate::new(52.3759, 9.7320)
}

fn berlin() -> Coordinate {
    Coordinate::new(52.5200, 13.4050)
}

parameterized_test! {can_calculate_distance_between_cities, (from, to, expected), {
    can_calculate_distance_between_cities_impl(from, to, expected);
}}

can_calculate_distance_between_cities! {
    case_01_hannover_berlin: ((52.3759, 9.7320), (52.5200, 13.4050), 249.4),
    case_02_hamburg_munich: ((53.5511, 9.9937), (48.1351, 11.5820), 612.4),
    case_03_same_point: ((51.1657, 10.4515), (51.1657, 10.4515), 0.),
}

fn can_calculate_distance_between_cities_impl(from: (Float, Float), to: (Float, Float), expected: Float) {
    let from = Coordinate::new(from.0, from.1);
    let to = Coordinate::new(to.0, to.1);

    assert_eq!(round(distance_km(&from, &to)), expected);
}

#[test]
fn can_get_symmetric_distance() {
    let (a, b) = (hannover(), berlin());

    assert_eq!(distance_km(&a, &b), distance_km(&b, &a));
    assert_eq!(a.distance_km(&b), b.distance_km(&a));
}

#[test]
fn can_get_zero_distance_for_same_point() {
    let a = hannover();

    assert_eq!(distance_km(&a, &a), 0.);
}

parameterized_test! {can_calculate_bearing, (from, to, expected), {
    can_calculate_bearing_impl(from, to, expected);
}}

can_calculate_bearing! {
    case_01_north: ((50., 10.), (51., 10.), 0.),
    case_02_south: ((51., 10.), (50., 10.), 180.),
    case_03_east_on_equator: ((0., 10.), (0., 11.), 90.),
    case_04_west_on_equator: ((0., 11.), (0., 10.), 270.),
}

fn can_calculate_bearing_impl(from: (Float, Float), to: (Float, Float), expected: Float) {
    let from = Coordinate::new(from.0, from.1);
    let to = Coordinate::new(to.0, to.1);

    let bearing = bearing_degrees(&from, &to);

    assert!((bearing - expected).abs() < 1E-9, "bearing: {bearing}, expected: {expected}");
}

#[test]
fn can_keep_bearing_in_range() {
    let bearing = hannover().bearing_degrees(&berlin());

    assert!((0. ..360.).contains(&bearing));
    assert!(bearing > 80. && bearing < 90.);
}

parameterized_test! {can_map_bearing_to_compass_point, (bearing, expected), {
    assert_eq!(compass_point(bearing), expected);
}}

can_map_bearing_to_compass_point! {
    case_01: (0., "N"),
    case_02: (359., "N"),
    case_03: (45., "NE"),
    case_04: (100., "E"),
    case_05: (190., "S"),
    case_06: (292.5, "WNW"),
}
