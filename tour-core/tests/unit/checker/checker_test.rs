use super::*;
use crate::helpers::*;

fn create_tour(id: &str, stops: Vec<Order>, capacity: Float) -> Tour {
    let total_weight = Tour::weight_of(&stops);

    Tour {
        id: id.to_string(),
        name: format!("{id}."),
        description: Tour::describe(&stops),
        utilization: Tour::utilization_of(total_weight, capacity),
        stops,
        total_weight,
        max_weight: capacity,
        estimated_distance_km: 0.,
        heading: None,
    }
}

fn create_orders() -> Vec<Order> {
    vec![test_order("o1", "30159", 700.), test_order("o2", "30161", 600.), test_order("o3", "38100", 1500.)]
}

#[test]
fn can_accept_valid_plan() {
    let orders = create_orders();
    let tours = vec![create_tour("tour_1", vec![orders[0].clone(), orders[1].clone()], 1300.)];

    assert_eq!(check_plan(&orders, 1300., &tours), Ok(()));
}

#[test]
fn can_accept_plan_produced_by_planner() {
    let orders = create_orders();
    let tours = create_test_planner().plan(&orders, 1300.).unwrap();

    assert_eq!(check_plan(&orders, 1300., &tours), Ok(()));
}

#[test]
fn can_detect_capacity_violation() {
    let orders = create_orders();
    let tours = vec![create_tour("tour_1", vec![orders[0].clone(), orders[1].clone()], 1000.)];

    let errors = check_plan(&orders, 1000., &tours).unwrap_err();

    assert_eq!(errors, vec!["load 1300 exceeds capacity 1000 in tour 'tour_1'".to_string()]);
}

#[test]
fn can_detect_inconsistent_tour_values() {
    let orders = create_orders();
    let mut tour = create_tour("tour_1", vec![orders[0].clone(), orders[1].clone()], 1300.);
    tour.total_weight = 700.;
    tour.utilization = 99;

    let errors = check_plan(&orders, 1300., &[tour]).unwrap_err();

    assert_eq!(
        errors,
        vec![
            "total weight 700 does not match stops weight 1300 in tour 'tour_1'".to_string(),
            "utilization 99 differs from expected 100 in tour 'tour_1'".to_string(),
        ]
    );
}

#[test]
fn can_detect_duplicated_and_missing_orders() {
    let orders = create_orders();
    let tours = vec![
        create_tour("tour_1", vec![orders[0].clone()], 1300.),
        create_tour("tour_2", vec![orders[0].clone()], 1300.),
    ];

    let errors = check_plan(&orders, 1300., &tours).unwrap_err();

    assert_eq!(
        errors,
        vec!["order 'o1' is planned 2 times".to_string(), "order 'o2' is neither planned nor oversized".to_string()]
    );
}

#[test]
fn can_detect_unknown_and_oversized_orders() {
    let orders = create_orders();
    let tours = vec![
        create_tour("tour_1", vec![orders[0].clone(), orders[1].clone()], 1300.),
        create_tour("tour_2", vec![test_order("ghost", "30159", 10.)], 1300.),
        create_tour("tour_3", vec![orders[2].clone()], 2000.),
    ];

    let errors = check_plan(&orders, 1300., &tours).unwrap_err();

    assert_eq!(
        errors,
        vec![
            "max weight 2000 differs from capacity 1300 in tour 'tour_3'".to_string(),
            "utilization 75 differs from expected 115 in tour 'tour_3'".to_string(),
            "unknown order 'ghost' in tour 'tour_2'".to_string(),
            "oversized order 'o3' is planned in tour 'tour_3'".to_string(),
        ]
    );
}
