use super::*;

const ORDERS_PATH: &str = "../data/orders.basic.json";
const PLAN_PATH: &str = "../data/plan.basic.json";

#[test]
fn can_check_valid_plan() {
    let args = vec!["check", ORDERS_PATH, PLAN_PATH];
    let matches = get_check_app().try_get_matches_from(args).unwrap();

    assert_eq!(run_check(&matches), Ok(()));
}

#[test]
fn can_detect_plan_built_for_another_capacity() {
    let args = vec!["check", ORDERS_PATH, PLAN_PATH, "--capacity", "2000"];
    let matches = get_check_app().try_get_matches_from(args).unwrap();

    let err = run_check(&matches).unwrap_err();

    assert!(err.starts_with("checker found"));
    assert!(err.contains("max weight 1300 differs from capacity 2000 in tour 'tour_1'"));
    assert!(err.contains("order 'order7' is neither planned nor oversized"));
}

#[test]
fn can_require_orders_and_plan_paths() {
    get_check_app().try_get_matches_from(vec!["check", ORDERS_PATH]).unwrap_err();
}
