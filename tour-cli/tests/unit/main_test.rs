use super::*;

#[test]
fn can_run_plan_subcommand() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec!["tour-cli", "plan", "../data/orders.basic.json", "-o", tmpfile.path().to_str().unwrap()];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);

    assert!(tmpfile.as_file().metadata().unwrap().len() > 0);
}

#[test]
fn can_run_check_subcommand() {
    let args = vec!["tour-cli", "check", "../data/orders.basic.json", "../data/plan.basic.json"];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);
}

#[test]
fn can_reject_unknown_subcommand() {
    get_app().try_get_matches_from(vec!["tour-cli", "solve"]).unwrap_err();
}
