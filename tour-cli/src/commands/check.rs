#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use std::io::BufReader;
use tour_cli::extensions::check::check_plan_file;

const ORDERS_ARG_NAME: &str = "ORDERS";
const PLAN_ARG_NAME: &str = "PLAN";

pub fn get_check_app() -> Command {
    let command = Command::new("check")
        .about("Provides the way to check plan feasibility")
        .arg(Arg::new(ORDERS_ARG_NAME).help("Sets the orders file the plan was built for").required(true).index(1))
        .arg(Arg::new(PLAN_ARG_NAME).help("Sets the plan file").required(true).index(2));

    with_capacity_arg(command)
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let capacity = get_capacity(matches)?;
    let orders_file = matches.get_one::<String>(ORDERS_ARG_NAME).map(|path| BufReader::new(open_file(path, "orders")));
    let plan_file = matches.get_one::<String>(PLAN_ARG_NAME).map(|path| BufReader::new(open_file(path, "plan")));

    match (orders_file, plan_file) {
        (Some(orders_file), Some(plan_file)) => check_plan_file(orders_file, plan_file, capacity),
        _ => Err(vec!["check expects one orders and one plan file".to_string()]),
    }
    .map_err(|err| format!("checker found {} errors:\n{}", err.len(), err.join("\n")))
}
