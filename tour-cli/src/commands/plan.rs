#[cfg(test)]
#[path = "../../tests/unit/commands/plan_test.rs"]
mod plan_test;

use super::*;
use clap::ArgAction;
use std::io::BufReader;
use std::sync::Arc;
use tour_cli::extensions::check::check_plan_with_report;
use tour_cli::extensions::config::create_config;
use tour_cli::extensions::format::{read_orders, write_plan};
use tour_core::prelude::*;

const ORDERS_ARG_NAME: &str = "ORDERS";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

pub fn get_plan_app() -> Command {
    let command = Command::new("plan")
        .about("Plans delivery tours for orders")
        .arg(Arg::new(ORDERS_ARG_NAME).help("Sets the orders file, a JSON array of orders").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to a planner configuration which overrides defaults")
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for plan output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether planner progress is written to stderr")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether the plan is checked before writing it")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        );

    with_capacity_arg(command)
}

pub fn run_plan(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let capacity = get_capacity(matches)?;
    let orders_file = matches.get_one::<String>(ORDERS_ARG_NAME).map(|path| BufReader::new(open_file(path, "orders")));
    let config_file = matches.get_one::<String>(CONFIG_ARG_NAME).map(|path| BufReader::new(open_file(path, "config")));
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let is_check_requested = matches.get_flag(CHECK_ARG_NAME);

    let environment = Arc::new(if matches.get_flag(LOG_ARG_NAME) {
        Environment::new(Arc::new(|msg: &str| eprintln!("{msg}")))
    } else {
        Environment::silent()
    });

    let orders_file = orders_file.ok_or_else(|| "orders file is not specified".to_string())?;
    let orders = read_orders(orders_file).map_err(|err| err.to_string())?;
    let config = create_config(config_file).map_err(|err| err.to_string())?;

    let planner = Planner::new(config, environment).map_err(|err| err.to_string())?;
    let plan = planner.plan_with_report(&orders, capacity).map_err(|err| err.to_string())?;

    if is_check_requested {
        check_plan_with_report(&orders, capacity, &plan)
            .map_err(|err| format!("checker found {} errors:\n{}", err.len(), err.join("\n")))?;
    }

    write_plan(&mut out_writer_func(out_result), &plan).map_err(|err| format!("cannot write plan: '{err}'"))
}
