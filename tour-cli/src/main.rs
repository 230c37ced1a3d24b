//! A command line interface to the tour planning engine.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use crate::cli::{get_app, run_subcommand};

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::create_write_buffer;
    use super::commands::plan::{get_plan_app, run_plan};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Delivery Tour Planner")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to the delivery tour planner")
            .subcommand(get_plan_app())
            .subcommand(get_check_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("plan", plan_matches)) => run_plan(plan_matches, create_write_buffer),
            Some(("check", check_matches)) => run_check(check_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = get_app().get_matches();

    run_subcommand(matches);
}
