use clap::{Arg, ArgMatches, Command};

pub mod check;
pub mod plan;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::process;
use tour_core::prelude::Float;

const CAPACITY_ARG_NAME: &str = "capacity";
const DEFAULT_CAPACITY: Float = 1300.;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_capacity_arg() -> Arg {
    Arg::new(CAPACITY_ARG_NAME)
        .help("Specifies vehicle capacity, the same unit as order weight")
        .short('c')
        .long(CAPACITY_ARG_NAME)
        .required(false)
}

fn get_capacity(matches: &ArgMatches) -> Result<Float, String> {
    matches
        .get_one::<String>(CAPACITY_ARG_NAME)
        .map(|arg| arg.parse::<Float>().map_err(|err| format!("cannot get capacity value, error: '{err}'")))
        .unwrap_or(Ok(DEFAULT_CAPACITY))
}

fn with_capacity_arg(command: Command) -> Command {
    command.arg(create_capacity_arg())
}
