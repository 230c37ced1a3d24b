//! Reading and writing of JSON documents.

#[cfg(test)]
#[path = "../../tests/unit/extensions/format_test.rs"]
mod format_test;

use std::io::{BufReader, BufWriter, Read, Write};
use tour_core::prelude::*;

/// Reads a JSON array of orders.
pub fn read_orders<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Order>> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize orders: '{err}'").into())
}

/// Reads a plan previously written by [`write_plan`].
pub fn read_plan<R: Read>(reader: BufReader<R>) -> GenericResult<Plan> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize plan: '{err}'").into())
}

/// Writes the plan as pretty printed JSON.
pub fn write_plan<W: Write>(writer: &mut BufWriter<W>, plan: &Plan) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut *writer, plan)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
