//! Checks a previously written plan against its orders.

#[cfg(test)]
#[path = "../../tests/unit/extensions/check_test.rs"]
mod check_test;

use crate::extensions::format::{read_orders, read_plan};
use std::io::{BufReader, Read};
use tour_core::prelude::*;

/// Checks the plan read from `plan_reader` against orders read from `orders_reader`.
pub fn check_plan_file<O: Read, P: Read>(
    orders_reader: BufReader<O>,
    plan_reader: BufReader<P>,
    capacity: Float,
) -> Result<(), Vec<String>> {
    let orders = read_orders(orders_reader).map_err(|err| vec![err.to_string()])?;
    let plan = read_plan(plan_reader).map_err(|err| vec![err.to_string()])?;

    check_plan_with_report(&orders, capacity, &plan)
}

/// Checks the tours of the plan together with its reported unplanned orders.
pub fn check_plan_with_report(orders: &[Order], capacity: Float, plan: &Plan) -> Result<(), Vec<String>> {
    let mut errors = check_plan(orders, capacity, &plan.tours).err().unwrap_or_default();

    let expected = find_unplannable(orders, capacity);
    if plan.unplanned != expected {
        errors.push(format!(
            "unplanned orders [{}] differ from expected [{}]",
            join_ids(&plan.unplanned),
            join_ids(&expected)
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn join_ids(orders: &[Order]) -> String {
    orders.iter().map(|order| order.id.as_str()).collect::<Vec<_>>().join(", ")
}
