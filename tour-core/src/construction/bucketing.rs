//! Capacity-aware partitioning of deliveries into buckets, each of which becomes one tour.

#[cfg(test)]
#[path = "../../tests/unit/construction/bucketing_test.rs"]
mod bucketing_test;

use crate::algorithms::geometry::Coordinate;
use crate::construction::Delivery;
use crate::utils::{Float, compare_floats};

/// A capacity feasible subset of deliveries destined to become one tour.
pub type Bucket = Vec<Delivery>;

/// Carves off the next bucket from `remaining` deliveries of one region.
///
/// Deliveries are visited in ascending straight-line distance from the depot (stable for equal
/// distances) and added while the bucket stays within capacity. A delivery which does not fit
/// is skipped and stays for later buckets. The first candidate is always admitted, so the
/// bucket is never empty for non-empty input. Returns the bucket and the rest in input order.
pub fn take_bucket(remaining: &[Delivery], depot: &Coordinate, capacity: Float) -> (Bucket, Vec<Delivery>) {
    let distances = remaining.iter().map(|delivery| depot.distance_km(&delivery.location)).collect::<Vec<_>>();

    let mut candidates = (0..remaining.len()).collect::<Vec<_>>();
    candidates.sort_by(|&a, &b| compare_floats(distances[a], distances[b]));

    let mut selected = vec![false; remaining.len()];
    let (admitted, _) = candidates.into_iter().fold((Vec::<usize>::new(), 0.), |(mut admitted, weight), idx| {
        let next_weight = weight + remaining[idx].weight();

        if admitted.is_empty() || next_weight <= capacity {
            selected[idx] = true;
            admitted.push(idx);
            (admitted, next_weight)
        } else {
            (admitted, weight)
        }
    });

    let bucket = admitted.into_iter().map(|idx| remaining[idx].clone()).collect();
    let rest = remaining.iter().zip(selected).filter(|(_, is_selected)| !is_selected).map(|(d, _)| d.clone()).collect();

    (bucket, rest)
}

/// Splits deliveries of one region into buckets using [`take_bucket`] until nothing remains.
pub fn split_by_capacity(deliveries: &[Delivery], depot: &Coordinate, capacity: Float) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    let mut remaining = deliveries.to_vec();

    while !remaining.is_empty() {
        let (bucket, rest) = take_bucket(remaining.as_slice(), depot, capacity);
        if bucket.is_empty() {
            break;
        }

        buckets.push(bucket);
        remaining = rest;
    }

    buckets
}

/// Packs deliveries sorted by descending weight into buckets, opening a new bucket whenever the
/// next delivery would overflow the current one.
pub fn split_by_weight(deliveries: &[Delivery], capacity: Float) -> Vec<Bucket> {
    let mut sorted = deliveries.to_vec();
    sorted.sort_by(|a, b| compare_floats(b.weight(), a.weight()));

    let (mut buckets, last, _) = sorted.into_iter().fold(
        (Vec::<Bucket>::new(), Bucket::new(), 0.),
        |(mut buckets, mut current, weight), delivery| {
            if !current.is_empty() && weight + delivery.weight() > capacity {
                buckets.push(std::mem::take(&mut current));
                let weight = delivery.weight();
                current.push(delivery);

                (buckets, current, weight)
            } else {
                let weight = weight + delivery.weight();
                current.push(delivery);

                (buckets, current, weight)
            }
        },
    );

    if !last.is_empty() {
        buckets.push(last);
    }

    buckets
}
