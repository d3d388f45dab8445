use crate::core::comparator::compare_records;
use crate::domain::model::Record;
use std::cmp::Ordering;

/// Top-down merge sort. Stable: on `Equal` the element from the left run is
/// emitted first, so equal elements keep their input order.
///
/// `compare` is consulted once per merge step and is not required to be
/// transitive.
pub fn merge_sort_by<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort_by(left, compare);
    let right = merge_sort_by(right, compare);

    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);

    merged
}

/// Sorts records into report order in place.
pub fn sort_records(records: &mut Vec<Record>) {
    let unsorted = std::mem::take(records);
    *records = merge_sort_by(unsorted, &mut compare_records);
}
