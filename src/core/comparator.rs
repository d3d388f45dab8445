//! Ranking order for admission records.

use crate::core::grammar::GPA_EPSILON;
use crate::domain::model::{Gpa, Record};
use std::cmp::Ordering;

/// Compares two records by birth year, month, day, last name, first name,
/// GPA, then classification.
///
/// GPAs within one ten-thousandth of each other count as equal, so this is not
/// a strict total order over all triples; pair it with [`super::sorter`],
/// which never assumes transitivity.
pub fn compare_records(a: &Record, b: &Record) -> Ordering {
    let (left, right) = (a.applicant(), b.applicant());
    let (left_date, right_date) = (left.birth_date(), right.birth_date());

    left_date
        .year()
        .cmp(&right_date.year())
        .then_with(|| {
            left_date
                .month()
                .number_from_month()
                .cmp(&right_date.month().number_from_month())
        })
        .then_with(|| left_date.day().cmp(&right_date.day()))
        .then_with(|| compare_ignore_case(left.last_name(), right.last_name()))
        .then_with(|| compare_ignore_case(left.first_name(), right.first_name()))
        .then_with(|| compare_gpa(left.gpa(), right.gpa()))
        .then_with(|| compare_classification(a, b))
}

/// Lexicographic comparison of the lowercased characters, without allocating.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

pub fn compare_gpa(a: &Gpa, b: &Gpa) -> Ordering {
    let (a, b) = (a.ten_thousandths(), b.ten_thousandths());
    if a.abs_diff(b) <= GPA_EPSILON {
        Ordering::Equal
    } else {
        a.cmp(&b)
    }
}

// International (has a TOEFL score) ranks ahead of domestic.
fn compare_classification(a: &Record, b: &Record) -> Ordering {
    match (a.toefl(), b.toefl()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
