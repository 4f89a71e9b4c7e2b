// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    one = { 1 },
    three = { 3 },
    at_default_max = { 1000 },
)]
fn accepts_values_in_range(value: i64) {
    let height = Height::try_from(value).unwrap();
    assert_eq!(i64::from(height.get()), value);
}

#[parameterized(
    zero = { 0 },
    negative = { -4 },
    most_negative = { i64::MIN },
)]
fn rejects_non_positive(value: i64) {
    assert_eq!(
        Height::try_from(value),
        Err(HeightError::NotPositive(value))
    );
}

#[test]
fn rejects_values_above_max() {
    assert_eq!(
        Height::new(11, 10),
        Err(HeightError::TooLarge { value: 11, max: 10 })
    );
    assert_eq!(
        Height::try_from(1001_i64),
        Err(HeightError::TooLarge {
            value: 1001,
            max: DEFAULT_MAX_HEIGHT
        })
    );
}

#[test]
fn max_is_clamped_to_hard_limit() {
    let value = i64::from(MAX_HEIGHT_LIMIT) + 1;
    assert_eq!(
        Height::new(value, u32::MAX),
        Err(HeightError::TooLarge {
            value,
            max: MAX_HEIGHT_LIMIT
        })
    );
    assert!(Height::new(i64::from(MAX_HEIGHT_LIMIT), u32::MAX).is_ok());
}

#[test]
fn zero_max_rejects_everything() {
    assert!(matches!(
        Height::new(1, 0),
        Err(HeightError::TooLarge { value: 1, max: 0 })
    ));
}

#[test]
fn row_count_is_two_h_minus_one() {
    assert_eq!(Height::try_from(1_i64).unwrap().row_count(), 1);
    assert_eq!(Height::try_from(3_i64).unwrap().row_count(), 5);
    assert_eq!(
        Height::new(i64::from(MAX_HEIGHT_LIMIT), MAX_HEIGHT_LIMIT)
            .unwrap()
            .row_count(),
        2 * MAX_HEIGHT_LIMIT - 1
    );
}

#[test]
fn displays_as_number() {
    assert_eq!(Height::try_from(42_i64).unwrap().to_string(), "42");
}
