// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::pyramid::Strategy;
use proptest::prelude::*;
use yare::parameterized;

fn height(value: i64) -> Height {
    Height::try_from(value).unwrap()
}

fn strategy() -> impl proptest::strategy::Strategy<Value = Strategy> {
    prop_oneof![Just(Strategy::Counted), Just(Strategy::RiseThenFall)]
}

#[parameterized(
    counted = { Strategy::Counted },
    rise_then_fall = { Strategy::RiseThenFall },
)]
fn height_three_upright(strategy: Strategy) {
    let mut out = Vec::new();
    render_upright(&mut out, height(3), strategy).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "*\n**\n***\n**\n*\n");
}

#[parameterized(
    counted = { Strategy::Counted },
    rise_then_fall = { Strategy::RiseThenFall },
)]
fn height_three_inverse(strategy: Strategy) {
    let mut out = Vec::new();
    render_upright_inverse(&mut out, height(3), strategy).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "  *\n **\n***\n **\n  *\n"
    );
}

#[parameterized(
    upright_for = { Orientation::Upright, Strategy::Counted },
    upright_while = { Orientation::Upright, Strategy::RiseThenFall },
    inverse_for = { Orientation::Inverse, Strategy::Counted },
    inverse_while = { Orientation::Inverse, Strategy::RiseThenFall },
)]
fn height_one_is_single_star(orientation: Orientation, strategy: Strategy) {
    let style = Style::new(orientation, strategy);
    assert_eq!(render_to_string(height(1), style), "*\n");
}

#[test]
fn render_to_string_matches_writer_output() {
    let style = Style::new(Orientation::Inverse, Strategy::RiseThenFall);
    let mut out = Vec::new();
    render(&mut out, height(5), style).unwrap();
    assert_eq!(render_to_string(height(5), style).into_bytes(), out);
}

#[test]
fn render_works_through_dyn_writer() {
    let mut buf = Vec::new();
    {
        let out: &mut dyn std::io::Write = &mut buf;
        render(out, height(2), Style::default()).unwrap();
    }
    assert_eq!(buf, b"*\n**\n*\n");
}

proptest! {
    #[test]
    fn strategies_render_byte_identical(h in 1i64..=120, inverse in proptest::bool::ANY) {
        let orientation = if inverse { Orientation::Inverse } else { Orientation::Upright };
        let counted = render_to_string(height(h), Style::new(orientation, Strategy::Counted));
        let rise_fall = render_to_string(height(h), Style::new(orientation, Strategy::RiseThenFall));
        prop_assert_eq!(counted, rise_fall);
    }

    #[test]
    fn inverse_rows_are_full_width(h in 1i64..=120, strategy in strategy()) {
        let text = render_to_string(height(h), Style::new(Orientation::Inverse, strategy));
        for line in text.lines() {
            prop_assert_eq!(line.len() as i64, h);
            prop_assert!(line.trim_start_matches(' ').chars().all(|c| c == '*'));
        }
    }

    #[test]
    fn inverse_is_upright_right_aligned(h in 1i64..=120, strategy in strategy()) {
        let upright = render_to_string(height(h), Style::new(Orientation::Upright, strategy));
        let inverse = render_to_string(height(h), Style::new(Orientation::Inverse, strategy));
        for (u, i) in upright.lines().zip(inverse.lines()) {
            prop_assert_eq!(u, i.trim_start());
        }
        prop_assert_eq!(upright.lines().count(), inverse.lines().count());
    }
}
