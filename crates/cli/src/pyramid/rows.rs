// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row profile iterators.

use super::{Height, Strategy};

/// Asterisks in 1-based `row` of a pyramid: `h - |h - row|`.
///
/// Rows outside `1..=2h-1` have no asterisks.
pub fn column_height(height: Height, row: u32) -> u32 {
    let h = height.get();
    h.saturating_sub(h.abs_diff(row))
}

/// Row profile computed directly from the row index.
#[derive(Clone, Debug)]
pub struct CountedRows {
    height: Height,
    next: u32,
    last: u32,
}

impl CountedRows {
    pub fn new(height: Height) -> Self {
        Self {
            height,
            next: 1,
            last: height.row_count(),
        }
    }
}

impl Iterator for CountedRows {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next > self.last {
            return None;
        }
        let col = column_height(self.height, self.next);
        self.next += 1;
        Some(col)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1 - self.next) as usize;
        (remaining, Some(remaining))
    }
}

/// Direction of the rise-then-fall counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Rising,
    Falling,
}

/// Row profile from a counter that climbs to the peak, then descends to zero.
///
/// The switch to [`Phase::Falling`] happens on the peak row itself, so a
/// height of 1 yields a single row instead of bouncing between 1 and 2.
#[derive(Clone, Debug)]
pub struct RiseFallRows {
    peak: u32,
    counter: u32,
    phase: Phase,
}

impl RiseFallRows {
    pub fn new(height: Height) -> Self {
        Self {
            peak: height.get(),
            counter: 1,
            phase: Phase::Rising,
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }
}

impl Iterator for RiseFallRows {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.counter == 0 {
            return None;
        }
        let col = self.counter;
        if col == self.peak {
            self.phase = Phase::Falling;
        }
        match self.phase {
            Phase::Rising => self.counter += 1,
            Phase::Falling => self.counter -= 1,
        }
        Some(col)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.phase {
            Phase::Rising => 2 * self.peak - self.counter,
            Phase::Falling => self.counter,
        } as usize;
        (remaining, Some(remaining))
    }
}

/// Row profile for either strategy.
#[derive(Clone, Debug)]
pub enum Rows {
    Counted(CountedRows),
    RiseThenFall(RiseFallRows),
}

impl Iterator for Rows {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match self {
            Self::Counted(rows) => rows.next(),
            Self::RiseThenFall(rows) => rows.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Counted(rows) => rows.size_hint(),
            Self::RiseThenFall(rows) => rows.size_hint(),
        }
    }
}

impl ExactSizeIterator for CountedRows {}
impl ExactSizeIterator for RiseFallRows {}
impl ExactSizeIterator for Rows {}

/// Column heights of every row, produced with `strategy`.
pub fn rows(height: Height, strategy: Strategy) -> Rows {
    match strategy {
        Strategy::Counted => Rows::Counted(CountedRows::new(height)),
        Strategy::RiseThenFall => Rows::RiseThenFall(RiseFallRows::new(height)),
    }
}

#[cfg(test)]
#[path = "rows_tests.rs"]
mod tests;
