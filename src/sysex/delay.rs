// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use derive_more::{Display, From, Into};
use thiserror::Error;

/// Lower bound of the supported delay time range.
pub const MIN_DELAY_MS: u16 = 20;

/// Upper bound of the supported delay time range.
pub const MAX_DELAY_MS: u16 = 1000;

/// Delay time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, From, Into)]
pub struct DelayMillis(u16);

impl DelayMillis {
    #[must_use]
    pub const fn new(ms: u16) -> Self {
        Self(ms)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// One delay time and the complete SysEx message that selects it,
/// framed `0xF0…0xF7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayTimeSysex {
    pub delay_ms: DelayMillis,
    pub data: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum DelayTableError {
    #[error("delay table is empty")]
    Empty,
    #[error("delay table is not sorted by delay time")]
    Unsorted,
}

/// Lookup table mapping delay times to SysEx messages.
///
/// Construction validates that the entries are ordered by non-decreasing
/// `delay_ms`. [`DelayTable::find_closest`] exploits this order to stop
/// scanning as soon as the distance to the target starts growing again,
/// which would silently return a non-global minimum on unsorted input.
#[derive(Debug, Clone)]
pub struct DelayTable {
    entries: Vec<DelayTimeSysex>,
}

impl DelayTable {
    pub fn new(entries: Vec<DelayTimeSysex>) -> Result<Self, DelayTableError> {
        if entries.is_empty() {
            return Err(DelayTableError::Empty);
        }
        if !is_sorted::IsSorted::is_sorted_by_key(&mut entries.iter(), |entry| entry.delay_ms) {
            return Err(DelayTableError::Unsorted);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[DelayTimeSysex] {
        &self.entries
    }

    /// Returns the entry whose delay time is closest to `target_ms`.
    ///
    /// The target is clamped into `[MIN_DELAY_MS, MAX_DELAY_MS]` before
    /// the search. On a tie the entry with the lower delay time wins.
    #[must_use]
    pub fn find_closest(&self, target_ms: u16) -> &DelayTimeSysex {
        let target = target_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS);
        let mut closest = &self.entries[0];
        let mut min_diff = closest.delay_ms.get().abs_diff(target);
        for entry in &self.entries[1..] {
            let diff = entry.delay_ms.get().abs_diff(target);
            if diff < min_diff {
                min_diff = diff;
                closest = entry;
            } else if diff > min_diff {
                // Entries are sorted, the distance only grows from here.
                break;
            }
        }
        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(delay_ms: u16) -> DelayTimeSysex {
        DelayTimeSysex {
            delay_ms: DelayMillis::new(delay_ms),
            data: vec![0xF0, 0x08, (delay_ms & 0x7F) as u8, 0xF7],
        }
    }

    fn table(delays: &[u16]) -> DelayTable {
        DelayTable::new(delays.iter().copied().map(entry).collect()).unwrap()
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            DelayTable::new(Vec::new()),
            Err(DelayTableError::Empty)
        ));
    }

    #[test]
    fn unsorted_table_is_rejected() {
        assert!(matches!(
            DelayTable::new(vec![entry(100), entry(20)]),
            Err(DelayTableError::Unsorted)
        ));
    }

    #[test]
    fn duplicate_delays_are_allowed() {
        assert!(DelayTable::new(vec![entry(20), entry(20), entry(100)]).is_ok());
    }

    #[test]
    fn below_range_targets_resolve_to_the_minimum_entry() {
        let table = table(&[20, 100, 500, 1000]);
        for target in [0, 5, 19] {
            assert_eq!(20, table.find_closest(target).delay_ms.get());
        }
    }

    #[test]
    fn above_range_targets_resolve_to_the_maximum_entry() {
        let table = table(&[20, 100, 500, 1000]);
        for target in [1001, 5000, u16::MAX] {
            assert_eq!(1000, table.find_closest(target).delay_ms.get());
        }
    }

    #[test]
    fn exact_hits_win() {
        let table = table(&[20, 100, 500, 1000]);
        for target in [20, 100, 500, 1000] {
            assert_eq!(target, table.find_closest(target).delay_ms.get());
        }
    }

    #[test]
    fn nearest_neighbour_is_found() {
        let table = table(&[20, 100, 500, 1000]);
        assert_eq!(100, table.find_closest(90).delay_ms.get());
        assert_eq!(500, table.find_closest(400).delay_ms.get());
        assert_eq!(1000, table.find_closest(800).delay_ms.get());
    }

    #[test]
    fn ties_prefer_the_lower_delay() {
        // 300 is 200ms away from both 100 and 500.
        let table = table(&[20, 100, 500, 1000]);
        assert_eq!(100, table.find_closest(300).delay_ms.get());
    }

    #[test]
    fn single_entry_table_always_returns_that_entry() {
        let table = table(&[250]);
        for target in [0, 250, 2000] {
            assert_eq!(250, table.find_closest(target).delay_ms.get());
        }
    }
}
