//! Interval split-and-shift through the stage pipeline.

use super::almanac::{AlmanacError, RuleTable, Stage};

/// Contiguous inclusive run of values `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "interval start {start} past end {end}");
        Self { start, end }
    }

    pub fn point(value: u64) -> Self {
        Self::new(value, value)
    }

    /// `length` values starting at `start`; `None` when empty or overflowing.
    pub fn from_start_len(start: u64, length: u64) -> Option<Self> {
        let end = start.checked_add(length.checked_sub(1)?)?;
        Some(Self::new(start, end))
    }

    /// Number of values covered. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

impl Stage<'_> {
    /// Maps every interval through this stage.
    ///
    /// Each rule is tried in order against the still-unmapped pieces. The
    /// overlapping part of a piece is shifted and set aside, so a value is
    /// moved by at most one rule; the parts below and above the rule stay
    /// pending for the remaining rules. Whatever no rule touched passes
    /// through unchanged.
    pub fn apply(&self, intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
        let mut pending: Vec<Interval> = intervals.into_iter().collect();
        let mut converted = Vec::with_capacity(pending.len());

        for rule in &self.rules {
            let Some(rule_end) = rule.source_end() else {
                continue;
            };

            let mut fell_through = Vec::with_capacity(pending.len());
            for interval in pending {
                if interval.end < rule.source_start() || interval.start > rule_end {
                    fell_through.push(interval);
                    continue;
                }

                let lo = interval.start.max(rule.source_start());
                let hi = interval.end.min(rule_end);

                if lo > interval.start {
                    fell_through.push(Interval::new(interval.start, lo - 1));
                }
                if hi < interval.end {
                    fell_through.push(Interval::new(hi + 1, interval.end));
                }

                let shifted = rule.dest_start() + (lo - rule.source_start());
                converted.push(Interval::new(shifted, shifted + (hi - lo)));
            }
            pending = fell_through;
        }

        pending.extend(converted);
        pending
    }

    /// Maps one value: the first rule covering it shifts it, otherwise it is unchanged.
    pub fn map_point(&self, value: u64) -> u64 {
        self.rules
            .iter()
            .find_map(|rule| rule.map_point(value))
            .unwrap_or(value)
    }
}

/// Threads `initial` through each stage of `stage_order` in turn.
///
/// Stages missing from the table map everything to itself.
pub fn run(
    initial: Vec<Interval>,
    stage_order: &[&str],
    table: &RuleTable<'_>,
) -> Result<Vec<Interval>, AlmanacError> {
    if initial.is_empty() {
        return Err(AlmanacError::MissingSeedData);
    }

    Ok(stage_order.iter().fold(initial, |intervals, name| {
        match table.stage(name) {
            Some(stage) => {
                let mapped = stage.apply(intervals);
                tracing::trace!(stage = *name, intervals = mapped.len(), "applied stage");
                mapped
            }
            None => intervals,
        }
    }))
}

/// Point-wise counterpart of [`run`] for a single value.
pub fn locate(value: u64, stage_order: &[&str], table: &RuleTable<'_>) -> u64 {
    stage_order.iter().fold(value, |value, name| {
        table
            .stage(name)
            .map_or(value, |stage| stage.map_point(value))
    })
}

/// Smallest start over a set of intervals.
pub fn lowest_start(intervals: &[Interval]) -> Option<u64> {
    intervals.iter().map(|interval| interval.start).min()
}
