use crate::Height;
use serde::{Deserialize, Serialize};

/// The half-open range of block heights `[start, end)` during which
/// stakeholders may vote on a treasury spend.
///
/// Windows are only ever constructed from expiries that passed validation, so
/// `end > start` always holds, `end` lands exactly on a treasury vote interval
/// boundary, and `end - start` equals the vote interval times its multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TSpendWindow {
    pub start: Height,
    pub end: Height,
}

impl TSpendWindow {
    pub fn new(start: Height, end: Height) -> Self {
        Self { start, end }
    }

    /// True iff `height` is votable for this window. The range is half-open:
    /// `start` is votable, `end` is not.
    pub fn contains(&self, height: Height) -> bool {
        self.start <= height && height < self.end
    }

    /// Number of votable heights in the window.
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}
