use log::trace;
use quorus_consensus_core::{
    errors::treasury::{TreasuryError, TreasuryResult},
    tspend::TSpendWindow,
    Height,
};

/// Number of blocks between the last block of a voting window and the expiry
/// carried by the treasury spend. The gap leaves room for the block carrying
/// the final vote to be connected before the spend is considered resolved.
const TSPEND_EXPIRY_GAP: u64 = 2;

/// Evaluates the deterministic treasury spend voting rules for a single
/// network.
///
/// All methods are pure functions of their arguments and the two network
/// constants captured at construction, so a manager can be shared freely
/// across threads.
#[derive(Clone)]
pub struct TreasuryManager {
    treasury_vote_interval: u64,
    treasury_vote_interval_multiplier: u64,
}

impl TreasuryManager {
    pub fn new(treasury_vote_interval: u64, treasury_vote_interval_multiplier: u64) -> Self {
        // Zero-valued intervals are a configuration bug. Network params must
        // reject them before any consensus code runs, so refuse to construct.
        assert!(treasury_vote_interval >= 1);
        assert!(treasury_vote_interval_multiplier >= 1);
        Self { treasury_vote_interval, treasury_vote_interval_multiplier }
    }

    /// True iff `height` lands exactly on a treasury vote interval boundary,
    /// i.e. a vote tally must run when the block at `height` is connected.
    /// Genesis is never a boundary even though `0 % tvi == 0`.
    pub fn is_treasury_vote_interval(&self, height: Height) -> bool {
        height != 0 && height % self.treasury_vote_interval == 0
    }

    /// Derives the half-open voting window `[start, end)` encoded by `expiry`.
    ///
    /// This is a strict validity test, not a snap-to-nearest-window helper: an
    /// expiry too small to admit one full window, or whose implied end does
    /// not land exactly on a vote interval boundary, is rejected rather than
    /// coerced.
    pub fn calc_tspend_window(&self, expiry: u32) -> TreasuryResult<TSpendWindow> {
        let window_duration = self.treasury_vote_interval * self.treasury_vote_interval_multiplier;

        // There must be room for one full window plus the two block gap below
        // the expiry.
        if (expiry as u64) < window_duration + TSPEND_EXPIRY_GAP {
            return Err(TreasuryError::InvalidTSpendExpiry(expiry));
        }

        // The window end must land exactly on a vote interval boundary. The
        // start then is as well, since the window spans a whole number of
        // intervals.
        let end = expiry as u64 - TSPEND_EXPIRY_GAP;
        if end % self.treasury_vote_interval != 0 {
            return Err(TreasuryError::InvalidTSpendExpiry(expiry));
        }

        Ok(TSpendWindow::new(end - window_duration, end))
    }

    /// Returns the expiry a treasury spend created at (or evaluated relative
    /// to) `height` must carry.
    ///
    /// The encoded window is the next one beginning strictly after `height`:
    /// it opens at the first vote interval boundary greater than `height` and
    /// runs for the full multiplier worth of intervals, so
    /// `calc_tspend_window` always accepts the result and returns a window
    /// with `start > height`.
    pub fn calc_tspend_expiry(&self, height: Height) -> u32 {
        // Index, in vote interval units, of the first boundary strictly
        // greater than height.
        let n = height / self.treasury_vote_interval + 1;
        let expiry = (n + self.treasury_vote_interval_multiplier) * self.treasury_vote_interval + TSPEND_EXPIRY_GAP;
        debug_assert!(expiry <= u32::MAX as u64);
        expiry as u32
    }

    /// True iff `height` is votable for a treasury spend carrying `expiry`.
    /// An expiry that does not encode a window contains no heights, so
    /// malformed spends are rejected rather than deferred.
    pub fn inside_tspend_window(&self, height: Height, expiry: u32) -> bool {
        match self.calc_tspend_window(expiry) {
            Ok(window) => window.contains(height),
            Err(err) => {
                trace!("treasury spend voting window check at height {} failed: {}", height, err);
                false
            }
        }
    }
}
