//! Dash segmentation by arc length.
//!
//! A dotted arrow is drawn as independent sub-paths: runs of `dash` length
//! separated by `gap`, starting with a dash at the very beginning of the path.
//! The final dash is truncated at the end of the path.

use std::ops::Range;

use super::defaults;
use super::path::ArrowPath;
use crate::log::warn;

/// Alternating draw/skip lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash: f64,
    pub gap: f64,
}

impl DashPattern {
    pub fn new(dash: f64, gap: f64) -> Self {
        DashPattern { dash, gap }
    }

    /// Length of one dash plus one gap.
    pub fn period(&self) -> f64 {
        self.dash + self.gap
    }

    /// Whether walking the pattern makes progress along the path.
    pub fn is_drawable(&self) -> bool {
        self.dash.is_finite() && self.gap.is_finite() && self.dash > 0.0 && self.period() > 0.0
    }

    /// Arc-length ranges of the dashes covering a path of length `total`.
    ///
    /// Empty for a non-drawable pattern or a zero-length path. A period
    /// shorter than [`defaults::MIN_DASH_PERIOD`] is cut off after
    /// [`defaults::MAX_DASHES`] runs.
    pub fn runs(&self, total: f64) -> Vec<Range<f64>> {
        if !self.is_drawable() || total.is_nan() || total <= 0.0 {
            return Vec::new();
        }

        let period = self.period();
        let capped = period < defaults::MIN_DASH_PERIOD;
        let mut runs = Vec::new();
        loop {
            // Offsets come from the index so error does not accumulate.
            let start = runs.len() as f64 * period;
            if start >= total {
                break;
            }
            if capped && runs.len() == defaults::MAX_DASHES {
                warn!(total, period, "dash count capped at {}", defaults::MAX_DASHES);
                break;
            }
            runs.push(start..(start + self.dash).min(total));
        }
        runs
    }
}

/// Split `path` into its dashes, one sub-path per run.
pub fn dash_path(path: &ArrowPath, pattern: DashPattern) -> Vec<ArrowPath> {
    pattern
        .runs(path.length())
        .into_iter()
        .map(|run| path.subpath(run))
        .collect()
}
