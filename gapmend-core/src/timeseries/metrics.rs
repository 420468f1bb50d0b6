use serde::{Deserialize, Serialize};

use crate::GapmendError;

/// How much of a repaired series was synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GapMetrics {
    /// Number of synthesized rows.
    pub gap_count: usize,
    /// `gap_count / repaired_rows * 100`, or `0.0` for an empty result.
    pub gap_percentage: f64,
}

impl GapMetrics {
    /// Metrics of a repair that synthesized nothing.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            gap_count: 0,
            gap_percentage: 0.0,
        }
    }

    /// Compute metrics from row counts before and after realignment.
    ///
    /// ```
    /// use gapmend_core::GapMetrics;
    ///
    /// let m = GapMetrics::from_counts(4, 5).unwrap();
    /// assert_eq!(m.gap_count, 1);
    /// assert!((m.gap_percentage - 20.0).abs() < 1e-12);
    /// assert_eq!(GapMetrics::from_counts(0, 0).unwrap(), GapMetrics::zero());
    /// ```
    ///
    /// # Errors
    /// Returns `Err(GapmendError::Data)` if `post < pre`: realignment lost
    /// observations, which only happens when an upstream invariant is broken.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counts(pre: usize, post: usize) -> Result<Self, GapmendError> {
        let gap_count = post.checked_sub(pre).ok_or_else(|| {
            GapmendError::Data(format!(
                "repaired series has fewer rows ({post}) than the input ({pre})"
            ))
        })?;
        let gap_percentage = if post > 0 {
            gap_count as f64 / post as f64 * 100.0
        } else {
            0.0
        };
        Ok(Self {
            gap_count,
            gap_percentage,
        })
    }
}
