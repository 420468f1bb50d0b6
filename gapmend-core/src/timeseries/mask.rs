use chrono::{DateTime, Utc};

use crate::series::Series;

/// Mark the slots of `timestamps` that the original series did not observe.
///
/// The original is reindexed onto `timestamps` without any fill, so a slot is
/// `true` exactly when it was synthesized, whether or not the fill managed to
/// give it a value. `timestamps` must be sorted ascending.
#[must_use]
pub fn repair_mask(original: &Series, timestamps: &[DateTime<Utc>]) -> Vec<bool> {
    let mut observed = original.bars().iter().peekable();
    timestamps
        .iter()
        .map(|&ts| {
            while observed.next_if(|b| b.ts < ts).is_some() {}
            observed.next_if(|b| b.ts == ts).is_none()
        })
        .collect()
}
