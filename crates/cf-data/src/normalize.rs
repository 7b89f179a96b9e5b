//! Load-time normalization.

use cf_core::DEFAULT_YEAR;

use crate::schema::Dataset;

/// Backfill missing years with the default.
///
/// Malformed records otherwise pass through untouched; numeric coercion
/// is deferred to the aggregation stage.
pub fn normalize(dataset: &mut Dataset) {
    for link in &mut dataset.links {
        if link.year.is_none() {
            link.year = Some(DEFAULT_YEAR);
        }
    }
}
