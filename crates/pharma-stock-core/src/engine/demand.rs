//! Demand estimate for the critical-threshold strategy.
//!
//! Prefers the mean over the requested season and falls back to the mean over
//! every valid observation. Missing data is never an error.

use log::warn;

use crate::models::{DemandBasis, DemandEstimate, DemandObservation};

fn mean<I: Iterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Estimate daily demand from a sales history.
pub fn estimate_demand(history: &[DemandObservation], season: Option<&str>) -> DemandEstimate {
    if let Some(season) = season {
        let seasonal = mean(
            history
                .iter()
                .filter(|obs| obs.effective_season() == Some(season))
                .filter_map(DemandObservation::valid_units),
        );

        if let Some(value) = seasonal {
            return DemandEstimate {
                value,
                basis: DemandBasis::Seasonal,
            };
        }
        warn!(
            "No valid {} observations in {} sales; falling back to overall mean",
            season,
            history.len()
        );
    }

    match mean(history.iter().filter_map(DemandObservation::valid_units)) {
        Some(value) => DemandEstimate {
            value,
            basis: DemandBasis::Overall,
        },
        None => DemandEstimate {
            value: 0.0,
            basis: DemandBasis::NoHistory,
        },
    }
}
