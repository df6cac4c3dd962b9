//! Interstitial periods: months an employee must wait on a rung before the next

use serde::{Deserialize, Serialize};

/// Waiting-time table, as (last rung of band, months) pairs
///
/// Rungs above the last band wait [`TAIL_MONTHS`].
const GENERAL_BANDS: &[(u32, u32)] = &[(8, 9), (28, 12), (47, 15)];
const UPPER_BANDS: &[(u32, u32)] = &[(8, 9), (27, 12), (46, 15)];
const TAIL_MONTHS: u32 = 24;

/// Interstitial schedule bound to a career
///
/// The E3 scale is one rung shorter than E2, so its bands close one rung
/// earlier. The difference is a legal distinction between the two scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterstitialSchedule {
    /// E1/E2 scales and the unified career
    General,
    /// E3 scale
    Upper,
}

impl InterstitialSchedule {
    fn bands(&self) -> &'static [(u32, u32)] {
        match self {
            InterstitialSchedule::General => GENERAL_BANDS,
            InterstitialSchedule::Upper => UPPER_BANDS,
        }
    }

    /// Months required to leave `rung`
    pub fn months_for_rung(&self, rung: u32) -> u32 {
        self.bands()
            .iter()
            .find(|(last_rung, _)| rung <= *last_rung)
            .map(|(_, months)| *months)
            .unwrap_or(TAIL_MONTHS)
    }

    /// Months required to climb `num_steps` rungs starting at `from_rung`
    pub fn months_to_advance(&self, from_rung: u32, num_steps: u32) -> u32 {
        (0..num_steps)
            .map(|step| self.months_for_rung(from_rung + step))
            .sum()
    }
}
