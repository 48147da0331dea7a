//! Lazy generation of parameter grids.

use serde::{Deserialize, Serialize};

use quorum_policy::{RoundConfig, RoundState};

/// One point of a parameter grid: a full config plus a full snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    /// Thresholds at this point.
    pub config: RoundConfig,
    /// Round snapshot at this point.
    pub state: RoundState,
}

/// How the count threshold varies across the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountSweep {
    /// Sweep `floor..min(total + 1, cap)` for each participant total, so
    /// larger groups see proportionally larger count thresholds.
    Scaled {
        /// Lowest count threshold swept.
        floor: u32,
        /// Exclusive upper bound, independent of group size.
        cap: u32,
    },

    /// The same fixed count thresholds for every total.
    Fixed(Vec<u32>),
}

impl CountSweep {
    /// Count thresholds to sweep for one participant total.
    fn counts_for(&self, total: u32) -> Vec<u32> {
        match self {
            CountSweep::Scaled { floor, cap } => (*floor..(total + 1).min(*cap)).collect(),
            CountSweep::Fixed(counts) => counts.clone(),
        }
    }
}

/// A bounded region of the parameter space.
///
/// Describes the grid without materializing it; [`points`](Self::points)
/// walks the cartesian product lazily, with the submitted/skipped split
/// innermost. Skips only range over what submissions left available, so
/// every generated snapshot is consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Participant totals to sweep.
    pub totals: Vec<u32>,

    /// Percent thresholds to sweep.
    pub threshold_percents: Vec<u32>,

    /// Count thresholds to sweep, per total.
    pub threshold_counts: CountSweep,

    /// Proposing minimum, fixed across the grid.
    pub proposing_minimum: u32,
}

impl GridSpec {
    /// The wide grid used to hunt for pathological outcomes.
    ///
    /// Groups of 3 to 11 participants, percent thresholds from 50 to 100
    /// in steps of 10, count thresholds scaled to group size, and every
    /// consistent submitted/skipped split.
    pub fn problem_search() -> Self {
        Self {
            totals: (3..=11).collect(),
            threshold_percents: vec![50, 60, 70, 80, 90, 100],
            threshold_counts: CountSweep::Scaled { floor: 3, cap: 10 },
            proposing_minimum: 3,
        }
    }

    /// The narrow grid used to surface where the policies split.
    ///
    /// A single typical configuration (80%, count 5, minimum 3) over three
    /// group sizes, with the full submitted/skipped sweep.
    pub fn disagreement_probe() -> Self {
        Self {
            totals: vec![5, 8, 10],
            threshold_percents: vec![80],
            threshold_counts: CountSweep::Fixed(vec![5]),
            proposing_minimum: 3,
        }
    }

    /// Walks every grid point, lazily.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.totals.iter().copied().flat_map(move |total| {
            self.threshold_percents.iter().copied().flat_map(move |percent| {
                self.threshold_counts
                    .counts_for(total)
                    .into_iter()
                    .flat_map(move |count| {
                        (0..=total).flat_map(move |submitted| {
                            (0..=total - submitted).map(move |skipped| GridPoint {
                                config: RoundConfig::new(percent, count, self.proposing_minimum),
                                state: RoundState::new(total, submitted, skipped),
                            })
                        })
                    })
            })
        })
    }

    /// Number of points without walking verdicts, for reporting.
    pub fn len(&self) -> u64 {
        self.points().count() as u64
    }

    /// Whether the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.points().next().is_none()
    }
}
