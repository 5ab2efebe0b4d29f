use super::objective::ObjectiveParams;

#[derive(Clone, Debug)]
pub struct SolverParams {
    pub objective: ObjectiveParams,
    /// A neighbor is adopted only when it beats the current score by more
    /// than this.
    pub epsilon: f64,
    pub threads: Threads,
    pub tie_break: TieBreak,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            objective: ObjectiveParams::default(),
            epsilon: 1e-2,
            threads: Threads::Auto,
            tie_break: TieBreak::Any,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

/// How the best neighbor is picked among equal scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Whichever evaluation task reaches the shared best slot first wins.
    #[default]
    Any,
    /// The neighbor generated first wins. Runs are reproducible.
    LowestIndex,
}
