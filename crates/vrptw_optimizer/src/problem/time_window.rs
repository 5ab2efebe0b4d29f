use serde::Serialize;

use crate::piecewise::PiecewiseFunction;

/// Closed visit window `[start, end]` on the integer time axis.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    start: i64,
    end: i64,
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Self {
        TimeWindow { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn width(&self) -> i64 {
        self.end - self.start
    }

    pub fn contains(&self, time: i64) -> bool {
        time >= self.start && time <= self.end
    }

    /// Step function charging `penalty` for any arrival outside the window.
    pub fn penalty_function(&self, penalty: i64) -> PiecewiseFunction {
        PiecewiseFunction::penalty(self.start, self.end, penalty)
    }
}
