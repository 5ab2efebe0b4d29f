use serde::Serialize;

/// Sentinel lower bound standing for −∞. Never shifted.
pub const NEG_INFINITY: i64 = i64::MIN;

/// Sentinel upper bound standing for +∞. Never shifted.
pub const POS_INFINITY: i64 = i64::MAX;

/// One `(lower, upper, value)` breakpoint triplet of a [`super::PiecewiseFunction`].
///
/// Both bounds are inclusive, neighbouring pieces touch at their shared bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub lower: i64,
    pub upper: i64,
    pub value: i64,
}

impl Piece {
    pub const fn new(lower: i64, upper: i64, value: i64) -> Self {
        Piece {
            lower,
            upper,
            value,
        }
    }

    pub fn contains(&self, x: i64) -> bool {
        x >= self.lower && x <= self.upper
    }

    /// `true` when `x` lies strictly inside the piece, i.e. splitting at `x`
    /// yields two non-degenerate pieces.
    pub fn strictly_contains(&self, x: i64) -> bool {
        x > self.lower && x < self.upper
    }

    /// Translates the finite bounds by `-offset`.
    pub fn shifted(&self, offset: i64) -> Self {
        Piece {
            lower: if self.lower == NEG_INFINITY {
                NEG_INFINITY
            } else {
                self.lower - offset
            },
            upper: if self.upper == POS_INFINITY {
                POS_INFINITY
            } else {
                self.upper - offset
            },
            value: self.value,
        }
    }

    fn split_at(&self, x: i64) -> [Piece; 2] {
        [
            Piece::new(self.lower, x, self.value),
            Piece::new(x, self.upper, self.value),
        ]
    }
}

/// Splits the first piece strictly containing `x` into two pieces meeting at `x`.
/// Returns the sequence unchanged (but rebuilt) when no piece strictly contains `x`.
pub(super) fn split_first_containing(pieces: &[Piece], x: i64) -> Vec<Piece> {
    let mut result = Vec::with_capacity(pieces.len() + 1);
    let mut split = false;

    for piece in pieces {
        if !split && piece.strictly_contains(x) {
            result.extend(piece.split_at(x));
            split = true;
        } else {
            result.push(*piece);
        }
    }

    result
}
