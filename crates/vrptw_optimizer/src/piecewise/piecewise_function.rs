use std::fmt;

use serde::Serialize;

use super::piece::{NEG_INFINITY, POS_INFINITY, Piece, split_first_containing};

/// A step function over `i64` time covering `(−∞, +∞)` with ordered,
/// boundary-touching pieces.
///
/// Values are immutable: every operation returns a freshly built function.
///
/// Evaluation returns the value of the *first* piece whose closed interval
/// contains the query, so on a shared bound the left piece wins. The algebra
/// below (and the penalty evaluator built on it) depends on that ordering.
///
/// ```text
/// penalty(10, 20, 1):
///
///   1 ─────────┐            ┌──────────
///              │            │
///   0          └────────────┘
///             10           20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiecewiseFunction {
    pieces: Vec<Piece>,
}

impl PiecewiseFunction {
    /// The function that is `0` everywhere.
    pub fn zero() -> Self {
        PiecewiseFunction {
            pieces: vec![Piece::new(NEG_INFINITY, POS_INFINITY, 0)],
        }
    }

    /// Flat violation cost outside `[start, end]`, zero inside.
    pub fn penalty(start: i64, end: i64, penalty: i64) -> Self {
        PiecewiseFunction {
            pieces: vec![
                Piece::new(NEG_INFINITY, start, penalty),
                Piece::new(start, end, 0),
                Piece::new(end, POS_INFINITY, penalty),
            ],
        }
    }

    pub fn from_pieces(pieces: Vec<Piece>) -> Self {
        debug_assert!(
            pieces.windows(2).all(|w| w[0].upper == w[1].lower),
            "pieces must touch"
        );

        PiecewiseFunction { pieces }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Translates every finite breakpoint by `-offset`, so that
    /// `f.shift(v).evaluate(x) == f.evaluate(x + v)`.
    pub fn shift(&self, offset: i64) -> Self {
        PiecewiseFunction {
            pieces: self.pieces.iter().map(|piece| piece.shifted(offset)).collect(),
        }
    }

    /// Adds `piece.value` on `[piece.lower, piece.upper]`.
    ///
    /// The pieces strictly containing either bound are split first. The value is
    /// then added to every piece starting at or after `piece.lower`, up to and
    /// including the first piece ending exactly at `piece.upper`.
    pub fn add_piece(&self, piece: &Piece) -> Self {
        if piece.value == 0 || piece.lower >= piece.upper {
            return self.clone();
        }

        let pieces = split_first_containing(&self.pieces, piece.lower);
        let pieces = split_first_containing(&pieces, piece.upper);

        let mut reached_upper = false;
        let pieces = pieces
            .into_iter()
            .map(|mut current| {
                if !reached_upper {
                    if current.lower >= piece.lower {
                        current.value += piece.value;
                    }
                    reached_upper = current.upper == piece.upper;
                }
                current
            })
            .collect();

        PiecewiseFunction { pieces }
    }

    /// Pointwise sum, computed by folding every piece of `self` into `other`.
    pub fn add(&self, other: &PiecewiseFunction) -> Self {
        self.pieces
            .iter()
            .fold(other.clone(), |sum, piece| sum.add_piece(piece))
    }

    /// Leftmost-greedy envelope.
    ///
    /// Scans left to right and keeps a piece only when its value is strictly
    /// below every value seen so far; any other piece is absorbed into the last
    /// kept piece by extending its upper bound. The result is non-increasing.
    /// This is intentionally not the pointwise lower envelope.
    pub fn min(&self) -> Self {
        let mut pieces: Vec<Piece> = Vec::with_capacity(self.pieces.len());
        let mut running_min = i64::MAX;

        for piece in &self.pieces {
            if piece.value < running_min {
                running_min = piece.value;
                pieces.push(*piece);
            } else if let Some(last) = pieces.last_mut() {
                last.upper = piece.upper;
            } else {
                pieces.push(*piece);
            }
        }

        PiecewiseFunction { pieces }
    }

    /// Value of the first piece containing `x`, `0` if none does.
    pub fn evaluate(&self, x: i64) -> i64 {
        self.pieces
            .iter()
            .find(|piece| piece.contains(x))
            .map_or(0, |piece| piece.value)
    }
}

impl Default for PiecewiseFunction {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for PiecewiseFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bound(value: i64) -> String {
            match value {
                NEG_INFINITY => String::from("-inf"),
                POS_INFINITY => String::from("+inf"),
                _ => value.to_string(),
            }
        }

        let pieces = self
            .pieces
            .iter()
            .map(|piece| {
                format!(
                    "[{}, {}]={}",
                    bound(piece.lower),
                    bound(piece.upper),
                    piece.value
                )
            })
            .collect::<Vec<_>>();

        write!(f, "{}", pieces.join(" "))
    }
}
