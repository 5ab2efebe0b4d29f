//! Step functions over integer time used as dynamic-programming state by the
//! time-window penalty evaluator.

pub mod piece;
pub mod piecewise_function;

pub use piece::{NEG_INFINITY, POS_INFINITY, Piece};
pub use piecewise_function::PiecewiseFunction;
