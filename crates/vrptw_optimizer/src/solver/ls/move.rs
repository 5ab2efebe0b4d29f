use crate::{
    problem::instance::Instance,
    solver::{
        ls::{
            add_vehicle::AddVehicleOperator, cross_exchange::CrossExchangeOperator,
            intra_relocate::IntraRelocateOperator, replace_vehicle::ReplaceVehicleOperator,
            two_opt::TwoOptOperator,
        },
        solution::solution::Solution,
    },
};

/// A family of structural edits on a [`Solution`].
pub trait NeighborhoodOperator: Sized {
    /// Hands every candidate move for `solution` to `consumer`, in a fixed
    /// enumeration order.
    fn generate_moves<C>(instance: &Instance, solution: &Solution, consumer: C)
    where
        C: FnMut(Self);

    /// Applies the move in place. `solution` must be the one the move was
    /// generated from, or a clone of it.
    fn apply(&self, solution: &mut Solution);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalSearchMove {
    /// Moves a segment of 2 or 3 customers to a nearby position in the same route.
    IntraRelocate(IntraRelocateOperator),
    /// Exchanges the tails of two routes.
    TwoOpt(TwoOptOperator),
    /// Swaps two segments of equal length between two routes.
    CrossExchange(CrossExchangeOperator),
    /// Serves a route with another vehicle.
    ReplaceVehicle(ReplaceVehicleOperator),
    /// Splits the tail of a route off into a new route.
    AddVehicle(AddVehicleOperator),
}

impl LocalSearchMove {
    pub const OPERATOR_NAMES: [&'static str; 5] = [
        "Intra-Relocate",
        "Two-Opt",
        "Cross-Exchange",
        "Replace-Vehicle",
        "Add-Vehicle",
    ];

    pub fn operator_name(&self) -> &'static str {
        match self {
            LocalSearchMove::IntraRelocate(_) => Self::OPERATOR_NAMES[0],
            LocalSearchMove::TwoOpt(_) => Self::OPERATOR_NAMES[1],
            LocalSearchMove::CrossExchange(_) => Self::OPERATOR_NAMES[2],
            LocalSearchMove::ReplaceVehicle(_) => Self::OPERATOR_NAMES[3],
            LocalSearchMove::AddVehicle(_) => Self::OPERATOR_NAMES[4],
        }
    }

    pub fn apply(&self, solution: &mut Solution) {
        match self {
            LocalSearchMove::IntraRelocate(op) => op.apply(solution),
            LocalSearchMove::TwoOpt(op) => op.apply(solution),
            LocalSearchMove::CrossExchange(op) => op.apply(solution),
            LocalSearchMove::ReplaceVehicle(op) => op.apply(solution),
            LocalSearchMove::AddVehicle(op) => op.apply(solution),
        }
    }
}
