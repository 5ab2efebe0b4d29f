use tracing::instrument;

use crate::{
    problem::instance::Instance,
    solver::{
        feasibility::is_feasible,
        ls::{
            add_vehicle::AddVehicleOperator,
            cross_exchange::CrossExchangeOperator,
            intra_relocate::IntraRelocateOperator,
            r#move::{LocalSearchMove, NeighborhoodOperator},
            replace_vehicle::ReplaceVehicleOperator,
            two_opt::TwoOptOperator,
        },
        solution::solution::Solution,
    },
};

/// A feasible copy of the current solution with one move applied.
#[derive(Debug, Clone)]
pub struct Neighbor {
    pub solution: Solution,
    pub applied: LocalSearchMove,
}

impl Neighbor {
    pub fn operator_name(&self) -> &'static str {
        self.applied.operator_name()
    }
}

/// Union of all five neighborhoods of `solution`, infeasible candidates
/// dropped. The order is stable: operator by operator, each in its own
/// enumeration order.
#[instrument(skip_all, level = "debug")]
pub fn generate_neighbors(instance: &Instance, solution: &Solution) -> Vec<Neighbor> {
    let mut neighbors = vec![];

    collect_feasible(instance, solution, LocalSearchMove::IntraRelocate, &mut neighbors);
    collect_feasible(instance, solution, LocalSearchMove::TwoOpt, &mut neighbors);
    collect_feasible(instance, solution, LocalSearchMove::CrossExchange, &mut neighbors);
    collect_feasible(instance, solution, LocalSearchMove::ReplaceVehicle, &mut neighbors);
    collect_feasible(instance, solution, LocalSearchMove::AddVehicle, &mut neighbors);

    neighbors
}

fn collect_feasible<O, W>(
    instance: &Instance,
    solution: &Solution,
    wrap: W,
    neighbors: &mut Vec<Neighbor>,
) where
    O: NeighborhoodOperator,
    W: Fn(O) -> LocalSearchMove,
{
    O::generate_moves(instance, solution, |op| {
        let mut candidate = solution.clone();
        op.apply(&mut candidate);

        if is_feasible(instance, &candidate) {
            neighbors.push(Neighbor {
                solution: candidate,
                applied: wrap(op),
            });
        }
    });
}
