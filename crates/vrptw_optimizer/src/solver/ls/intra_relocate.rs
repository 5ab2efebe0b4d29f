use crate::{
    problem::instance::Instance,
    solver::{
        ls::r#move::NeighborhoodOperator,
        solution::{route_id::RouteIdx, solution::Solution},
    },
};

/// **Intra-Route Relocate**
///
/// Takes a segment of `length` customers starting at `from` and reinserts it
/// so that it starts at `to` once removed. `to` stays within `length`
/// positions of `from`.
///
/// ```text
/// BEFORE (from = 1, length = 2, to = 3):
///    0 -> A -> [B -> C] -> D -> E -> 0
///
/// AFTER:
///    0 -> A -> D -> E -> [B -> C] -> 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntraRelocateOperator {
    params: IntraRelocateOperatorParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntraRelocateOperatorParams {
    pub route_id: RouteIdx,
    pub from: usize,
    pub length: usize,
    pub to: usize,
}

impl IntraRelocateOperator {
    pub const SEGMENT_LENGTHS: [usize; 2] = [2, 3];

    pub fn new(params: IntraRelocateOperatorParams) -> Self {
        debug_assert_ne!(params.from, params.to);
        Self { params }
    }

    pub fn params(&self) -> &IntraRelocateOperatorParams {
        &self.params
    }
}

impl NeighborhoodOperator for IntraRelocateOperator {
    fn generate_moves<C>(_instance: &Instance, solution: &Solution, mut consumer: C)
    where
        C: FnMut(Self),
    {
        for route_id in solution.route_ids() {
            let len = solution.route(route_id).len();

            for length in Self::SEGMENT_LENGTHS {
                // The segment never ends on the last customer.
                for from in 0..len.saturating_sub(length) {
                    let lowest = from.saturating_sub(length);
                    let highest = (len - 1 - length).min(from + length);

                    for to in (lowest..=highest).filter(|&to| to != from) {
                        consumer(IntraRelocateOperator::new(IntraRelocateOperatorParams {
                            route_id,
                            from,
                            length,
                            to,
                        }));
                    }
                }
            }
        }
    }

    fn apply(&self, solution: &mut Solution) {
        solution.route_mut(self.params.route_id).relocate_segment(
            self.params.from,
            self.params.length,
            self.params.to,
        );
    }
}
