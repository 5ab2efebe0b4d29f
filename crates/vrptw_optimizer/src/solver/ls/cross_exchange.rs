use crate::{
    problem::instance::Instance,
    solver::{
        ls::r#move::NeighborhoodOperator,
        solution::{route_id::RouteIdx, solution::Solution},
    },
};

/// **Cross-Exchange**
///
/// Swaps a segment of `length` customers of one route with a segment of the
/// same length of another route. Each segment stays at its position.
///
/// ```text
/// BEFORE:
///    R1: 0 -> A -> [B -> C] -> D -> 0
///    R2: 0 -> [X -> Y] -> Z -> 0
///
/// AFTER:
///    R1: 0 -> A -> [X -> Y] -> D -> 0
///    R2: 0 -> [B -> C] -> Z -> 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossExchangeOperator {
    params: CrossExchangeOperatorParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossExchangeOperatorParams {
    pub first_route_id: RouteIdx,
    pub second_route_id: RouteIdx,
    pub first_start: usize,
    pub second_start: usize,
    pub length: usize,
}

impl CrossExchangeOperator {
    pub const SEGMENT_LENGTHS: [usize; 2] = [2, 3];

    pub fn new(params: CrossExchangeOperatorParams) -> Self {
        debug_assert!(params.first_route_id < params.second_route_id);
        Self { params }
    }

    pub fn params(&self) -> &CrossExchangeOperatorParams {
        &self.params
    }
}

impl NeighborhoodOperator for CrossExchangeOperator {
    fn generate_moves<C>(_instance: &Instance, solution: &Solution, mut consumer: C)
    where
        C: FnMut(Self),
    {
        for length in Self::SEGMENT_LENGTHS {
            for first_route_id in solution.route_ids() {
                for second_route_id in solution.route_ids().skip(first_route_id.get() + 1) {
                    let first_len = solution.route(first_route_id).len();
                    let second_len = solution.route(second_route_id).len();

                    // Segments never include the last customer of a route.
                    for first_start in 0..first_len.saturating_sub(length) {
                        for second_start in 0..second_len.saturating_sub(length) {
                            consumer(CrossExchangeOperator::new(CrossExchangeOperatorParams {
                                first_route_id,
                                second_route_id,
                                first_start,
                                second_start,
                                length,
                            }));
                        }
                    }
                }
            }
        }
    }

    fn apply(&self, solution: &mut Solution) {
        let CrossExchangeOperatorParams {
            first_route_id,
            second_route_id,
            first_start,
            second_start,
            length,
        } = self.params;

        let (first, second) = solution.route_pair_mut(first_route_id, second_route_id);

        let first_segment = first.customers()[first_start..first_start + length].to_vec();
        let second_segment = second.replace_segment(second_start, &first_segment);
        first.replace_segment(first_start, &second_segment);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{TestRoute, create_line_instance, create_test_solution, route_customers};

    use super::*;

    fn solution() -> Solution {
        create_test_solution(vec![
            TestRoute {
                vehicle_id: 1,
                customer_ids: vec![1, 2, 3, 4],
            },
            TestRoute {
                vehicle_id: 0,
                customer_ids: vec![5, 6, 7, 8],
            },
        ])
    }

    #[test]
    fn test_generate_moves() {
        let instance = create_line_instance(8, vec![10], 10);
        let mut moves = vec![];
        CrossExchangeOperator::generate_moves(&instance, &solution(), |op| {
            let params = op.params();
            moves.push((params.length, params.first_start, params.second_start));
        });

        assert_eq!(
            moves,
            vec![(2, 0, 0), (2, 0, 1), (2, 1, 0), (2, 1, 1), (3, 0, 0)]
        );
    }

    #[test]
    fn test_apply() {
        let mut solution = solution();

        CrossExchangeOperator::new(CrossExchangeOperatorParams {
            first_route_id: RouteIdx::new(0),
            second_route_id: RouteIdx::new(1),
            first_start: 1,
            second_start: 0,
            length: 2,
        })
        .apply(&mut solution);

        assert_eq!(
            route_customers(&solution),
            vec![(1, vec![1, 5, 6, 4]), (0, vec![2, 3, 7, 8])]
        );
    }
}
