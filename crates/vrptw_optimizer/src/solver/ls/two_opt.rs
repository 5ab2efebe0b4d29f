use crate::{
    problem::instance::Instance,
    solver::{
        ls::r#move::NeighborhoodOperator,
        solution::{route_id::RouteIdx, solution::Solution},
    },
};

/// **Two-Opt (tail exchange)**
///
/// Cuts two routes and swaps their tails. Both routes keep at least their
/// first customer.
///
/// ```text
/// BEFORE:
///    R1: 0 -> A -> B | C -> D -> 0
///    R2: 0 -> X | Y -> Z -> 0
///
/// AFTER:
///    R1: 0 -> A -> B -> Y -> Z -> 0
///    R2: 0 -> X -> C -> D -> 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoOptOperator {
    params: TwoOptOperatorParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoOptOperatorParams {
    pub first_route_id: RouteIdx,
    pub second_route_id: RouteIdx,
    /// Position of the first customer of the first route's tail.
    pub first_split: usize,
    pub second_split: usize,
}

impl TwoOptOperator {
    pub fn new(params: TwoOptOperatorParams) -> Self {
        debug_assert!(params.first_route_id < params.second_route_id);
        Self { params }
    }

    pub fn params(&self) -> &TwoOptOperatorParams {
        &self.params
    }
}

impl NeighborhoodOperator for TwoOptOperator {
    fn generate_moves<C>(_instance: &Instance, solution: &Solution, mut consumer: C)
    where
        C: FnMut(Self),
    {
        for first_route_id in solution.route_ids() {
            for second_route_id in solution.route_ids().skip(first_route_id.get() + 1) {
                let first_len = solution.route(first_route_id).len();
                let second_len = solution.route(second_route_id).len();

                for first_split in 1..first_len {
                    for second_split in 1..second_len {
                        consumer(TwoOptOperator::new(TwoOptOperatorParams {
                            first_route_id,
                            second_route_id,
                            first_split,
                            second_split,
                        }));
                    }
                }
            }
        }
    }

    fn apply(&self, solution: &mut Solution) {
        let (first, second) =
            solution.route_pair_mut(self.params.first_route_id, self.params.second_route_id);

        let first_tail = first.split_off(self.params.first_split);
        let second_tail = second.split_off(self.params.second_split);

        first.extend(second_tail);
        second.extend(first_tail);
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
                vehicle_id: 2,
                customer_ids: vec![5, 6, 7],
            },
            TestRoute {
                vehicle_id: 0,
                customer_ids: vec![8],
            },
        ])
    }

    #[test]
    fn test_generate_moves_count() {
        let instance = create_line_instance(8, vec![10, 10], 10);
        let mut count = 0;
        TwoOptOperator::generate_moves(&instance, &solution(), |op| {
            assert!(op.params().first_route_id < op.params().second_route_id);
            count += 1;
        });

        // Only the first pair has splits on both sides.
        assert_eq!(count, 3 * 2);
    }

    #[test]
    fn test_apply() {
        let mut solution = solution();

        TwoOptOperator::new(TwoOptOperatorParams {
            first_route_id: RouteIdx::new(0),
            second_route_id: RouteIdx::new(1),
            first_split: 2,
            second_split: 1,
        })
        .apply(&mut solution);

        assert_eq!(
            route_customers(&solution),
            vec![(1, vec![1, 2, 6, 7]), (2, vec![5, 3, 4]), (0, vec![8])]
        );
    }
}
