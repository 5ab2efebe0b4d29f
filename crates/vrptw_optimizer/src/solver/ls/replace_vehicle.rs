use crate::{
    problem::{fleet::VehicleId, instance::Instance},
    solver::{
        ls::r#move::NeighborhoodOperator,
        solution::{route_id::RouteIdx, solution::Solution},
    },
};

/// **Replace Vehicle**
///
/// Serves a route with a fixed vehicle no other route uses, or demotes a
/// fixed-vehicle route to type-0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceVehicleOperator {
    params: ReplaceVehicleOperatorParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceVehicleOperatorParams {
    pub route_id: RouteIdx,
    pub vehicle: VehicleId,
}

impl ReplaceVehicleOperator {
    pub fn new(params: ReplaceVehicleOperatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ReplaceVehicleOperatorParams {
        &self.params
    }
}

impl NeighborhoodOperator for ReplaceVehicleOperator {
    fn generate_moves<C>(instance: &Instance, solution: &Solution, mut consumer: C)
    where
        C: FnMut(Self),
    {
        let unused = solution.unused_fixed_vehicles(instance);

        for route_id in solution.route_ids() {
            for &vehicle in &unused {
                consumer(ReplaceVehicleOperator::new(ReplaceVehicleOperatorParams {
                    route_id,
                    vehicle,
                }));
            }

            if solution.route(route_id).vehicle().is_fixed() {
                consumer(ReplaceVehicleOperator::new(ReplaceVehicleOperatorParams {
                    route_id,
                    vehicle: VehicleId::TYPE_ZERO,
                }));
            }
        }
    }

    fn apply(&self, solution: &mut Solution) {
        solution
            .route_mut(self.params.route_id)
            .set_vehicle(self.params.vehicle);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{TestRoute, create_line_instance, create_test_solution, route_customers};

    use super::*;

    fn solution() -> Solution {
        create_test_solution(vec![
            TestRoute {
                vehicle_id: 2,
                customer_ids: vec![1, 2],
            },
            TestRoute {
                vehicle_id: 0,
                customer_ids: vec![3],
            },
        ])
    }

    #[test]
    fn test_generate_moves() {
        let instance = create_line_instance(3, vec![5, 5, 5], 5);
        let mut moves = vec![];
        ReplaceVehicleOperator::generate_moves(&instance, &solution(), |op| {
            moves.push((op.params().route_id.get(), op.params().vehicle.get()));
        });

        assert_eq!(
            moves,
            vec![(0, 1), (0, 3), (0, 0), (1, 1), (1, 3)]
        );
    }

    #[test]
    fn test_apply() {
        let mut solution = solution();

        ReplaceVehicleOperator::new(ReplaceVehicleOperatorParams {
            route_id: RouteIdx::new(1),
            vehicle: VehicleId::new(3),
        })
        .apply(&mut solution);

        assert_eq!(
            route_customers(&solution),
            vec![(2, vec![1, 2]), (3, vec![3])]
        );
    }
}
