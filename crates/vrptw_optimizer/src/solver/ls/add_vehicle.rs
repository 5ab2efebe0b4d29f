use std::iter;

use crate::{
    problem::{fleet::VehicleId, instance::Instance},
    solver::{
        ls::r#move::NeighborhoodOperator,
        solution::{route::Route, route_id::RouteIdx, solution::Solution},
    },
};

/// **Add Vehicle**
///
/// Cuts a route and moves its tail to a new route served by an unused fixed
/// vehicle or by a type-0 vehicle. The new route is appended last.
///
/// ```text
/// BEFORE:
///    R1: 0 -> A -> B | C -> D -> 0
///
/// AFTER:
///    R1: 0 -> A -> B -> 0
///    R2: 0 -> C -> D -> 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddVehicleOperator {
    params: AddVehicleOperatorParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddVehicleOperatorParams {
    pub route_id: RouteIdx,
    pub split: usize,
    pub vehicle: VehicleId,
}

impl AddVehicleOperator {
    pub fn new(params: AddVehicleOperatorParams) -> Self {
        debug_assert!(params.split > 0);
        Self { params }
    }

    pub fn params(&self) -> &AddVehicleOperatorParams {
        &self.params
    }
}

impl NeighborhoodOperator for AddVehicleOperator {
    fn generate_moves<C>(instance: &Instance, solution: &Solution, mut consumer: C)
    where
        C: FnMut(Self),
    {
        let candidates = solution
            .unused_fixed_vehicles(instance)
            .into_iter()
            .chain(iter::once(VehicleId::TYPE_ZERO));

        for vehicle in candidates {
            for route_id in solution.route_ids() {
                for split in 1..solution.route(route_id).len() {
                    consumer(AddVehicleOperator::new(AddVehicleOperatorParams {
                        route_id,
                        split,
                        vehicle,
                    }));
                }
            }
        }
    }

    fn apply(&self, solution: &mut Solution) {
        let tail = solution
            .route_mut(self.params.route_id)
            .split_off(self.params.split);

        solution.push_route(Route::new(self.params.vehicle, tail));
    }
}
