use fxhash::FxHashSet;
use thiserror::Error;

use crate::problem::{customer::CustomerId, fleet::VehicleId, instance::Instance};

use super::solution::{route::Route, route_id::RouteIdx, solution::Solution};

/// When enabled, the local search validates the structure of every adopted
/// solution and panics on the first violation.
pub const RUN_SOLUTION_ASSERTIONS: bool = false;

/// Capacity check for one route. Routes served by an unknown vehicle are
/// never feasible.
pub fn is_route_feasible(instance: &Instance, route: &Route) -> bool {
    instance
        .vehicle_capacity(route.vehicle())
        .is_some_and(|capacity| route.load(instance) <= capacity)
}

/// Time windows are priced by the objective, so only capacities are checked.
pub fn is_feasible(instance: &Instance, solution: &Solution) -> bool {
    solution
        .routes()
        .iter()
        .all(|route| is_route_feasible(instance, route))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("route {route} carries {load} but vehicle capacity is {capacity}")]
    CapacityExceeded {
        route: RouteIdx,
        load: i64,
        capacity: i64,
    },
    #[error("route {route} uses unknown vehicle {vehicle}")]
    UnknownVehicle { route: RouteIdx, vehicle: VehicleId },
    #[error("fixed vehicle {0} serves more than one route")]
    DuplicateVehicle(VehicleId),
    #[error("route {0} visits the depot")]
    DepotInRoute(RouteIdx),
    #[error("customer {0} is visited more than once")]
    DuplicateCustomer(CustomerId),
    #[error("customer {0} is not visited")]
    MissingCustomer(CustomerId),
    #[error("customer {0} does not exist")]
    UnknownCustomer(CustomerId),
}

/// Full structural validation: capacities, the customer partition and
/// uniqueness of fixed vehicles.
pub fn validate(instance: &Instance, solution: &Solution) -> Vec<Violation> {
    let mut violations = vec![];
    let mut vehicles = FxHashSet::default();
    let mut visited = FxHashSet::default();

    for (route_id, route) in solution.route_ids().zip(solution.routes()) {
        if route.vehicle().is_fixed() && !vehicles.insert(route.vehicle()) {
            violations.push(Violation::DuplicateVehicle(route.vehicle()));
        }

        for &customer in route.customers() {
            if customer.is_depot() {
                violations.push(Violation::DepotInRoute(route_id));
            } else if customer.get() >= instance.num_customers() {
                violations.push(Violation::UnknownCustomer(customer));
            } else if !visited.insert(customer) {
                violations.push(Violation::DuplicateCustomer(customer));
            }
        }

        // Unknown customers have no demand to sum up.
        if route
            .customers()
            .iter()
            .any(|customer| customer.get() >= instance.num_customers())
        {
            continue;
        }

        match instance.vehicle_capacity(route.vehicle()) {
            Some(capacity) => {
                let load = route.load(instance);
                if load > capacity {
                    violations.push(Violation::CapacityExceeded {
                        route: route_id,
                        load,
                        capacity,
                    });
                }
            }
            None => violations.push(Violation::UnknownVehicle {
                route: route_id,
                vehicle: route.vehicle(),
            }),
        }
    }

    violations.extend(
        instance
            .customer_ids()
            .filter(|customer| !visited.contains(customer))
            .map(Violation::MissingCustomer),
    );

    violations
}
