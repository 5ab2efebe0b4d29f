use tracing::{debug, instrument};

use crate::{
    problem::{customer::CustomerId, fleet::VehicleId, instance::Instance},
    solver::{
        error::SolverError,
        solution::{route::Route, solution::Solution},
    },
};

/// Fixed vehicles ordered by capacity, largest first. Ties keep id order.
fn vehicles_by_capacity(instance: &Instance) -> Vec<(VehicleId, i64)> {
    let mut vehicles = instance
        .fleet()
        .fixed_vehicles()
        .zip(instance.fleet().fixed_capacities().iter().copied())
        .collect::<Vec<_>>();

    vehicles.sort_by(|(_, a), (_, b)| b.cmp(a));
    vehicles
}

/// Greedy capacity packing.
///
/// Customers are taken in id order and packed into the largest remaining fixed
/// vehicle until the next one does not fit. Fixed vehicles stop being used as
/// soon as one of them cannot take a single customer; whatever is left is
/// packed into type-0 routes.
#[instrument(skip_all, level = "debug")]
pub fn construct_solution(instance: &Instance) -> Result<Solution, SolverError> {
    let customers = instance.customer_ids().collect::<Vec<_>>();
    let mut solution = Solution::default();
    let mut next = 0;

    for (vehicle, capacity) in vehicles_by_capacity(instance) {
        if next == customers.len() {
            break;
        }

        let taken = take_while_fits(instance, &customers[next..], capacity);
        if taken == 0 {
            break;
        }

        solution.push_route(Route::new(
            vehicle,
            customers[next..next + taken].to_vec(),
        ));
        next += taken;
    }

    let fixed_routes = solution.len();
    pack_type_zero(instance, &customers[next..], &mut solution)?;

    debug!(
        fixed_routes,
        type_zero_routes = solution.len() - fixed_routes,
        "Initial solution built"
    );

    Ok(solution)
}

/// Length of the longest prefix of `customers` whose demand fits `capacity`.
fn take_while_fits(instance: &Instance, customers: &[CustomerId], capacity: i64) -> usize {
    let mut load = 0;

    customers
        .iter()
        .take_while(|&&customer| {
            load += instance.demand(customer);
            load <= capacity
        })
        .count()
}

fn pack_type_zero(
    instance: &Instance,
    customers: &[CustomerId],
    solution: &mut Solution,
) -> Result<(), SolverError> {
    let q0 = instance.q0();
    let mut current = vec![];
    let mut load = 0;

    for &customer in customers {
        let demand = instance.demand(customer);
        if demand > q0 {
            return Err(SolverError::InfeasibleInstance {
                customer,
                demand,
                q0,
            });
        }

        if load + demand > q0 {
            solution.push_route(Route::new(
                VehicleId::TYPE_ZERO,
                std::mem::take(&mut current),
            ));
            load = 0;
        }

        load += demand;
        current.push(customer);
    }

    if !current.is_empty() {
        solution.push_route(Route::new(VehicleId::TYPE_ZERO, current));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        solver::feasibility::validate,
        test_utils::{TestCustomer, create_line_instance, create_test_instance, route_customers},
    };

    use super::*;

    #[test]
    fn test_largest_vehicle_first() {
        let instance = create_line_instance(6, vec![2, 3, 3], 10);

        let solution = construct_solution(&instance).unwrap();

        assert_eq!(
            route_customers(&solution),
            vec![(2, vec![1, 2, 3]), (3, vec![4, 5, 6])]
        );
        assert!(validate(&instance, &solution).is_empty());
    }

    #[test]
    fn test_remainder_goes_to_type_zero() {
        let instance = create_line_instance(7, vec![2, 3], 2);

        let solution = construct_solution(&instance).unwrap();

        assert_eq!(
            route_customers(&solution),
            vec![
                (2, vec![1, 2, 3]),
                (1, vec![4, 5]),
                (0, vec![6, 7]),
            ]
        );
    }

    #[test]
    fn test_stops_using_fixed_vehicles_when_one_takes_nothing() {
        let instance = create_test_instance(
            vec![
                TestCustomer::depot((0, 0), 1000),
                TestCustomer::new((1, 0), 4, (0, 1000)),
                TestCustomer::new((2, 0), 5, (0, 1000)),
                TestCustomer::new((3, 0), 1, (0, 1000)),
            ],
            vec![4, 3, 1],
            6,
        );

        let solution = construct_solution(&instance).unwrap();

        // Vehicle 2 cannot take customer 2, so vehicle 3 is never tried.
        assert_eq!(
            route_customers(&solution),
            vec![(1, vec![1]), (0, vec![2, 3])]
        );
    }

    #[test]
    fn test_infeasible_type_zero_demand() {
        let instance = create_test_instance(
            vec![
                TestCustomer::depot((0, 0), 1000),
                TestCustomer::new((1, 0), 2, (0, 1000)),
                TestCustomer::new((2, 0), 9, (0, 1000)),
            ],
            vec![2],
            5,
        );

        let error = construct_solution(&instance).unwrap_err();

        assert!(matches!(
            error,
            SolverError::InfeasibleInstance {
                customer,
                demand: 9,
                q0: 5
            } if customer == CustomerId::new(2)
        ));
    }

    #[test]
    fn test_only_depot() {
        let instance = create_line_instance(0, vec![5], 5);

        let solution = construct_solution(&instance).unwrap();

        assert!(solution.is_empty());
    }
}
