use std::path::PathBuf;

use crate::{
    problem::{
        customer::Customer,
        fleet::VehicleId,
        instance::{Instance, InstanceBuilder},
        time_window::TimeWindow,
    },
    solver::solution::{route::Route, solution::Solution},
};

pub fn data_fixture_path(fixture: &str) -> PathBuf {
    let current_working_dir = std::env::current_dir().unwrap();

    current_working_dir
        .join("../../data/fixtures/")
        .join(fixture)
        .canonicalize()
        .unwrap()
}

pub struct TestCustomer {
    pub location: (i64, i64),
    pub demand: i64,
    pub time_window: (i64, i64),
}

impl TestCustomer {
    pub fn new(location: (i64, i64), demand: i64, time_window: (i64, i64)) -> Self {
        TestCustomer {
            location,
            demand,
            time_window,
        }
    }

    pub fn depot(location: (i64, i64), closes_at: i64) -> Self {
        TestCustomer::new(location, 0, (0, closes_at))
    }
}

/// Customers get their position in `customers` as id, so the depot goes first.
pub fn create_test_instance(
    customers: Vec<TestCustomer>,
    capacities: Vec<i64>,
    q0: i64,
) -> Instance {
    let mut builder = InstanceBuilder::default();

    builder
        .set_customers(
            customers
                .into_iter()
                .enumerate()
                .map(|(id, customer)| {
                    let (start, end) = customer.time_window;
                    Customer::new(
                        id,
                        customer.location,
                        customer.demand,
                        TimeWindow::new(start, end),
                        0,
                    )
                })
                .collect(),
        )
        .set_capacities(capacities)
        .set_q0(q0);

    builder.build().unwrap()
}

/// `count` customers with unit demand and wide windows laid out on a line.
pub fn create_line_instance(count: usize, capacities: Vec<i64>, q0: i64) -> Instance {
    let mut customers = vec![TestCustomer::depot((0, 0), 10_000)];
    customers.extend(
        (1..=count).map(|i| TestCustomer::new((i as i64 * 10, 0), 1, (0, 10_000))),
    );

    create_test_instance(customers, capacities, q0)
}

pub struct TestRoute {
    pub vehicle_id: usize,
    pub customer_ids: Vec<usize>,
}

pub fn create_test_solution(routes: Vec<TestRoute>) -> Solution {
    Solution::new(
        routes
            .into_iter()
            .map(|route| {
                Route::new(
                    VehicleId::new(route.vehicle_id),
                    route.customer_ids.into_iter().map(|id| id.into()).collect(),
                )
            })
            .collect(),
    )
}

pub fn route_customers(solution: &Solution) -> Vec<(usize, Vec<usize>)> {
    solution
        .routes()
        .iter()
        .map(|route| {
            (
                route.vehicle().get(),
                route.customers().iter().map(|id| id.get()).collect(),
            )
        })
        .collect()
}
