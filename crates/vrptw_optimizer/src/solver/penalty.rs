use tracing::instrument;

use crate::{
    piecewise::PiecewiseFunction, problem::instance::Instance, solver::solution::route::Route,
};

/// Minimal penalty over every departure time, as a function of the time the
/// vehicle is back at the depot.
///
/// `f₀ = 0`, then for every leg `prev → cur`:
/// `fₕ = min(shift(fₕ₋₁, −t(prev, cur)) + penalty(window(cur)))`.
pub fn arrival_penalty_function(instance: &Instance, route: &Route, penalty: i64) -> PiecewiseFunction {
    route
        .legs()
        .fold(PiecewiseFunction::zero(), |f, (from, to)| {
            let window = instance.customer(to).time_window().penalty_function(penalty);
            f.shift(-instance.travel_time(from, to)).add(&window).min()
        })
}

/// Smallest total time-window penalty achievable on `route`, each violated
/// stop costing a flat `penalty`.
#[instrument(level = "trace", skip_all, fields(route = %route))]
pub fn route_penalty(instance: &Instance, route: &Route, penalty: i64) -> i64 {
    arrival_penalty_function(instance, route, penalty)
        .evaluate(instance.depot().time_window().end())
}
