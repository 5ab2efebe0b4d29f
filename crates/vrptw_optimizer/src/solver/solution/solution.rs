use std::fmt;

use fxhash::FxHashSet;
use serde::Serialize;

use crate::problem::{fleet::VehicleId, instance::Instance};

use super::{route::Route, route_id::RouteIdx};

/// An ordered collection of routes.
///
/// Solutions have value semantics: a neighbor is a clone of the current
/// solution with exactly one structural edit applied.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    pub fn new(routes: Vec<Route>) -> Self {
        Solution { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, route_id: RouteIdx) -> &Route {
        &self.routes[route_id]
    }

    pub fn route_mut(&mut self, route_id: RouteIdx) -> &mut Route {
        &mut self.routes[route_id]
    }

    /// Mutable access to two distinct routes at once.
    pub fn route_pair_mut(&mut self, first: RouteIdx, second: RouteIdx) -> (&mut Route, &mut Route) {
        debug_assert!(first < second);
        let (head, tail) = self.routes.split_at_mut(second.get());
        (&mut head[first.get()], &mut tail[0])
    }

    pub fn push_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn route_ids(&self) -> impl Iterator<Item = RouteIdx> {
        (0..self.routes.len()).map(RouteIdx::from)
    }

    pub fn used_fixed_vehicles(&self) -> FxHashSet<VehicleId> {
        self.routes
            .iter()
            .map(|route| route.vehicle())
            .filter(|vehicle| vehicle.is_fixed())
            .collect()
    }

    /// Fixed vehicles of the instance no route of this solution uses.
    pub fn unused_fixed_vehicles(&self, instance: &Instance) -> Vec<VehicleId> {
        instance
            .fleet()
            .unused_fixed_vehicles(&self.used_fixed_vehicles())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.routes.len())?;
        for route in &self.routes {
            writeln!(f, "{route}")?;
        }
        Ok(())
    }
}
