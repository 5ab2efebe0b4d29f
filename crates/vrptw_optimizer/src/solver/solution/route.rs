use std::{fmt, iter};

use serde::Serialize;

use crate::problem::{customer::CustomerId, fleet::VehicleId, instance::Instance};

/// A vehicle and the customers it visits, in order. The depot is implicit at
/// both ends and never stored.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    vehicle: VehicleId,
    customers: Vec<CustomerId>,
}

impl Route {
    pub fn new(vehicle: VehicleId, customers: Vec<CustomerId>) -> Self {
        Route { vehicle, customers }
    }

    pub fn vehicle(&self) -> VehicleId {
        self.vehicle
    }

    pub fn set_vehicle(&mut self, vehicle: VehicleId) {
        self.vehicle = vehicle;
    }

    pub fn customers(&self) -> &[CustomerId] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Customer sequence framed by the depot on both sides.
    pub fn with_depots(&self) -> impl Iterator<Item = CustomerId> + '_ {
        iter::once(CustomerId::DEPOT)
            .chain(self.customers.iter().copied())
            .chain(iter::once(CustomerId::DEPOT))
    }

    /// Consecutive `(from, to)` legs, depot to depot.
    pub fn legs(&self) -> impl Iterator<Item = (CustomerId, CustomerId)> + '_ {
        self.with_depots().zip(self.with_depots().skip(1))
    }

    pub fn load(&self, instance: &Instance) -> i64 {
        self.customers
            .iter()
            .map(|&customer| instance.demand(customer))
            .sum()
    }

    pub fn distance(&self, instance: &Instance) -> f64 {
        self.legs()
            .map(|(from, to)| instance.travel_distance(from, to))
            .sum()
    }

    /// Moves `[from, from + len)` so that it starts at position `to` of the
    /// sequence left after removal.
    pub fn relocate_segment(&mut self, from: usize, len: usize, to: usize) {
        let segment = self.customers.drain(from..from + len).collect::<Vec<_>>();
        self.customers.splice(to..to, segment);
    }

    /// Removes and returns everything from position `at` on.
    pub fn split_off(&mut self, at: usize) -> Vec<CustomerId> {
        self.customers.split_off(at)
    }

    pub fn extend(&mut self, customers: impl IntoIterator<Item = CustomerId>) {
        self.customers.extend(customers);
    }

    /// Replaces `[at, at + replacement.len())` with `replacement` and returns
    /// what was there.
    pub fn replace_segment(&mut self, at: usize, replacement: &[CustomerId]) -> Vec<CustomerId> {
        self.customers
            .splice(at..at + replacement.len(), replacement.iter().copied())
            .collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vehicle)?;
        for customer in self.with_depots() {
            write!(f, " {customer}")?;
        }
        Ok(())
    }
}
