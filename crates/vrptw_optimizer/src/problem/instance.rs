use fxhash::FxHashSet;
use thiserror::Error;

use super::{
    customer::{Customer, CustomerId},
    fleet::{Fleet, VehicleId},
    travel_matrices::{Distance, Time, TravelMatrices},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("missing depot: no customer record with id 0")]
    MissingDepot,
    #[error("customer id {id} is out of range, ids must be contiguous from 0 to {max}")]
    InvalidCustomerId { id: usize, max: usize },
    #[error("customer {0} is defined more than once")]
    DuplicateCustomer(usize),
}

/// A loaded problem instance. Built once, then shared read-only by the solver.
#[derive(Debug, Clone)]
pub struct Instance {
    customers: Vec<Customer>,
    fleet: Fleet,
    matrices: TravelMatrices,
}

impl Instance {
    /// Number of customer records, depot included.
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer(&self, id: CustomerId) -> &Customer {
        &self.customers[id]
    }

    pub fn depot(&self) -> &Customer {
        &self.customers[CustomerId::DEPOT]
    }

    /// Ids of every customer that has to be served, i.e. all but the depot.
    pub fn customer_ids(&self) -> impl Iterator<Item = CustomerId> + '_ {
        (1..self.customers.len()).map(CustomerId::from)
    }

    pub fn demand(&self, id: CustomerId) -> i64 {
        self.customers[id].demand()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn q0(&self) -> i64 {
        self.fleet.q0()
    }

    pub fn vehicle_capacity(&self, vehicle: VehicleId) -> Option<i64> {
        self.fleet.capacity(vehicle)
    }

    #[inline]
    pub fn travel_distance(&self, from: CustomerId, to: CustomerId) -> Distance {
        self.matrices.travel_distance(from, to)
    }

    #[inline]
    pub fn travel_time(&self, from: CustomerId, to: CustomerId) -> Time {
        self.matrices.travel_time(from, to)
    }
}

#[derive(Default)]
pub struct InstanceBuilder {
    customers: Vec<Customer>,
    capacities: Vec<i64>,
    q0: i64,
}

impl InstanceBuilder {
    pub fn set_customers(&mut self, customers: Vec<Customer>) -> &mut InstanceBuilder {
        self.customers = customers;
        self
    }

    pub fn add_customer(&mut self, customer: Customer) -> &mut InstanceBuilder {
        self.customers.push(customer);
        self
    }

    pub fn set_capacities(&mut self, capacities: Vec<i64>) -> &mut InstanceBuilder {
        self.capacities = capacities;
        self
    }

    pub fn set_q0(&mut self, q0: i64) -> &mut InstanceBuilder {
        self.q0 = q0;
        self
    }

    /// Validates the customer ids and precomputes the travel matrices.
    ///
    /// Records may come in any order; they are re-ordered by id.
    pub fn build(self) -> Result<Instance, InstanceError> {
        let mut customers = self.customers;

        if !customers.iter().any(|customer| customer.id().is_depot()) {
            return Err(InstanceError::MissingDepot);
        }

        let mut seen = FxHashSet::default();
        for customer in &customers {
            if !seen.insert(customer.id()) {
                return Err(InstanceError::DuplicateCustomer(customer.id().get()));
            }
        }

        let max = customers.len() - 1;
        if let Some(customer) = customers.iter().find(|customer| customer.id().get() > max) {
            return Err(InstanceError::InvalidCustomerId {
                id: customer.id().get(),
                max,
            });
        }

        customers.sort_by_key(|customer| customer.id());
        let matrices = TravelMatrices::from_euclidean(&customers);

        Ok(Instance {
            customers,
            fleet: Fleet::new(self.capacities, self.q0),
            matrices,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::problem::time_window::TimeWindow;

    use super::*;

    fn customer(id: usize, x: i64, y: i64) -> Customer {
        Customer::new(id, (x, y), 1, TimeWindow::new(0, 100), 0)
    }

    #[test]
    fn test_build_sorts_customers() {
        let mut builder = InstanceBuilder::default();
        builder
            .add_customer(customer(2, 0, 10))
            .add_customer(customer(0, 0, 0))
            .add_customer(customer(1, 10, 0))
            .set_capacities(vec![5])
            .set_q0(3);

        let instance = builder.build().unwrap();

        assert_eq!(instance.num_customers(), 3);
        assert_eq!(instance.depot().id(), CustomerId::DEPOT);
        assert_eq!(instance.customer(2.into()).y(), 10);
        assert_eq!(instance.travel_time(0.into(), 2.into()), 10);
        assert_eq!(
            instance.customer_ids().collect::<Vec<_>>(),
            vec![CustomerId::new(1), CustomerId::new(2)]
        );
        assert_eq!(instance.vehicle_capacity(VehicleId::new(1)), Some(5));
        assert_eq!(instance.q0(), 3);
    }

    #[test]
    fn test_missing_depot() {
        let mut builder = InstanceBuilder::default();
        builder.add_customer(customer(1, 0, 0));

        assert_eq!(builder.build().unwrap_err(), InstanceError::MissingDepot);
    }

    #[test]
    fn test_duplicate_customer() {
        let mut builder = InstanceBuilder::default();
        builder
            .add_customer(customer(0, 0, 0))
            .add_customer(customer(1, 0, 0))
            .add_customer(customer(1, 5, 5));

        assert_eq!(
            builder.build().unwrap_err(),
            InstanceError::DuplicateCustomer(1)
        );
    }

    #[test]
    fn test_non_contiguous_ids() {
        let mut builder = InstanceBuilder::default();
        builder
            .add_customer(customer(0, 0, 0))
            .add_customer(customer(3, 0, 0));

        assert_eq!(
            builder.build().unwrap_err(),
            InstanceError::InvalidCustomerId { id: 3, max: 1 }
        );
    }
}
