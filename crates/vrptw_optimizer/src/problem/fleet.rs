use fxhash::FxHashSet;
use serde::Serialize;

use crate::define_index_newtype;

define_index_newtype!(VehicleId);

impl VehicleId {
    /// The unlimited-supply vehicle class. It may serve any number of routes.
    pub const TYPE_ZERO: VehicleId = VehicleId::new(0);

    pub fn is_type_zero(&self) -> bool {
        *self == Self::TYPE_ZERO
    }

    pub fn is_fixed(&self) -> bool {
        !self.is_type_zero()
    }
}

/// Heterogeneous fleet: `V` fixed vehicles, each usable on at most one route,
/// plus an unbounded supply of type-0 vehicles of capacity `q0`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    /// Capacity of fixed vehicle `k` is stored at `k - 1`.
    capacities: Vec<i64>,
    q0: i64,
}

impl Fleet {
    pub fn new(capacities: Vec<i64>, q0: i64) -> Self {
        Fleet { capacities, q0 }
    }

    pub fn fixed_count(&self) -> usize {
        self.capacities.len()
    }

    pub fn q0(&self) -> i64 {
        self.q0
    }

    pub fn fixed_capacities(&self) -> &[i64] {
        &self.capacities
    }

    /// `None` for ids past the last fixed vehicle.
    pub fn capacity(&self, vehicle: VehicleId) -> Option<i64> {
        if vehicle.is_type_zero() {
            Some(self.q0)
        } else {
            self.capacities.get(vehicle.get() - 1).copied()
        }
    }

    pub fn fixed_vehicles(&self) -> impl Iterator<Item = VehicleId> + '_ {
        (1..=self.capacities.len()).map(VehicleId::from)
    }

    /// Fixed vehicles that are not in `used`, in id order.
    pub fn unused_fixed_vehicles(&self, used: &FxHashSet<VehicleId>) -> Vec<VehicleId> {
        self.fixed_vehicles()
            .filter(|vehicle| !used.contains(vehicle))
            .collect()
    }
}
