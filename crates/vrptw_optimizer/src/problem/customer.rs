use serde::Serialize;

use crate::define_index_newtype;

use super::time_window::TimeWindow;

define_index_newtype!(CustomerId => Customer);

impl CustomerId {
    /// The depot is always the record with id `0`.
    pub const DEPOT: CustomerId = CustomerId::new(0);

    pub fn is_depot(&self) -> bool {
        *self == Self::DEPOT
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    x: i64,
    y: i64,
    demand: i64,
    time_window: TimeWindow,
    service_time: i64,
}

impl Customer {
    pub fn new(
        id: usize,
        (x, y): (i64, i64),
        demand: i64,
        time_window: TimeWindow,
        service_time: i64,
    ) -> Self {
        Customer {
            id: id.into(),
            x,
            y,
            demand,
            time_window,
            service_time,
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn demand(&self) -> i64 {
        self.demand
    }

    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    /// Loaded and written back out, but not part of the travel-time model.
    pub fn service_time(&self) -> i64 {
        self.service_time
    }

    pub fn euclidean_distance(&self, to: &Customer) -> f64 {
        let delta_x = (self.x - to.x) as f64;
        let delta_y = (self.y - to.y) as f64;
        (delta_x * delta_x + delta_y * delta_y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let a = Customer::new(0, (0, 0), 0, TimeWindow::new(0, 100), 0);
        let b = Customer::new(1, (3, 4), 5, TimeWindow::new(0, 100), 0);

        assert_eq!(a.euclidean_distance(&b), 5.0);
        assert_eq!(b.euclidean_distance(&a), 5.0);
        assert!(a.id().is_depot());
        assert!(!b.id().is_depot());
    }
}
