use super::customer::{Customer, CustomerId};

pub type Distance = f64;
pub type Time = i64;

/// Distances and travel times between every pair of customers, stored flat.
///
/// The entry for a pair lives at `from * num_locations + to`. Travel time is
/// the Euclidean distance truncated toward zero.
#[derive(Debug, Clone)]
pub struct TravelMatrices {
    distances: Vec<Distance>,
    times: Vec<Time>,
    num_locations: usize,
}

impl TravelMatrices {
    pub fn from_euclidean(customers: &[Customer]) -> Self {
        let num_locations = customers.len();
        let mut distances = vec![0.0; num_locations * num_locations];
        let mut times = vec![0; num_locations * num_locations];

        for (i, from) in customers.iter().enumerate() {
            for (j, to) in customers.iter().enumerate().skip(i + 1) {
                let distance = from.euclidean_distance(to);
                let time = distance.trunc() as Time;

                distances[i * num_locations + j] = distance;
                distances[j * num_locations + i] = distance;
                times[i * num_locations + j] = time;
                times[j * num_locations + i] = time;
            }
        }

        TravelMatrices {
            distances,
            times,
            num_locations,
        }
    }

    #[inline(always)]
    fn index(&self, from: CustomerId, to: CustomerId) -> usize {
        from.get() * self.num_locations + to.get()
    }

    #[inline]
    pub fn travel_distance(&self, from: CustomerId, to: CustomerId) -> Distance {
        self.distances[self.index(from, to)]
    }

    #[inline]
    pub fn travel_time(&self, from: CustomerId, to: CustomerId) -> Time {
        self.times[self.index(from, to)]
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }
}
