use std::f64::consts::PI;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use super::case_type::{CapacityDistribution, CaseType, LocationLayout, TimeWindowLength};

#[derive(Debug, Clone)]
pub struct GeneratorParams {
    /// Number of customer records, depot included.
    pub dimension: usize,
    /// Number of fixed vehicles. One more capacity is written, which the
    /// loader also reads as the type-0 capacity.
    pub vehicles: usize,
    pub case_type: CaseType,
    pub seed: u64,
    pub max_coord: i64,
    pub max_timespan: i64,
    pub max_capacity: i64,
}

impl GeneratorParams {
    pub fn new(dimension: usize, vehicles: usize, case_type: CaseType, seed: u64) -> Self {
        GeneratorParams {
            dimension,
            vehicles,
            case_type,
            seed,
            max_coord: 100,
            max_timespan: 1000,
            max_capacity: 750,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct GeneratedCustomer {
    id: usize,
    x: i64,
    y: i64,
    demand: i64,
    start: i64,
    end: i64,
    service_time: i64,
}

/// Uniform integer in `[low, high)`, or `low` when the range is empty.
fn uniform<R: Rng>(rng: &mut R, low: i64, high: i64) -> i64 {
    if high <= low {
        low
    } else {
        rng.random_range(low..high)
    }
}

fn random_demand<R: Rng>(rng: &mut R) -> i64 {
    15 * uniform(rng, 1, 3)
}

fn random_customers<R: Rng>(rng: &mut R, params: &GeneratorParams) -> Vec<GeneratedCustomer> {
    (1..params.dimension)
        .map(|id| GeneratedCustomer {
            id,
            x: uniform(rng, 0, params.max_coord),
            y: uniform(rng, 0, params.max_coord),
            demand: random_demand(rng),
            ..GeneratedCustomer::default()
        })
        .collect()
}

/// Customers grouped in clusters spread over the first quadrant, placed in
/// polar coordinates around a base angle and radius per cluster.
fn clustered_customers<R: Rng>(rng: &mut R, params: &GeneratorParams) -> Vec<GeneratedCustomer> {
    let dimension = params.dimension as i64;
    let count = params.dimension.saturating_sub(1);
    let clusters = uniform(rng, 2, dimension.isqrt());
    let spread = clusters as f64;

    let mut customers = Vec::with_capacity(count);

    for k in 0..clusters {
        let alpha = (0.5 * k as f64 / spread) * PI;
        let radius = 0.1 + rng.random::<f64>() * 0.9;

        let remaining = (count - customers.len()) as i64;
        let size = if k == clusters - 1 {
            remaining
        } else {
            let average = dimension / clusters;
            uniform(rng, average - 2, average + 3).clamp(0, remaining)
        };

        for _ in 0..size {
            let mut angle = alpha + (rng.random::<f64>() - 1.0) / spread;
            if angle < 0.0 {
                angle = angle.abs();
            }
            if angle > PI / 2.0 {
                angle = PI - angle;
            }
            let distance = radius + (rng.random::<f64>() - 1.0) / spread;

            let x = params.max_coord as f64 * distance * angle.cos();
            let y = params.max_coord as f64 * distance * angle.sin();

            customers.push(GeneratedCustomer {
                id: customers.len() + 1,
                x: x as i64,
                y: y as i64,
                demand: random_demand(rng),
                ..GeneratedCustomer::default()
            });
        }
    }

    customers
}

/// Replaces some clustered customers by the random customer with the same id.
fn combine<R: Rng>(
    rng: &mut R,
    params: &GeneratorParams,
    mut clustered: Vec<GeneratedCustomer>,
    random: &[GeneratedCustomer],
) -> Vec<GeneratedCustomer> {
    let dimension = params.dimension as i64;
    let degree = uniform(rng, dimension / 8, dimension / 2);

    if degree > 0 && !clustered.is_empty() {
        let step = dimension / degree;
        let last = clustered.len() - 1;

        for i in 0..degree {
            let index = (uniform(rng, step * i, step * (i + 1)) as usize).min(last);
            clustered[index] = random[index];
        }
    }

    clustered
}

fn assign_time_windows<R: Rng>(
    rng: &mut R,
    params: &GeneratorParams,
    customers: &mut [GeneratedCustomer],
) {
    let timespan = params.max_timespan;
    let base_width = match params.case_type.time_window_length() {
        TimeWindowLength::Narrow => timespan / 4,
        TimeWindowLength::Moderate => timespan / 2,
        TimeWindowLength::Wide => 3 * timespan / 4,
    };

    for customer in customers {
        let width = uniform(
            rng,
            base_width - timespan / 16,
            base_width + timespan / 16,
        );

        customer.start = uniform(rng, 0, timespan - width);
        customer.end = customer.start + width;
        customer.service_time = timespan / 11;
    }
}

fn vehicle_capacities<R: Rng>(rng: &mut R, params: &GeneratorParams) -> Vec<i64> {
    let count = params.vehicles + 1;
    let max = params.max_capacity;

    match params.case_type.capacity_distribution() {
        CapacityDistribution::Equal => vec![uniform(rng, 2 * max / 3, max + 1); count],
        CapacityDistribution::ModeratelyRandom => (0..count)
            .map(|_| uniform(rng, 2 * max / 3, max + 1))
            .collect(),
        CapacityDistribution::TotallyRandom => {
            (0..count).map(|_| uniform(rng, 1, max + 1)).collect()
        }
    }
}

/// Generates a random instance in the flat-file format.
///
/// The output only depends on `params`: the same seed always yields the same
/// text.
#[instrument(skip_all, fields(case_type = params.case_type.get(), seed = params.seed), level = "debug")]
pub fn generate(params: &GeneratorParams) -> String {
    let mut rng = SmallRng::seed_from_u64(params.seed);

    let random = random_customers(&mut rng, params);
    let clustered = clustered_customers(&mut rng, params);

    let mut customers = match params.case_type.location_layout() {
        LocationLayout::Random => random,
        LocationLayout::Clustered => clustered,
        LocationLayout::Combined => combine(&mut rng, params, clustered, &random),
    };

    assign_time_windows(&mut rng, params, &mut customers);

    let depot_offset = params.max_coord / 8;
    customers.push(GeneratedCustomer {
        id: 0,
        x: params.max_coord / 2 + uniform(&mut rng, -depot_offset, depot_offset),
        y: params.max_coord / 2 + uniform(&mut rng, -depot_offset, depot_offset),
        demand: 10,
        start: 0,
        end: params.max_timespan,
        service_time: 0,
    });

    let capacities = vehicle_capacities(&mut rng, params);

    debug!(
        customers = customers.len(),
        vehicles = capacities.len(),
        "Instance generated"
    );

    let header = format!(
        "N={}, M={}, random seed={}, case type={}\n\nVehicle\nNumber\t\t\tCapacities",
        params.dimension,
        capacities.len(),
        params.seed,
        params.case_type
    );

    let vehicles = capacities
        .iter()
        .map(|capacity| format!("{capacity} "))
        .collect::<String>();

    let records = customers
        .iter()
        .map(|customer| {
            format!(
                "{} {} {} {} {} {} {}\n",
                customer.id,
                customer.x,
                customer.y,
                customer.demand,
                customer.start,
                customer.end,
                customer.service_time
            )
        })
        .collect::<String>();

    [
        header,
        format!("{}\t\t\t{vehicles}\n\n\n", capacities.len()),
        records,
    ]
    .join("\n")
}
