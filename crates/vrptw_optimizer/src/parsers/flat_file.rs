use std::path::Path;

use anyhow::{Context, anyhow, bail};

use crate::{
    parsers::parser::DatasetParser,
    problem::{
        customer::Customer,
        instance::{Instance, InstanceBuilder, InstanceError},
        time_window::TimeWindow,
    },
};

/// Zero-based index of the `<V> <cap_1> ... <cap_V> ... <q0>` line.
const VEHICLE_LINE: usize = 4;

/// Zero-based index of the first customer line.
const FIRST_CUSTOMER_LINE: usize = 8;

const CUSTOMER_FIELDS: usize = 7;

/// Plain-text instance format:
///
/// ```text
/// <free text>
///
/// Vehicle
/// Number  Capacities
/// 2  200 150  100
///
///
///
/// 0 50 50 10 0 1000 0
/// 1 12 80 15 200 400 90
/// ```
///
/// Line 5 holds the number of fixed vehicles, their capacities and, last, the
/// type-0 capacity. Every non-blank line from line 9 on is a customer record
/// `id x y demand start end service_time`. The depot is the record with id 0.
pub struct FlatFileParser;

impl DatasetParser for FlatFileParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<Instance, anyhow::Error> {
        let path = file.as_ref();
        let file_content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;

        let instance = parse(&file_content)
            .with_context(|| format!("Invalid instance file {}", path.display()))?;

        Ok(instance.build()?)
    }
}

#[derive(Debug, Clone)]
pub struct FlatFileInstance {
    pub capacities: Vec<i64>,
    pub q0: i64,
    pub customers: Vec<Customer>,
}

impl FlatFileInstance {
    pub fn build(self) -> Result<Instance, InstanceError> {
        let mut builder = InstanceBuilder::default();
        builder
            .set_capacities(self.capacities)
            .set_q0(self.q0)
            .set_customers(self.customers);

        builder.build()
    }
}

fn parse_integers(line: &str) -> Result<Vec<i64>, anyhow::Error> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| anyhow!("Invalid integer: {token}"))
        })
        .collect()
}

pub fn parse(text: &str) -> Result<FlatFileInstance, anyhow::Error> {
    let lines: Vec<&str> = text.lines().collect();

    let vehicle_line = lines
        .get(VEHICLE_LINE)
        .ok_or_else(|| anyhow!("Missing vehicle line (line {})", VEHICLE_LINE + 1))?;
    let values = parse_integers(vehicle_line)
        .with_context(|| format!("Invalid vehicle line (line {})", VEHICLE_LINE + 1))?;

    let (&count, rest) = values
        .split_first()
        .ok_or_else(|| anyhow!("Empty vehicle line (line {})", VEHICLE_LINE + 1))?;
    let count = usize::try_from(count).map_err(|_| anyhow!("Invalid vehicle count: {count}"))?;

    if rest.len() < count {
        bail!(
            "Expected {count} vehicle capacities, found {}",
            rest.len()
        );
    }

    let capacities = rest[..count].to_vec();
    // The vehicle line is not empty at this point.
    let q0 = values.last().copied().unwrap_or_default();

    let customers = lines
        .iter()
        .enumerate()
        .skip(FIRST_CUSTOMER_LINE)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_customer(line).with_context(|| format!("Invalid customer (line {})", index + 1))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FlatFileInstance {
        capacities,
        q0,
        customers,
    })
}

fn parse_customer(line: &str) -> Result<Customer, anyhow::Error> {
    let values = parse_integers(line)?;

    let [id, x, y, demand, start, end, service_time] = values[..] else {
        bail!(
            "Expected {CUSTOMER_FIELDS} fields, found {}",
            values.len()
        );
    };

    let id = usize::try_from(id).map_err(|_| anyhow!("Invalid customer id: {id}"))?;

    Ok(Customer::new(
        id,
        (x, y),
        demand,
        TimeWindow::new(start, end),
        service_time,
    ))
}

#[cfg(test)]
mod tests {
    use crate::{problem::fleet::VehicleId, test_utils::data_fixture_path};

    use super::*;

    const SAMPLE: &str = "N=3, M=2, random seed=1, case type=0

Vehicle
Number\t\t\tCapacities
2\t\t\t20 15 10



1 10 0 5 0 100 9
0 0 0 10 0 1000 0

2 10 10 5 20 80 9
";

    #[test]
    fn test_parse() {
        let instance = parse(SAMPLE).unwrap();

        assert_eq!(instance.capacities, vec![20, 15]);
        assert_eq!(instance.q0, 10);
        assert_eq!(instance.customers.len(), 3);
        assert_eq!(instance.customers[0].id().get(), 1);
        assert_eq!(instance.customers[2].time_window(), &TimeWindow::new(20, 80));
        assert_eq!(instance.customers[2].service_time(), 9);
    }

    #[test]
    fn test_build_orders_by_id() {
        let instance = parse(SAMPLE).unwrap().build().unwrap();

        assert_eq!(instance.num_customers(), 3);
        assert_eq!(instance.depot().time_window().end(), 1000);
        assert_eq!(instance.vehicle_capacity(VehicleId::new(2)), Some(15));
        assert_eq!(instance.q0(), 10);
        assert_eq!(instance.travel_time(1.into(), 2.into()), 10);
    }

    #[test]
    fn test_q0_is_last_value() {
        let text = SAMPLE.replace("2\t\t\t20 15 10", "1\t\t\t20 15 10 7");
        let instance = parse(&text).unwrap();

        assert_eq!(instance.capacities, vec![20]);
        assert_eq!(instance.q0, 7);
    }

    #[test]
    fn test_errors() {
        assert!(parse("only\none\nline").is_err());

        let too_few = SAMPLE.replace("2\t\t\t20 15 10", "3\t\t\t20 15");
        assert!(parse(&too_few).is_err());

        let not_a_number = SAMPLE.replace("2\t\t\t20 15 10", "2\t\t\t20 x 10");
        assert!(parse(&not_a_number).is_err());

        let short_record = SAMPLE.replace("2 10 10 5 20 80 9", "2 10 10 5 20 80");
        let error = parse(&short_record).unwrap_err();
        assert!(format!("{error:#}").contains("line 12"));

        let negative_id = SAMPLE.replace("2 10 10 5 20 80 9", "-2 10 10 5 20 80 9");
        assert!(parse(&negative_id).is_err());

        let missing_depot = SAMPLE.replace("0 0 0 10 0 1000 0", "");
        assert!(parse(&missing_depot).unwrap().build().is_err());
    }

    #[test]
    fn test_parse_fixture() {
        let instance = FlatFileParser
            .parse(data_fixture_path("small_type00.txt"))
            .unwrap();

        assert_eq!(instance.num_customers(), 9);
        assert_eq!(instance.fleet().fixed_count(), 3);
        assert_eq!(instance.q0(), 40);
    }
}
