use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationLayout {
    Random,
    Clustered,
    /// Clustered, with some customers swapped for randomly placed ones.
    Combined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeWindowLength {
    Narrow,
    Moderate,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CapacityDistribution {
    Equal,
    ModeratelyRandom,
    TotallyRandom,
}

/// One of the 27 generated instance families, numbered `0..27`.
///
/// The number reads as three base-3 digits: the lowest picks the location
/// layout, the middle one the time-window length, the highest the capacity
/// distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseType(u32);

impl CaseType {
    pub const COUNT: u32 = 27;

    pub fn new(case_type: u32) -> Self {
        CaseType(case_type)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn location_layout(&self) -> LocationLayout {
        match self.0 % 3 {
            0 => LocationLayout::Random,
            1 => LocationLayout::Clustered,
            _ => LocationLayout::Combined,
        }
    }

    pub fn time_window_length(&self) -> TimeWindowLength {
        match (self.0 / 3) % 3 {
            0 => TimeWindowLength::Narrow,
            1 => TimeWindowLength::Moderate,
            _ => TimeWindowLength::Wide,
        }
    }

    pub fn capacity_distribution(&self) -> CapacityDistribution {
        match (self.0 / 9) % 3 {
            0 => CapacityDistribution::Equal,
            1 => CapacityDistribution::ModeratelyRandom,
            _ => CapacityDistribution::TotallyRandom,
        }
    }
}

impl fmt::Display for LocationLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationLayout::Random => write!(f, "random"),
            LocationLayout::Clustered => write!(f, "clustered"),
            LocationLayout::Combined => write!(f, "combined"),
        }
    }
}

impl fmt::Display for TimeWindowLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeWindowLength::Narrow => write!(f, "narrow"),
            TimeWindowLength::Moderate => write!(f, "moderate"),
            TimeWindowLength::Wide => write!(f, "wide"),
        }
    }
}

impl fmt::Display for CapacityDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityDistribution::Equal => write!(f, "equal"),
            CapacityDistribution::ModeratelyRandom => write!(f, "moderately random"),
            CapacityDistribution::TotallyRandom => write!(f, "totally random"),
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (locations: {}, time windows: {}, vehicle capacities: {})",
            self.0,
            self.location_layout(),
            self.time_window_length(),
            self.capacity_distribution()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoding() {
        let case = CaseType::new(0);
        assert_eq!(case.location_layout(), LocationLayout::Random);
        assert_eq!(case.time_window_length(), TimeWindowLength::Narrow);
        assert_eq!(case.capacity_distribution(), CapacityDistribution::Equal);

        let case = CaseType::new(23);
        assert_eq!(case.location_layout(), LocationLayout::Combined);
        assert_eq!(case.time_window_length(), TimeWindowLength::Moderate);
        assert_eq!(
            case.capacity_distribution(),
            CapacityDistribution::TotallyRandom
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CaseType::new(13).to_string(),
            "13 (locations: clustered, time windows: moderate, vehicle capacities: moderately random)"
        );
    }
}
