//! Static regional diesel price table.
//!
//! There is no live price feed; the front end uses these numbers to
//! pre-fill the fuel price field.

use serde::Serialize;

pub const NATIONAL_AVERAGE: f64 = 3.85;

/// Diesel price per gallon by region, serialized as an object keyed by
/// region name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalPrices {
    pub northeast: f64,
    pub southeast: f64,
    pub midwest: f64,
    pub southwest: f64,
    pub northwest: f64,
    pub california: f64,
}

pub const REGIONAL_PRICES: RegionalPrices = RegionalPrices {
    northeast: 3.95,
    southeast: 3.65,
    midwest: 3.75,
    southwest: 3.55,
    northwest: 4.15,
    california: 4.85,
};

#[derive(Debug, Clone, Serialize)]
pub struct FuelPrices {
    pub national_avg: f64,
    pub regions: RegionalPrices,
}

pub fn current_prices() -> FuelPrices {
    FuelPrices {
        national_avg: NATIONAL_AVERAGE,
        regions: REGIONAL_PRICES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_serialize_as_an_object_keyed_by_name() {
        let json = serde_json::to_value(current_prices()).unwrap();
        assert_eq!(json["national_avg"], 3.85);

        let regions = json["regions"].as_object().expect("regions is an object");
        let mut names: Vec<&str> = regions.keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            ["california", "midwest", "northeast", "northwest", "southeast", "southwest"]
        );
        assert_eq!(regions["california"], 4.85);
    }
}
