// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nearby infrastructure lookup.
//!
//! Distances are great-circle (Haversine) distances in kilometers,
//! rounded to one decimal for the analysis prompt.

use crate::models::{DemandCenter, NearbyDemand, NearbyRenewable, RenewableSource};
use geo::{Distance, Haversine, Point};

/// How many entities of each kind are described to the model.
pub const DEFAULT_NEARBY_LIMIT: usize = 5;

/// Distance in km between two (latitude, longitude) pairs.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    // geo points are (x = longitude, y = latitude)
    let meters = Haversine.distance(Point::new(lon1, lat1), Point::new(lon2, lat2));
    meters / 1000.0
}

fn round_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// Keep rows within `radius_km`, nearest first, at most `limit`.
fn nearest<T, R>(
    rows: &[T],
    latitude: f64,
    longitude: f64,
    radius_km: f64,
    limit: usize,
    position: impl Fn(&T) -> (f64, f64),
    describe: impl Fn(&T, f64) -> R,
) -> Vec<R> {
    let mut within: Vec<(f64, &T)> = rows
        .iter()
        .map(|row| {
            let (lat, lon) = position(row);
            (distance_km(latitude, longitude, lat, lon), row)
        })
        .filter(|(km, _)| *km <= radius_km)
        .collect();

    within.sort_by(|a, b| a.0.total_cmp(&b.0));

    within
        .into_iter()
        .take(limit)
        .map(|(km, row)| describe(row, round_tenth(km)))
        .collect()
}

/// Renewable sources near a candidate site.
pub fn nearby_renewables(
    latitude: f64,
    longitude: f64,
    sources: &[RenewableSource],
    radius_km: f64,
    limit: usize,
) -> Vec<NearbyRenewable> {
    nearest(
        sources,
        latitude,
        longitude,
        radius_km,
        limit,
        |s| (s.latitude, s.longitude),
        |s, distance| NearbyRenewable {
            source_type: s.source_type.clone(),
            distance,
            capacity: s.capacity,
        },
    )
}

/// Demand centers near a candidate site.
pub fn nearby_demand(
    latitude: f64,
    longitude: f64,
    centers: &[DemandCenter],
    radius_km: f64,
    limit: usize,
) -> Vec<NearbyDemand> {
    nearest(
        centers,
        latitude,
        longitude,
        radius_km,
        limit,
        |c| (c.latitude, c.longitude),
        |c, distance| NearbyDemand {
            center_type: c.center_type.clone(),
            distance,
            level: c.demand_level.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: i32, source_type: &str, lat: f64, lon: f64) -> RenewableSource {
        RenewableSource {
            id,
            name: format!("Source {}", id),
            source_type: source_type.to_string(),
            latitude: lat,
            longitude: lon,
            capacity: 100.0 * id as f64,
        }
    }

    #[test]
    fn test_distance_km_known_pair() {
        // Ahmedabad to Vadodara is roughly 100 km as the crow flies.
        let km = distance_km(23.0225, 72.5714, 22.3072, 73.1812);
        assert!((95.0..105.0).contains(&km), "got {}", km);
    }

    #[test]
    fn test_distance_km_zero() {
        assert!(distance_km(10.0, 20.0, 10.0, 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_nearby_renewables_filters_sorts_and_limits() {
        let sources = vec![
            source(1, "wind", 22.3072, 73.1812),  // ~100 km
            source(2, "solar", 23.05, 72.60),     // a few km
            source(3, "solar", 28.61, 77.21),     // Delhi, far away
            source(4, "hydro", 22.9, 72.4),       // ~20 km
        ];

        let nearby = nearby_renewables(23.0225, 72.5714, &sources, 150.0, 2);

        assert_eq!(nearby.len(), 2);
        assert_eq!(nearby[0].source_type, "solar");
        assert_eq!(nearby[0].capacity, 200.0);
        assert_eq!(nearby[1].source_type, "hydro");
        assert!(nearby[0].distance <= nearby[1].distance);
        // One decimal place.
        assert_eq!(nearby[1].distance, (nearby[1].distance * 10.0).round() / 10.0);
    }

    #[test]
    fn test_nearby_demand_empty_when_out_of_range() {
        let centers = vec![DemandCenter {
            id: 1,
            name: "Refinery".to_string(),
            center_type: "refinery".to_string(),
            latitude: 28.61,
            longitude: 77.21,
            demand_level: "High".to_string(),
        }];

        assert!(nearby_demand(23.0, 72.5, &centers, 50.0, 5).is_empty());

        let wide = nearby_demand(23.0, 72.5, &centers, 2000.0, 5);
        assert_eq!(wide.len(), 1);
        assert_eq!(wide[0].level, "High");
    }
}
