//! Nearest maintenance facility lookup by great-circle distance.

use geo::{HaversineDistance, Point};

use crate::models::{GeoPoint, MaintenanceFacility, NearestFacility};

/// Great-circle distance in meters between two coordinates.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    to_point(a).haversine_distance(&to_point(b))
}

// geo points are (x, y) = (lon, lat)
fn to_point(p: GeoPoint) -> Point<f64> {
    Point::new(p.lon, p.lat)
}

/// Closest facility to `point`, or `None` for an empty facility set.
///
/// Linear scan keeping the minimum; on equal distances the facility seen
/// first wins.
pub fn nearest(point: GeoPoint, facilities: &[MaintenanceFacility]) -> Option<&MaintenanceFacility> {
    nearest_by_distance(point, facilities).map(|(facility, _)| facility)
}

/// [`nearest`] together with its distance in meters.
pub fn nearest_with_distance(
    point: GeoPoint,
    facilities: &[MaintenanceFacility],
) -> Option<NearestFacility> {
    nearest_by_distance(point, facilities).map(|(facility, distance_meters)| NearestFacility {
        facility: facility.clone(),
        distance_meters,
    })
}

fn nearest_by_distance(
    point: GeoPoint,
    facilities: &[MaintenanceFacility],
) -> Option<(&MaintenanceFacility, f64)> {
    let mut best: Option<(&MaintenanceFacility, f64)> = None;
    for facility in facilities {
        let distance = distance_meters(point, facility.point());
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((facility, distance)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn facility(name: &str, lat: f64, lon: f64) -> MaintenanceFacility {
        MaintenanceFacility {
            id: Uuid::new_v4(),
            name: name.to_string(),
            lat,
            lon,
        }
    }

    #[test]
    fn test_distance_is_great_circle() {
        // One degree of latitude is roughly 111.2 km.
        let d = distance_meters(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 500.0, "distance was {}", d);
        assert_eq!(distance_meters(GeoPoint::new(-19.1, -45.9), GeoPoint::new(-19.1, -45.9)), 0.0);
    }

    #[test]
    fn test_nearest_empty_is_none() {
        assert!(nearest(GeoPoint::new(-19.1, -45.9), &[]).is_none());
        assert!(nearest_with_distance(GeoPoint::new(-19.1, -45.9), &[]).is_none());
    }

    #[test]
    fn test_nearest_picks_closest() {
        let facilities = vec![
            facility("Far", -21.0, -47.0),
            facility("Near", -19.2, -46.0),
            facility("Middle", -20.0, -46.5),
        ];
        let point = GeoPoint::new(-19.15, -45.95);
        assert_eq!(nearest(point, &facilities).unwrap().name, "Near");
    }

    #[test]
    fn test_nearest_is_order_independent() {
        let mut facilities = vec![
            facility("A", 10.0, 10.0),
            facility("B", -5.0, 3.0),
            facility("C", 0.5, 0.5),
        ];
        let point = GeoPoint::new(0.0, 0.0);
        let expected = nearest(point, &facilities).unwrap().name.clone();
        facilities.reverse();
        assert_eq!(nearest(point, &facilities).unwrap().name, expected);
        facilities.rotate_left(1);
        assert_eq!(nearest(point, &facilities).unwrap().name, expected);
    }

    #[test]
    fn test_nearest_tie_keeps_first_seen() {
        let facilities = vec![facility("North", 1.0, 0.0), facility("South", -1.0, 0.0)];
        let point = GeoPoint::new(0.0, 0.0);
        assert_eq!(nearest(point, &facilities).unwrap().name, "North");

        let reversed = vec![facilities[1].clone(), facilities[0].clone()];
        assert_eq!(nearest(point, &reversed).unwrap().name, "South");
    }

    #[test]
    fn test_great_circle_differs_from_planar_degrees() {
        // Near the pole a large longitude gap is a short distance.
        let facilities = vec![facility("Across", 89.0, 90.0), facility("Down", 87.5, 0.0)];
        let point = GeoPoint::new(89.0, 0.0);
        assert_eq!(nearest(point, &facilities).unwrap().name, "Across");
    }

    #[test]
    fn test_nearest_with_distance() {
        let facilities = vec![facility("Base", 0.0, 1.0)];
        let found = nearest_with_distance(GeoPoint::new(0.0, 0.0), &facilities).unwrap();
        assert_eq!(found.facility.name, "Base");
        assert!((found.distance_meters - 111_195.0).abs() < 500.0);
    }
}
