use nalgebra::{Point3, Vector3};

/// Arithmetic mean of a list of points, or `None` for an empty list.
///
/// Each axis is summed in input order and divided once by the point count.
pub fn calculate_centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Per-axis sums of squared differences over the positionally paired points.
///
/// Pairs beyond the shorter slice are ignored; callers decide how many pairs to hand in.
pub fn axis_squared_deviations(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Vector3<f64> {
    coords1
        .iter()
        .zip(coords2.iter())
        .fold(Vector3::zeros(), |acc, (p1, p2)| {
            let d = p1 - p2;
            acc + d.component_mul(&d)
        })
}
