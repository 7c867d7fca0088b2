//! Small numeric helpers shared by the sampler and tests.

use lin_alg::f64::Vec3;

/// Create a set of values in a given range, with a given number of values.
/// Similar to `numpy.linspace`.
/// The result terminates one step before the end of the range.
pub fn linspace(range: (f64, f64), num_vals: usize) -> Vec<f64> {
    let step = (range.1 - range.0) / num_vals as f64;

    let mut result = Vec::new();

    let mut val = range.0;
    for _ in 0..num_vals {
        result.push(val);
        val += step;
    }

    result
}

/// Converts spherical coordinates to cartesian. θ is inclination (lat). φ is azimuth (lon).
/// θ is on a scale of 0 to τ/2. φ is on a scale of 0 to τ.
pub fn spherical_to_cart(r: f64, θ: f64, φ: f64) -> Vec3 {
    let x = r * θ.sin() * φ.cos();
    let y = r * θ.sin() * φ.sin();
    let z = r * θ.cos();

    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_covers_range() {
        let vals = linspace((0., 10.), 5);
        assert_eq!(vals.len(), 5);
        assert!((vals[0] - 0.).abs() < 1e-12);
        assert!((vals[4] - 8.).abs() < 1e-12);
    }

    #[test]
    fn spherical_axes() {
        let up = spherical_to_cart(2., 0., 0.);
        assert!((up.z - 2.).abs() < 1e-12);

        let x_axis = spherical_to_cart(1., std::f64::consts::FRAC_PI_2, 0.);
        assert!((x_axis.x - 1.).abs() < 1e-12);
        assert!(x_axis.z.abs() < 1e-12);
    }
}
