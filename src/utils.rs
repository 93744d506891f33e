//! Small numeric helpers shared by the simulation.

use rand::Rng;

/// Random integer in `[ceil(min), floor(max))`.
///
/// Returns `None` when that range holds no integer (e.g. `min = 0.2, max = 0.8`
/// or `min >= max`), or when a bound does not fit in an `i32`.
pub fn get_random_int<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Option<i32> {
    let lo = min.ceil();
    let hi = max.floor();
    let fits = |v: f64| (i32::MIN as f64..=i32::MAX as f64).contains(&v);
    if !fits(lo) || !fits(hi) || lo >= hi {
        return None;
    }
    Some(rng.gen_range(lo as i32..hi as i32))
}

/// Absolute distance between two coordinates on one axis.
pub fn get_difference(a: i32, b: i32) -> u32 {
    a.abs_diff(b)
}
