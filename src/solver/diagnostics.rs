use crate::state::{Grid, Obstacle};

/// Largest |divergence| over interior non-obstacle cells, in the same
/// central-difference form the projection solver works with.
pub fn max_divergence(u: &[f64], v: &[f64], grid: Grid, obstacle: Option<&Obstacle>) -> f64 {
    let n = grid.n();
    let h = 1.0 / n as f64;
    let mut max = 0.0_f64;
    for j in 1..=n {
        for i in 1..=n {
            if obstacle.is_some_and(|ob| ob.contains(i, j)) {
                continue;
            }
            let d = -0.5
                * h
                * (u[grid.idx(i + 1, j)] - u[grid.idx(i - 1, j)] + v[grid.idx(i, j + 1)]
                    - v[grid.idx(i, j - 1)]);
            max = max.max(d.abs());
        }
    }
    max
}

/// Total density over the interior (halo excluded).
pub fn total_density(dens: &[f64], grid: Grid) -> f64 {
    let n = grid.n();
    let mut sum = 0.0;
    for j in 1..=n {
        for i in 1..=n {
            sum += dens[grid.idx(i, j)];
        }
    }
    sum
}

/// Volume-averaged kinetic energy over the interior: 0.5 * <u² + v²>.
pub fn kinetic_energy(u: &[f64], v: &[f64], grid: Grid) -> f64 {
    let n = grid.n();
    let mut sum = 0.0;
    for j in 1..=n {
        for i in 1..=n {
            let ii = grid.idx(i, j);
            sum += u[ii] * u[ii] + v[ii] * v[ii];
        }
    }
    0.5 * sum / (n * n) as f64
}

/// Largest speed anywhere in storage.
pub fn max_speed(u: &[f64], v: &[f64]) -> f64 {
    u.iter()
        .zip(v.iter())
        .map(|(u, v)| (u * u + v * v).sqrt())
        .fold(0.0_f64, f64::max)
}
