use super::boundary::{set_bnd, BoundaryKind};
use crate::state::{Grid, Obstacle};

/// Accumulate caller-written source rates into a field, scaled by dt.
pub fn add_source(x: &mut [f64], s: &[f64], dt: f64) {
    for (x, s) in x.iter_mut().zip(s.iter()) {
        *x += dt * s;
    }
}

/// Gauss-Seidel relaxation of `x[i,j] = (x0[i,j] + a * neighbors) / c`.
/// Each sweep reads neighbors already updated in the same pass (in-place
/// relaxation, not Jacobi) and re-applies the boundary fill before the next
/// sweep. Obstacle cells are skipped. The iteration count is fixed and small;
/// this is an approximation, never a solve to convergence.
pub fn lin_solve(
    kind: BoundaryKind,
    x: &mut [f64],
    x0: &[f64],
    a: f64,
    c: f64,
    iters: usize,
    grid: Grid,
    obstacle: Option<&Obstacle>,
) {
    let n = grid.n();
    let c_inv = 1.0 / c;
    for _ in 0..iters {
        for j in 1..=n {
            for i in 1..=n {
                if obstacle.is_some_and(|ob| ob.contains(i, j)) {
                    continue;
                }
                let neighbors = x[grid.idx(i - 1, j)]
                    + x[grid.idx(i + 1, j)]
                    + x[grid.idx(i, j - 1)]
                    + x[grid.idx(i, j + 1)];
                x[grid.idx(i, j)] = (x0[grid.idx(i, j)] + a * neighbors) * c_inv;
            }
        }
        set_bnd(kind, x, grid, obstacle);
    }
}

/// Implicit diffusion: `a = dt * rate * n²`, `c = 1 + 4a`. The target is
/// seeded from the previous values, then relaxed for a fixed iteration count.
pub fn diffuse(
    kind: BoundaryKind,
    x: &mut [f64],
    x0: &[f64],
    rate: f64,
    dt: f64,
    iters: usize,
    grid: Grid,
    obstacle: Option<&Obstacle>,
) {
    let n = grid.n() as f64;
    let a = dt * rate * n * n;
    x.copy_from_slice(x0);
    lin_solve(kind, x, x0, a, 1.0 + 4.0 * a, iters, grid, obstacle);
}

/// Semi-Lagrangian advection: trace each cell's characteristic one Euler
/// step backwards through (u, v) and bilinearly resample `d0` there. The
/// sample point is clamped into [0.5, n + 0.5], which keeps all four
/// support nodes inside storage and is the only handling for trajectories
/// that leave the domain.
pub fn advect(
    kind: BoundaryKind,
    d: &mut [f64],
    d0: &[f64],
    u: &[f64],
    v: &[f64],
    dt: f64,
    grid: Grid,
    obstacle: Option<&Obstacle>,
) {
    let n = grid.n();
    let dt0 = dt * n as f64;
    let max = n as f64 + 0.5;
    for j in 1..=n {
        for i in 1..=n {
            if obstacle.is_some_and(|ob| ob.contains(i, j)) {
                continue;
            }
            let ii = grid.idx(i, j);
            let px = (i as f64 - dt0 * u[ii]).clamp(0.5, max);
            let py = (j as f64 - dt0 * v[ii]).clamp(0.5, max);

            let i0 = px.floor() as usize;
            let i1 = i0 + 1;
            let j0 = py.floor() as usize;
            let j1 = j0 + 1;
            let s1 = px - i0 as f64;
            let s0 = 1.0 - s1;
            let t1 = py - j0 as f64;
            let t0 = 1.0 - t1;

            d[ii] = s0 * (t0 * d0[grid.idx(i0, j0)] + t1 * d0[grid.idx(i0, j1)])
                + s1 * (t0 * d0[grid.idx(i1, j0)] + t1 * d0[grid.idx(i1, j1)]);
        }
    }
    set_bnd(kind, d, grid, obstacle);
}

/// Pressure projection: compute the interior divergence, relax the discrete
/// Poisson equation for pressure for a fixed iteration count, then subtract
/// the pressure gradient from the velocity so it is near divergence-free.
pub fn project(
    u: &mut [f64],
    v: &mut [f64],
    p: &mut [f64],
    div: &mut [f64],
    iters: usize,
    grid: Grid,
    obstacle: Option<&Obstacle>,
) {
    let n = grid.n();
    let h = 1.0 / n as f64;

    p.fill(0.0);
    for j in 1..=n {
        for i in 1..=n {
            if obstacle.is_some_and(|ob| ob.contains(i, j)) {
                continue;
            }
            div[grid.idx(i, j)] = -0.5
                * h
                * (u[grid.idx(i + 1, j)] - u[grid.idx(i - 1, j)] + v[grid.idx(i, j + 1)]
                    - v[grid.idx(i, j - 1)]);
        }
    }
    set_bnd(BoundaryKind::Continuous, div, grid, obstacle);
    set_bnd(BoundaryKind::Continuous, p, grid, obstacle);

    lin_solve(BoundaryKind::Continuous, p, div, 1.0, 4.0, iters, grid, obstacle);

    for j in 1..=n {
        for i in 1..=n {
            if obstacle.is_some_and(|ob| ob.contains(i, j)) {
                continue;
            }
            u[grid.idx(i, j)] -= 0.5 * (p[grid.idx(i + 1, j)] - p[grid.idx(i - 1, j)]) / h;
            v[grid.idx(i, j)] -= 0.5 * (p[grid.idx(i, j + 1)] - p[grid.idx(i, j - 1)]) / h;
        }
    }
    set_bnd(BoundaryKind::HorizontalWall, u, grid, obstacle);
    set_bnd(BoundaryKind::VerticalWall, v, grid, obstacle);
}
