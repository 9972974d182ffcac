use crate::state::{Grid, Obstacle};

/// How halo and obstacle-adjacent cells are filled from their neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Zero-gradient: copy the nearest fluid value at every edge.
    Continuous,
    /// Odd reflection at the left/right edges (forces the wall-normal
    /// value to zero on a vertical wall), continuous top/bottom.
    HorizontalWall,
    /// Odd reflection at the top/bottom edges, continuous left/right.
    VerticalWall,
}

impl BoundaryKind {
    /// Sign used when mirroring across a vertical-normal face (left/right).
    fn sign_x(self) -> f64 {
        match self {
            BoundaryKind::HorizontalWall => -1.0,
            _ => 1.0,
        }
    }

    /// Sign used when mirroring across a horizontal-normal face (top/bottom).
    fn sign_y(self) -> f64 {
        match self {
            BoundaryKind::VerticalWall => -1.0,
            _ => 1.0,
        }
    }
}

/// Which physical field a buffer holds. Each role pins the reflection kind
/// its boundary updates use; the mapping is enumerated here once and every
/// stepping call site goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Density,
    VelocityU,
    VelocityV,
}

impl FieldRole {
    pub fn boundary_kind(self) -> BoundaryKind {
        match self {
            FieldRole::Density => BoundaryKind::Continuous,
            FieldRole::VelocityU => BoundaryKind::HorizontalWall,
            FieldRole::VelocityV => BoundaryKind::VerticalWall,
        }
    }
}

/// Fill every halo cell from the adjacent interior value (copied or negated
/// per `kind`), average the four domain corners, then rewrite the fluid ring
/// around the obstacle plate so it acts as an internal wall. Obstacle cells
/// themselves are never written; they hold no integrated state.
pub fn set_bnd(kind: BoundaryKind, x: &mut [f64], grid: Grid, obstacle: Option<&Obstacle>) {
    let n = grid.n();
    let sx = kind.sign_x();
    let sy = kind.sign_y();

    for k in 1..=n {
        x[grid.idx(0, k)] = sx * x[grid.idx(1, k)];
        x[grid.idx(n + 1, k)] = sx * x[grid.idx(n, k)];
        x[grid.idx(k, 0)] = sy * x[grid.idx(k, 1)];
        x[grid.idx(k, n + 1)] = sy * x[grid.idx(k, n)];
    }

    x[grid.idx(0, 0)] = 0.5 * (x[grid.idx(1, 0)] + x[grid.idx(0, 1)]);
    x[grid.idx(0, n + 1)] = 0.5 * (x[grid.idx(1, n + 1)] + x[grid.idx(0, n)]);
    x[grid.idx(n + 1, 0)] = 0.5 * (x[grid.idx(n, 0)] + x[grid.idx(n + 1, 1)]);
    x[grid.idx(n + 1, n + 1)] = 0.5 * (x[grid.idx(n, n + 1)] + x[grid.idx(n + 1, n)]);

    if let Some(ob) = obstacle {
        // The plate's faces behave like domain edges turned inward: the
        // fluid cell touching each face is rewritten from the next fluid
        // cell out, with the same per-axis sign rule as above.
        for j in ob.j_lo..=ob.j_hi {
            x[grid.idx(ob.i_lo - 1, j)] = sx * x[grid.idx(ob.i_lo - 2, j)];
            x[grid.idx(ob.i_hi + 1, j)] = sx * x[grid.idx(ob.i_hi + 2, j)];
        }
        for i in ob.i_lo..=ob.i_hi {
            x[grid.idx(i, ob.j_lo - 1)] = sy * x[grid.idx(i, ob.j_lo - 2)];
            x[grid.idx(i, ob.j_hi + 1)] = sy * x[grid.idx(i, ob.j_hi + 2)];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 16;

    fn ramp_field(grid: Grid) -> Vec<f64> {
        let mut x = vec![0.0; grid.size()];
        for j in 1..=grid.n() {
            for i in 1..=grid.n() {
                x[grid.idx(i, j)] = (i * 100 + j) as f64;
            }
        }
        x
    }

    #[test]
    fn test_continuous_copies_all_edges() {
        let grid = Grid::new(N);
        let mut x = ramp_field(grid);
        set_bnd(BoundaryKind::Continuous, &mut x, grid, None);
        for k in 1..=N {
            assert_eq!(x[grid.idx(0, k)], x[grid.idx(1, k)], "left halo at j={}", k);
            assert_eq!(x[grid.idx(N + 1, k)], x[grid.idx(N, k)], "right halo at j={}", k);
            assert_eq!(x[grid.idx(k, 0)], x[grid.idx(k, 1)], "top halo at i={}", k);
            assert_eq!(x[grid.idx(k, N + 1)], x[grid.idx(k, N)], "bottom halo at i={}", k);
        }
    }

    #[test]
    fn test_horizontal_wall_negates_left_right() {
        let grid = Grid::new(N);
        let mut x = ramp_field(grid);
        set_bnd(BoundaryKind::HorizontalWall, &mut x, grid, None);
        for j in 1..=N {
            assert_eq!(x[grid.idx(0, j)], -x[grid.idx(1, j)], "left reflection at j={}", j);
            assert_eq!(x[grid.idx(N + 1, j)], -x[grid.idx(N, j)], "right reflection at j={}", j);
        }
        // Top/bottom stay continuous for this kind.
        for i in 1..=N {
            assert_eq!(x[grid.idx(i, 0)], x[grid.idx(i, 1)], "top halo at i={}", i);
            assert_eq!(x[grid.idx(i, N + 1)], x[grid.idx(i, N)], "bottom halo at i={}", i);
        }
    }

    #[test]
    fn test_vertical_wall_negates_top_bottom() {
        let grid = Grid::new(N);
        let mut x = ramp_field(grid);
        set_bnd(BoundaryKind::VerticalWall, &mut x, grid, None);
        for i in 1..=N {
            assert_eq!(x[grid.idx(i, 0)], -x[grid.idx(i, 1)], "top reflection at i={}", i);
            assert_eq!(x[grid.idx(i, N + 1)], -x[grid.idx(i, N)], "bottom reflection at i={}", i);
        }
        for j in 1..=N {
            assert_eq!(x[grid.idx(0, j)], x[grid.idx(1, j)], "left halo at j={}", j);
        }
    }

    #[test]
    fn test_corners_average_adjacent_halo() {
        let grid = Grid::new(N);
        let mut x = ramp_field(grid);
        set_bnd(BoundaryKind::Continuous, &mut x, grid, None);
        let expect = 0.5 * (x[grid.idx(1, 0)] + x[grid.idx(0, 1)]);
        assert_eq!(x[grid.idx(0, 0)], expect, "corner should average its two halo neighbors");
        let expect = 0.5 * (x[grid.idx(N, N + 1)] + x[grid.idx(N + 1, N)]);
        assert_eq!(x[grid.idx(N + 1, N + 1)], expect);
    }

    #[test]
    fn test_interior_untouched_away_from_obstacle() {
        let grid = Grid::new(N);
        let x0 = ramp_field(grid);
        let mut x = x0.clone();
        set_bnd(BoundaryKind::HorizontalWall, &mut x, grid, None);
        for j in 2..N {
            for i in 2..N {
                assert_eq!(x[grid.idx(i, j)], x0[grid.idx(i, j)], "interior cell ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_role_to_kind_table() {
        assert_eq!(FieldRole::Density.boundary_kind(), BoundaryKind::Continuous);
        assert_eq!(FieldRole::VelocityU.boundary_kind(), BoundaryKind::HorizontalWall);
        assert_eq!(FieldRole::VelocityV.boundary_kind(), BoundaryKind::VerticalWall);
    }

    #[test]
    fn test_obstacle_ring_mirrors_continuous() {
        let grid = Grid::new(64);
        let ob = Obstacle::plate(grid).unwrap();
        let mut x = ramp_field(grid);
        set_bnd(BoundaryKind::Continuous, &mut x, grid, Some(&ob));
        for j in ob.j_lo..=ob.j_hi {
            assert_eq!(
                x[grid.idx(ob.i_lo - 1, j)],
                x[grid.idx(ob.i_lo - 2, j)],
                "left ring at j={}",
                j
            );
            assert_eq!(
                x[grid.idx(ob.i_hi + 1, j)],
                x[grid.idx(ob.i_hi + 2, j)],
                "right ring at j={}",
                j
            );
        }
        for i in ob.i_lo..=ob.i_hi {
            assert_eq!(x[grid.idx(i, ob.j_lo - 1)], x[grid.idx(i, ob.j_lo - 2)], "upper ring at i={}", i);
            assert_eq!(x[grid.idx(i, ob.j_hi + 1)], x[grid.idx(i, ob.j_hi + 2)], "lower ring at i={}", i);
        }
    }

    #[test]
    fn test_obstacle_ring_reflects_wall_normal_velocity() {
        let grid = Grid::new(64);
        let ob = Obstacle::plate(grid).unwrap();
        let mut x = ramp_field(grid);
        set_bnd(BoundaryKind::HorizontalWall, &mut x, grid, Some(&ob));
        for j in ob.j_lo..=ob.j_hi {
            assert_eq!(
                x[grid.idx(ob.i_lo - 1, j)],
                -x[grid.idx(ob.i_lo - 2, j)],
                "left face should reflect at j={}",
                j
            );
            assert_eq!(
                x[grid.idx(ob.i_hi + 1, j)],
                -x[grid.idx(ob.i_hi + 2, j)],
                "right face should reflect at j={}",
                j
            );
        }
        // Plate top/bottom are horizontal-normal faces: copied for this kind.
        for i in ob.i_lo..=ob.i_hi {
            assert_eq!(x[grid.idx(i, ob.j_lo - 1)], x[grid.idx(i, ob.j_lo - 2)], "upper ring at i={}", i);
        }
    }

    #[test]
    fn test_obstacle_cells_never_written() {
        let grid = Grid::new(64);
        let ob = Obstacle::plate(grid).unwrap();
        let mut x = ramp_field(grid);
        for j in ob.j_lo..=ob.j_hi {
            for i in ob.i_lo..=ob.i_hi {
                x[grid.idx(i, j)] = -7.0;
            }
        }
        for kind in [BoundaryKind::Continuous, BoundaryKind::HorizontalWall, BoundaryKind::VerticalWall] {
            set_bnd(kind, &mut x, grid, Some(&ob));
            for j in ob.j_lo..=ob.j_hi {
                for i in ob.i_lo..=ob.i_hi {
                    assert_eq!(x[grid.idx(i, j)], -7.0, "obstacle cell ({}, {}) under {:?}", i, j, kind);
                }
            }
        }
    }
}
