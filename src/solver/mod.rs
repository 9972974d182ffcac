mod boundary;
mod core;
pub mod diagnostics;
mod params;

pub use boundary::{BoundaryKind, FieldRole};
pub use params::SolverParams;

use self::core::{add_source, advect, diffuse, project};
use crate::error::ConfigError;
use crate::state::{Grid, Obstacle};

/// Simulation context: owns both buffers of every integrated field, the
/// three caller-written source buffers, and all swap bookkeeping. Solver
/// kernels only ever see the buffers they are handed for one call.
pub struct FluidSim {
    grid: Grid,
    obstacle: Option<Obstacle>,
    params: SolverParams,
    u: Vec<f64>,
    v: Vec<f64>,
    u0: Vec<f64>,
    v0: Vec<f64>,
    dens: Vec<f64>,
    dens0: Vec<f64>,
    src_dens: Vec<f64>,
    src_u: Vec<f64>,
    src_v: Vec<f64>,
}

impl FluidSim {
    /// One-time setup. Parameters are validated before any buffer is
    /// allocated; all fields start zeroed and keep their size for the
    /// lifetime of the simulation.
    pub fn new(params: SolverParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let grid = Grid::new(params.resolution);
        let obstacle = Obstacle::plate(grid);
        let size = grid.size();
        Ok(Self {
            grid,
            obstacle,
            params,
            u: vec![0.0; size],
            v: vec![0.0; size],
            u0: vec![0.0; size],
            v0: vec![0.0; size],
            dens: vec![0.0; size],
            dens0: vec![0.0; size],
            src_dens: vec![0.0; size],
            src_u: vec![0.0; size],
            src_v: vec![0.0; size],
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn obstacle(&self) -> Option<&Obstacle> {
        self.obstacle.as_ref()
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Per-cell density injection rates for the upcoming ticks. The caller
    /// may rewrite these every substep or leave them persistent.
    pub fn density_source_mut(&mut self) -> &mut [f64] {
        &mut self.src_dens
    }

    /// Per-cell horizontal momentum injection rates.
    pub fn u_source_mut(&mut self) -> &mut [f64] {
        &mut self.src_u
    }

    /// Per-cell vertical momentum injection rates.
    pub fn v_source_mut(&mut self) -> &mut [f64] {
        &mut self.src_v
    }

    pub fn clear_sources(&mut self) {
        self.src_dens.fill(0.0);
        self.src_u.fill(0.0);
        self.src_v.fill(0.0);
    }

    /// Density field after the most recently completed tick.
    pub fn density(&self) -> &[f64] {
        &self.dens
    }

    /// Velocity components (u, v) after the most recently completed tick.
    pub fn velocity(&self) -> (&[f64], &[f64]) {
        (&self.u, &self.v)
    }

    /// Advance the simulation one substep: velocity step, then density
    /// step. Runs to completion; nothing else may touch the buffers while
    /// it does.
    pub fn tick(&mut self) {
        self.velocity_step();
        self.density_step();
    }

    fn velocity_step(&mut self) {
        let grid = self.grid;
        let ob = self.obstacle.as_ref();
        let dt = self.params.dt;
        let visc = self.params.visc;
        let diffuse_iter = self.params.diffuse_iter;
        let project_iter = self.params.project_iter;

        add_source(&mut self.u, &self.src_u, dt);
        add_source(&mut self.v, &self.src_v, dt);

        std::mem::swap(&mut self.u, &mut self.u0);
        diffuse(
            FieldRole::VelocityU.boundary_kind(),
            &mut self.u,
            &self.u0,
            visc,
            dt,
            diffuse_iter,
            grid,
            ob,
        );
        std::mem::swap(&mut self.v, &mut self.v0);
        diffuse(
            FieldRole::VelocityV.boundary_kind(),
            &mut self.v,
            &self.v0,
            visc,
            dt,
            diffuse_iter,
            grid,
            ob,
        );

        project(&mut self.u, &mut self.v, &mut self.u0, &mut self.v0, project_iter, grid, ob);

        // The diffused-and-projected velocity carries itself through
        // advection, so it moves to the previous buffers first.
        std::mem::swap(&mut self.u, &mut self.u0);
        std::mem::swap(&mut self.v, &mut self.v0);
        advect(
            FieldRole::VelocityU.boundary_kind(),
            &mut self.u,
            &self.u0,
            &self.u0,
            &self.v0,
            dt,
            grid,
            ob,
        );
        advect(
            FieldRole::VelocityV.boundary_kind(),
            &mut self.v,
            &self.v0,
            &self.u0,
            &self.v0,
            dt,
            grid,
            ob,
        );

        project(&mut self.u, &mut self.v, &mut self.u0, &mut self.v0, project_iter, grid, ob);
    }

    fn density_step(&mut self) {
        let grid = self.grid;
        let ob = self.obstacle.as_ref();
        let dt = self.params.dt;
        let diff = self.params.diff;
        let diffuse_iter = self.params.diffuse_iter;

        add_source(&mut self.dens, &self.src_dens, dt);

        std::mem::swap(&mut self.dens, &mut self.dens0);
        diffuse(
            FieldRole::Density.boundary_kind(),
            &mut self.dens,
            &self.dens0,
            diff,
            dt,
            diffuse_iter,
            grid,
            ob,
        );

        std::mem::swap(&mut self.dens, &mut self.dens0);
        advect(
            FieldRole::Density.boundary_kind(),
            &mut self.dens,
            &self.dens0,
            &self.u,
            &self.v,
            dt,
            grid,
            ob,
        );
    }
}
