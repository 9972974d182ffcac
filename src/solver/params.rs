use crate::error::ConfigError;

/// Solver parameters. The iteration counts are fixed approximation budgets
/// with documented defaults (4 diffusion sweeps, 10 projection sweeps), not
/// convergence targets.
#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Interior cells per axis.
    pub resolution: usize,
    /// Velocity diffusion (viscosity) rate.
    pub visc: f64,
    /// Density diffusion rate.
    pub diff: f64,
    /// Substep time step.
    pub dt: f64,
    /// Gauss-Seidel sweeps per diffusion solve.
    pub diffuse_iter: usize,
    /// Gauss-Seidel sweeps per pressure solve.
    pub project_iter: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            resolution: 64,
            visc: 1e-4,
            diff: 1e-4,
            dt: 1.0 / 240.0,
            diffuse_iter: 4,
            project_iter: 10,
        }
    }
}

impl SolverParams {
    /// Reject parameter sets the solver cannot run with. Called before any
    /// buffer is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::ZeroResolution(self.resolution));
        }
        if self.diffuse_iter == 0 {
            return Err(ConfigError::ZeroIterations {
                stage: "diffusion",
                value: self.diffuse_iter,
            });
        }
        if self.project_iter == 0 {
            return Err(ConfigError::ZeroIterations {
                stage: "projection",
                value: self.project_iter,
            });
        }
        // dt = NaN fails this comparison as well.
        if !(self.dt > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }
        Ok(())
    }
}
