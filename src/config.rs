use std::path::Path;

use serde::Deserialize;

use crate::solver::SolverParams;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub emitter: EmitterConfig,
    pub run: RunConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub resolution: usize,
    pub visc: f64,
    pub diff: f64,
    pub dt: f64,
    pub diffuse_iter: usize,
    pub project_iter: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub density_rate: f64,
    pub u_rate: f64,
    pub v_rate: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub steps_per_frame: usize,
    pub target_fps: usize,
    /// 0 runs until interrupted.
    pub frames: usize,
}

impl Default for PhysicsConfig {
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

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            density_rate: 4000.0,
            u_rate: 500.0,
            v_rate: 0.0,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps_per_frame: 8,
            target_fps: 30,
            frames: 0,
        }
    }
}

impl Config {
    pub fn solver_params(&self) -> SolverParams {
        SolverParams {
            resolution: self.physics.resolution,
            visc: self.physics.visc,
            diff: self.physics.diff,
            dt: self.physics.dt,
            diffuse_iter: self.physics.diffuse_iter,
            project_iter: self.physics.project_iter,
        }
    }
}

/// Load configuration from a YAML file, falling back to defaults (with a
/// stderr warning) when the file is missing, unreadable, or malformed.
pub fn load(path: &Path) -> Config {
    if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("Warning: failed to parse {}: {e}; using defaults", path.display());
                    Config::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: failed to read {}: {e}; using defaults", path.display());
                Config::default()
            }
        }
    } else {
        Config::default()
    }
}
