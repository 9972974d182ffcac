use crate::solver::FluidSim;
use crate::state::Grid;

/// Fixed-position source: per-substep injection rates the external caller
/// writes into the simulation's source buffers before ticking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emitter {
    pub i: usize,
    pub j: usize,
    pub density_rate: f64,
    pub u_rate: f64,
    pub v_rate: f64,
}

impl Emitter {
    /// Default smoke/force plume: a single cell at (n/8, n/2) injecting
    /// density and rightward momentum into the flow, upstream of the plate.
    pub fn plume(grid: Grid) -> Self {
        Self {
            i: grid.n() / 8,
            j: grid.n() / 2,
            density_rate: 4000.0,
            u_rate: 500.0,
            v_rate: 0.0,
        }
    }

    /// Write this emitter's rates into the simulation's source buffers.
    /// Rates persist until overwritten or cleared.
    pub fn apply(&self, sim: &mut FluidSim) {
        let ii = sim.grid().idx(self.i, self.j);
        sim.density_source_mut()[ii] = self.density_rate;
        sim.u_source_mut()[ii] = self.u_rate;
        sim.v_source_mut()[ii] = self.v_rate;
    }
}
