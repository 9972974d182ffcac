/// Square simulation grid: n×n interior cells wrapped by a one-cell halo
/// ring, stored as a flat (n+2)×(n+2) array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    n: usize,
}

impl Grid {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Interior cell count per axis.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Row stride of the backing storage.
    pub fn stride(&self) -> usize {
        self.n + 2
    }

    /// Total cell count including the halo ring.
    pub fn size(&self) -> usize {
        (self.n + 2) * (self.n + 2)
    }

    /// Flat offset of cell (i, j). Valid for 0 <= i, j <= n+1; interior
    /// loops run 1..=n and callers keep indices in range.
    #[inline(always)]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= self.n + 1);
        debug_assert!(j <= self.n + 1);
        i + (self.n + 2) * j
    }
}

/// Thin rectangular plate held solid in the flow to shed a vortex street.
/// Bounds are inclusive cell ranges in interior coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub i_lo: usize,
    pub i_hi: usize,
    pub j_lo: usize,
    pub j_hi: usize,
}

impl Obstacle {
    /// Fixed plate geometry derived from the grid: three cells wide around
    /// the vertical mid-line, spanning the band [2⌊n/5⌋, 3⌊n/5⌋].
    ///
    /// Returns `None` when the plate cannot sit strictly inside the
    /// interior with a full fluid ring plus one sampling cell on every
    /// side (n < 10).
    pub fn plate(grid: Grid) -> Option<Self> {
        let n = grid.n();
        let mid = n / 2;
        if mid < 1 {
            return None;
        }
        let plate = Self {
            i_lo: mid - 1,
            i_hi: mid + 1,
            j_lo: 2 * (n / 5),
            j_hi: 3 * (n / 5),
        };
        // The boundary applier reads two cells beyond each face.
        let fits = plate.i_lo >= 3
            && plate.i_hi + 2 <= n
            && plate.j_lo >= 3
            && plate.j_hi + 2 <= n;
        fits.then_some(plate)
    }

    #[inline(always)]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        i >= self.i_lo && i <= self.i_hi && j >= self.j_lo && j <= self.j_hi
    }
}
