/// Vehicle mass shared by every trajectory variant of a run.
///
/// Decreases by a fixed amount per step; both variants read the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleMass {
    mass: f64,
}

impl VehicleMass {
    pub fn new(initial_mass: f64) -> Self {
        VehicleMass { mass: initial_mass }
    }

    pub fn current(&self) -> f64 {
        self.mass
    }

    pub fn deplete(&mut self, burn_rate: f64, delta_time: f64) {
        self.mass -= burn_rate * delta_time;
    }

    pub fn is_exhausted(&self) -> bool {
        self.mass <= 0.0
    }
}
