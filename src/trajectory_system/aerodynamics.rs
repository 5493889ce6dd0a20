use crate::constants::DRAG_COEFFICIENT;

/// Quadratic drag model: `drag = k * v²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64) -> Self {
        Aerodynamics { drag_coefficient }
    }

    pub fn disabled() -> Self {
        Aerodynamics::new(0.0)
    }

    pub fn is_enabled(&self) -> bool {
        self.drag_coefficient != 0.0
    }

    /// Drag magnitude for the given vertical velocity.
    ///
    /// Always non-negative regardless of the sign of `velocity`; the force
    /// is subtracted from thrust, so it only ever opposes upward motion.
    pub fn calculate_drag(&self, velocity: f64) -> f64 {
        self.drag_coefficient * velocity.powi(2)
    }
}

impl Default for Aerodynamics {
    fn default() -> Self {
        Aerodynamics::new(DRAG_COEFFICIENT)
    }
}
