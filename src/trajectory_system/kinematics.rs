use super::aerodynamics::Aerodynamics;

/// Vertical state of one simulated trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrajectoryState {
    pub velocity: f64, // m/s
    pub altitude: f64, // m
}

/// Forces and step size shared by every variant of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    pub thrust: f64,
    pub gravity: f64,
    pub aerodynamics: Aerodynamics,
    pub dt: f64,
}

impl TrajectoryState {
    pub fn new(velocity: f64, altitude: f64) -> Self {
        TrajectoryState { velocity, altitude }
    }

    /// Advances this state by one step of `forces.dt`.
    ///
    /// Velocity is updated first and the new velocity drives the altitude
    /// update (semi-implicit Euler). `mass` must be the vehicle mass before
    /// this step's fuel burn.
    pub fn step(&self, mass: f64, forces: &ForceModel, with_drag: bool) -> TrajectoryState {
        let acceleration = net_acceleration(self.velocity, mass, forces, with_drag);
        let velocity = self.velocity + acceleration * forces.dt;
        let altitude = self.altitude + velocity * forces.dt;

        TrajectoryState { velocity, altitude }
    }
}

pub fn net_acceleration(velocity: f64, mass: f64, forces: &ForceModel, with_drag: bool) -> f64 {
    let weight = mass * forces.gravity;
    if with_drag {
        let drag = forces.aerodynamics.calculate_drag(velocity);
        (forces.thrust - weight - drag) / mass
    } else {
        (forces.thrust - weight) / mass
    }
}

/// Free-function form of [`TrajectoryState::step`].
pub fn step(
    state: &TrajectoryState,
    mass: f64,
    forces: &ForceModel,
    with_drag: bool,
) -> TrajectoryState {
    state.step(mass, forces, with_drag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    fn create_test_forces(thrust: f64) -> ForceModel {
        ForceModel {
            thrust,
            gravity: 9.81,
            aerodynamics: Aerodynamics::new(0.00002),
            dt: 1.0,
        }
    }

    #[test]
    fn test_initial_state_is_at_rest() {
        let state = TrajectoryState::default();
        assert_eq!(state.velocity, 0.0);
        assert_eq!(state.altitude, 0.0);
    }

    #[test]
    fn test_first_step_uses_updated_velocity_for_altitude() {
        let forces = create_test_forces(7_000_000.0);
        let mass = 510_000.0;

        let next = TrajectoryState::default().step(mass, &forces, true);

        let expected_acceleration = (7_000_000.0 - mass * 9.81) / mass;
        assert_relative_eq!(next.velocity, expected_acceleration, epsilon = EPSILON);
        assert_relative_eq!(next.altitude, expected_acceleration, epsilon = EPSILON);
    }

    #[test]
    fn test_drag_reduces_acceleration() {
        let forces = create_test_forces(7_000_000.0);
        let mass = 400_000.0;
        let velocity = 500.0;

        let with_drag = net_acceleration(velocity, mass, &forces, true);
        let without_drag = net_acceleration(velocity, mass, &forces, false);

        assert!(with_drag < without_drag);
        assert_relative_eq!(
            without_drag - with_drag,
            0.00002 * velocity * velocity / mass,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_without_drag_flag_ignores_coefficient() {
        let forces = create_test_forces(7_000_000.0);
        let mut dragless = forces;
        dragless.aerodynamics = Aerodynamics::disabled();

        let state = TrajectoryState::new(800.0, 12_000.0);
        assert_eq!(
            state.step(450_000.0, &forces, false),
            state.step(450_000.0, &dragless, true)
        );
    }

    #[test]
    fn test_insufficient_thrust_falls() {
        let forces = create_test_forces(1_000_000.0);
        let mass = 501_000.0;

        let next = step(&TrajectoryState::default(), mass, &forces, true);

        assert!(next.velocity < 0.0, "Velocity: {}", next.velocity);
        assert!(next.altitude < 0.0, "Altitude: {}", next.altitude);
    }

    #[test]
    fn test_step_from_moving_state() {
        let forces = create_test_forces(2_000_000.0);
        let state = TrajectoryState::new(10.0, 100.0);
        let mass = 100_000.0;

        let next = state.step(mass, &forces, true);

        let drag = 0.00002 * 10.0 * 10.0;
        let a = (2_000_000.0 - mass * 9.81 - drag) / mass;
        assert_relative_eq!(next.velocity, 10.0 + a, epsilon = EPSILON);
        assert_relative_eq!(next.altitude, 100.0 + 10.0 + a, epsilon = EPSILON);
    }
}
