use tracing::debug;

use crate::telemetry_system::result_series::ResultSeries;
use crate::trajectory_system::{
    aerodynamics::Aerodynamics,
    kinematics::{ForceModel, TrajectoryState},
};

use super::{parameters::SimulationParameters, propulsion::VehicleMass};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Vehicle mass reached zero or below; the exhausting step was not recorded.
    FuelExhausted { at_step: usize },
    /// All `max_steps` iterations were recorded.
    StepLimit,
}

/// Output of one run: a series per variant plus the stop reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub with_drag: ResultSeries,
    pub without_drag: ResultSeries,
    pub termination: Termination,
}

impl SimulationOutcome {
    pub fn len(&self) -> usize {
        self.with_drag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.with_drag.is_empty()
    }

    pub fn max_altitude_with_drag(&self) -> f64 {
        self.with_drag.max_altitude()
    }

    pub fn max_altitude_without_drag(&self) -> f64 {
        self.without_drag.max_altitude()
    }
}

/// Runs the drag and drag-free trajectories in lockstep on one shared mass.
pub struct SimulationEngine {
    params: SimulationParameters,
    forces: ForceModel,
    mass: VehicleMass,
    drag_state: TrajectoryState,
    vacuum_state: TrajectoryState,
}

impl SimulationEngine {
    pub fn new(params: SimulationParameters) -> Self {
        SimulationEngine {
            forces: ForceModel {
                thrust: params.thrust,
                gravity: params.gravity,
                aerodynamics: Aerodynamics::new(params.drag_coefficient),
                dt: params.time_step,
            },
            mass: VehicleMass::new(params.initial_mass()),
            drag_state: TrajectoryState::default(),
            vacuum_state: TrajectoryState::default(),
            params,
        }
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn run(mut self) -> SimulationOutcome {
        let max_steps = self.params.max_steps;
        debug!(
            payload_mass = self.params.payload_mass,
            thrust = self.params.thrust,
            initial_mass = self.mass.current(),
            max_steps,
            "starting ascent simulation"
        );

        let mut with_drag = ResultSeries::with_capacity(max_steps);
        let mut without_drag = ResultSeries::with_capacity(max_steps);
        let mut termination = Termination::StepLimit;

        for t in 0..max_steps {
            let mass = self.mass.current();
            self.drag_state = self.drag_state.step(mass, &self.forces, true);
            self.vacuum_state = self.vacuum_state.step(mass, &self.forces, false);

            self.mass
                .deplete(self.params.fuel_burn_rate, self.params.time_step);

            if self.mass.is_exhausted() {
                termination = Termination::FuelExhausted { at_step: t };
                break;
            }

            with_drag.push(t, self.drag_state.altitude);
            without_drag.push(t, self.vacuum_state.altitude);
        }

        debug!(
            ?termination,
            samples = with_drag.len(),
            "ascent simulation finished"
        );

        SimulationOutcome {
            with_drag,
            without_drag,
            termination,
        }
    }
}

/// Convenience wrapper: build an engine and run it.
pub fn simulate(params: SimulationParameters) -> SimulationOutcome {
    SimulationEngine::new(params).run()
}
