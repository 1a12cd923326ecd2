use crate::{
    rng::UniformSource,
    sim::{ContactEvent, JointHandle, SimError, Simulation},
    TaskError,
};
use std::f64::consts::PI;

/// Torque commanded per unit of clipped action.
pub const ACTION_GAIN: f64 = 0.05;

/// Factor from distances to potential.
pub const POTENTIAL_SCALE: f64 = 100.0;

/// Joint angles are reset uniformly in `[-JOINT_LIMIT, JOINT_LIMIT]`.
pub const JOINT_LIMIT: f64 = PI;

/// Static description of a task variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskSpec {
    /// Name of the variant.
    pub name: &'static str,

    /// Key passed to the asset loader.
    pub asset_id: &'static str,

    /// Root part of the articulated body.
    pub root_part: &'static str,

    /// Length of the action vector.
    pub action_dim: usize,

    /// Length of the observation vector.
    pub observation_dim: usize,
}

/// Uniform contract of the manipulation tasks.
///
/// Per episode, a training loop calls [`Task::reset`] once, then repeatedly
/// [`Task::apply_action`], steps the simulation, [`Task::compute_observation`] and
/// [`Task::compute_potential`].
pub trait Task: Sized {
    /// Description of the variant.
    const SPEC: TaskSpec;

    /// Resolves every joint and part the task uses.
    ///
    /// Fails with a missing-name error if the loaded asset lacks one of them, so
    /// that later accesses cannot fail.
    fn build<S: Simulation>(sim: &S) -> Result<Self, TaskError>;

    /// Randomizes the scene and reinitializes the episode state.
    fn reset<S, R>(&mut self, sim: &mut S, rng: &mut R) -> Result<(), TaskError>
    where
        S: Simulation,
        R: UniformSource + ?Sized;

    /// Clips the action to `[-1, 1]`, scales it by [`ACTION_GAIN`] and commands the
    /// result as joint torques.
    ///
    /// Nothing is commanded if the action has the wrong length or a non-finite
    /// component.
    fn apply_action<S: Simulation>(&self, sim: &mut S, action: &[f32]) -> Result<(), TaskError>;

    /// Reads the simulation state into an observation of length
    /// `Self::SPEC.observation_dim`.
    fn compute_observation<S: Simulation>(&mut self, sim: &S) -> Result<Vec<f32>, TaskError>;

    /// Shaping potential of the state seen by the last observation.
    fn compute_potential(&self) -> f64;

    /// Consumes a contact event reported by the engine.
    fn handle_contact(&mut self, _event: &ContactEvent) {}
}

pub(crate) fn resolve_joints<S, const N: usize>(
    sim: &S,
    names: [&str; N],
) -> Result<[JointHandle; N], SimError>
where
    S: Simulation,
{
    let mut handles = [JointHandle::new(0); N];
    for (h, name) in handles.iter_mut().zip(names) {
        *h = sim.joint(name)?;
    }
    Ok(handles)
}

pub(crate) fn randomize_joints<S, R>(sim: &mut S, rng: &mut R, joints: &[JointHandle])
where
    S: Simulation,
    R: UniformSource + ?Sized,
{
    for &j in joints {
        let q = rng.uniform(-JOINT_LIMIT, JOINT_LIMIT);
        sim.reset_joint(j, q, 0.0);
    }
}

pub(crate) fn command_torques<S: Simulation>(
    sim: &mut S,
    joints: &[JointHandle],
    action: &[f32],
) -> Result<(), TaskError> {
    if action.len() != joints.len() {
        return Err(TaskError::ActionDim {
            expected: joints.len(),
            actual: action.len(),
        });
    }
    if let Some((index, &value)) = action.iter().enumerate().find(|(_, a)| !a.is_finite()) {
        return Err(TaskError::NonFiniteAction { index, value });
    }

    for (&j, &a) in joints.iter().zip(action) {
        sim.set_motor_torque(j, ACTION_GAIN * a.clamp(-1.0, 1.0) as f64);
    }
    Ok(())
}

/// Zero-pads `values` to `dim` entries.
pub(crate) fn pad_observation(mut values: Vec<f32>, dim: usize) -> Result<Vec<f32>, TaskError> {
    if values.len() > dim {
        return Err(TaskError::ObservationDim {
            expected: dim,
            actual: values.len(),
        });
    }
    values.resize(dim, 0.0);
    Ok(values)
}
