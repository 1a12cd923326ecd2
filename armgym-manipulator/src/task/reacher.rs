use super::base::{command_torques, randomize_joints, resolve_joints, Task, TaskSpec, POTENTIAL_SCALE};
use crate::{
    geometry::{norm, sub, Vec3},
    placement::sample_box,
    rng::UniformSource,
    sim::{JointHandle, PartHandle, Simulation},
    TaskError,
};
use log::debug;

/// Episode state of [`Reacher`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReacherState {
    /// Target position sampled at reset, in slide coordinates.
    pub target_position: [f64; 2],

    /// `fingertip - target`, as read by the last observation.
    pub to_target: Vec3,
}

/// A two-joint planar arm whose fingertip has to reach a target.
///
/// Observation layout (9 entries):
/// `[cos θ0, cos θ1, sin θ0, sin θ1, positions of joints after the first two,
/// θ̇0, θ̇1, fingertip - target]`. The arm has no joints after the first two, so
/// the fifth group is empty.
#[derive(Clone, Debug)]
pub struct Reacher {
    joints: [JointHandle; 2],
    target_slides: [JointHandle; 2],
    fingertip: PartHandle,
    target: PartHandle,
    state: ReacherState,
}

impl Reacher {
    /// Target coordinates are reset uniformly in `[-TARGET_LIMIT, TARGET_LIMIT]`.
    pub const TARGET_LIMIT: f64 = 0.27;

    /// Returns the episode state.
    pub fn state(&self) -> &ReacherState {
        &self.state
    }
}

impl Task for Reacher {
    const SPEC: TaskSpec = TaskSpec {
        name: "reacher",
        asset_id: "reacher.xml",
        root_part: "body0",
        action_dim: 2,
        observation_dim: 9,
    };

    fn build<S: Simulation>(sim: &S) -> Result<Self, TaskError> {
        Ok(Self {
            joints: resolve_joints(sim, ["joint0", "joint1"])?,
            target_slides: resolve_joints(sim, ["target_x", "target_y"])?,
            fingertip: sim.part("fingertip")?,
            target: sim.part("target")?,
            state: ReacherState::default(),
        })
    }

    fn reset<S, R>(&mut self, sim: &mut S, rng: &mut R) -> Result<(), TaskError>
    where
        S: Simulation,
        R: UniformSource + ?Sized,
    {
        let target: [f64; 2] = sample_box(rng, Self::TARGET_LIMIT);
        for (&j, &x) in self.target_slides.iter().zip(&target) {
            sim.reset_joint(j, x, 0.0);
        }
        randomize_joints(sim, rng, &self.joints);
        debug!("Reacher target at {:?}", target);

        self.state = ReacherState {
            target_position: target,
            to_target: [0.0; 3],
        };
        Ok(())
    }

    fn apply_action<S: Simulation>(&self, sim: &mut S, action: &[f32]) -> Result<(), TaskError> {
        command_torques(sim, &self.joints, action)
    }

    fn compute_observation<S: Simulation>(&mut self, sim: &S) -> Result<Vec<f32>, TaskError> {
        let (qpos, qvel): (Vec<f64>, Vec<f64>) =
            self.joints.iter().map(|&j| sim.joint_state(j)).unzip();
        let theta = &qpos[..2];
        let to_target = sub(
            &sim.part_position(self.fingertip),
            &sim.part_position(self.target),
        );

        let obs: Vec<f32> = theta
            .iter()
            .map(|t| t.cos())
            .chain(theta.iter().map(|t| t.sin()))
            .chain(qpos[2..].iter().copied())
            .chain(qvel[..2].iter().copied())
            .chain(to_target)
            .map(|x| x as f32)
            .collect();

        if obs.len() != Self::SPEC.observation_dim {
            return Err(TaskError::ObservationDim {
                expected: Self::SPEC.observation_dim,
                actual: obs.len(),
            });
        }
        self.state.to_target = to_target;
        Ok(obs)
    }

    fn compute_potential(&self) -> f64 {
        -POTENTIAL_SCALE * norm(&self.state.to_target)
    }
}
