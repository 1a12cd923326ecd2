use super::base::{command_torques, pad_observation, randomize_joints, resolve_joints};
use crate::{
    geometry::Vec3,
    rng::UniformSource,
    sim::{JointHandle, PartHandle, SimError, Simulation},
    TaskError,
};

/// Actuated joints of the seven-joint arm, in action order.
pub const ARM_JOINT_NAMES: [&str; 7] = [
    "r_shoulder_pan_joint",
    "r_shoulder_lift_joint",
    "r_upper_arm_roll_joint",
    "r_elbow_flex_joint",
    "r_forearm_roll_joint",
    "r_wrist_flex_joint",
    "r_wrist_roll_joint",
];

/// Scene origin expressed in the local frame of the object and goal bodies.
///
/// Subtracted from every placement before it is written to the body.
pub const ZERO_OFFSET: Vec3 = [0.45, 0.55, 0.0];

/// World positions read by the last observation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArmPositions {
    /// End effector.
    pub fingertip: Vec3,
    /// Manipulated object.
    pub object: Vec3,
    /// Target or goal.
    pub target: Vec3,
}

/// The seven-joint arm and the parts its tasks observe.
#[derive(Clone, Debug)]
pub(crate) struct Arm {
    joints: [JointHandle; 7],
    fingertip: PartHandle,
    pub(crate) object: PartHandle,
    pub(crate) target: PartHandle,
}

impl Arm {
    pub(crate) fn build<S: Simulation>(
        sim: &S,
        fingertip: &str,
        object: &str,
        target: &str,
    ) -> Result<Self, SimError> {
        Ok(Self {
            joints: resolve_joints(sim, ARM_JOINT_NAMES)?,
            fingertip: sim.part(fingertip)?,
            object: sim.part(object)?,
            target: sim.part(target)?,
        })
    }

    pub(crate) fn randomize<S, R>(&self, sim: &mut S, rng: &mut R)
    where
        S: Simulation,
        R: UniformSource + ?Sized,
    {
        randomize_joints(sim, rng, &self.joints);
    }

    pub(crate) fn apply_action<S: Simulation>(
        &self,
        sim: &mut S,
        action: &[f32],
    ) -> Result<(), TaskError> {
        command_torques(sim, &self.joints, action)
    }

    /// `[joint positions, joint velocities, fingertip, object, target]`,
    /// zero-padded to `dim`.
    pub(crate) fn observe<S: Simulation>(
        &self,
        sim: &S,
        dim: usize,
    ) -> Result<(Vec<f32>, ArmPositions), TaskError> {
        let (qpos, qvel): (Vec<f64>, Vec<f64>) =
            self.joints.iter().map(|&j| sim.joint_state(j)).unzip();
        let positions = ArmPositions {
            fingertip: sim.part_position(self.fingertip),
            object: sim.part_position(self.object),
            target: sim.part_position(self.target),
        };

        let values = qpos
            .iter()
            .chain(&qvel)
            .chain(&positions.fingertip)
            .chain(&positions.object)
            .chain(&positions.target)
            .map(|&x| x as f32)
            .collect();
        Ok((pad_observation(values, dim)?, positions))
    }
}

/// Writes a planar placement into a pair of slide joints.
pub(crate) fn place_on_slides<S: Simulation>(sim: &mut S, slides: &[JointHandle; 2], p: &[f64]) {
    for (axis, &j) in slides.iter().enumerate() {
        sim.reset_joint(j, p[axis] - ZERO_OFFSET[axis], 0.0);
    }
}
