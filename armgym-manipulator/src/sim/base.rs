use crate::geometry::{Quat, Vec3};
use thiserror::Error;

/// Errors reported by a [`Simulation`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// The loaded asset has no joint with the given name.
    #[error("joint not found: {0}")]
    MissingJoint(String),

    /// The loaded asset has no part with the given name.
    #[error("part not found: {0}")]
    MissingPart(String),

    /// The asset loader does not know the given asset id.
    #[error("unknown asset: {0}")]
    UnknownAsset(String),

    /// Failure reported by an engine backend while stepping. [`KinematicSim`] never
    /// returns it.
    ///
    /// [`KinematicSim`]: crate::KinematicSim
    #[error("engine error: {0}")]
    Engine(String),
}

/// Handle of a joint, issued by [`Simulation::joint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JointHandle(usize);

impl JointHandle {
    /// Creates a handle. Only simulation backends should call this.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Index of the joint in the backend.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle of a rigid part, issued by [`Simulation::part`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PartHandle(usize);

impl PartHandle {
    /// Creates a handle. Only simulation backends should call this.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Index of the part in the backend.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Contact events reported by the engine after a physics step.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactEvent {
    /// The end effector struck the manipulated object at `position`.
    ObjectStruck {
        /// World position of the end effector at the strike.
        position: Vec3,
    },

    /// The manipulated object touched the ground at `location`.
    ObjectHitGround {
        /// World position of the object at the touchdown.
        location: Vec3,
    },
}

/// A physically simulated articulated body.
pub trait Simulation {
    /// Loads the body described by `asset_id` and checks that it has `root_part`.
    fn load(asset_id: &str, root_part: &str) -> Result<Self, SimError>
    where
        Self: Sized;

    /// Looks up a joint by name.
    fn joint(&self, name: &str) -> Result<JointHandle, SimError>;

    /// Looks up a part by name.
    fn part(&self, name: &str) -> Result<PartHandle, SimError>;

    /// Returns `(position, velocity)` of a joint.
    fn joint_state(&self, joint: JointHandle) -> (f64, f64);

    /// Returns the position of a joint.
    fn joint_position(&self, joint: JointHandle) -> f64 {
        self.joint_state(joint).0
    }

    /// Forces the position and velocity of a joint.
    fn reset_joint(&mut self, joint: JointHandle, position: f64, velocity: f64);

    /// Commands a motor torque, applied at the next physics step.
    fn set_motor_torque(&mut self, joint: JointHandle, torque: f64);

    /// World position of a part.
    fn part_position(&self, part: PartHandle) -> Vec3;

    /// Forces the pose of a free-floating part.
    fn reset_part_pose(&mut self, part: PartHandle, position: Vec3, orientation: Quat);

    /// Advances the physics by one engine step.
    fn step(&mut self) -> Result<(), SimError>;

    /// Returns the contact events reported since the last call.
    fn drain_contacts(&mut self) -> Vec<ContactEvent> {
        Vec::new()
    }
}
