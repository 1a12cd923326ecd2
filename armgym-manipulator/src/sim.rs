//! Capability surface of the physics engine used by the tasks.
//!
//! Tasks never talk to an engine directly. They resolve named joints and parts to
//! typed handles once, through [`Simulation::joint`] and [`Simulation::part`], and
//! use the handles afterwards. A handle is only valid for the simulation that
//! issued it.
mod asset;
mod base;
mod kinematic;
pub use asset::{BodyDesc, JointDesc, JointKind, Mount, PartDesc};
pub use base::{ContactEvent, JointHandle, PartHandle, SimError, Simulation};
pub use kinematic::KinematicSim;
