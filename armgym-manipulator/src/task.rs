//! Manipulation tasks.
//!
//! A [`Task`] owns the task-specific constants and the per-episode state of one
//! variant, and drives a [`Simulation`](crate::Simulation) through typed handles
//! resolved when the task is built:
//!
//! * [`Reacher`]: a two-joint planar arm reaching a target.
//! * [`Pusher`]: a seven-joint arm pushing a sliding object onto a goal.
//! * [`Striker`]: a seven-joint arm striking a sliding object towards a coaster.
//! * [`Thrower`]: a seven-joint arm throwing a free ball onto a goal.
mod arm;
mod base;
mod pusher;
mod reacher;
mod striker;
mod thrower;
pub use arm::{ArmPositions, ARM_JOINT_NAMES, ZERO_OFFSET};
pub use base::{Task, TaskSpec, ACTION_GAIN, JOINT_LIMIT, POTENTIAL_SCALE};
pub use pusher::{Pusher, PusherState};
pub use reacher::{Reacher, ReacherState};
pub use striker::{Striker, StrikerState};
pub use thrower::{Thrower, ThrowerState};
