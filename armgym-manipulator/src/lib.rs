#![warn(missing_docs)]
//! Robot manipulation tasks for reinforcement learning.
//!
//! Four tasks share one contract, [`Task`]: [`Reacher`], [`Pusher`], [`Striker`]
//! and [`Thrower`]. A task randomizes the scene at reset, turns bounded actions
//! into joint torques, assembles a fixed-length observation and scores the state
//! with a shaping potential. The physics engine stays behind the [`Simulation`]
//! trait; [`KinematicSim`] is an engine-free backend with the joints and parts of
//! the four assets.
//!
//! [`ManipulatorEnv`] wraps a task and a simulation as an [`armgym_core::Env`]:
//!
//! ```no_run
//! use armgym_core::Env as _;
//! use armgym_manipulator::{ManipulatorAct, ManipulatorEnv, ManipulatorEnvConfig, Reacher};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ManipulatorEnvConfig::default().max_steps(Some(50));
//! let mut env = ManipulatorEnv::<Reacher>::build(&config, 42)?;
//! let _obs = env.reset(None)?;
//! let (step, _record) = env.step(&ManipulatorAct::new(vec![1.0, -1.0]))?;
//! println!("reward = {}", step.reward[0]);
//! # Ok(())
//! # }
//! ```
mod act;
mod config;
mod env;
mod error;
pub mod geometry;
mod obs;
pub mod placement;
pub mod rng;
pub mod sim;
pub mod task;
pub use act::ManipulatorAct;
pub use config::ManipulatorEnvConfig;
pub use env::{ManipulatorEnv, ManipulatorInfo};
pub use error::TaskError;
pub use obs::ManipulatorObs;
pub use rng::UniformSource;
pub use sim::{ContactEvent, JointHandle, KinematicSim, PartHandle, SimError, Simulation};
pub use task::{Pusher, Reacher, Striker, Task, TaskSpec, Thrower};
