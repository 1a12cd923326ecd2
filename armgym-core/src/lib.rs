#![warn(missing_docs)]
//! Environment contract shared by armgym tasks and the training loops that drive them.
//!
//! A training loop talks to an environment only through [`Env`]: it resets the
//! environment, feeds it actions chosen by a [`Policy`] and receives [`Step`] objects
//! holding the next observation, the reward and the episode flags. Side information
//! is reported in [`record::Record`]s.
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Env, Info, Obs, Policy, Step};
