//! Observation of [`ManipulatorEnv`](crate::ManipulatorEnv).
use armgym_core::Obs;
use ndarray::Array1;

/// Observation represented by an [`ndarray::Array1`].
#[derive(Clone, Debug, PartialEq)]
pub struct ManipulatorObs {
    /// Feature vector, laid out as documented by the task.
    pub obs: Array1<f32>,
}

impl From<Vec<f32>> for ManipulatorObs {
    fn from(obs: Vec<f32>) -> Self {
        Self {
            obs: Array1::from(obs),
        }
    }
}

impl Obs for ManipulatorObs {
    fn len(&self) -> usize {
        self.obs.len()
    }
}
