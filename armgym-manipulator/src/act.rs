//! Action of [`ManipulatorEnv`](crate::ManipulatorEnv).
use armgym_core::Act;
use ndarray::Array1;

/// Continuous action, one component per actuated joint.
///
/// Components are clipped to `[-1, 1]` when applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ManipulatorAct {
    /// Stores an action.
    pub act: Array1<f32>,
}

impl ManipulatorAct {
    /// Constructs an action.
    pub fn new(act: Vec<f32>) -> Self {
        Self {
            act: Array1::from(act),
        }
    }
}

impl From<Vec<f32>> for ManipulatorAct {
    fn from(act: Vec<f32>) -> Self {
        Self::new(act)
    }
}

impl Act for ManipulatorAct {
    fn len(&self) -> usize {
        self.act.len()
    }
}
