//! Errors of the task model.
use crate::SimError;
use thiserror::Error;

/// Errors raised by tasks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    /// An action component is NaN or infinite.
    #[error("action component {index} is not finite: {value}")]
    NonFiniteAction {
        /// Index of the offending component.
        index: usize,
        /// The offending value.
        value: f32,
    },

    /// The action does not have the length the task consumes.
    #[error("expected an action of length {expected}, got {actual}")]
    ActionDim {
        /// Action dimension of the task.
        expected: usize,
        /// Length of the given action.
        actual: usize,
    },

    /// The assembled observation does not fit the declared observation dimension.
    #[error("observation layout has {actual} entries, declared dimension is {expected}")]
    ObservationDim {
        /// Observation dimension of the task.
        expected: usize,
        /// Number of assembled entries.
        actual: usize,
    },

    /// A placement direction had zero length and cannot be normalized.
    #[error("degenerate placement: zero-length direction vector")]
    DegeneratePlacement,

    /// Lookup or engine failure reported by the simulation.
    #[error(transparent)]
    Sim(#[from] SimError),
}
