//! Scene errors

use thiserror::Error;

use super::ShapeHandle;

/// Error type for scene-graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The handle was never issued by this world, or its node was already removed.
    #[error("no node for handle {0:?} in this world")]
    UnknownHandle(ShapeHandle),

    /// The handle names a plain shape where a craft was expected.
    #[error("node {0:?} is not a craft")]
    NotACraft(ShapeHandle),
}
