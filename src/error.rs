//! Structural errors reported by panel tree mutations
//!
//! These represent caller misuse of the tree's structural invariants.
//! Soft conditions (removing an absent window, looking up an unplaced
//! window id) are handled as local no-ops and never surface here.

use thiserror::Error;

use crate::model::PanelId;

/// Invalid-operation conditions raised at mutation boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DockError {
    /// The id does not resolve to a live panel
    #[error("panel {0:?} does not exist in this layout")]
    PanelNotFound(PanelId),

    /// Full-docking into a subdivided panel is disallowed
    #[error("cannot merge a tab group into subdivided panel {0:?}")]
    FullDockIntoSplit(PanelId),

    /// Split nodes never hold windows directly
    #[error("panel {0:?} is subdivided and cannot hold windows")]
    WindowIntoSplit(PanelId),

    /// A panel cannot be docked into itself
    #[error("cannot dock panel {0:?} into itself")]
    SelfDock(PanelId),

    /// The dock target sits inside the moving panel's own subtree
    #[error("panel {0:?} already contains dock target {1:?}")]
    CircularDock(PanelId, PanelId),

    /// The root panel stays at the top of the docked tree
    #[error("the root panel cannot be re-docked")]
    DockRoot,
}
