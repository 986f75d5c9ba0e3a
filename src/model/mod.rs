//! Panel tree state - the complete docking model
//!
//! This module contains the mutable panel tree and the geometric primitives
//! it shares with the layout pass.

pub mod geometry;
pub mod panel;

pub use geometry::{Rect, Size};
pub use panel::{
    DockMode, OpenAnchor, Panel, PanelArea, PanelContent, PanelId, SplitDirection, WindowId,
    WindowTab,
};
