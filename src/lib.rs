//! Panel docking and layout engine
//!
//! This crate provides the core state and geometry logic for a multi-window
//! panel shell: a binary-split tree of tabbed panels that can be docked into
//! a main layout or float freely, and an on-demand layout pass that computes
//! panel rectangles, divider bars, tab placements, and drag-drop docking
//! anchors against a viewport.

pub mod config;
pub mod error;
pub mod layout;
pub mod model;

// Re-export commonly used types
pub use config::DockConfig;
pub use error::DockError;
pub use layout::{compute_layout, content_rect, Anchor, Divider, Layout, LayoutWindow, PanelRect};
pub use model::{
    DockMode, OpenAnchor, Panel, PanelArea, PanelContent, PanelId, Rect, Size, SplitDirection,
    WindowId, WindowTab,
};
