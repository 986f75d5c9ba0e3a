//! Layout pass - panel rectangles, dividers, and docking anchors
//!
//! A pure function from the panel tree and a viewport rectangle to the
//! screen geometry of every panel: tab placements, draggable dividers
//! between split children, and the drop-target anchors a drag gesture can
//! hit. Nothing here mutates the tree, so the pass can run speculatively
//! (e.g. to preview a drop) as often as needed.

use crate::model::{
    DockMode, Panel, PanelArea, PanelContent, PanelId, Rect, SplitDirection, WindowId,
};

/// Screen rectangle assigned to one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRect {
    pub panel: PanelId,
    pub rect: Rect,
    pub floating: bool,
    /// Floating panels stack above the docked tree; higher renders on top
    pub z_index: usize,
}

/// A window's tab placement within its panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutWindow {
    pub window_id: WindowId,
    /// Position in the panel's tab strip
    pub tab_index: usize,
    pub panel: PanelId,
    pub rect: Rect,
}

/// Draggable boundary between two split children
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    /// The split node this divider belongs to
    pub panel: PanelId,
    pub direction: SplitDirection,
    /// Zero-thickness line at the split coordinate
    pub rect: Rect,
    /// Resize clamp range along the split axis
    pub resize_min: f32,
    pub resize_max: f32,
}

/// Drop target offered to a drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub panel: PanelId,
    pub x: f32,
    pub y: f32,
    pub mode: DockMode,
    /// What the space would look like after dropping here
    pub preview_rect: Rect,
}

/// Complete geometry for one viewport
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub panel_rects: Vec<PanelRect>,
    pub windows: Vec<LayoutWindow>,
    pub dividers: Vec<Divider>,
    pub anchors: Vec<Anchor>,
}

impl Layout {
    /// The anchor closest to a point, for drag-preview hit testing
    pub fn anchor_nearest(&self, x: f32, y: f32) -> Option<&Anchor> {
        self.anchors.iter().min_by(|a, b| {
            let da = (a.x - x) * (a.x - x) + (a.y - y) * (a.y - y);
            let db = (b.x - x) * (b.x - x) + (b.y - y) * (b.y - y);
            da.total_cmp(&db)
        })
    }

    /// The topmost panel under a point
    ///
    /// Floating panels are emitted after the docked tree in ascending
    /// stacking order, so the last hit wins.
    pub fn panel_at(&self, x: f32, y: f32) -> Option<PanelId> {
        self.panel_rects
            .iter()
            .rev()
            .find(|p| p.rect.contains(x, y))
            .map(|p| p.panel)
    }
}

/// Compute the full layout of a panel area against a viewport
///
/// The docked tree is laid out over the whole viewport; floating panels
/// follow in stacking order, using their own rectangles and accepting only
/// full (tab-merge) docks.
pub fn compute_layout(area: &PanelArea, viewport: Rect) -> Layout {
    let mut layout = Layout::default();
    traverse_layout(area, area.root, viewport, &mut layout);

    for (index, &id) in area.floating.iter().enumerate() {
        let Some(panel) = area.panel(id) else {
            continue;
        };
        let rect = panel.rect;

        push_windows(&mut layout, panel, rect);
        layout.panel_rects.push(PanelRect {
            panel: id,
            rect,
            floating: true,
            z_index: index + 1,
        });
        layout.anchors.push(Anchor {
            panel: id,
            x: rect.center_x(),
            y: rect.center_y(),
            mode: DockMode::Full,
            preview_rect: rect,
        });
    }

    layout
}

/// Rectangle of the panel currently containing a window
///
/// Returns `None` when the window id is not placed anywhere.
pub fn content_rect(area: &PanelArea, viewport: Rect, window: WindowId) -> Option<Rect> {
    let layout = compute_layout(area, viewport);
    layout
        .windows
        .iter()
        .find(|w| w.window_id == window)
        .map(|w| w.rect)
}

/// Recursively lay out the docked subtree under `id` into `rect`
fn traverse_layout(area: &PanelArea, id: PanelId, rect: Rect, layout: &mut Layout) {
    let Some(panel) = area.panel(id) else {
        return;
    };
    let inset = area.config.anchor_inset;
    let x_mid = rect.center_x();
    let y_mid = rect.center_y();

    match &panel.content {
        PanelContent::Split {
            direction: SplitDirection::Horizontal,
            ratio,
            children,
        } => {
            let x_split = rect.x + (rect.width * ratio).round();
            traverse_layout(area, children[0], rect.with_x2(x_split), layout);
            traverse_layout(area, children[1], rect.with_x1(x_split), layout);
            layout.dividers.push(Divider {
                panel: id,
                direction: SplitDirection::Horizontal,
                rect: Rect::from_edges(x_split, rect.y, x_split, rect.y2()),
                resize_min: rect.x,
                resize_max: rect.x2(),
            });
        }
        PanelContent::Split {
            direction: SplitDirection::Vertical,
            ratio,
            children,
        } => {
            let y_split = rect.y + (rect.height * ratio).round();
            traverse_layout(area, children[0], rect.with_y2(y_split), layout);
            traverse_layout(area, children[1], rect.with_y1(y_split), layout);
            layout.dividers.push(Divider {
                panel: id,
                direction: SplitDirection::Vertical,
                rect: Rect::from_edges(rect.x, y_split, rect.x2(), y_split),
                resize_min: rect.y,
                resize_max: rect.y2(),
            });
        }
        PanelContent::Leaf { .. } => {
            push_windows(layout, panel, rect);
            layout.panel_rects.push(PanelRect {
                panel: id,
                rect,
                floating: false,
                z_index: 0,
            });
            layout.anchors.push(Anchor {
                panel: id,
                x: x_mid,
                y: y_mid,
                mode: DockMode::Full,
                preview_rect: rect,
            });
        }
    }

    // Edge anchors are offered for every node, leaf or split, so a drag
    // can target any sub-region's edge. Previews show the quarter slice
    // the incoming panel would take.
    layout.anchors.push(Anchor {
        panel: id,
        x: rect.x2() - inset,
        y: y_mid,
        mode: DockMode::Right,
        preview_rect: rect.with_x1(rect.x + rect.width * 3.0 / 4.0),
    });
    layout.anchors.push(Anchor {
        panel: id,
        x: rect.x + inset,
        y: y_mid,
        mode: DockMode::Left,
        preview_rect: rect.with_x2(rect.x + rect.width / 4.0),
    });
    layout.anchors.push(Anchor {
        panel: id,
        x: x_mid,
        y: rect.y2() - inset,
        mode: DockMode::Bottom,
        preview_rect: rect.with_y1(rect.y + rect.height * 3.0 / 4.0),
    });
    layout.anchors.push(Anchor {
        panel: id,
        x: x_mid,
        y: rect.y + inset,
        mode: DockMode::Top,
        preview_rect: rect.with_y2(rect.y + rect.height / 4.0),
    });
}

/// Emit one tab entry per window of a leaf panel
fn push_windows(layout: &mut Layout, panel: &Panel, rect: Rect) {
    for (tab_index, tab) in panel.tabs().iter().enumerate() {
        layout.windows.push(LayoutWindow {
            window_id: tab.window_id,
            tab_index,
            panel: panel.id,
            rect,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowId;

    #[test]
    fn test_anchor_nearest_prefers_center_full_anchor() {
        let mut area = PanelArea::new();
        area.add_window(area.root, WindowId(1)).unwrap();

        let layout = compute_layout(&area, Rect::new(0.0, 0.0, 400.0, 300.0));
        let anchor = layout.anchor_nearest(200.0, 150.0).unwrap();
        assert_eq!(anchor.mode, DockMode::Full);
        assert_eq!(anchor.panel, area.root);
    }

    #[test]
    fn test_panel_at_empty_layout_misses() {
        let area = PanelArea::new();
        let layout = compute_layout(&area, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(layout.panel_at(-10.0, -10.0), None);
        assert_eq!(layout.panel_at(200.0, 150.0), Some(area.root));
    }
}
