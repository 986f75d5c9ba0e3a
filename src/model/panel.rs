//! Panel tree - tabbed panels, binary splits, and floating windows
//!
//! The docking model is an arena of panel records addressed by stable
//! integer ids: one root panel that is always docked, plus a stack of
//! top-level floating panels. Structural simplification (collapsing a
//! split whose sibling emptied) overwrites the parent's arena slot with
//! the surviving child's record, so outside code can hold a `PanelId`
//! across tree mutations without it going stale.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::DockConfig;
use crate::error::DockError;
use crate::model::geometry::{Rect, Size};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a panel
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PanelId(pub u64);

/// Opaque identifier for window content supplied by the embedding shell
///
/// The engine never inspects what a window id refers to; the shell maps
/// ids to renderers and data on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

// ============================================================================
// Panel content
// ============================================================================

/// Direction for splitting panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitDirection {
    /// Children arranged left-to-right
    Horizontal,
    /// Children arranged top-to-bottom
    Vertical,
}

/// Docking modes offered to a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockMode {
    /// Merge into the target as new tabs
    Full,
    Left,
    Right,
    Top,
    Bottom,
}

impl DockMode {
    /// Split direction a directional dock produces (`None` for `Full`)
    pub fn split_direction(&self) -> Option<SplitDirection> {
        match self {
            DockMode::Full => None,
            DockMode::Left | DockMode::Right => Some(SplitDirection::Horizontal),
            DockMode::Top | DockMode::Bottom => Some(SplitDirection::Vertical),
        }
    }
}

/// A window entry in a leaf panel's tab strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowTab {
    pub window_id: WindowId,
    pub title: String,
}

/// Animation hint for a panel that was just created
///
/// The rendering layer clears this once the appear animation has played.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpenAnchor {
    pub rect: Rect,
    pub align_x: f32,
    pub align_y: f32,
}

impl Default for OpenAnchor {
    fn default() -> Self {
        Self {
            rect: Rect::default(),
            align_x: 0.0,
            align_y: 1.0,
        }
    }
}

/// Content held by a panel - either a tab group or a two-way split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PanelContent {
    /// A tab group holding zero or more windows
    Leaf {
        tabs: Vec<WindowTab>,
        /// Active tab, clamped to `[0, tabs.len() - 1]` (0 when empty)
        active_tab: usize,
    },
    /// A two-way split; `ratio` is the first child's share along the axis
    Split {
        direction: SplitDirection,
        ratio: f32,
        children: [PanelId; 2],
    },
}

impl PanelContent {
    fn empty_leaf() -> Self {
        PanelContent::Leaf {
            tabs: Vec::new(),
            active_tab: 0,
        }
    }
}

// ============================================================================
// Panel
// ============================================================================

/// A node in the docking tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,

    /// Top-level floating panels position themselves by `rect`
    pub floating: bool,

    /// Authoritative while floating; derived by the layout pass otherwise
    pub rect: Rect,

    /// Size given to this panel when it is first detached
    pub preferred_floating_size: Size,

    /// Set while the just-opened appear animation should play
    pub just_opened: Option<OpenAnchor>,

    /// Content is discarded on the next cleanup pass
    pub ephemeral: bool,

    pub content: PanelContent,
}

impl Panel {
    fn new(id: PanelId, floating: bool, preferred_floating_size: Size) -> Self {
        Self {
            id,
            floating,
            rect: Rect::default(),
            preferred_floating_size,
            just_opened: None,
            ephemeral: false,
            content: PanelContent::empty_leaf(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, PanelContent::Leaf { .. })
    }

    pub fn is_split(&self) -> bool {
        matches!(self.content, PanelContent::Split { .. })
    }

    /// A leaf with no tabs; splits always have children and are never empty
    pub fn is_empty(&self) -> bool {
        matches!(&self.content, PanelContent::Leaf { tabs, .. } if tabs.is_empty())
    }

    /// Tab strip of a leaf (empty slice for split nodes)
    pub fn tabs(&self) -> &[WindowTab] {
        match &self.content {
            PanelContent::Leaf { tabs, .. } => tabs,
            PanelContent::Split { .. } => &[],
        }
    }

    /// The currently active tab, if any
    pub fn active_tab(&self) -> Option<&WindowTab> {
        match &self.content {
            PanelContent::Leaf { tabs, active_tab } => tabs.get(*active_tab),
            PanelContent::Split { .. } => None,
        }
    }

    /// Children of a split node
    pub fn split_children(&self) -> Option<[PanelId; 2]> {
        match &self.content {
            PanelContent::Split { children, .. } => Some(*children),
            PanelContent::Leaf { .. } => None,
        }
    }

    pub fn has_window(&self, window: WindowId) -> bool {
        self.tabs().iter().any(|t| t.window_id == window)
    }
}

// ============================================================================
// Panel area (top-level state)
// ============================================================================

/// The complete docking state
///
/// Owns every panel in a slot map, the docked tree rooted at `root`, and
/// the floating panel stack. All structural mutations go through the
/// methods here; the layout pass only ever reads.
#[derive(Debug, Clone)]
pub struct PanelArea {
    /// All live panels, keyed by id
    pub panels: HashMap<PanelId, Panel>,

    /// The docked tree root; never floating, never removed
    pub root: PanelId,

    /// Top-level floating panels in stacking order (last = topmost)
    pub floating: Vec<PanelId>,

    /// Last panel the user interacted with (informational)
    pub active_panel: Option<PanelId>,

    /// Geometry tunables
    pub config: DockConfig,

    /// ID generator
    next_panel_id: u64,
}

impl Default for PanelArea {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelArea {
    /// Create a docking state with a single empty, docked root leaf (id 1)
    pub fn new() -> Self {
        Self::with_config(DockConfig::default())
    }

    pub fn with_config(config: DockConfig) -> Self {
        let root = PanelId(1);
        let mut panels = HashMap::new();
        panels.insert(
            root,
            Panel::new(root, false, config.preferred_floating_size),
        );
        Self {
            panels,
            root,
            floating: Vec::new(),
            active_panel: None,
            config,
            next_panel_id: 2,
        }
    }

    /// Generate a new panel ID
    fn next_panel_id(&mut self) -> PanelId {
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;
        id
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&id)
    }

    /// Iterate over every live panel in unspecified order
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    /// Find the leaf currently holding a window
    pub fn find_panel_with_window(&self, window: WindowId) -> Option<PanelId> {
        self.panels
            .values()
            .find(|p| p.has_window(window))
            .map(|p| p.id)
    }

    // =========================================================================
    // Panel lifecycle
    // =========================================================================

    /// Allocate a new floating, empty leaf and place it on top of the stack
    pub fn add_panel(&mut self) -> PanelId {
        let id = self.next_panel_id();
        let mut panel = Panel::new(id, true, self.config.preferred_floating_size);
        panel.just_opened = Some(OpenAnchor::default());
        self.panels.insert(id, panel);
        self.floating.push(id);
        tracing::debug!(panel = id.0, "created floating panel");
        id
    }

    /// Float a docked panel
    ///
    /// Only flips the flag and registers the panel in the floating stack;
    /// the caller is responsible for unlinking it from its old parent
    /// before the next layout pass.
    pub fn detach_panel(&mut self, id: PanelId) -> Result<(), DockError> {
        if id == self.root {
            // The root stays docked
            return Ok(());
        }
        let panel = self
            .panels
            .get_mut(&id)
            .ok_or(DockError::PanelNotFound(id))?;
        if panel.floating {
            return Ok(());
        }
        panel.floating = true;
        // First detach: give the panel its preferred floating extent
        if panel.rect.width == 0.0 && panel.rect.height == 0.0 {
            panel.rect.width = panel.preferred_floating_size.width;
            panel.rect.height = panel.preferred_floating_size.height;
        }
        self.floating.push(id);
        self.active_panel = Some(id);
        tracing::debug!(panel = id.0, "detached panel to floating");
        Ok(())
    }

    // =========================================================================
    // Window management
    // =========================================================================

    /// Append a window to a leaf panel and make it the active tab
    ///
    /// No cross-panel uniqueness check is made here; callers remove the
    /// window from its previous panel first (see
    /// [`Self::find_panel_with_window`]).
    pub fn add_window(&mut self, panel: PanelId, window: WindowId) -> Result<(), DockError> {
        let p = self
            .panels
            .get_mut(&panel)
            .ok_or(DockError::PanelNotFound(panel))?;
        match &mut p.content {
            PanelContent::Leaf { tabs, active_tab } => {
                tabs.push(WindowTab {
                    window_id: window,
                    title: String::new(),
                });
                *active_tab = tabs.len() - 1;
            }
            PanelContent::Split { .. } => return Err(DockError::WindowIntoSplit(panel)),
        }
        p.ephemeral = false;
        Ok(())
    }

    /// Remove the first matching window from a panel; no-op when absent
    pub fn remove_window(&mut self, panel: PanelId, window: WindowId) {
        let Some(p) = self.panels.get_mut(&panel) else {
            return;
        };
        let PanelContent::Leaf { tabs, active_tab } = &mut p.content else {
            return;
        };
        let Some(index) = tabs.iter().position(|t| t.window_id == window) else {
            return;
        };
        tabs.remove(index);
        *active_tab = (*active_tab).min(tabs.len().saturating_sub(1));
    }

    /// Set the display title of a window, wherever it currently lives
    pub fn set_window_title(&mut self, window: WindowId, title: &str) {
        for p in self.panels.values_mut() {
            if let PanelContent::Leaf { tabs, .. } = &mut p.content {
                if let Some(tab) = tabs.iter_mut().find(|t| t.window_id == window) {
                    tab.title = title.to_string();
                    return;
                }
            }
        }
    }

    // =========================================================================
    // Docking
    // =========================================================================

    /// Merge or subdivide: dock `panel` into `into` with the given mode
    ///
    /// `Full` (or any mode when the target is an empty leaf) appends the
    /// moving panel's windows onto the target as tabs. Directional modes
    /// subdivide the target in place: a new sibling takes over the target's
    /// prior content, and the target becomes a split holding the moving
    /// panel and the sibling.
    pub fn dock(&mut self, panel: PanelId, into: PanelId, mode: DockMode) -> Result<(), DockError> {
        if panel == into {
            return Err(DockError::SelfDock(panel));
        }
        if !self.panels.contains_key(&panel) {
            return Err(DockError::PanelNotFound(panel));
        }
        let into_panel = self
            .panels
            .get(&into)
            .ok_or(DockError::PanelNotFound(into))?;

        // Any mode collapses to a tab merge when the target is a totally
        // empty leaf.
        match mode.split_direction() {
            Some(direction) if !into_panel.is_empty() => {
                let original_first = matches!(mode, DockMode::Right | DockMode::Bottom);
                self.dock_directional(panel, into, direction, original_first)
            }
            _ => self.dock_full(panel, into),
        }
    }

    /// Tab-merge: append the source's windows onto the target leaf
    fn dock_full(&mut self, panel: PanelId, into: PanelId) -> Result<(), DockError> {
        if self.panels.get(&into).is_some_and(Panel::is_split) {
            return Err(DockError::FullDockIntoSplit(into));
        }

        // Take the source's tabs; a split source contributes nothing
        let moved = match self.panels.get_mut(&panel) {
            Some(p) => match &mut p.content {
                PanelContent::Leaf { tabs, active_tab } => {
                    *active_tab = 0;
                    std::mem::take(tabs)
                }
                PanelContent::Split { .. } => Vec::new(),
            },
            None => Vec::new(),
        };

        // The source leaves the floating stack; if it was docked it stays
        // in the tree as an empty leaf until the next coalesce pass.
        if panel != self.root {
            if let Some(p) = self.panels.get_mut(&panel) {
                p.floating = true;
            }
        }
        self.floating.retain(|&id| id != panel);

        if let Some(p) = self.panels.get_mut(&into) {
            if let PanelContent::Leaf { tabs, active_tab } = &mut p.content {
                if !moved.is_empty() {
                    tabs.extend(moved);
                    *active_tab = tabs.len() - 1;
                    p.ephemeral = false;
                }
            }
        }

        self.active_panel = Some(into);
        tracing::debug!(from = panel.0, to = into.0, "merged panel tabs");
        Ok(())
    }

    /// Subdivide the target; the moving panel and a copy of the target's
    /// prior content become its two children
    ///
    /// `original_first` (Right/Bottom docks) keeps the prior content in
    /// the first slot with the larger share; otherwise the incoming panel
    /// goes first and the prior content keeps the larger second share.
    fn dock_directional(
        &mut self,
        panel: PanelId,
        into: PanelId,
        direction: SplitDirection,
        original_first: bool,
    ) -> Result<(), DockError> {
        if panel == self.root {
            return Err(DockError::DockRoot);
        }
        if self.subtree_contains(panel, into) {
            return Err(DockError::CircularDock(panel, into));
        }

        let ratio = if original_first {
            self.config.dock_ratio
        } else {
            1.0 - self.config.dock_ratio
        };

        let sibling = self.next_panel_id();
        let children = if original_first {
            [sibling, panel]
        } else {
            [panel, sibling]
        };

        // The target keeps its own floating status; a floating panel that
        // gets subdivided simply floats as a split subtree.
        let prior_content = {
            let into_panel = self
                .panels
                .get_mut(&into)
                .ok_or(DockError::PanelNotFound(into))?;
            std::mem::replace(
                &mut into_panel.content,
                PanelContent::Split {
                    direction,
                    ratio,
                    children,
                },
            )
        };

        // The sibling becomes exactly what the target used to be
        let mut sibling_panel = Panel::new(sibling, false, self.config.preferred_floating_size);
        sibling_panel.content = prior_content;
        self.panels.insert(sibling, sibling_panel);

        if let Some(p) = self.panels.get_mut(&panel) {
            p.floating = false;
        }
        self.floating.retain(|&id| id != panel);
        self.active_panel = Some(panel);
        tracing::debug!(moving = panel.0, target = into.0, "subdivided panel");
        Ok(())
    }

    /// Whether `needle` sits inside the subtree rooted at `base`
    fn subtree_contains(&self, base: PanelId, needle: PanelId) -> bool {
        if base == needle {
            return true;
        }
        match self.panels.get(&base).map(|p| &p.content) {
            Some(PanelContent::Split { children, .. }) => children
                .iter()
                .any(|&child| self.subtree_contains(child, needle)),
            _ => false,
        }
    }

    // =========================================================================
    // Cleanup
    // =========================================================================

    /// Discard the content of ephemeral leaves in floating subtrees
    ///
    /// Docked panels are exempt: only panels reachable from the floating
    /// stack are visited. Always followed by a full coalesce pass.
    pub fn remove_ephemerals(&mut self) {
        for id in self.floating.clone() {
            self.clear_ephemerals_recursive(id);
        }
        self.coalesce_empty_panels();
    }

    fn clear_ephemerals_recursive(&mut self, id: PanelId) {
        let children = self
            .panels
            .get(&id)
            .and_then(Panel::split_children);
        if let Some([first, second]) = children {
            self.clear_ephemerals_recursive(first);
            self.clear_ephemerals_recursive(second);
            return;
        }
        if let Some(p) = self.panels.get_mut(&id) {
            if p.ephemeral {
                if let PanelContent::Leaf { tabs, active_tab } = &mut p.content {
                    tabs.clear();
                    *active_tab = 0;
                    tracing::trace!(panel = id.0, "cleared ephemeral panel");
                }
            }
        }
    }

    /// Prune empty panels and collapse single-child splits, bottom-up
    ///
    /// Applied to the root subtree and to every floating subtree. A split
    /// left with one child absorbs it in place: the child's record moves
    /// into the parent's slot, keeping the parent's id valid for any
    /// outside handle. Emptied top-level floating panels are dropped, and
    /// slots no longer reachable from the root or the floating stack are
    /// freed.
    pub fn coalesce_empty_panels(&mut self) {
        self.coalesce_recursive(self.root);
        for id in self.floating.clone() {
            self.coalesce_recursive(id);
        }

        let panels = &self.panels;
        self.floating
            .retain(|id| panels.get(id).is_some_and(|p| !p.is_empty()));

        self.sweep_unreachable();
    }

    fn coalesce_recursive(&mut self, id: PanelId) {
        let Some([first, second]) = self.panels.get(&id).and_then(Panel::split_children) else {
            return;
        };
        self.coalesce_recursive(first);
        self.coalesce_recursive(second);

        let first_empty = self.panels.get(&first).is_none_or(Panel::is_empty);
        let second_empty = self.panels.get(&second).is_none_or(Panel::is_empty);

        match (first_empty, second_empty) {
            (false, false) => {}
            (true, false) => {
                self.panels.remove(&first);
                self.absorb_child(id, second);
            }
            (false, true) => {
                self.panels.remove(&second);
                self.absorb_child(id, first);
            }
            (true, true) => {
                // Both children emptied; the split reverts to a bare leaf
                self.panels.remove(&first);
                self.panels.remove(&second);
                if let Some(p) = self.panels.get_mut(&id) {
                    p.content = PanelContent::empty_leaf();
                }
            }
        }
    }

    /// Overwrite the parent's slot with the surviving child's record
    ///
    /// The parent keeps its id and floating flag; everything else comes
    /// from the child. The child's slot is freed.
    fn absorb_child(&mut self, parent: PanelId, child: PanelId) {
        let Some(record) = self.panels.remove(&child) else {
            return;
        };
        let Some(slot) = self.panels.get_mut(&parent) else {
            return;
        };
        slot.rect = record.rect;
        slot.preferred_floating_size = record.preferred_floating_size;
        slot.just_opened = record.just_opened;
        slot.ephemeral = record.ephemeral;
        slot.content = record.content;
        tracing::trace!(
            parent = parent.0,
            child = child.0,
            "collapsed single-child split"
        );
    }

    /// Free arena slots no longer reachable from the root or the floating
    /// stack (the sources of full docks end up here)
    fn sweep_unreachable(&mut self) {
        let mut live = HashSet::new();
        let mut stack = vec![self.root];
        stack.extend(self.floating.iter().copied());
        while let Some(id) = stack.pop() {
            if !live.insert(id) {
                continue;
            }
            if let Some(children) = self.panels.get(&id).and_then(Panel::split_children) {
                stack.extend(children);
            }
        }
        self.panels.retain(|id, _| live.contains(id));
        if let Some(active) = self.active_panel {
            if !live.contains(&active) {
                self.active_panel = None;
            }
        }
    }

    // =========================================================================
    // Interactive resize
    // =========================================================================

    /// Store a new ratio for a split, clamped to the configured range
    ///
    /// No-op on leaves so stale divider handles are harmless.
    pub fn set_split_ratio(&mut self, panel: PanelId, new_ratio: f32) {
        let (min, max) = self.config.ratio_clamp;
        if let Some(p) = self.panels.get_mut(&panel) {
            if let PanelContent::Split { ratio, .. } = &mut p.content {
                *ratio = new_ratio.clamp(min, max);
            }
        }
    }

    // =========================================================================
    // Floating panel clamping
    // =========================================================================

    /// Keep every top-level floating panel reachable after a viewport
    /// resize
    ///
    /// Horizontal position is clamped so the panel's center stays inside
    /// the margined viewport; vertically the top edge stays below the top
    /// margin and the center above the bottom margin. Inner structure is
    /// not traversed - the floating rect is authoritative.
    pub fn clamp_floating_panels(&mut self, viewport: Rect) {
        let margin = self.config.float_margin;
        for id in &self.floating {
            let Some(p) = self.panels.get_mut(id) else {
                continue;
            };
            let r = &mut p.rect;
            r.x = r
                .x
                .min(viewport.x2() - margin - r.width / 2.0)
                .max(viewport.x + margin - r.width / 2.0);
            r.y = r
                .y
                .min(viewport.y2() - margin - r.height / 2.0)
                .max(viewport.y + margin);
        }
    }

    /// Clamp one panel's whole rectangle inside the margined viewport
    ///
    /// Used right after a panel is newly floated or repositioned, when
    /// full visibility is wanted rather than partial.
    pub fn clamp_floating_panel_strictly(&mut self, id: PanelId, viewport: Rect) {
        let margin = self.config.float_margin;
        let Some(p) = self.panels.get_mut(&id) else {
            return;
        };
        let r = &mut p.rect;
        r.x = r
            .x
            .min(viewport.x2() - margin - r.width)
            .max(viewport.x + margin);
        r.y = r
            .y
            .min(viewport.y2() - margin - r.height)
            .max(viewport.y + margin);
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

impl PanelArea {
    /// Validate internal invariants in debug builds.
    ///
    /// This function checks that:
    /// - the root exists and is not floating
    /// - every floating stack entry resolves and carries the floating flag
    /// - split children resolve, are distinct, and no panel appears twice
    ///   within one subtree
    /// - active tab indices are in range
    /// - every live window id belongs to exactly one panel
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let root = self
            .panels
            .get(&self.root)
            .expect("root panel does not exist");
        assert!(!root.floating, "root panel must not be floating");

        for id in &self.floating {
            let panel = self
                .panels
                .get(id)
                .unwrap_or_else(|| panic!("floating entry {:?} does not exist", id));
            assert!(
                panel.floating,
                "floating entry {:?} does not carry the floating flag",
                id
            );
        }

        let mut seen_windows = HashSet::new();
        for (id, panel) in &self.panels {
            assert_eq!(*id, panel.id, "slot key {:?} != record id {:?}", id, panel.id);
            match &panel.content {
                PanelContent::Leaf { tabs, active_tab } => {
                    if !tabs.is_empty() {
                        assert!(
                            *active_tab < tabs.len(),
                            "panel {:?} has active_tab {} but only {} tabs",
                            id,
                            active_tab,
                            tabs.len()
                        );
                    }
                    for tab in tabs {
                        assert!(
                            seen_windows.insert(tab.window_id),
                            "window {:?} appears in more than one panel",
                            tab.window_id
                        );
                    }
                }
                PanelContent::Split { children, .. } => {
                    assert_ne!(
                        children[0], children[1],
                        "split {:?} references the same child twice",
                        id
                    );
                    for child in children {
                        assert!(
                            self.panels.contains_key(child),
                            "split {:?} references non-existent child {:?}",
                            id,
                            child
                        );
                    }
                }
            }
        }

        // No node may appear twice within one rooted subtree
        self.assert_subtree_acyclic(self.root, &mut HashSet::new());
        for id in &self.floating {
            self.assert_subtree_acyclic(*id, &mut HashSet::new());
        }
    }

    #[cfg(debug_assertions)]
    fn assert_subtree_acyclic(&self, id: PanelId, visited: &mut HashSet<PanelId>) {
        assert!(
            visited.insert(id),
            "panel {:?} is reachable twice within one subtree",
            id
        );
        if let Some(children) = self.panels.get(&id).and_then(Panel::split_children) {
            for child in children {
                self.assert_subtree_acyclic(child, visited);
            }
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_area_has_root_leaf() {
        let area = PanelArea::new();
        assert_eq!(area.root, PanelId(1));

        let root = area.panel(area.root).unwrap();
        assert!(!root.floating);
        assert!(root.is_leaf());
        assert!(root.is_empty());
        assert!(area.floating.is_empty());
        assert_eq!(area.active_panel, None);

        area.assert_invariants();
    }

    #[test]
    fn test_add_panel_ids_are_unique() {
        let mut area = PanelArea::new();
        let a = area.add_panel();
        let b = area.add_panel();
        let c = area.add_panel();

        assert_eq!(a, PanelId(2));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(area.floating, vec![a, b, c]);
        assert!(area.panel(a).unwrap().just_opened.is_some());
    }

    #[test]
    fn test_absorb_keeps_parent_id() {
        let mut area = PanelArea::new();
        area.add_window(area.root, WindowId(1)).unwrap();

        let incoming = area.add_panel();
        area.add_window(incoming, WindowId(2)).unwrap();
        area.dock(incoming, area.root, DockMode::Right).unwrap();

        // Empty the incoming child; the root split collapses back onto
        // the root id with the sibling's content.
        area.remove_window(incoming, WindowId(2));
        area.coalesce_empty_panels();

        let root = area.panel(area.root).unwrap();
        assert_eq!(root.id, area.root);
        assert!(root.is_leaf());
        assert!(root.has_window(WindowId(1)));
        assert!(area.panel(incoming).is_none());

        area.assert_invariants();
    }

    #[test]
    fn test_split_direction_for_modes() {
        assert_eq!(DockMode::Full.split_direction(), None);
        assert_eq!(
            DockMode::Left.split_direction(),
            Some(SplitDirection::Horizontal)
        );
        assert_eq!(
            DockMode::Right.split_direction(),
            Some(SplitDirection::Horizontal)
        );
        assert_eq!(
            DockMode::Top.split_direction(),
            Some(SplitDirection::Vertical)
        );
        assert_eq!(
            DockMode::Bottom.split_direction(),
            Some(SplitDirection::Vertical)
        );
    }
}
