//! Layout mode and sidebar state.
//!
//! The page starts out *hydrating*: rendered, sidebar logically open, no
//! toggle exposed. Once the page is displayed it receives a single
//! [`SidebarEvent::Mounted`] carrying the measured viewport width; from then
//! on it is interactive and stays so. The embedded browser script
//! (`static/sidebar.js`) follows the same transitions.
//!
//! ```text
//!                Mounted(w <= 800)
//!   Hydrating ───────────────────────► Interactive { open: false }
//!       │                                   ▲   │
//!       │ Mounted(w > 800)         Toggle   │   │ Toggle
//!       └────────────────────────► Interactive { open: true }
//!                                      │
//!                                      │ ContentClicked (narrow only)
//!                                      ▼
//!                             Interactive { open: false }
//! ```

/// Viewport widths at or below this are laid out narrow.
pub const NARROW_BREAKPOINT: u32 = 800;

/// Layout derived once from the measured viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Narrow,
    Wide,
}

impl LayoutMode {
    pub fn from_viewport_width(width: u32) -> Self {
        if width <= NARROW_BREAKPOINT {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    /// Body class carrying the mode to the stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            LayoutMode::Narrow => "layout-narrow",
            LayoutMode::Wide => "layout-wide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPhase {
    /// First render, before any post-display effect has run.
    Hydrating,
    Interactive { layout: LayoutMode, open: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// Post-display measurement. Only the first one has any effect.
    Mounted { viewport_width: u32 },
    /// The menu trigger was clicked.
    ToggleClicked,
    /// A click landed inside the main content area.
    ContentClicked,
}

/// Per-view UI state owned by the page assembly root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    phase: SidebarPhase,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            phase: SidebarPhase::Hydrating,
        }
    }

    /// State right after mounting at `viewport_width`.
    pub fn mounted(viewport_width: u32) -> Self {
        let mut state = Self::new();
        state.apply(SidebarEvent::Mounted { viewport_width });
        state
    }

    pub fn phase(&self) -> SidebarPhase {
        self.phase
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, SidebarPhase::Interactive { .. })
    }

    /// Hydrating counts as open.
    pub fn is_open(&self) -> bool {
        match self.phase {
            SidebarPhase::Hydrating => true,
            SidebarPhase::Interactive { open, .. } => open,
        }
    }

    /// Known once interactive.
    pub fn layout(&self) -> Option<LayoutMode> {
        match self.phase {
            SidebarPhase::Hydrating => None,
            SidebarPhase::Interactive { layout, .. } => Some(layout),
        }
    }

    /// Apply one event. Returns whether the state changed.
    pub fn apply(&mut self, event: SidebarEvent) -> bool {
        let next = match (self.phase, event) {
            (SidebarPhase::Hydrating, SidebarEvent::Mounted { viewport_width }) => {
                let layout = LayoutMode::from_viewport_width(viewport_width);
                SidebarPhase::Interactive {
                    layout,
                    open: layout == LayoutMode::Wide,
                }
            }
            (SidebarPhase::Interactive { layout, open }, SidebarEvent::ToggleClicked) => {
                SidebarPhase::Interactive {
                    layout,
                    open: !open,
                }
            }
            (
                SidebarPhase::Interactive {
                    layout: LayoutMode::Narrow,
                    open: true,
                },
                SidebarEvent::ContentClicked,
            ) => SidebarPhase::Interactive {
                layout: LayoutMode::Narrow,
                open: false,
            },
            (phase, _) => phase,
        };

        let changed = next != self.phase;
        if changed {
            tracing::debug!(?event, from = ?self.phase, to = ?next, "Sidebar transition");
            self.phase = next;
        }
        changed
    }

    /// Convenience for [`SidebarEvent::ToggleClicked`].
    pub fn toggle(&mut self) -> bool {
        self.apply(SidebarEvent::ToggleClicked)
    }

    /// Body classes: layout mode (when known), sidebar state, interactivity.
    pub fn body_classes(&self) -> String {
        let mut classes = Vec::with_capacity(3);
        if let Some(layout) = self.layout() {
            classes.push(layout.css_class());
        }
        classes.push(if self.is_open() {
            "sidebar-open"
        } else {
            "sidebar-closed"
        });
        if self.is_interactive() {
            classes.push("interactive");
        }
        classes.join(" ")
    }
}
