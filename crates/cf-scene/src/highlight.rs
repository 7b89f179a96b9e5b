//! Hover/focus interaction state machine.
//!
//! Two committed states: unfocused, or focused on one node. Hover is a
//! non-committing overlay on top of either. Hover-out with an active
//! focus restores the focused emphasis rather than neutral styling; an
//! unconditional revert would silently lose the focus styling.

/// What the styling pass should emphasize right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emphasis {
    None,
    /// Transient: pointer over a node or its label.
    Hover(String),
    /// Committed: a clicked node.
    Focus(String),
}

/// Current interaction state, keyed by raw node identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Interaction {
    focus: Option<String>,
    hover: Option<String>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a node or its label.
    pub fn hover_in(&mut self, raw: impl Into<String>) {
        self.hover = Some(raw.into());
    }

    /// Pointer left; any focus emphasis survives.
    pub fn hover_out(&mut self) {
        self.hover = None;
    }

    /// Click: toggles focus on the node, or moves focus directly when a
    /// different node is already focused.
    pub fn click(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        if self.focus.as_deref() == Some(raw.as_str()) {
            self.focus = None;
        } else {
            self.focus = Some(raw);
        }
    }

    /// Full redraws reset all interaction state.
    pub fn reset(&mut self) {
        self.focus = None;
        self.hover = None;
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    /// Hover wins over focus while the pointer is down on a node.
    pub fn emphasis(&self) -> Emphasis {
        if let Some(h) = &self.hover {
            Emphasis::Hover(h.clone())
        } else if let Some(f) = &self.focus {
            Emphasis::Focus(f.clone())
        } else {
            Emphasis::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_without_focus_reverts_to_neutral() {
        let mut state = Interaction::new();
        state.hover_in("A");
        assert_eq!(state.emphasis(), Emphasis::Hover("A".into()));
        state.hover_out();
        assert_eq!(state.emphasis(), Emphasis::None);
    }

    #[test]
    fn hover_out_with_focus_restores_focus_emphasis() {
        let mut state = Interaction::new();
        state.click("A");
        state.hover_in("B");
        assert_eq!(state.emphasis(), Emphasis::Hover("B".into()));
        state.hover_out();
        assert_eq!(state.emphasis(), Emphasis::Focus("A".into()));
    }

    #[test]
    fn click_toggles_focus() {
        let mut state = Interaction::new();
        state.click("A");
        assert_eq!(state.focused(), Some("A"));
        state.click("A");
        assert_eq!(state.focused(), None);
        assert_eq!(state.emphasis(), Emphasis::None);
    }

    #[test]
    fn clicking_another_node_moves_focus_directly() {
        let mut state = Interaction::new();
        state.click("A");
        state.click("B");
        assert_eq!(state.focused(), Some("B"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = Interaction::new();
        state.click("A");
        state.hover_in("B");
        state.reset();
        assert_eq!(state.emphasis(), Emphasis::None);
    }
}
