//! Shared context handed to display elements
//!
//! Instead of an ambient lookup, every display element takes the context as
//! an argument: a read-only view of the widget state plus the registrar it
//! exposes nodes through. The widget memoizes the context per state
//! revision, and since the registrar is identity-stable for the widget's
//! whole life, only a state change can invalidate it.

use ovation_core::Registrar;

use crate::state::ClapState;

/// Read-only slice of widget state the display elements consume
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClapView {
    pub count: u32,
    pub count_total: u32,
    pub is_clicked: bool,
}

impl From<ClapState> for ClapView {
    fn from(state: ClapState) -> Self {
        Self {
            count: state.count,
            count_total: state.count_total,
            is_clicked: state.is_clicked,
        }
    }
}

/// Context value passed down the display tree
#[derive(Clone, Debug)]
pub struct ClapContext {
    view: ClapView,
    registrar: Registrar,
}

impl ClapContext {
    pub fn new(state: ClapState, registrar: Registrar) -> Self {
        Self {
            view: state.into(),
            registrar,
        }
    }

    pub fn view(&self) -> ClapView {
        self.view
    }

    /// Registration handle display elements expose their nodes through
    pub fn registrar(&self) -> &Registrar {
        &self.registrar
    }

    /// True when both contexts show the same view through the same registrar
    pub fn same_context(&self, other: &ClapContext) -> bool {
        self.view == other.view && self.registrar.same_registrar(&other.registrar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mirrors_state() {
        let state = ClapState::default().clapped();
        let context = ClapContext::new(state, Registrar::new());
        assert_eq!(context.view().count, 1);
        assert_eq!(context.view().count_total, 268);
        assert!(context.view().is_clicked);
    }

    #[test]
    fn test_same_context_requires_shared_registrar() {
        let registrar = Registrar::new();
        let a = ClapContext::new(ClapState::default(), registrar.clone());
        let b = ClapContext::new(ClapState::default(), registrar);
        let c = ClapContext::new(ClapState::default(), Registrar::new());
        assert!(a.same_context(&b));
        assert!(!a.same_context(&c));
    }

    #[test]
    fn test_same_context_requires_equal_view() {
        let registrar = Registrar::new();
        let a = ClapContext::new(ClapState::default(), registrar.clone());
        let b = ClapContext::new(ClapState::default().clapped(), registrar);
        assert!(!a.same_context(&b));
    }
}
