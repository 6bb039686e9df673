//! Root clap widget
//!
//! Owns the state, the registrar, the animator, and the list of display
//! children. Hosts compose it builder-style, `mount()` once for the first
//! tree, then forward user claps as `click()` and frame deltas as `tick()`.
//!
//! # Example
//!
//! ```ignore
//! use ovation_widget::prelude::*;
//!
//! let mut clap = ClapButton::new()
//!     .child(clap_icon)
//!     .child(clap_count)
//!     .child(clap_total)
//!     .on_clap(|state| println!("clapped {} times", state.count));
//!
//! let tree = clap.mount()?;
//! let tree = clap.click()?;
//! clap.tick(16.0);
//! ```

use std::rc::Rc;

use ovation_core::{NodeHandle, RefKey, Registrar};

use crate::context::ClapContext;
use crate::coordinator::ClapAnimator;
use crate::element::Element;
use crate::error::{ClapError, Result};
use crate::state::ClapState;
use crate::style;

/// Observer invoked with the post-click state snapshot
///
/// Uses `Rc` since the widget tree is single-threaded.
pub type ClapObserver = Rc<dyn Fn(&ClapState)>;

/// Display child: renders its subtree from the shared context
pub type ChildFn = Rc<dyn Fn(&ClapContext) -> Element>;

/// Where the widget is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetPhase {
    /// Built but not yet rendered
    Created,
    /// Rendered at least once; clicks are legal
    Mounted,
}

/// The clap button root
///
/// State changes follow one path: `click()` replays the timeline, applies
/// the transition, re-renders, re-syncs the animator, and then notifies
/// the observer. Mounting renders and syncs but never notifies, so hosts
/// only hear about interactions.
pub struct ClapButton {
    state: ClapState,
    revision: u64,
    phase: WidgetPhase,
    registrar: Registrar,
    animator: ClapAnimator,
    observer: Option<ClapObserver>,
    children: Vec<ChildFn>,
    context: Rc<ClapContext>,
    context_revision: u64,
}

impl ClapButton {
    pub fn new() -> Self {
        let state = ClapState::default();
        let registrar = Registrar::new();
        Self {
            state,
            revision: 0,
            phase: WidgetPhase::Created,
            context: Rc::new(ClapContext::new(state, registrar.clone())),
            context_revision: 0,
            registrar,
            animator: ClapAnimator::new(),
            observer: None,
            children: Vec::new(),
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Host-supplied starting total (before mount; state never resets)
    pub fn initial_total(mut self, count_total: u32) -> Self {
        self.state.count_total = count_total;
        self.revision += 1;
        self
    }

    /// Add a display child rendered with the shared context
    pub fn child(mut self, child: impl Fn(&ClapContext) -> Element + 'static) -> Self {
        self.children.push(Rc::new(child));
        self
    }

    /// Register the observer called after every completed click
    pub fn on_clap(mut self, observer: impl Fn(&ClapState) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// First render: build the tree and arm the animator, notify no one
    pub fn mount(&mut self) -> Result<Element> {
        if self.phase == WidgetPhase::Mounted {
            return Err(ClapError::AlreadyMounted);
        }
        self.phase = WidgetPhase::Mounted;
        let tree = self.render();
        self.animator.sync(&self.registrar);
        tracing::debug!("ClapButton: mounted ({} children)", self.children.len());
        Ok(tree)
    }

    /// One user clap
    ///
    /// The replay fires before the state transition; restarting the
    /// animation never waits on the re-render.
    pub fn click(&mut self) -> Result<Element> {
        if self.phase == WidgetPhase::Created {
            return Err(ClapError::NotMounted);
        }
        self.animator.replay();
        self.state = self.state.clapped();
        self.revision += 1;
        let tree = self.render();
        self.animator.sync(&self.registrar);
        if let Some(observer) = &self.observer {
            observer(&self.state);
        }
        Ok(tree)
    }

    /// Advance animations one frame
    pub fn tick(&mut self, dt_ms: f32) {
        self.animator.tick(dt_ms);
    }

    fn render(&mut self) -> Element {
        let context = self.context();
        let surface = self.registrar.register(NodeHandle::new(RefKey::Surface));
        let mut root = Element::button().class(style::CLAP_CLASS).node(surface);
        for child in &self.children {
            root = root.child(child(&context));
        }
        root
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Shared context for the current state revision
    ///
    /// Memoized: repeated calls return the same value until a state change
    /// bumps the revision. The registrar inside never changes identity.
    pub fn context(&mut self) -> Rc<ClapContext> {
        if self.context_revision != self.revision {
            self.context = Rc::new(ClapContext::new(self.state, self.registrar.clone()));
            self.context_revision = self.revision;
        }
        self.context.clone()
    }

    pub fn state(&self) -> ClapState {
        self.state
    }

    pub fn phase(&self) -> WidgetPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_playing()
    }

    pub fn animator(&self) -> &ClapAnimator {
        &self.animator
    }

    pub fn registrar(&self) -> &Registrar {
        &self.registrar
    }
}

impl Default for ClapButton {
    fn default() -> Self {
        Self::new()
    }
}
