#![forbid(unsafe_code)]

//! Input routing: registered listeners get first look at every input
//! chunk, then the focused component.

use flowtui_core::KeyEvent;

/// Opaque handle returned by `Renderer::add_input_listener`, used to remove
/// it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputListenerId(pub(crate) u64);

/// Outcome of a listener inspecting one input chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOutcome {
    /// If true, dispatch stops here: no further listener or the focused
    /// component sees this chunk.
    pub consumed: bool,
}

impl ListenerOutcome {
    #[must_use]
    pub const fn consume() -> Self {
        Self { consumed: true }
    }

    #[must_use]
    pub const fn pass() -> Self {
        Self { consumed: false }
    }
}

/// A single-owner interceptor registered with the renderer. Stored as a
/// boxed `FnMut` rather than a trait, matching this crate's single-owner
/// closure convention for dynamic callbacks.
pub type InputListener = Box<dyn FnMut(&KeyEvent) -> ListenerOutcome>;

#[cfg(test)]
mod tests {
    use super::*;
    use flowtui_core::KeyCode;

    #[test]
    fn outcome_helpers() {
        assert!(ListenerOutcome::consume().consumed);
        assert!(!ListenerOutcome::pass().consumed);
    }

    #[test]
    fn listener_closure_can_consume() {
        let mut listener: InputListener =
            Box::new(|e: &KeyEvent| {
                if e.code == KeyCode::Escape {
                    ListenerOutcome::consume()
                } else {
                    ListenerOutcome::pass()
                }
            });
        let esc = KeyEvent::new(KeyCode::Escape);
        assert!(listener(&esc).consumed);
    }
}
