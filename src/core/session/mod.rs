//! Session state machine
//!
//! A session is a plain value; [`apply`] maps `(state, event)` to the next
//! state without side effects. The studio feeds it events as calls start and
//! settle.

mod event;
mod state;
mod transition;


pub use event::SessionEvent;
pub use state::{GenerationKind, SessionState, UploadMode};
pub use transition::apply;

impl SessionState {
    /// Method form of [`apply`]
    pub fn apply(self, event: SessionEvent) -> Self {
        apply(self, event)
    }
}
