//! Interaction controller
//!
//! - `event`: what the host feeds in (`UiEvent`) and what it must do (`Effect`)
//! - `reduce`: the pure transition function
//! - `state`: filters, overlays, skill reveal, form, navigation
//! - `controller`: owns everything and renders views for the host
//!
//! Nothing here touches the DOM; `main.rs` translates browser events into
//! `UiEvent`s and applies the returned effects.

pub mod controller;
pub mod event;
pub mod form;
pub mod nav;
pub mod reduce;
pub mod state;
pub mod typing;

pub use controller::Controller;
pub use event::{CloseTrigger, Effect, Section, UiEvent};
pub use form::{FieldState, FormState, ValidationError};
pub use nav::SectionBounds;
pub use reduce::{Context, Transition, reduce};
pub use state::{Overlay, UiState, Widget};
pub use typing::{Typewriter, TypingFrame};
