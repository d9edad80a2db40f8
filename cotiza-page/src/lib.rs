//! Page-behavior collaborators of the pricing page: the mobile navigation
//! toggle and the scroll-reveal animation. Both are modeled as explicit
//! state machines driven by events, with no calculator dependency.

pub mod nav;
pub mod reveal;

pub use nav::{MenuState, ToggleIcon};
pub use reveal::{RevealState, RevealTracker};
