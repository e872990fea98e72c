//! Navigation module
//!
//! The navigation state machine: a tagged-union action type, an explicit
//! session state object, HTML fragment rendering against the host-page
//! surface contract, and the controller that ties them to the manifest,
//! search, and content components.

pub mod action;
pub mod controller;
pub mod state;
pub mod view;

pub use action::NavAction;
pub use controller::NavigationController;
pub use state::{RequestToken, SessionState, ViewportMode};
pub use view::Surface;
