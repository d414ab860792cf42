//! `spnportal-app` — browser frontend for the SPN portal.
//!
//! **Responsibility:** routed CRUD views over the typed client. The
//! frontend is a **thin shell**: the backend owns every invariant, the
//! client's query cache owns freshness, and this crate only maps route +
//! fetch state onto rendered views.
//!
//! The Leptos UI itself only builds for `wasm32`; the render-state model
//! in [`view_state`] is target-independent and unit-tested natively.

pub mod forms;
pub mod view_state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use view_state::ViewState;
