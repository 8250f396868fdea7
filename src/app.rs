//! Application module: the session model driven by the runtime and drawn by the UI.
//!
//! `App` lives in `app::model` and owns the timer, the tick schedule and the
//! active soundscapes.

mod model;

pub use model::*;
