//! Platform abstraction layer
//!
//! A `Frontend` is the rendering collaborator seen from the control loop:
//! - Input events since the last poll
//! - Drawing a frame from a snapshot
//! - Blocking until the next tick boundary

pub mod headless;
pub mod pacing;

pub use headless::{Script, ScriptEntry, ScriptedFrontend};
#[cfg(not(target_arch = "wasm32"))]
pub use pacing::FramePacer;
pub use pacing::TickGate;

use crate::error::Result;
use crate::sim::Snapshot;
use crate::ui::{ButtonLayout, InputEvent};

/// Everything the control loop needs from the outside world
pub trait Frontend {
    /// Discrete events since the previous poll, in arrival order
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Draw the frame for `snapshot`
    fn render(&mut self, snapshot: &Snapshot, buttons: &ButtonLayout) -> Result<()>;

    /// Block until the next tick boundary
    fn wait_for_next_tick(&mut self);
}
