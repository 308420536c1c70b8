//! Headless scripted frontend
//!
//! Replays input events at fixed tick numbers, draws every frame into a
//! `DrawList` and records snapshots. Tick numbers match `Snapshot::tick`
//! (the first tick is 1).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Frontend;
use crate::error::{AppError, Result};
use crate::renderer::{DrawList, SceneOptions, draw_scene};
use crate::sim::Snapshot;
use crate::ui::{ButtonLayout, InputEvent};

#[cfg(not(target_arch = "wasm32"))]
use super::pacing::FramePacer;

/// One scheduled event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub tick: u64,
    pub event: InputEvent,
}

/// Events keyed by the tick they are delivered on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    events: BTreeMap<u64, Vec<InputEvent>>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of `{ "tick": n, "event": ... }`
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ScriptEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build from entries; events sharing a tick keep their listed order
    pub fn from_entries(entries: impl IntoIterator<Item = ScriptEntry>) -> Result<Self> {
        let mut script = Self::new();
        for entry in entries {
            if entry.tick == 0 {
                return Err(AppError::Script("tick numbers start at 1".into()));
            }
            script.push(entry.tick, entry.event);
        }
        Ok(script)
    }

    /// Load a script file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn push(&mut self, tick: u64, event: InputEvent) {
        self.events.entry(tick).or_default().push(event);
    }

    /// Builder form of `push`
    pub fn at(mut self, tick: u64, event: InputEvent) -> Self {
        self.push(tick, event);
        self
    }

    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn take(&mut self, tick: u64) -> Vec<InputEvent> {
        self.events.remove(&tick).unwrap_or_default()
    }
}

/// Frontend that needs no window
pub struct ScriptedFrontend {
    script: Script,
    /// Ticks polled so far
    tick: u64,
    quit_after: Option<u64>,
    record_every: Option<u64>,
    recorded: Vec<Snapshot>,
    scene_options: SceneOptions,
    last_frame: DrawList,
    frames_rendered: u64,
    #[cfg(not(target_arch = "wasm32"))]
    pacer: Option<FramePacer>,
}

impl ScriptedFrontend {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            tick: 0,
            quit_after: None,
            record_every: None,
            recorded: Vec::new(),
            scene_options: SceneOptions::default(),
            last_frame: DrawList::new(),
            frames_rendered: 0,
            #[cfg(not(target_arch = "wasm32"))]
            pacer: None,
        }
    }

    /// Deliver `CloseRequested` on the tick after `ticks`
    pub fn quit_after(mut self, ticks: u64) -> Self {
        self.quit_after = Some(ticks);
        self
    }

    /// Keep a snapshot every `every` ticks
    pub fn record_every(mut self, every: u64) -> Self {
        self.record_every = Some(every.max(1));
        self
    }

    pub fn scene_options(mut self, options: SceneOptions) -> Self {
        self.scene_options = options;
        self
    }

    /// Pace ticks in real time instead of running flat out
    #[cfg(not(target_arch = "wasm32"))]
    pub fn realtime(mut self, rate_hz: u32) -> Self {
        self.pacer = Some(FramePacer::new(rate_hz));
        self
    }

    pub fn recorded(&self) -> &[Snapshot] {
        &self.recorded
    }

    pub fn take_recorded(&mut self) -> Vec<Snapshot> {
        std::mem::take(&mut self.recorded)
    }

    /// The most recently drawn frame
    pub fn last_frame(&self) -> &DrawList {
        &self.last_frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn pace(&mut self) {
        if let Some(pacer) = self.pacer.as_mut() {
            pacer.wait();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn pace(&mut self) {}
}

impl Frontend for ScriptedFrontend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.tick += 1;
        let mut events = self.script.take(self.tick);
        if let Some(limit) = self.quit_after {
            if self.tick > limit {
                events.push(InputEvent::CloseRequested);
            }
        }
        events
    }

    fn render(&mut self, snapshot: &Snapshot, buttons: &ButtonLayout) -> Result<()> {
        draw_scene(&mut self.last_frame, snapshot, buttons, &self.scene_options);
        self.frames_rendered += 1;

        if let Some(every) = self.record_every {
            if snapshot.tick % every == 0 {
                self.recorded.push(*snapshot);
            }
        }
        Ok(())
    }

    fn wait_for_next_tick(&mut self) {
        self.pace();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Key;

    #[test]
    fn test_script_from_json() {
        let script = Script::from_json(
            r#"[
                { "tick": 3, "event": { "key": "space" } },
                { "tick": 1, "event": { "pointer_down": { "x": 70.0, "y": 70.0 } } },
                { "tick": 3, "event": "close_requested" }
            ]"#,
        )
        .unwrap();
        assert_eq!(script.len(), 3);

        let mut frontend = ScriptedFrontend::new(script);
        assert_eq!(frontend.poll_events().len(), 1);
        assert!(frontend.poll_events().is_empty());
        assert_eq!(
            frontend.poll_events(),
            vec![InputEvent::Key(Key::Space), InputEvent::CloseRequested]
        );
    }

    #[test]
    fn test_tick_zero_rejected() {
        let err = Script::from_json(r#"[{ "tick": 0, "event": "close_requested" }]"#);
        assert!(matches!(err, Err(AppError::Script(_))));
        assert!(matches!(Script::from_json("{}"), Err(AppError::Json(_))));
    }

    #[test]
    fn test_quit_after_limit() {
        let mut frontend = ScriptedFrontend::new(Script::new()).quit_after(2);
        assert!(frontend.poll_events().is_empty());
        assert!(frontend.poll_events().is_empty());
        assert_eq!(frontend.poll_events(), vec![InputEvent::CloseRequested]);
    }
}
