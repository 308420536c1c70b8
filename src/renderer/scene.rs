//! What a frame shows
//!
//! Draw order: background, incline, block, force arrows, readouts, buttons,
//! pause banner.

use glam::Vec2;

use super::canvas::{Canvas, TextStyle};
use super::vertex::colors;
use crate::consts::{BLOCK_SIZE, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::settings::Settings;
use crate::sim::{RunState, Snapshot};
use crate::ui::{ButtonLayout, Rect};

const INCLINE_WIDTH: f32 = 3.0;
const ARROW_WIDTH: f32 = 2.0;
/// Arrows shorter than this are not drawn
const MIN_ARROW_LEN: f32 = 1.0;

/// Display options taken from settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    pub force_arrow_scale: f32,
    pub show_force_vectors: bool,
    pub show_readouts: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SceneOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            force_arrow_scale: settings.force_arrow_scale,
            show_force_vectors: settings.show_force_vectors,
            show_readouts: settings.show_readouts,
        }
    }
}

/// Draw a complete frame for `snapshot`
pub fn draw_scene(
    canvas: &mut impl Canvas,
    snapshot: &Snapshot,
    layout: &ButtonLayout,
    options: &SceneOptions,
) {
    canvas.clear(colors::BACKGROUND);

    let geometry = &snapshot.geometry;
    canvas.line(geometry.start(), geometry.end(), INCLINE_WIDTH, colors::INCLINE);
    canvas.fill_rect(Rect::centered(snapshot.position, BLOCK_SIZE), colors::BLOCK);

    if options.show_force_vectors {
        draw_force_arrows(canvas, snapshot, options.force_arrow_scale);
    }

    if options.show_readouts {
        draw_readouts(canvas, snapshot);
    }

    draw_buttons(canvas, layout, snapshot.run_state);

    if snapshot.run_state == RunState::Paused {
        canvas.text(
            "PAUSED",
            Vec2::new(CANVAS_WIDTH / 2.0 - 50.0, 20.0),
            TextStyle::Large,
            colors::PAUSED_BANNER,
        );
    }
}

fn draw_force_arrows(canvas: &mut impl Canvas, snapshot: &Snapshot, scale: f32) {
    let origin = snapshot.position;
    let downhill = snapshot.geometry.direction();
    let arrows = [
        (
            snapshot.geometry.surface_normal(),
            snapshot.forces.normal,
            colors::NORMAL_FORCE,
        ),
        (downhill, snapshot.forces.parallel, colors::PARALLEL_FORCE),
        (-downhill, snapshot.forces.friction, colors::FRICTION_FORCE),
    ];

    for (dir, magnitude, color) in arrows {
        let len = magnitude * scale;
        if len >= MIN_ARROW_LEN {
            canvas.arrow(origin, origin + dir * len, ARROW_WIDTH, color);
        }
    }
}

fn draw_readouts(canvas: &mut impl Canvas, snapshot: &Snapshot) {
    let params = &snapshot.params;
    let forces = &snapshot.forces;

    // Parameter values next to their buttons
    let params_x = 150.0;
    canvas.text(
        &format!("Mass: {} kg", params.mass()),
        Vec2::new(params_x, 60.0),
        TextStyle::Normal,
        colors::TEXT,
    );
    canvas.text(
        &format!("Angle: {}°", params.angle()),
        Vec2::new(params_x, 110.0),
        TextStyle::Normal,
        colors::TEXT,
    );
    canvas.text(
        &format!("Friction: {:.2}", params.friction()),
        Vec2::new(params_x, 160.0),
        TextStyle::Normal,
        colors::TEXT,
    );

    let lines = [
        format!("Normal: {:.2} N", forces.normal),
        format!("Friction: {:.2} N", forces.friction),
        format!("Parallel: {:.2} N", forces.parallel),
        format!("Acceleration: {:.3} m/s²", forces.acceleration),
        format!("Velocity: {:.2} m/s", snapshot.motion.velocity),
        format!("Time: {:.2} s", snapshot.elapsed),
    ];
    let top = CANVAS_HEIGHT - 150.0;
    for (i, line) in lines.iter().enumerate() {
        canvas.text(
            line,
            Vec2::new(10.0, top + i as f32 * 20.0),
            TextStyle::Normal,
            colors::TEXT,
        );
    }

    if forces.parallel > 0.0 && !forces.is_sliding() {
        canvas.text(
            "Held by friction",
            Vec2::new(10.0, top + lines.len() as f32 * 20.0),
            TextStyle::Normal,
            colors::FRICTION_FORCE,
        );
    }
}

fn draw_buttons(canvas: &mut impl Canvas, layout: &ButtonLayout, run_state: RunState) {
    for button in layout.buttons() {
        canvas.fill_rect(button.rect, colors::BUTTON);
        canvas.text(
            button.label.text(run_state),
            button.rect.min() + Vec2::new(10.0, 10.0),
            TextStyle::Normal,
            colors::TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;
    use crate::sim::{Command, Simulation, SimulationParameters, TickInput};

    fn frame(sim: &Simulation, options: &SceneOptions) -> DrawList {
        let mut list = DrawList::new();
        draw_scene(&mut list, &sim.snapshot(), &ButtonLayout::standard(), options);
        list
    }

    #[test]
    fn test_scene_has_readouts_and_labels() {
        let sim = Simulation::default();
        let list = frame(&sim, &SceneOptions::default());
        assert!(list.has_text("Mass: 10 kg"));
        assert!(list.has_text("Angle: 30°"));
        assert!(list.has_text("Friction: 0.20"));
        assert!(list.has_text("Normal: 84.87 N"));
        assert!(list.has_text("Pause"));
        assert!(list.has_text("Reset"));
        assert!(!list.has_text("PAUSED"));
        assert!(!list.vertices.is_empty());
        assert_eq!(list.clear_color, colors::BACKGROUND);
    }

    #[test]
    fn test_held_by_friction_readout() {
        let sliding = Simulation::default();
        assert!(!frame(&sliding, &SceneOptions::default()).has_text("Held by friction"));

        let mut held = Simulation::default();
        held.state.params = SimulationParameters::new(10.0, 10.0, 0.5);
        assert!(frame(&held, &SceneOptions::default()).has_text("Held by friction"));

        // Flat ground: nothing to hold against
        let mut flat = Simulation::default();
        flat.state.params = SimulationParameters::new(10.0, 0.0, 0.5);
        assert!(!frame(&flat, &SceneOptions::default()).has_text("Held by friction"));
    }

    #[test]
    fn test_paused_scene_shows_play_and_banner() {
        let mut sim = Simulation::default();
        sim.tick(&TickInput::new(vec![Command::TogglePause]));
        let list = frame(&sim, &SceneOptions::default());
        assert!(list.has_text("Play"));
        assert!(list.has_text("PAUSED"));
    }

    #[test]
    fn test_hidden_layers_emit_less() {
        let sim = Simulation::default();
        let full = frame(&sim, &SceneOptions::default());
        let bare = frame(
            &sim,
            &SceneOptions {
                show_force_vectors: false,
                show_readouts: false,
                ..Default::default()
            },
        );
        assert!(bare.vertices.len() < full.vertices.len());
        assert!(!bare.has_text("Normal"));
        // Button labels stay
        assert!(bare.has_text("Reset"));
    }

    #[test]
    fn test_flat_incline_skips_parallel_and_friction_arrows() {
        let mut sim = Simulation::default();
        sim.state.params = SimulationParameters::new(10.0, 0.0, 0.0);
        let with_forces = frame(&sim, &SceneOptions::default());
        let without = frame(
            &sim,
            &SceneOptions {
                show_force_vectors: false,
                ..Default::default()
            },
        );
        // Only the normal arrow: shaft quad + head triangle
        assert_eq!(with_forces.vertices.len() - without.vertices.len(), 9);
    }
}
