//! Rendering module
//!
//! The game only ever clears the surface and fills circles and rectangles.
//! `Surface` is that contract; `CanvasSurface` implements it on a 2D canvas
//! and `DrawList` records it for tests and headless runs.

pub mod camera;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;

pub use camera::Camera;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCommand, DrawList};

use crate::settings::Settings;
use crate::sim::{GameState, Platform};

/// Drawing collaborator
pub trait Surface {
    /// Clear a `width` x `height` area at the origin
    fn clear(&mut self, width: f32, height: f32);
    /// Fill a circle centered on `(x, y)`
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    /// Fill a rectangle with its top-left corner at `(x, y)`
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
}

/// Draw one frame: clear, ball, current platform, then the tower bottom-up
pub fn render(state: &GameState, camera: &Camera, settings: &Settings, surface: &mut impl Surface) {
    let tuning = &state.tuning;
    surface.clear(tuning.playfield_width, tuning.playfield_height);
    if let Some(background) = &settings.background_color {
        surface.draw_rect(
            0.0,
            0.0,
            tuning.playfield_width,
            tuning.playfield_height,
            background,
        );
    }

    let ball = &state.ball;
    surface.draw_circle(
        ball.pos.x,
        camera.apply(ball.pos.y),
        ball.radius,
        &settings.ball_color,
    );

    draw_platform(surface, camera, &state.platform, &settings.platform_color);
    for level in state.tower.iter() {
        draw_platform(surface, camera, level, &settings.tower_color);
    }
}

fn draw_platform(surface: &mut impl Surface, camera: &Camera, platform: &Platform, color: &str) {
    surface.draw_rect(
        platform.pos.x,
        camera.apply(platform.pos.y),
        platform.width,
        platform.height,
        color,
    );
}
