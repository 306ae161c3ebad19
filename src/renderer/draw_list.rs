//! Recording surface

use serde::{Deserialize, Serialize};

use super::Surface;

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: String,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
}

/// A `Surface` that just remembers what it was asked to draw
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// `(x, y, radius)` of every circle, in draw order
    pub fn circles(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { x, y, radius, .. } => Some((*x, *y, *radius)),
            _ => None,
        })
    }

    /// `(x, y, width, height)` of every rectangle, in draw order
    pub fn rects(&self) -> impl Iterator<Item = (f32, f32, f32, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                ..
            } => Some((*x, *y, *width, *height)),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }
}
