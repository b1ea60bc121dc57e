//! Draw-call recorder
//!
//! A `DrawSurface` that keeps every call as data. Used for headless runs
//! and for checking what a frame would draw.

use glam::Vec2;

use super::surface::DrawSurface;
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(Vec2),
    Alpha(f32),
    Fill(String),
    Stroke { color: String, line_width: f32 },
    FillRect(Rect),
    Gradient { rect: Rect, top: String, bottom: String },
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    RoundRect { rect: Rect, radius: f32 },
    Circle { center: Vec2, radius: f32 },
    Ellipse { center: Vec2, radii: Vec2 },
    FillPath,
    StrokePath,
}

#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of recorded commands matching `pred`
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Net translation at the end of the recording, honouring save/restore
    pub fn current_translation(&self) -> Vec2 {
        let mut stack = Vec::new();
        let mut offset = Vec2::ZERO;
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Save => stack.push(offset),
                DrawCommand::Restore => offset = stack.pop().unwrap_or(Vec2::ZERO),
                DrawCommand::Translate(d) => offset += *d,
                _ => {}
            }
        }
        offset
    }
}

impl DrawSurface for CommandRecorder {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::Alpha(alpha));
    }

    fn set_fill(&mut self, color: &str) {
        self.commands.push(DrawCommand::Fill(color.to_string()));
    }

    fn set_stroke(&mut self, color: &str, line_width: f32) {
        self.commands.push(DrawCommand::Stroke {
            color: color.to_string(),
            line_width,
        });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: &str, bottom: &str) {
        self.commands.push(DrawCommand::Gradient {
            rect,
            top: top.to_string(),
            bottom: bottom.to_string(),
        });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn round_rect(&mut self, rect: Rect, radius: f32) {
        self.commands.push(DrawCommand::RoundRect { rect, radius });
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn ellipse(&mut self, center: Vec2, radii: Vec2) {
        self.commands.push(DrawCommand::Ellipse { center, radii });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::FillPath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::StrokePath);
    }
}
