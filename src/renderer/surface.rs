//! Immediate-mode 2D drawing surface
//!
//! Mirrors the subset of the Canvas 2D API the scene needs. Colours are CSS
//! colour strings. Angles are not exposed: arcs and ellipses are always full.

use glam::Vec2;

use crate::sim::Rect;

pub trait DrawSurface {
    /// Push transform and style state
    fn save(&mut self);
    /// Pop transform and style state
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn set_alpha(&mut self, alpha: f32);
    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str, line_width: f32);

    fn fill_rect(&mut self, rect: Rect);
    /// Fill `rect` with a top-to-bottom linear gradient
    fn fill_vertical_gradient(&mut self, rect: Rect, top: &str, bottom: &str);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn close_path(&mut self);
    fn round_rect(&mut self, rect: Rect, radius: f32);
    fn circle(&mut self, center: Vec2, radius: f32);
    fn ellipse(&mut self, center: Vec2, radii: Vec2);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Closed filled polygon
    fn fill_polygon(&mut self, points: &[Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.begin_path();
        self.move_to(*first);
        for p in rest {
            self.line_to(*p);
        }
        self.close_path();
        self.fill();
    }
}
