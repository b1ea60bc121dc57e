//! `DrawSurface` backed by a browser `CanvasRenderingContext2d`
//!
//! Canvas calls that return `Result` only fail on invalid arguments
//! (negative radii); those are logged and skipped.

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::surface::DrawSurface;
use crate::sim::Rect;

pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for Canvas2d {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke(&mut self, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: &str, bottom: &str) {
        let gradient = self.ctx.create_linear_gradient(
            rect.x as f64,
            rect.y as f64,
            rect.x as f64,
            rect.bottom() as f64,
        );
        if gradient.add_color_stop(0.0, top).is_err() || gradient.add_color_stop(1.0, bottom).is_err()
        {
            log::warn!("Invalid gradient colours {} / {}", top, bottom);
            self.set_fill(top);
        } else {
            self.ctx.set_fill_style_canvas_gradient(&gradient);
        }
        self.fill_rect(rect);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    fn line_to(&mut self, p: Vec2) {
        self.ctx.line_to(p.x as f64, p.y as f64);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn round_rect(&mut self, rect: Rect, radius: f32) {
        // Quadratic corners; radius limited to half the shorter side
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0) as f64;
        let (x, y) = (rect.x as f64, rect.y as f64);
        let (right, bottom) = (rect.right() as f64, rect.bottom() as f64);
        self.ctx.move_to(x + r, y);
        self.ctx.line_to(right - r, y);
        self.ctx.quadratic_curve_to(right, y, right, y + r);
        self.ctx.line_to(right, bottom - r);
        self.ctx.quadratic_curve_to(right, bottom, right - r, bottom);
        self.ctx.line_to(x + r, bottom);
        self.ctx.quadratic_curve_to(x, bottom, x, bottom - r);
        self.ctx.line_to(x, y + r);
        self.ctx.quadratic_curve_to(x, y, x + r, y);
        self.ctx.close_path();
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.move_to((center.x + radius) as f64, center.y as f64);
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            log::warn!("Skipped circle with radius {}", radius);
        }
    }

    fn ellipse(&mut self, center: Vec2, radii: Vec2) {
        self.ctx.move_to((center.x + radii.x) as f64, center.y as f64);
        if self
            .ctx
            .ellipse(
                center.x as f64,
                center.y as f64,
                radii.x as f64,
                radii.y as f64,
                0.0,
                0.0,
                TAU,
            )
            .is_err()
        {
            log::warn!("Skipped ellipse with radii {:?}", radii);
        }
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
