//! Scene drawing
//!
//! Draw order: sky, ground, penguin, obstacles, fish. The HUD is DOM text
//! and handled by `ui`.

use glam::Vec2;

use super::shapes::{self, CLOUD_COUNT};
use super::surface::DrawSurface;
use crate::consts::{GROUND_HEIGHT, GROUND_Y, WORLD_HEIGHT, WORLD_WIDTH};
use crate::palette::{ColorRole, Palette};
use crate::sim::{Fish, GameState, Obstacle, Player, Rect};

/// Draw one full frame of the play field
pub fn draw_scene(surface: &mut dyn DrawSurface, state: &GameState, palette: &Palette) {
    draw_background(surface, state.time, palette);
    draw_ground(surface, palette);
    draw_player(surface, &state.player, palette);
    for obstacle in &state.obstacles {
        draw_obstacle(surface, obstacle, palette);
    }
    for fish in &state.fishes {
        draw_fish(surface, fish, palette);
    }
}

fn draw_background(surface: &mut dyn DrawSurface, time: f32, palette: &Palette) {
    surface.fill_vertical_gradient(
        Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
        palette.color(ColorRole::SkyTop),
        palette.color(ColorRole::SkyBottom),
    );

    surface.set_fill(palette.color(ColorRole::Cloud));
    for i in 0..CLOUD_COUNT {
        surface.begin_path();
        surface.ellipse(shapes::cloud_center(i, time), Vec2::new(90.0, 20.0));
        surface.fill();
    }
}

fn draw_ground(surface: &mut dyn DrawSurface, palette: &Palette) {
    surface.set_fill(palette.color(ColorRole::Ice));
    surface.fill_rect(Rect::new(0.0, GROUND_Y, WORLD_WIDTH, GROUND_HEIGHT));
    surface.set_fill(palette.color(ColorRole::IceShadow));
    surface.fill_rect(Rect::new(0.0, GROUND_Y, WORLD_WIDTH, 14.0));

    surface.set_stroke(palette.color(ColorRole::IceCrack), 2.0);
    for (from, to) in shapes::ground_cracks() {
        surface.begin_path();
        surface.move_to(from);
        surface.line_to(to);
        surface.stroke();
    }
}

/// Penguin, drawn in its own local space (origin at the top-left of the
/// nominal hitbox)
fn draw_player(surface: &mut dyn DrawSurface, player: &Player, palette: &Palette) {
    let (w, h) = (player.width, player.height);

    surface.save();
    surface.translate(player.pos);

    // Shadow
    surface.set_fill(palette.color(ColorRole::Shadow));
    surface.begin_path();
    surface.ellipse(Vec2::new(w / 2.0, h), Vec2::new(w / 2.4, 8.0));
    surface.fill();

    surface.translate(Vec2::new(0.0, h * -0.02));
    surface.set_alpha(player.flicker_alpha());

    // Body
    surface.set_fill(palette.color(ColorRole::Penguin));
    surface.begin_path();
    surface.round_rect(Rect::new(0.0, h * 0.1, w, h * 0.9), 16.0);
    surface.fill();

    // Belly
    surface.set_fill(palette.color(ColorRole::PenguinBelly));
    surface.begin_path();
    surface.round_rect(Rect::new(w * 0.15, h * 0.32, w * 0.7, h * 0.58), 30.0);
    surface.fill();

    // Beak
    surface.set_fill(palette.color(ColorRole::Beak));
    surface.fill_polygon(&[
        Vec2::new(w * 0.72, h * 0.42),
        Vec2::new(w * 0.92, h * 0.48),
        Vec2::new(w * 0.72, h * 0.54),
    ]);

    // Eye
    surface.set_fill(palette.color(ColorRole::Eye));
    surface.begin_path();
    surface.circle(Vec2::new(w * 0.62, h * 0.38), 5.0);
    surface.fill();

    // Flippers
    surface.set_fill(palette.color(ColorRole::Flipper));
    surface.begin_path();
    surface.round_rect(Rect::new(-14.0, h * 0.45, 22.0, 60.0), 10.0);
    surface.round_rect(Rect::new(w - 8.0, h * 0.42, 20.0, 64.0), 10.0);
    surface.fill();

    // Feet
    surface.set_fill(palette.color(ColorRole::Beak));
    surface.begin_path();
    surface.round_rect(Rect::new(w * 0.18, h * 0.94, 20.0, 10.0), 4.0);
    surface.round_rect(Rect::new(w * 0.64, h * 0.94, 20.0, 10.0), 4.0);
    surface.fill();

    surface.restore();
}

fn draw_obstacle(surface: &mut dyn DrawSurface, obstacle: &Obstacle, palette: &Palette) {
    surface.set_fill(palette.color(ColorRole::Spike));
    surface.fill_polygon(&shapes::spike(obstacle));
    surface.set_fill(palette.color(ColorRole::SpikeHighlight));
    surface.fill_polygon(&shapes::spike_highlight(obstacle));
}

fn draw_fish(surface: &mut dyn DrawSurface, fish: &Fish, palette: &Palette) {
    let (w, h) = (fish.width, fish.height);

    surface.save();
    surface.translate(fish.pos);

    surface.set_fill(palette.color(ColorRole::Fish));
    surface.begin_path();
    surface.ellipse(Vec2::new(w / 2.0, h / 2.0), Vec2::new(w / 2.0, h / 2.0));
    surface.fill();
    surface.fill_polygon(&shapes::fish_tail(fish));

    surface.set_fill(palette.color(ColorRole::FishEye));
    surface.begin_path();
    surface.circle(Vec2::new(w * 0.3, h * 0.4), 3.0);
    surface.fill();

    surface.restore();
}
