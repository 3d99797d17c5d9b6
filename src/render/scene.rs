use nalgebra::Vector2;
use rand::Rng;

use super::canvas::{Canvas, TextAlign};
use crate::input::{Controls, HudLayout};
use crate::sim::{Simulation, Telemetry};
use crate::vehicle::Vehicle;
use crate::world::space::LABEL_RANGE_RADII;
use crate::world::{Color, World};

const BACKGROUND: Color = Color::rgb(0x00, 0x00, 0x11);
const STAR_MARGIN: f64 = 10.0;
const BODY_MARGIN: f64 = 50.0;
const TWINKLE_CHANCE: f64 = 0.01;
const HUD_GREEN: Color = Color::rgb(0x00, 0xff, 0x00);

/// Full frame: background, world, rocket, HUD (compact viewports), info panel.
pub fn draw_frame<C, R>(sim: &Simulation, canvas: &mut C, rng: &mut R)
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let vp = sim.world().viewport();
    canvas.fill_rect(0.0, 0.0, vp.width, vp.height, BACKGROUND);
    draw_world(sim.world(), canvas, rng);
    draw_vehicle(sim.vehicle(), sim.world(), canvas, rng);
    if HudLayout::is_compact(vp) {
        draw_hud(sim.controls(), canvas);
    }
    draw_info(&sim.telemetry(), canvas);
}

// ---------------------------------------------------------------------------
// World: stars, then bodies with glow, surface spots and labels
// ---------------------------------------------------------------------------

pub fn draw_world<C, R>(world: &World, canvas: &mut C, rng: &mut R)
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let vp = world.viewport();

    for star in world.stars() {
        let screen = world.world_to_screen(&star.pos);
        if !vp.contains(&screen, STAR_MARGIN) {
            continue;
        }
        canvas.fill_circle(screen, star.size, Color::WHITE.faded(star.brightness));
        if rng.gen_bool(TWINKLE_CHANCE) {
            canvas.fill_circle(screen, star.size * 1.5, Color::WHITE.faded(star.brightness * 1.5));
        }
    }

    let view_center = world.view_center();
    for body in world.bodies() {
        let screen = world.world_to_screen(&body.pos);
        if !vp.contains(&screen, body.radius + BODY_MARGIN) {
            continue;
        }
        let r = body.radius;

        canvas.radial_gradient(
            screen,
            r * 0.8,
            r * 1.3,
            body.atmosphere.with_alpha(0x40),
            body.atmosphere.with_alpha(0x00),
        );
        canvas.fill_circle(screen, r, body.color);

        let spot = body.color.with_alpha(0x80);
        for i in 0..3 {
            let a = i as f64 * 2.1;
            let offset = Vector2::new(a.cos(), a.sin()) * (r * 0.6);
            canvas.fill_circle(screen + offset, r * 0.15, spot);
        }

        if body.distance_to(&view_center) < r * LABEL_RANGE_RADII {
            canvas.fill_text(
                Vector2::new(screen.x, screen.y - r - 20.0),
                &body.name,
                16.0,
                TextAlign::Center,
                Color::WHITE,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Rocket, drawn nose-up in its own frame
// ---------------------------------------------------------------------------

pub fn draw_vehicle<C, R>(vehicle: &Vehicle, world: &World, canvas: &mut C, rng: &mut R)
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let screen = world.world_to_screen(&vehicle.pos);

    canvas.save();
    canvas.translate(screen);
    canvas.rotate(vehicle.heading);

    canvas.fill_rect(-10.0, -20.0, 20.0, 40.0, Color::WHITE);
    canvas.fill_polygon(
        &[Vector2::new(-10.0, -20.0), Vector2::new(0.0, -30.0), Vector2::new(10.0, -20.0)],
        Color::rgb(0xcc, 0xcc, 0xcc),
    );
    let fin = Color::rgb(0x88, 0x88, 0x88);
    canvas.fill_rect(-15.0, 10.0, 10.0, 15.0, fin);
    canvas.fill_rect(5.0, 10.0, 10.0, 15.0, fin);

    if vehicle.engine_on && vehicle.throttle > 0 {
        let intensity = f64::from(vehicle.throttle.min(100)) / 100.0;
        let length = 20.0 + rng.gen::<f64>() * 15.0 * intensity;
        let green = 100 + (rng.gen::<f64>() * 50.0) as u8;
        let blue = 150 + (rng.gen::<f64>() * 105.0) as u8;

        let layers = [
            (8.0, 1.0, Color::rgb(0xff, green, 0x00).faded(intensity)),
            (5.0, 0.7, Color::rgb(0xff, 0xff, blue).faded(intensity * 0.8)),
            (3.0, 0.4, Color::WHITE.faded(intensity * 0.6)),
        ];
        for (half_width, reach, color) in layers {
            canvas.fill_polygon(
                &[
                    Vector2::new(-half_width, 20.0),
                    Vector2::new(half_width, 20.0),
                    Vector2::new(0.0, 20.0 + length * reach),
                ],
                color,
            );
        }
    }

    canvas.restore();
}

// ---------------------------------------------------------------------------
// Screen-space overlays
// ---------------------------------------------------------------------------

pub fn draw_info<C: Canvas + ?Sized>(telemetry: &Telemetry, canvas: &mut C) {
    canvas.fill_rect(10.0, 10.0, 250.0, 100.0, Color::rgba(0, 0, 0, 178));
    canvas.stroke_rect(10.0, 10.0, 250.0, 100.0, Color::rgb(0x44, 0x44, 0x44));
    for (i, line) in telemetry.info_lines().iter().enumerate() {
        let y = 30.0 + 15.0 * i as f64;
        canvas.fill_text(Vector2::new(20.0, y), line, 14.0, TextAlign::Left, Color::WHITE);
    }
}

pub fn draw_hud<C: Canvas + ?Sized>(controls: &Controls, canvas: &mut C) {
    let hud = controls.hud();
    let button_fill = Color::rgba(0xff, 0xff, 0xff, 26);

    for (rect, label) in [(hud.left, "<"), (hud.right, ">"), (hud.engine, "FIRE")] {
        canvas.fill_rect(rect.x, rect.y, rect.w, rect.h, button_fill);
        canvas.stroke_rect(rect.x, rect.y, rect.w, rect.h, Color::WHITE);
        canvas.fill_text(rect.center(), label, 24.0, TextAlign::Center, Color::WHITE);
    }

    let bar = hud.throttle_bar;
    canvas.fill_rect(bar.x, bar.y, bar.w, bar.h, button_fill);
    canvas.stroke_rect(bar.x, bar.y, bar.w, bar.h, HUD_GREEN);
    canvas.fill_rect(bar.x, controls.knob_y() - 10.0, bar.w, 20.0, HUD_GREEN);
    canvas.fill_text(
        Vector2::new(bar.x + bar.w / 2.0, bar.y - 20.0),
        &format!("{}%", controls.state().throttle()),
        24.0,
        TextAlign::Center,
        HUD_GREEN,
    );
}
