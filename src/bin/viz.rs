use std::collections::VecDeque;
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Shape, Stroke, StrokeKind};
use egui_plot::{Line, Plot, PlotPoints};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};

use rocket_flight::config::SimConfig;
use rocket_flight::input::{EventQueue, InputEvent, Key, TouchPhase, TurnSide};
use rocket_flight::logging;
use rocket_flight::render::{self, Canvas, TextAlign, TransformStack};
use rocket_flight::sim::{Simulation, Telemetry};
use rocket_flight::world::{Color, Viewport};

/// Frames of speed/altitude kept for the history plot.
const HISTORY_LEN: usize = 1200;
const GRADIENT_RINGS: usize = 12;

#[derive(Parser, Debug)]
#[command(name = "rocket-viz", about = "Interactive 2D rocket flight")]
struct VizArgs {
    /// RON config file; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = VizArgs::parse();
    let config = match &args.config {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                logging::init_logging("info");
                error!("Failed to load {}: {}", path.display(), e);
                return Err(e.into());
            }
        },
        None => SimConfig::default(),
    };
    logging::init_logging(&config.log_level);
    if let Some(path) = &args.config {
        info!("Loaded config from {}", path.display());
    }

    let app = FlightViz::new(&config);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native("Rocket Flight", options, Box::new(|_| Ok(Box::new(app))))?;
    Ok(())
}

struct FlightViz {
    sim: Simulation,
    queue: EventQueue,
    rng: StdRng,
    history: VecDeque<Telemetry>,
    left_held: bool,
    right_held: bool,
    show_history: bool,
}

impl FlightViz {
    fn new(config: &SimConfig) -> Self {
        Self {
            sim: Simulation::new(config),
            queue: EventQueue::new(),
            rng: StdRng::from_entropy(),
            history: VecDeque::with_capacity(HISTORY_LEN),
            left_held: false,
            right_held: false,
            show_history: true,
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Controls");
        ui.separator();

        let state = *self.sim.controls().state();
        let mut engine = state.engine_on;
        if ui.checkbox(&mut engine, "Engine (Space)").changed() {
            self.queue.push(InputEvent::SetEngine(engine));
        }

        let mut throttle = i32::from(state.throttle());
        if ui.add(egui::Slider::new(&mut throttle, 0..=100).text("Throttle %")).changed() {
            self.queue.push(InputEvent::SetThrottle(throttle));
        }

        ui.horizontal(|ui| {
            let left = ui.button("◀ Left").is_pointer_button_down_on();
            let right = ui.button("Right ▶").is_pointer_button_down_on();
            if left != self.left_held {
                self.left_held = left;
                self.queue.push(InputEvent::TurnButton { side: TurnSide::Left, pressed: left });
            }
            if right != self.right_held {
                self.right_held = right;
                self.queue.push(InputEvent::TurnButton { side: TurnSide::Right, pressed: right });
            }
        });

        ui.separator();
        let t = self.sim.telemetry();
        for line in t.info_lines() {
            ui.monospace(line);
        }
        ui.label(format!("Frame: {}", t.frame));
        match self.sim.world().labelled_body() {
            Some(body) => ui.label(format!("Near: {}", body.name)),
            None => ui.label("Near: open space"),
        };

        ui.separator();
        ui.checkbox(&mut self.show_history, "Show history");
    }

    fn history_panel(&self, ui: &mut egui::Ui) {
        let half_w = ui.available_width() / 2.0 - 8.0;
        let height = ui.available_height();
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Speed");
                let points: PlotPoints =
                    self.history.iter().map(|t| [t.frame as f64, t.speed]).collect();
                Plot::new("speed")
                    .width(half_w)
                    .height(height - 20.0)
                    .x_axis_label("Frame")
                    .show(ui, |plot_ui| {
                        plot_ui.line(Line::new("Speed", points));
                    });
            });

            ui.vertical(|ui| {
                ui.label("Altitude");
                let points: PlotPoints =
                    self.history.iter().map(|t| [t.frame as f64, t.altitude]).collect();
                Plot::new("altitude")
                    .width(half_w)
                    .height(height - 20.0)
                    .x_axis_label("Frame")
                    .show(ui, |plot_ui| {
                        plot_ui.line(Line::new("Altitude", points));
                    });
            });
        });
    }

    /// Translate raw egui input into simulation events, relative to `rect`.
    fn collect_input(&mut self, ctx: &egui::Context, rect: egui::Rect, canvas_hovered: bool) {
        let (events, pointer) = ctx.input(|i| (i.events.clone(), i.pointer.clone()));

        // Keys are ignored while a widget (e.g. the slider) has keyboard focus.
        if ctx.memory(|m| m.focused().is_none()) {
            for event in &events {
                if let egui::Event::Key { key, pressed, repeat: false, .. } = event {
                    let key = match key {
                        egui::Key::ArrowLeft => Key::ArrowLeft,
                        egui::Key::ArrowRight => Key::ArrowRight,
                        egui::Key::Space => Key::Space,
                        _ => continue,
                    };
                    self.queue.push(if *pressed { InputEvent::KeyDown(key) } else { InputEvent::KeyUp(key) });
                }
            }
        }

        let local = |p: Pos2| Vector2::new(f64::from(p.x - rect.min.x), f64::from(p.y - rect.min.y));
        if canvas_hovered && pointer.primary_pressed() {
            if let Some(p) = pointer.interact_pos() {
                self.queue.push(InputEvent::Touch { phase: TouchPhase::Start, points: vec![local(p)] });
            }
        } else if pointer.primary_down() && pointer.is_moving() {
            if let Some(p) = pointer.interact_pos().filter(|p| rect.contains(*p)) {
                self.queue.push(InputEvent::Touch { phase: TouchPhase::Move, points: vec![local(p)] });
            }
        }
        if pointer.primary_released() {
            self.queue.push(InputEvent::TouchEnd);
        }
    }
}

impl eframe::App for FlightViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("controls")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| self.controls_panel(ui));

        if self.show_history {
            egui::TopBottomPanel::bottom("history")
                .resizable(true)
                .default_height(200.0)
                .show(ctx, |ui| self.history_panel(ui));
        }

        egui::CentralPanel::default().frame(egui::Frame::NONE).show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let viewport = Viewport::new(f64::from(rect.width()), f64::from(rect.height()));

            self.collect_input(ctx, rect, response.hovered());

            let elapsed_ms = ctx.input(|i| f64::from(i.stable_dt) * 1000.0);
            for event in self.sim.frame_step(&mut self.queue, &viewport, Some(elapsed_ms)) {
                info!(frame = event.frame, kind = ?event.kind, "flight event");
            }

            if self.history.len() == HISTORY_LEN {
                self.history.pop_front();
            }
            self.history.push_back(self.sim.telemetry());

            let mut canvas = EguiCanvas::new(&painter, rect.min);
            render::draw_frame(&self.sim, &mut canvas, &mut self.rng);
            if canvas.depth() != 0 {
                warn!(depth = canvas.depth(), "unbalanced canvas save/restore");
            }
        });

        ctx.request_repaint();
    }
}

// ---------------------------------------------------------------------------
// egui painter adapter
// ---------------------------------------------------------------------------

struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    transform: TransformStack,
    depth: usize,
}

impl<'a> EguiCanvas<'a> {
    fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin, transform: TransformStack::default(), depth: 0 }
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn to_pos(&self, p: &Vector2<f64>) -> Pos2 {
        let s = self.transform.apply(p);
        self.origin + egui::vec2(s.x as f32, s.y as f32)
    }

    fn is_rotated(&self) -> bool {
        self.transform.angle().abs() > 1e-9
    }
}

fn color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn lerp_color(from: Color, to: Color, t: f64) -> Color {
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    Color::rgba(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b), mix(from.a, to.a))
}

impl Canvas for EguiCanvas<'_> {
    fn save(&mut self) {
        self.transform.save();
        self.depth += 1;
    }

    fn restore(&mut self) {
        self.transform.restore();
        self.depth = self.depth.saturating_sub(1);
    }

    fn translate(&mut self, offset: Vector2<f64>) {
        self.transform.translate(offset);
    }

    fn rotate(&mut self, angle: f64) {
        self.transform.rotate(angle);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let corners = self.transform.rect_corners(x, y, w, h);
        if self.is_rotated() {
            let points = corners.iter().map(|c| self.origin + egui::vec2(c.x as f32, c.y as f32)).collect();
            self.painter.add(Shape::convex_polygon(points, color32(color), Stroke::NONE));
        } else {
            let rect = egui::Rect::from_two_pos(
                self.origin + egui::vec2(corners[0].x as f32, corners[0].y as f32),
                self.origin + egui::vec2(corners[2].x as f32, corners[2].y as f32),
            );
            self.painter.rect_filled(rect, 0.0, color32(color));
        }
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let rect = egui::Rect::from_two_pos(
            self.to_pos(&Vector2::new(x, y)),
            self.to_pos(&Vector2::new(x + w, y + h)),
        );
        self.painter
            .rect_stroke(rect, 0.0, Stroke::new(1.0, color32(color)), StrokeKind::Inside);
    }

    fn fill_polygon(&mut self, points: &[Vector2<f64>], color: Color) {
        let points = points.iter().map(|p| self.to_pos(p)).collect();
        self.painter.add(Shape::convex_polygon(points, color32(color), Stroke::NONE));
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.painter.circle_filled(self.to_pos(&center), radius as f32, color32(color));
    }

    // Approximated with translucent rings from the outside in.
    fn radial_gradient(
        &mut self,
        center: Vector2<f64>,
        inner_radius: f64,
        outer_radius: f64,
        inner: Color,
        outer: Color,
    ) {
        let c = self.to_pos(&center);
        for i in 0..GRADIENT_RINGS {
            let t = i as f64 / (GRADIENT_RINGS - 1) as f64;
            let radius = outer_radius - (outer_radius - inner_radius) * t;
            let color = lerp_color(outer, inner, t);
            let ring = color.with_alpha((f64::from(color.a) / GRADIENT_RINGS as f64 * 2.0) as u8);
            self.painter.circle_filled(c, radius as f32, color32(ring));
        }
    }

    fn fill_text(&mut self, pos: Vector2<f64>, text: &str, size: f64, align: TextAlign, color: Color) {
        let anchor = match align {
            TextAlign::Left => Align2::LEFT_BOTTOM,
            TextAlign::Center => Align2::CENTER_BOTTOM,
        };
        self.painter.text(
            self.to_pos(&pos),
            anchor,
            text,
            FontId::proportional(size as f32),
            color32(color),
        );
    }
}
