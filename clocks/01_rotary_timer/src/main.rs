//! Rotary Timer
//!
//! A countdown dial: drag the handle to choose a duration, start it, and watch
//! the wedge sweep around the face. Scale and direction are configurable and
//! persisted between runs.

mod countdown;
mod drawing;
mod ui;

use std::time::Instant;

use dial_core::{format_readout, Dial, DialSettings};
use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};

use crate::countdown::{Countdown, CountdownState};
use crate::drawing::{colors, draw_face, draw_handle, draw_readout, draw_wedge, to_engine, DialLayout};
use crate::ui::{draw_settings_panel, draw_timer_controls, TimerAction};

const APP_NAME: &str = "rotary_timer";
const DEFAULT_MINUTES: f64 = 25.0;

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

/// Persisted configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    dial: DialSettings,
    last_minutes: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dial: DialSettings::default(),
            last_minutes: DEFAULT_MINUTES,
        }
    }
}

/// Application state
struct Model {
    /// Persisted dial settings
    settings: DialSettings,
    /// Dial resolved from `settings`
    dial: Dial,
    /// Duration chosen on the dial, in minutes
    selected_minutes: f64,
    countdown: Countdown,
    /// Whether the handle is being dragged
    dragging: bool,
    /// Whether egui claimed the pointer this frame
    egui_wants_pointer: bool,
    /// egui integration
    egui: Egui,
}

impl Model {
    /// Rebuild the dial after a settings change
    fn reconfigure(&mut self) {
        self.dial = self.settings.dial();
        self.selected_minutes = self.selected_minutes.min(<f64 as From<_>>::from(self.dial.max_minutes()));
        log::info!(
            "dial set to {} {}",
            self.settings.scale_mode,
            if self.dial.direction().is_clockwise() { "clockwise" } else { "counter-clockwise" }
        );
        save_config(self);
    }

    fn start(&mut self) {
        if self.countdown.start(self.selected_minutes, Instant::now()) {
            log::info!("countdown started: {}", format_readout(self.selected_minutes));
        }
    }

    fn reset(&mut self) {
        self.countdown.reset();
    }

    /// Forget persisted settings and return to the defaults
    fn restore_defaults(&mut self) {
        if let Err(e) = dial_core::delete_config(APP_NAME) {
            log::warn!("failed to delete config: {}", e);
        }
        let defaults = Config::default();
        self.settings = defaults.dial;
        self.dial = defaults.dial.dial();
        self.selected_minutes = defaults.last_minutes;
        self.reset();
        log::info!("settings restored to defaults");
    }

    /// Follow the pointer while dragging
    fn drag_to(&mut self, app: &App, pos: Point2) {
        let layout = DialLayout::calculate(app.window_rect());
        let (px, py) = to_engine(pos);
        let (cx, cy) = to_engine(layout.center);
        let minutes = self.dial.coordinates_to_minutes(px, py, cx, cy);
        let step = if self.dial.max_minutes() >= 10 { 1.0 } else { 1.0 / 12.0 };
        self.selected_minutes = self.dial.snap_minutes(minutes, step);
    }
}

fn save_config(model: &Model) {
    let config = Config {
        dial: model.settings,
        last_minutes: model.selected_minutes,
    };
    if let Err(e) = dial_core::save_config(APP_NAME, &config) {
        log::warn!("failed to save config: {}", e);
    }
}

fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Rotary Timer")
        .size(640, 720)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let config: Config = match dial_core::load_config(APP_NAME) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::warn!("failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    let dial = config.dial.dial();
    let selected_minutes = dial.snap_minutes(config.last_minutes, 0.0);

    Model {
        settings: config.dial,
        dial,
        selected_minutes,
        countdown: Countdown::default(),
        dragging: false,
        egui_wants_pointer: false,
        egui,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    if model.countdown.tick(Instant::now()) {
        log::info!("countdown finished");
    }

    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let mut settings = model.settings;
    let settings_changed = draw_settings_panel(&ctx, &mut settings);
    let action = draw_timer_controls(&ctx, model.countdown.is_running());
    model.egui_wants_pointer = ctx.wants_pointer_input();

    drop(ctx);

    if settings_changed {
        model.settings = settings;
        model.reset();
        model.reconfigure();
    }

    match action {
        TimerAction::Start => model.start(),
        TimerAction::Reset => model.reset(),
        TimerAction::None => {}
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let layout = DialLayout::calculate(app.window_rect());
    let now = Instant::now();

    draw.background().color(colors::BACKGROUND);

    draw_wedge(&draw, model.countdown.progress(now), layout);
    draw_face(&draw, &model.dial, layout);

    let (handle_minutes, caption) = match model.countdown.state {
        CountdownState::Running { .. } => (
            model.countdown.remaining_minutes(now).unwrap_or(0.0),
            "remaining",
        ),
        CountdownState::Finished => (0.0, "done"),
        CountdownState::Idle => (model.selected_minutes, "drag to set"),
    };
    draw_handle(&draw, &model.dial, handle_minutes, layout);
    draw_readout(&draw, &format_readout(handle_minutes), caption, layout);

    draw.to_frame(app, &frame).unwrap();

    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => {
            if model.countdown.is_running() {
                model.reset();
            } else {
                model.start();
            }
        }
        Key::C => {
            model.settings.clockwise = !model.settings.clockwise;
            model.reset();
            model.reconfigure();
        }
        Key::R => model.restore_defaults(),
        _ => {}
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui_wants_pointer {
        return;
    }
    let pos = app.mouse.position();
    if DialLayout::calculate(app.window_rect()).contains(pos) {
        model.dragging = true;
        model.reset();
        model.drag_to(app, pos);
    }
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && model.dragging {
        model.dragging = false;
        save_config(model);
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    if model.dragging {
        model.drag_to(app, pos);
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
