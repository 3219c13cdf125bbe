//! Global Clock
//!
//! A world clock over city backgrounds: analog or digital face, per-city
//! timezones picked from a sidebar, cyclable skins and a looping ticking
//! sound. All clock logic lives in the `shared` crate; this binary is the
//! nannou window, the egui sidebar and the reactions to state transitions.

mod assets;
mod audio;
mod drawing;
mod ui;

use std::path::PathBuf;

use nannou::prelude::*;
use nannou_egui::{self, Egui};

use shared::{
    angles_for, compute_time_data, config, load_settings, ClockState, DisplayMode, HandAngles,
    Settings, StateEvent, StyleCatalog, TimeData, TimeZoneCatalog,
};

use crate::assets::TextureStore;
use crate::audio::AudioManager;
use crate::drawing::Layout;
use crate::ui::SidebarState;

fn main() {
    nannou::app(model).update(update).run();
}

/// Application state owned by the window
struct Model {
    state: ClockState,
    zones: TimeZoneCatalog,
    analog: StyleCatalog,
    digital: StyleCatalog,
    /// Time of the active timezone, recomputed every frame
    time_data: TimeData,
    angles: HandAngles,
    textures: TextureStore,
    /// Relative path of the resolved background, None when nothing loads
    background: Option<PathBuf>,
    /// None when no output device is available; the clock runs silently
    audio: Option<AudioManager>,
    sidebar: SidebarState,
    egui: Egui,
}

fn model(app: &App) -> Model {
    let settings = match load_settings() {
        Ok(Some(settings)) => settings,
        Ok(None) => Settings::default(),
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            Settings::default()
        }
    };

    let window_id = app
        .new_window()
        .title(config::WINDOW_TITLE)
        .size(settings.window_width, settings.window_height)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let zones = TimeZoneCatalog::new();
    let analog = StyleCatalog::analog_styles();
    let digital = StyleCatalog::digital_styles();

    let (state, warning) = ClockState::from_settings(&settings, &zones, &analog, &digital);
    if let Some(warning) = warning {
        eprintln!("{}; falling back to {}", warning, state.city);
    }

    let media_root = assets::media_root();
    let audio = AudioManager::new(&media_root, state.sound_enabled, state.sound_index);

    let mut textures = TextureStore::new(media_root);
    let background = textures.background_for(app, &zones, &state.city);

    let time_data = compute_time_data(state.timezone);
    let angles = angles_for(&time_data);

    Model {
        state,
        zones,
        analog,
        digital,
        time_data,
        angles,
        textures,
        background,
        audio,
        sidebar: SidebarState::default(),
        egui,
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    // Recompute time every frame; the 60 Hz loop is the only timer
    model.time_data = compute_time_data(model.state.timezone);
    model.angles = angles_for(&model.time_data);

    if let Some(audio) = model.audio.as_mut() {
        audio.poll_loop();
    }

    // The active skin may change between frames; the cache makes this cheap
    model.textures.ensure(app, &model.state.current_style);

    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();
    let result = ui::draw_sidebar(
        &ctx,
        &mut model.sidebar,
        &model.state,
        &model.zones,
        &model.analog,
        &model.digital,
    );
    drop(ctx);

    for event in result.events {
        apply_event(app, model, event);
    }
}

/// Dispatch one event through the state machine and perform its reactions.
/// Errors leave the previous state in place and are only logged.
fn apply_event(app: &App, model: &mut Model, event: StateEvent) {
    match model
        .state
        .apply(event, &model.zones, &model.analog, &model.digital)
    {
        Ok(reaction) => {
            if reaction.background_changed {
                model.background =
                    model
                        .textures
                        .background_for(app, &model.zones, &model.state.city);
            }
            if let Some(command) = reaction.audio {
                if let Some(audio) = model.audio.as_mut() {
                    audio.apply(command);
                }
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(drawing::colors::BACKDROP);

    if let Some(texture) = model
        .background
        .as_deref()
        .and_then(|path| model.textures.get(path))
    {
        drawing::draw_background(&draw, texture, window_rect);
    }

    if model.state.show_clock {
        let layout = Layout::calculate(window_rect);
        match model.state.mode {
            DisplayMode::Analog => {
                if let Some(skin) = model.textures.get(&model.state.current_style) {
                    drawing::draw_analog_skin(&draw, skin, &layout);
                }
                drawing::draw_analog_clock(&draw, &model.angles, &layout);
            }
            DisplayMode::Digital => {
                let frame_texture = model.textures.get(&model.state.current_style);
                drawing::draw_digital_clock(&draw, &model.time_data, frame_texture);
            }
        }
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    let event = match key {
        Key::M => StateEvent::ToggleMode,
        Key::C => StateEvent::ChangeStyle,
        Key::V => StateEvent::ToggleVisibility,
        Key::S => StateEvent::ToggleSound,
        Key::N => StateEvent::SwitchSound,
        _ => return,
    };
    apply_event(app, model, event);
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
