//! UI module - egui sidebar with display, timezone, audio and info menus
//!
//! The sidebar only collects intents: every click becomes a `StateEvent` in
//! the returned `UiResult`, applied by the update loop after the egui frame
//! ends. Nothing here mutates clock state directly.

use nannou_egui::egui;

use shared::{ClockState, DisplayMode, StateEvent, StyleCatalog, TimeZoneCatalog, SOUND_FILES};

const SUPPORT_URL: &str = "https://github.com/CipherChaos";

/// UI-local state for the sidebar panel
#[derive(Default)]
pub struct SidebarState {
    pub expanded: bool,
    pub show_about: bool,
}

/// Result of one sidebar frame
#[derive(Default)]
pub struct UiResult {
    pub events: Vec<StateEvent>,
}

/// Draw the sidebar and the About window, collecting requested events
pub fn draw_sidebar(
    ctx: &egui::Context,
    sidebar: &mut SidebarState,
    state: &ClockState,
    zones: &TimeZoneCatalog,
    analog: &StyleCatalog,
    digital: &StyleCatalog,
) -> UiResult {
    let mut result = UiResult::default();

    let width = if sidebar.expanded { 280.0 } else { 60.0 };
    egui::SidePanel::left("sidebar")
        .exact_width(width)
        .resizable(false)
        .show(ctx, |ui| {
            if ui.button("☰").clicked() {
                sidebar.expanded = !sidebar.expanded;
            }
            if !sidebar.expanded {
                return;
            }

            ui.separator();
            draw_display_menu(ui, state, analog, digital, &mut result);
            draw_timezone_menu(ui, state, zones, &mut result);
            draw_audio_menu(ui, state, &mut result);
            draw_info_menu(ui, sidebar);
        });

    draw_about_window(ctx, sidebar);
    result
}

fn draw_display_menu(
    ui: &mut egui::Ui,
    state: &ClockState,
    analog: &StyleCatalog,
    digital: &StyleCatalog,
    result: &mut UiResult,
) {
    ui.collapsing("🎨 Display", |ui| {
        let mode_label = match state.mode {
            DisplayMode::Analog => "Analog",
            DisplayMode::Digital => "Digital",
        };
        let style_name = state
            .active_catalog(analog, digital)
            .entry_for(&state.current_style)
            .map(|entry| entry.name.as_str())
            .unwrap_or("?");
        ui.label(format!("{} · {}", mode_label, style_name));

        if ui.button("Toggle Clock Mode").clicked() {
            result.events.push(StateEvent::ToggleMode);
        }
        if ui.button("Change Clock Style").clicked() {
            result.events.push(StateEvent::ChangeStyle);
        }
        let visibility_label = if state.show_clock {
            "Hide Clock"
        } else {
            "Show Clock"
        };
        if ui.button(visibility_label).clicked() {
            result.events.push(StateEvent::ToggleVisibility);
        }
    });
}

fn draw_timezone_menu(
    ui: &mut egui::Ui,
    state: &ClockState,
    zones: &TimeZoneCatalog,
    result: &mut UiResult,
) {
    ui.collapsing("🌍 Time Zone", |ui| {
        ui.label(format!("{} ({})", state.city, state.timezone.name()));
        for continent in zones.continents() {
            ui.collapsing(&continent.name, |ui| {
                for (city, _) in &continent.cities {
                    let is_current = *city == state.city;
                    if ui.selectable_label(is_current, city).clicked() && !is_current {
                        result.events.push(StateEvent::SelectCity(city.clone()));
                    }
                }
            });
        }
    });
}

fn draw_audio_menu(ui: &mut egui::Ui, state: &ClockState, result: &mut UiResult) {
    ui.collapsing("🔊 Audio", |ui| {
        let sound_label = if state.sound_enabled {
            "Sound: On"
        } else {
            "Sound: Off"
        };
        if ui.button(sound_label).clicked() {
            result.events.push(StateEvent::ToggleSound);
        }
        let effect_label = format!(
            "Switch Sound Effect ({}/{})",
            state.sound_index + 1,
            SOUND_FILES.len()
        );
        if ui.button(effect_label).clicked() {
            result.events.push(StateEvent::SwitchSound);
        }
    });
}

fn draw_info_menu(ui: &mut egui::Ui, sidebar: &mut SidebarState) {
    ui.collapsing("ℹ Info", |ui| {
        if ui.button("About").clicked() {
            sidebar.show_about = true;
        }
        ui.hyperlink_to("Support", SUPPORT_URL);
    });
}

fn draw_about_window(ctx: &egui::Context, sidebar: &mut SidebarState) {
    if !sidebar.show_about {
        return;
    }

    egui::Window::new("About Global Clock")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                "Global Clock v2.0\n\n\
                 A world clock application with:\n\
                 • Multiple timezone support\n\
                 • Analog and Digital clock modes\n\
                 • Customizable clock styles\n\
                 • City backgrounds\n\
                 • Ticking sound effects",
            );
            ui.separator();
            if ui.button("Close").clicked() {
                sidebar.show_about = false;
            }
        });
}
