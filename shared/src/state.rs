//! Clock state machine
//!
//! The window owns a single `ClockState`; menu actions and keyboard shortcuts
//! are turned into `StateEvent`s and dispatched through `apply`. Side effects
//! (background reload, audio control) are returned as a `Reaction` for the
//! caller to perform, never executed here.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, StyleCatalog, TimeZoneCatalog};
use crate::config::{Settings, DEFAULT_CITY, SOUND_FILES};

/// Analog or digital rendering of the active timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    Analog,
    Digital,
}

/// User-facing actions dispatched to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// Switch between analog and digital, installing the target default style
    ToggleMode,
    /// Cycle to the next distinct style of the active catalog
    ChangeStyle,
    /// Show/hide the clock overlay (background stays)
    ToggleVisibility,
    /// Select a city from the timezone menu
    SelectCity(String),
    /// Mute/unmute the ticking sound
    ToggleSound,
    /// Advance to the next ticking sound effect
    SwitchSound,
}

/// Audio side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    /// Start or resume playback of the current track
    Resume,
    /// Pause playback, keeping the track selection
    Pause,
    /// Stop the active stream and start the given track index
    StartTrack(usize),
}

/// Side effects the caller must perform after a transition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    /// The city changed; reload the background image
    pub background_changed: bool,
    pub audio: Option<AudioCommand>,
}

/// Mutable clock state, single instance owned by the window
#[derive(Debug, Clone)]
pub struct ClockState {
    pub city: String,
    pub timezone: Tz,
    pub mode: DisplayMode,
    pub show_clock: bool,
    /// Resource path of the active style; always a member of the catalog
    /// matching `mode`
    pub current_style: PathBuf,
    pub sound_enabled: bool,
    pub sound_index: usize,
}

impl ClockState {
    /// Build the initial state from startup settings.
    ///
    /// A configured city that does not resolve falls back to the fixed
    /// default rather than failing startup; the offending name is returned
    /// for the caller to log.
    pub fn from_settings(
        settings: &Settings,
        zones: &TimeZoneCatalog,
        analog: &StyleCatalog,
        digital: &StyleCatalog,
    ) -> (Self, Option<CatalogError>) {
        let (city, timezone, warning) = match zones.resolve(&settings.city) {
            Ok(tz) => (settings.city.clone(), tz, None),
            Err(err) => {
                let tz = zones
                    .resolve(DEFAULT_CITY)
                    .unwrap_or(chrono_tz::Asia::Tehran);
                (DEFAULT_CITY.to_string(), tz, Some(err))
            }
        };

        let current_style = match settings.mode {
            DisplayMode::Analog => analog.default_entry().path.clone(),
            DisplayMode::Digital => digital.default_entry().path.clone(),
        };

        let state = Self {
            city,
            timezone,
            mode: settings.mode,
            show_clock: true,
            current_style,
            sound_enabled: settings.sound_enabled,
            sound_index: 0,
        };
        (state, warning)
    }

    /// The style catalog matching the active display mode
    pub fn active_catalog<'a>(
        &self,
        analog: &'a StyleCatalog,
        digital: &'a StyleCatalog,
    ) -> &'a StyleCatalog {
        match self.mode {
            DisplayMode::Analog => analog,
            DisplayMode::Digital => digital,
        }
    }

    /// Apply one event, returning the side effects to perform.
    ///
    /// On error the state is guaranteed unchanged; the caller logs and
    /// carries on with the previous state.
    pub fn apply(
        &mut self,
        event: StateEvent,
        zones: &TimeZoneCatalog,
        analog: &StyleCatalog,
        digital: &StyleCatalog,
    ) -> Result<Reaction, CatalogError> {
        match event {
            StateEvent::ToggleMode => {
                let (mode, default_style) = match self.mode {
                    DisplayMode::Analog => (DisplayMode::Digital, digital.default_entry()),
                    DisplayMode::Digital => (DisplayMode::Analog, analog.default_entry()),
                };
                self.mode = mode;
                self.current_style = default_style.path.clone();
                Ok(Reaction::default())
            }
            StateEvent::ChangeStyle => {
                let catalog = self.active_catalog(analog, digital);
                let next = catalog.next_style(&self.current_style)?;
                self.current_style = next.path.clone();
                Ok(Reaction::default())
            }
            StateEvent::ToggleVisibility => {
                self.show_clock = !self.show_clock;
                Ok(Reaction::default())
            }
            StateEvent::SelectCity(city) => {
                let timezone = zones.resolve(&city)?;
                self.city = city;
                self.timezone = timezone;
                Ok(Reaction {
                    background_changed: true,
                    audio: None,
                })
            }
            StateEvent::ToggleSound => {
                self.sound_enabled = !self.sound_enabled;
                let command = if self.sound_enabled {
                    AudioCommand::Resume
                } else {
                    AudioCommand::Pause
                };
                Ok(Reaction {
                    background_changed: false,
                    audio: Some(command),
                })
            }
            StateEvent::SwitchSound => {
                self.sound_index = (self.sound_index + 1) % SOUND_FILES.len();
                Ok(Reaction {
                    background_changed: false,
                    audio: Some(AudioCommand::StartTrack(self.sound_index)),
                })
            }
        }
    }

    /// Background path for the current city, relative to the media root
    pub fn background<'a>(&self, zones: &'a TimeZoneCatalog) -> Option<&'a Path> {
        zones.background_for(&self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{StyleCatalog, TimeZoneCatalog};

    fn fixtures() -> (TimeZoneCatalog, StyleCatalog, StyleCatalog) {
        (
            TimeZoneCatalog::new(),
            StyleCatalog::analog_styles(),
            StyleCatalog::digital_styles(),
        )
    }

    fn fresh_state() -> (ClockState, TimeZoneCatalog, StyleCatalog, StyleCatalog) {
        let (zones, analog, digital) = fixtures();
        let (state, warning) =
            ClockState::from_settings(&Settings::default(), &zones, &analog, &digital);
        assert!(warning.is_none());
        (state, zones, analog, digital)
    }

    #[test]
    fn test_initial_state_is_analog_default() {
        let (state, _, analog, _) = fresh_state();
        assert_eq!(state.mode, DisplayMode::Analog);
        assert_eq!(state.current_style, analog.default_entry().path);
        assert_eq!(state.city, "Tehran");
        assert!(state.show_clock);
    }

    #[test]
    fn test_toggle_mode_twice_round_trips() {
        let (mut state, zones, analog, digital) = fresh_state();

        state
            .apply(StateEvent::ToggleMode, &zones, &analog, &digital)
            .unwrap();
        assert_eq!(state.mode, DisplayMode::Digital);
        assert_eq!(state.current_style, digital.default_entry().path);

        state
            .apply(StateEvent::ToggleMode, &zones, &analog, &digital)
            .unwrap();
        assert_eq!(state.mode, DisplayMode::Analog);
        assert_eq!(state.current_style, analog.default_entry().path);
    }

    #[test]
    fn test_change_style_stays_in_mode() {
        let (mut state, zones, analog, digital) = fresh_state();
        let before = state.current_style.clone();
        state
            .apply(StateEvent::ChangeStyle, &zones, &analog, &digital)
            .unwrap();
        assert_eq!(state.mode, DisplayMode::Analog);
        assert_ne!(state.current_style, before);
    }

    #[test]
    fn test_change_style_with_foreign_style_leaves_state_unchanged() {
        let (mut state, zones, analog, digital) = fresh_state();
        // Simulate the contract violation: a digital style while analog.
        state.current_style = digital.default_entry().path.clone();
        let before = state.clone();

        let err = state
            .apply(StateEvent::ChangeStyle, &zones, &analog, &digital)
            .unwrap_err();
        assert!(matches!(err, CatalogError::StyleNotInCatalog(_)));
        assert_eq!(state.current_style, before.current_style);
        assert_eq!(state.mode, before.mode);
    }

    #[test]
    fn test_select_city_updates_zone_and_background() {
        let (mut state, zones, analog, digital) = fresh_state();
        let reaction = state
            .apply(
                StateEvent::SelectCity("Tokyo".to_string()),
                &zones,
                &analog,
                &digital,
            )
            .unwrap();
        assert!(reaction.background_changed);
        assert_eq!(state.city, "Tokyo");
        assert_eq!(state.timezone, chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn test_unknown_city_leaves_state_unchanged() {
        let (mut state, zones, analog, digital) = fresh_state();
        let before = state.clone();
        let err = state
            .apply(
                StateEvent::SelectCity("Atlantis".to_string()),
                &zones,
                &analog,
                &digital,
            )
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCity(_)));
        assert_eq!(state.city, before.city);
        assert_eq!(state.timezone, before.timezone);
    }

    #[test]
    fn test_sound_toggle_and_switch() {
        let (mut state, zones, analog, digital) = fresh_state();
        assert!(state.sound_enabled);

        let reaction = state
            .apply(StateEvent::ToggleSound, &zones, &analog, &digital)
            .unwrap();
        assert!(!state.sound_enabled);
        assert_eq!(reaction.audio, Some(AudioCommand::Pause));

        let reaction = state
            .apply(StateEvent::SwitchSound, &zones, &analog, &digital)
            .unwrap();
        assert_eq!(state.sound_index, 1);
        assert_eq!(reaction.audio, Some(AudioCommand::StartTrack(1)));

        // Cycling wraps across the whole track list.
        for _ in 0..SOUND_FILES.len() - 1 {
            state
                .apply(StateEvent::SwitchSound, &zones, &analog, &digital)
                .unwrap();
        }
        assert_eq!(state.sound_index, 0);
    }

    #[test]
    fn test_bad_configured_city_falls_back_to_default() {
        let (zones, analog, digital) = fixtures();
        let settings = Settings {
            city: "Nowhere".to_string(),
            ..Settings::default()
        };
        let (state, warning) = ClockState::from_settings(&settings, &zones, &analog, &digital);
        assert!(warning.is_some());
        assert_eq!(state.city, "Tehran");
        assert_eq!(state.timezone, chrono_tz::Asia::Tehran);
    }
}
