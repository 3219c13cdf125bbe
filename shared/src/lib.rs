//! Shared logic for the Global Clock application.
//!
//! Everything in this crate is GUI-free and unit-testable: time and hand-angle
//! computation, the timezone/style catalogs, the style cycler, the display
//! state machine, and startup settings loading.

pub mod catalog;
pub mod config;
pub mod state;
pub mod time_engine;

pub use catalog::{CatalogError, StyleCatalog, StyleEntry, TimeZoneCatalog};
pub use config::{load_settings, ConfigError, Settings, DEFAULT_CITY, SOUND_FILES};
pub use state::{AudioCommand, ClockState, DisplayMode, Reaction, StateEvent};
pub use time_engine::{
    angles_for, compute_hand_angles, compute_hand_angles_at, compute_time_data,
    compute_time_data_at, hand_vector, marker_radius, HandAngles, TimeData,
};
