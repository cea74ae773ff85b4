//! Collision relay configuration resource.
//!
//! Default filters for notifiers and parameters for the pipeline operators,
//! loaded from an INI configuration file. Provides defaults for safe startup
//! and methods to load/save configuration, plus factories that build
//! components from the current values.
//!
//! # Configuration File Format
//!
//! ```ini
//! [notifier]
//! emit_collisions = true
//! emit_triggers = true
//! process_enter = true
//! process_stay = true
//! process_exit = true
//!
//! [slicer]
//! start_index = 0
//! length = 1
//!
//! [sorter]
//! enabled = true
//!
//! [reverser]
//! enabled = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::collisionevent::{CollisionStates, CollisionTypes};
use crate::components::collisionnotifier::CollisionNotifier;
use crate::components::nearestsorter::NearestCollisionSorter;
use crate::components::reverser::CollisionOrderReverser;
use crate::components::slicer::CollisionSlicer;

/// Default safe values for startup
const DEFAULT_EMIT_COLLISIONS: bool = true;
const DEFAULT_EMIT_TRIGGERS: bool = true;
const DEFAULT_PROCESS_ENTER: bool = true;
const DEFAULT_PROCESS_STAY: bool = true;
const DEFAULT_PROCESS_EXIT: bool = true;
const DEFAULT_SLICE_START: isize = 0;
const DEFAULT_SLICE_LENGTH: usize = 1;
const DEFAULT_SORTER_ENABLED: bool = true;
const DEFAULT_REVERSER_ENABLED: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./relay.ini";

/// Collision relay configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct RelayConfig {
    /// Notifiers emit solid collisions.
    pub emit_collisions: bool,
    /// Notifiers emit trigger overlaps.
    pub emit_triggers: bool,
    pub process_enter: bool,
    pub process_stay: bool,
    pub process_exit: bool,
    /// Slicer start; negative counts from the end.
    pub slice_start: isize,
    pub slice_length: usize,
    pub sorter_enabled: bool,
    pub reverser_enabled: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            emit_collisions: DEFAULT_EMIT_COLLISIONS,
            emit_triggers: DEFAULT_EMIT_TRIGGERS,
            process_enter: DEFAULT_PROCESS_ENTER,
            process_stay: DEFAULT_PROCESS_STAY,
            process_exit: DEFAULT_PROCESS_EXIT,
            slice_start: DEFAULT_SLICE_START,
            slice_length: DEFAULT_SLICE_LENGTH,
            sorter_enabled: DEFAULT_SORTER_ENABLED,
            reverser_enabled: DEFAULT_REVERSER_ENABLED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [notifier] section
        if let Some(v) = config.getbool("notifier", "emit_collisions").ok().flatten() {
            self.emit_collisions = v;
        }
        if let Some(v) = config.getbool("notifier", "emit_triggers").ok().flatten() {
            self.emit_triggers = v;
        }
        if let Some(v) = config.getbool("notifier", "process_enter").ok().flatten() {
            self.process_enter = v;
        }
        if let Some(v) = config.getbool("notifier", "process_stay").ok().flatten() {
            self.process_stay = v;
        }
        if let Some(v) = config.getbool("notifier", "process_exit").ok().flatten() {
            self.process_exit = v;
        }

        // [slicer] section
        if let Some(v) = config.getint("slicer", "start_index").ok().flatten() {
            self.slice_start = v as isize;
        }
        if let Some(v) = config.getuint("slicer", "length").ok().flatten() {
            self.slice_length = v as usize;
        }

        // [sorter] / [reverser] sections
        if let Some(v) = config.getbool("sorter", "enabled").ok().flatten() {
            self.sorter_enabled = v;
        }
        if let Some(v) = config.getbool("reverser", "enabled").ok().flatten() {
            self.reverser_enabled = v;
        }

        info!(
            "Loaded relay config: types={:?}, states={:?}, slice=({}, {}), sorter={}, reverser={}",
            self.emitted_types(),
            self.states(),
            self.slice_start,
            self.slice_length,
            self.sorter_enabled,
            self.reverser_enabled
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("notifier", "emit_collisions", Some(self.emit_collisions.to_string()));
        config.set("notifier", "emit_triggers", Some(self.emit_triggers.to_string()));
        config.set("notifier", "process_enter", Some(self.process_enter.to_string()));
        config.set("notifier", "process_stay", Some(self.process_stay.to_string()));
        config.set("notifier", "process_exit", Some(self.process_exit.to_string()));
        config.set("slicer", "start_index", Some(self.slice_start.to_string()));
        config.set("slicer", "length", Some(self.slice_length.to_string()));
        config.set("sorter", "enabled", Some(self.sorter_enabled.to_string()));
        config.set("reverser", "enabled", Some(self.reverser_enabled.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved relay config to {:?}", self.config_path);

        Ok(())
    }

    /// Emitted types flag set built from the notifier settings.
    pub fn emitted_types(&self) -> CollisionTypes {
        let mut types = CollisionTypes::empty();
        types.set(CollisionTypes::COLLISION, self.emit_collisions);
        types.set(CollisionTypes::TRIGGER, self.emit_triggers);
        types
    }

    /// Processed states flag set built from the notifier settings.
    pub fn states(&self) -> CollisionStates {
        let mut states = CollisionStates::empty();
        states.set(CollisionStates::ENTER, self.process_enter);
        states.set(CollisionStates::STAY, self.process_stay);
        states.set(CollisionStates::EXIT, self.process_exit);
        states
    }

    pub fn notifier(&self) -> CollisionNotifier {
        CollisionNotifier::new()
            .with_types(self.emitted_types())
            .with_states(self.states())
    }

    pub fn slicer(&self) -> CollisionSlicer {
        CollisionSlicer::new(self.slice_start, self.slice_length)
    }

    pub fn sorter(&self, source: Option<Entity>) -> NearestCollisionSorter {
        let mut sorter = NearestCollisionSorter::new(source);
        sorter.enabled = self.sorter_enabled;
        sorter
    }

    pub fn reverser(&self) -> CollisionOrderReverser {
        let mut reverser = CollisionOrderReverser::new();
        reverser.enabled = self.reverser_enabled;
        reverser
    }
}
