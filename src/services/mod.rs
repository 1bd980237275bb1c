//! I/O boundary: settings, log directory and reading seed snapshots.

pub mod seed;
pub mod settings;

pub use seed::{load_seed_file, parse_seed};
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    load_settings_from, Settings,
};
