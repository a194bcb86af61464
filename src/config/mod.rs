mod filesystem;
mod loader;
mod merge;
mod model;
mod presets;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, USER_CONFIG_NAME};
pub use merge::merge_toml_values;
pub use model::{Config, FilesConfig, RuleSetting, RulesConfig};
pub use presets::{AVAILABLE_PRESETS, DEFAULT_PRESET, NO_PRESET, load_preset, preset_display_name};
pub use validation::validate_config;
