// Configuration module.
// Settings file, filesystem locations, and logging setup.

pub mod logging;
pub mod paths;
pub mod settings;

pub use settings::Settings;
