//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::PocketPaths;
pub use settings::{Language, Settings, Theme};
