pub mod settings;

pub use settings::{DockerSettings, ServerSettings, Settings};
