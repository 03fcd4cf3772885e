mod settings;

pub use settings::{EmailConfig, ServerConfig, Settings};
