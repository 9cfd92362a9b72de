mod loader;
mod types;

pub use loader::{ConfigError, MAX_PER_PAGE};
pub use types::{
    AssistantConfig, Config, ImagesConfig, LoggingConfig, UiConfig, ASSISTANT_API_KEY_ENV,
    IMAGES_ACCESS_KEY_ENV,
};
