use salesphere_common::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("No browser window available")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Element #{id} not found in page")]
    MissingElement { id: String },
    #[error("Failed to attach {event} listener to {target}: {reason}")]
    Listener {
        event: &'static str,
        target: String,
        reason: String,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
