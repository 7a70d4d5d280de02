use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while setting up or talking to the shell.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create window: {0}")]
    Window(#[from] tao::error::OsError),

    #[error("failed to create webview: {0}")]
    Webview(#[from] wry::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to decode window icon: {0}")]
    IconDecode(#[from] image::ImageError),

    #[error("invalid window icon: {0}")]
    Icon(#[from] tao::window::BadIcon),

    #[error("failed to start message runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[cfg(target_os = "linux")]
    #[error("window has no default GTK container")]
    MissingGtkContainer,

    /// The event loop is gone; no further window requests can be delivered.
    #[error("event loop is closed")]
    EventLoopClosed,

    /// The shell dropped the reply channel before answering a title request.
    #[error("window request dropped before a reply was sent")]
    ReplyDropped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_render_a_plain_message() {
        assert_eq!(Error::EventLoopClosed.to_string(), "event loop is closed");
        assert_eq!(
            Error::ReplyDropped.to_string(),
            "window request dropped before a reply was sent"
        );
    }

    #[test]
    fn io_error_names_the_offending_path() {
        let err = Error::Io {
            path: PathBuf::from("assets/icon.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("assets/icon.png"));
    }
}
