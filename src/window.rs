use std::fs;
use std::path::Path;

use serde::Deserialize;
use tao::dpi::LogicalSize;
use tao::window::{Icon, WindowAttributes};

use crate::error::{Error, Result};

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

/// Window attributes as they appear in the configuration file. All fields
/// are optional; unset ones take the defaults below.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resizable: Option<bool>,
    pub minimizable: Option<bool>,
    pub maximizable: Option<bool>,
    pub closable: Option<bool>,
    pub maximized: Option<bool>,
    pub visible: Option<bool>,
    pub transparent: Option<bool>,
    pub decorations: Option<bool>,
    pub always_on_top: Option<bool>,
    pub focused: Option<bool>,
    pub background_color: Option<(u8, u8, u8, u8)>,
}

impl From<WindowConfig> for WindowAttributes {
    fn from(config: WindowConfig) -> Self {
        let width = config.width.map(f64::from).unwrap_or(DEFAULT_WIDTH);
        let height = config.height.map(f64::from).unwrap_or(DEFAULT_HEIGHT);
        WindowAttributes {
            title: config.title.unwrap_or_else(|| "WebFrame".to_string()),
            inner_size: Some(LogicalSize::new(width, height).into()),
            resizable: config.resizable.unwrap_or(true),
            minimizable: config.minimizable.unwrap_or(true),
            maximizable: config.maximizable.unwrap_or(true),
            closable: config.closable.unwrap_or(true),
            maximized: config.maximized.unwrap_or(false),
            visible: config.visible.unwrap_or(true),
            transparent: config.transparent.unwrap_or(false),
            decorations: config.decorations.unwrap_or(true),
            always_on_top: config.always_on_top.unwrap_or(false),
            focused: config.focused.unwrap_or(true),
            background_color: config.background_color,
            ..WindowAttributes::default()
        }
    }
}

/// Read an icon file from disk and convert it into a window icon.
pub(crate) fn load_icon(path: &Path) -> Result<Icon> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    let image = image::load_from_memory(&bytes)?.into_rgba8();
    let (width, height) = image.dimensions();
    Ok(Icon::from_rgba(image.into_raw(), width, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_a_standard_window() {
        let attributes = WindowAttributes::from(WindowConfig::default());
        assert_eq!(attributes.title, "WebFrame");
        assert!(attributes.resizable);
        assert!(attributes.decorations);
        assert!(!attributes.transparent);
    }

    #[test]
    fn configured_fields_override_defaults() {
        let config = WindowConfig {
            title: Some("Console Input Demo".to_string()),
            resizable: Some(false),
            ..WindowConfig::default()
        };
        let attributes = WindowAttributes::from(config);
        assert_eq!(attributes.title, "Console Input Demo");
        assert!(!attributes.resizable);
    }
}
