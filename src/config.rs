use std::env::consts::OS;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::webview::WebViewConfig;
use crate::window::WindowConfig;

/// Declarative shell configuration, loadable from a JSON file.
///
/// Every field is optional; a missing file section falls back to defaults,
/// so `Config::default()` is a usable starting point for programmatic setup.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub package: PackageConfig,
    pub window: WindowConfig,
    pub webview: WebViewConfig,
    pub icon: Option<IconConfig>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct PackageConfig {
    #[serde(rename = "productName")]
    pub product_name: Option<String>,
    pub version: Option<String>,
}

/// Per-OS window icon paths. The icon format is anything `image` can decode.
#[derive(Debug, Deserialize, Clone)]
pub struct IconConfig {
    pub linux: Option<PathBuf>,
    pub macos: Option<PathBuf>,
    pub windows: Option<PathBuf>,
}

impl IconConfig {
    pub fn for_current_os(&self) -> Option<&Path> {
        match OS {
            "linux" => self.linux.as_deref(),
            "macos" => self.macos.as_deref(),
            "windows" => self.windows.as_deref(),
            _ => None,
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(serde_json::from_str(&data)?)
    }
}
