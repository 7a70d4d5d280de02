use serde::Deserialize;
use wry::WebViewAttributes;

/// Webview attributes as they appear in the configuration file.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct WebViewConfig {
    pub user_agent: Option<String>,
    pub url: Option<String>,
    pub html: Option<String>,
    pub visible: Option<bool>,
    pub transparent: Option<bool>,
    pub background_color: Option<(u8, u8, u8, u8)>,
    pub devtools: Option<bool>,
    pub clipboard: Option<bool>,
    pub incognito: Option<bool>,
    pub autoplay: Option<bool>,
    pub zoom_hotkeys_enabled: Option<bool>,
    pub accept_first_mouse: Option<bool>,
    pub focused: Option<bool>,
}

impl From<WebViewConfig> for WebViewAttributes<'static> {
    fn from(config: WebViewConfig) -> Self {
        WebViewAttributes {
            user_agent: config.user_agent,
            url: config.url,
            html: config.html,
            visible: config.visible.unwrap_or(true),
            transparent: config.transparent.unwrap_or(false),
            background_color: config.background_color,
            devtools: config.devtools.unwrap_or(false),
            clipboard: config.clipboard.unwrap_or(false),
            incognito: config.incognito.unwrap_or(false),
            autoplay: config.autoplay.unwrap_or(false),
            zoom_hotkeys_enabled: config.zoom_hotkeys_enabled.unwrap_or(true),
            accept_first_mouse: config.accept_first_mouse.unwrap_or(false),
            focused: config.focused.unwrap_or(false),
            ..WebViewAttributes::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_devtools_off() {
        let attributes = WebViewAttributes::from(WebViewConfig::default());
        assert!(!attributes.devtools);
        assert!(attributes.visible);
        assert!(attributes.html.is_none());
    }

    #[test]
    fn inline_html_is_carried_through() {
        let config = WebViewConfig {
            html: Some("<html></html>".to_string()),
            devtools: Some(true),
            ..WebViewConfig::default()
        };
        let attributes = WebViewAttributes::from(config);
        assert_eq!(attributes.html.as_deref(), Some("<html></html>"));
        assert!(attributes.devtools);
    }
}
