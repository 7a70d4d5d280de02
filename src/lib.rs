//! Minimal desktop webview shell over `tao` and `wry`.
//!
//! A [`WebFrame`] opens one native window rendering an embedded HTML document
//! (or a URL) and forwards every message the page posts through
//! `window.ipc.postMessage(...)` to a handler registered at startup. Handlers
//! run as tasks on a background tokio runtime and talk back to the window
//! through a [`WindowHandle`], so the event loop thread never blocks on
//! handler work.

use std::future::Future;

use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::window::{WindowAttributes, WindowBuilder};
use tracing::{debug, info};
use wry::http::Request;
use wry::{WebViewAttributes, WebViewBuilder};

use crate::events::{RuntimeMessage, WindowRequest};

mod config;
mod error;
mod events;
mod handle;
mod webview;
mod window;

pub use config::{Config, IconConfig, PackageConfig};
pub use error::{Error, Result};
pub use handle::{TitleAccess, WindowHandle, TITLE_SET_OK};
pub use webview::WebViewConfig;
pub use window::WindowConfig;

/// Builder for the shell: one window, one webview, one message handler.
#[derive(Default)]
pub struct WebFrame {
    config: Config,
}

impl WebFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Load the full shell configuration from a JSON file.
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::with_config(Config::from_file(path)?))
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.window.title = Some(title.into());
        self
    }

    /// Serve an inline HTML document. Takes precedence over a configured URL.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.config.webview.html = Some(html.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.webview.url = Some(url.into());
        self
    }

    /// Open the window and block running the event loop.
    ///
    /// `handler` is invoked once per frontend message with the raw request
    /// body and a [`WindowHandle`]; each invocation is spawned on a
    /// multi-threaded runtime, so overlapping messages may run concurrently.
    ///
    /// Errors are returned only for setup failures; once the loop is running
    /// this call never returns.
    pub fn run<H, Fut>(self, handler: H) -> Result<()>
    where
        H: Fn(String, WindowHandle) -> Fut + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let event_loop = EventLoopBuilder::<RuntimeMessage>::with_user_event().build();

        let mut builder = WindowBuilder::new();
        builder.window = WindowAttributes::from(self.config.window.clone());
        if let Some(icons) = &self.config.icon {
            if let Some(path) = icons.for_current_os() {
                builder.window.window_icon = Some(window::load_icon(path)?);
            }
        }
        let window = builder.build(&event_loop)?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("webframe-ipc")
            .build()
            .map_err(Error::Runtime)?;
        let window_handle = WindowHandle::new(event_loop.create_proxy());

        let mut attributes = WebViewAttributes::from(self.config.webview.clone());
        attributes.ipc_handler = Some(Box::new({
            let handle = window_handle.clone();
            move |request: Request<String>| {
                let body = request.into_body();
                debug!(bytes = body.len(), "dispatching frontend message");
                runtime.spawn(handler(body, handle.clone()));
            }
        }));

        let builder = WebViewBuilder::with_attributes(attributes);
        #[cfg(not(target_os = "linux"))]
        let _webview = builder.build(&window)?;
        #[cfg(target_os = "linux")]
        let _webview = {
            use tao::platform::unix::WindowExtUnix;
            use wry::WebViewBuilderExtUnix;
            let vbox = window.default_vbox().ok_or(Error::MissingGtkContainer)?;
            builder.build_gtk(vbox)?
        };

        event_loop.run(move |event, _target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::NewEvents(StartCause::Init) => {
                    info!(title = %window.title(), "webframe started");
                }
                Event::UserEvent(RuntimeMessage::Window(request)) => match request {
                    WindowRequest::GetTitle(reply) => {
                        // The requesting task may have been dropped; that is
                        // its problem, not the event loop's.
                        let _ = reply.send(window.title());
                    }
                    WindowRequest::SetTitle(title, reply) => {
                        window.set_title(&title);
                        let _ = reply.send(TITLE_SET_OK.to_string());
                    }
                },
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("close requested, exiting");
                    *control_flow = ControlFlow::Exit;
                }
                _ => {}
            }
        })
    }
}
