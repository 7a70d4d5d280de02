use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tao::event_loop::EventLoopProxy;
use tokio::sync::oneshot;

use crate::error::{Error, Result};
use crate::events::{RuntimeMessage, WindowRequest};

/// Reply the shell sends once a title mutation has been applied.
pub const TITLE_SET_OK: &str = "Ok";

/// Read and write access to the window title, awaitable from handler tasks.
///
/// `WindowHandle` is the live implementation; handlers written against this
/// trait can be driven by a scripted double in tests.
#[async_trait]
pub trait TitleAccess: Send + Sync {
    /// Set the window title. Resolves to the shell's outcome string,
    /// [`TITLE_SET_OK`] on success.
    async fn set_title(&self, new_title: &str) -> Result<String>;

    /// Read the current window title.
    async fn get_title(&self) -> Result<String>;
}

/// Cloneable capability for issuing window requests from handler tasks.
///
/// Wraps the event-loop proxy; every operation is a send-then-await round
/// trip against the event loop thread, which owns the actual window.
#[derive(Clone)]
pub struct WindowHandle {
    proxy: Arc<Mutex<EventLoopProxy<RuntimeMessage>>>,
}

impl WindowHandle {
    pub(crate) fn new(proxy: EventLoopProxy<RuntimeMessage>) -> Self {
        Self {
            proxy: Arc::new(Mutex::new(proxy)),
        }
    }

    async fn request<F>(&self, build: F) -> Result<String>
    where
        F: FnOnce(oneshot::Sender<String>) -> WindowRequest + Send,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        {
            let proxy = self.proxy.lock().unwrap();
            proxy
                .send_event(RuntimeMessage::Window(build(reply_tx)))
                .map_err(|_| Error::EventLoopClosed)?;
        }
        reply_rx.await.map_err(|_| Error::ReplyDropped)
    }
}

#[async_trait]
impl TitleAccess for WindowHandle {
    async fn set_title(&self, new_title: &str) -> Result<String> {
        self.request(|reply| WindowRequest::SetTitle(new_title.to_owned(), reply))
            .await
    }

    async fn get_title(&self) -> Result<String> {
        self.request(WindowRequest::GetTitle).await
    }
}
