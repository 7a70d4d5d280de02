use tokio::sync::oneshot;

/// A request for the window owned by the event loop thread. Each variant
/// carries the channel the shell replies on.
pub enum WindowRequest {
    GetTitle(oneshot::Sender<String>),
    SetTitle(String, oneshot::Sender<String>),
}

/// User events delivered to the shell's event loop.
pub enum RuntimeMessage {
    Window(WindowRequest),
}
