use log::warn;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient user-facing message surfaced by the host as a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Cloneable notification sender shared by the panel's controllers.
///
/// Dropping the receiver silently discards further notifications; the
/// panel must stay interactive even when nothing is listening.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn success<S: Into<String>>(&self, message: S) {
        self.send(NotificationKind::Success, message.into());
    }

    /// Error notifications are also logged.
    pub fn error<S: Into<String>>(&self, message: S) {
        let message = message.into();
        warn!("Notifying user of failure: {message}");
        self.send(NotificationKind::Error, message);
    }

    fn send(&self, kind: NotificationKind, message: String) {
        let _ = self.sender.send(Notification { kind, message });
    }
}
