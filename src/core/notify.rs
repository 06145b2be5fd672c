use tracing::{error, info, warn};

/// Severity of a transient user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Capability for surfacing transient, non-blocking alerts to the user.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Notifier that forwards alerts to the `tracing` log stream, for hosts
/// without a toast surface (the CLI).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => info!("{message}"),
            Severity::Warning => warn!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}
