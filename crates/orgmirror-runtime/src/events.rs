use serde::Serialize;
use serde_json::Value;

/// Outcome notification for one request, mirroring what the
/// presentation layer renders.
///
/// `request` is the caller's input echoed back for correlation, always
/// scrubbed of credentials before it gets here.
#[derive(Debug, Clone, Serialize)]
pub struct StatusEvent {
    pub status: bool,
    pub message: String,
    pub response: Value,
    pub request: Value,
}

impl StatusEvent {
    pub fn success(message: impl Into<String>, response: Value, request: Value) -> Self {
        Self {
            status: true,
            message: message.into(),
            response,
            request,
        }
    }

    pub fn failure(message: impl Into<String>, response: Value, request: Value) -> Self {
        Self {
            status: false,
            message: message.into(),
            response,
            request,
        }
    }
}

/// Category of a console log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogChannel {
    Info,
    Warning,
    Error,
}

/// Free-form log line routed to the console surface.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub sender: String,
    pub channel: LogChannel,
    pub message: String,
}

impl LogEvent {
    pub fn new(sender: impl Into<String>, channel: LogChannel, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            channel,
            message: message.into(),
        }
    }
}

/// Receiver for status and log notifications.
///
/// Stands in for the presentation layer (windows, console, a log file).
/// Implementations must not assume events arrive in any order beyond
/// per-request sequencing.
pub trait EventSink {
    fn status(&self, event: StatusEvent);
    fn log(&self, event: LogEvent);
}

/// Sink that drops everything. Useful for headless callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn status(&self, _event: StatusEvent) {}
    fn log(&self, _event: LogEvent) {}
}
