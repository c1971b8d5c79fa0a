// src/dispatch.rs
//
// Action Dispatcher. Fire-and-forget: open a URL in a new browser context
// and move on. Failures are logged and handed back for the status line;
// nothing is retried.

use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    OpenResume(String),
    OpenWhatsApp(String),
}

impl Action {
    pub fn url(&self) -> &str {
        match self {
            Action::OpenResume(u) | Action::OpenWhatsApp(u) => u,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::OpenResume(_) => write!(f, "resume"),
            Action::OpenWhatsApp(_) => write!(f, "WhatsApp chat"),
        }
    }
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("Opening links is not supported on this platform")]
    Unsupported,
}

/// Something that can open a URL in a new tab/window.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError>;
}

/// Open `action`'s URL through `opener`.
pub fn dispatch(opener: &mut dyn LinkOpener, action: &Action) -> Result<(), OpenError> {
    match opener.open(action.url()) {
        Ok(()) => {
            logf!("Open: {} → {}", action, action.url());
            Ok(())
        }
        Err(e) => {
            loge!("Open: {} failed: {}", action, e);
            Err(e)
        }
    }
}

/// Hands the URL to the platform's default handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        let program = opener_program().ok_or(OpenError::Unsupported)?;
        // One argv entry, no shell: `&` and `|` stay literal.
        std::process::Command::new(program)
            .arg(url)
            .spawn()
            .map(|_| ())
            .map_err(|source| OpenError::Spawn { program, source })
    }
}

/// The platform's "open this with the default handler" program.
fn opener_program() -> Option<&'static str> {
    if cfg!(target_os = "windows") {
        Some("explorer")
    } else if cfg!(target_os = "macos") {
        Some("open")
    } else if cfg!(target_os = "linux") {
        Some("xdg-open")
    } else {
        None
    }
}

/// Keeps every URL instead of opening it. Dry runs and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        self.opened.push(s!(url));
        Ok(())
    }
}
