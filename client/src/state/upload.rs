//! Upload submitter state: one file, one request, one transient notice.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::error::ApiError;

/// How long a notice stays on screen.
pub const NOTICE_DISMISS_MS: u32 = 3000;

/// Outcome of one upload request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Success,
    Rejected,
    TransportError,
}

impl UploadOutcome {
    /// Classify an upload response. Only transport failures count as errors
    /// of the request itself; any status from the server is a rejection.
    pub fn from_result<T>(result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(ApiError::Transport(_)) => Self::TransportError,
            Err(_) => Self::Rejected,
        }
    }

    pub fn notice(self) -> &'static str {
        match self {
            Self::Success => "Upload successful!",
            Self::Rejected => "Upload failed.",
            Self::TransportError => "Error uploading file.",
        }
    }
}

/// Check the file input holds exactly one file.
///
/// # Errors
///
/// Returns the message to show when zero or several files are selected.
pub fn validate_selection(count: u32) -> Result<(), &'static str> {
    match count {
        0 => Err("Please select a file first!"),
        1 => Ok(()),
        _ => Err("Select a single file."),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub uploading: bool,
    pub notice: Option<String>,
    notice_seq: u64,
}

impl UploadState {
    /// Start an upload. Returns `false` if one is already running.
    pub fn begin(&mut self) -> bool {
        if self.uploading {
            return false;
        }
        self.uploading = true;
        true
    }

    /// Record the outcome; returns the notice ticket for auto-dismissal.
    pub fn finish(&mut self, outcome: UploadOutcome) -> u64 {
        self.uploading = false;
        self.show_notice(outcome.notice())
    }

    /// Show a notice; returns its ticket.
    pub fn show_notice(&mut self, text: &str) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(text.to_owned());
        self.notice_seq
    }

    /// Clear the notice only if no newer notice replaced it.
    pub fn dismiss(&mut self, ticket: u64) {
        if ticket == self.notice_seq {
            self.notice = None;
        }
    }
}
