//! Error types for Comparador.
//!
//! Every error here ends the current attempt only. The controller turns them
//! into a failed render or a one-shot notice and the next trigger starts fresh.

use thiserror::Error;

/// Errors from a single exchange with the diff service.
#[derive(Debug, Error)]
pub enum DiffServiceError {
    #[error("Falha na comunicação com o serviço: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Erro na API: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Resposta inválida do serviço: {0}")]
    Malformed(String),
}

impl DiffServiceError {
    pub fn status(status: reqwest::StatusCode) -> Self {
        DiffServiceError::Status {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string()),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DiffServiceError::Malformed(_))
    }
}

/// Errors writing to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("área de transferência indisponível ({0})")]
    Unavailable(String),

    #[error("escrita recusada ({0})")]
    Write(String),
}

/// Errors reading or writing persisted preferences.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Could not determine a data directory for preferences")]
    NoDataDir,

    #[error("Preferences IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preferences file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
