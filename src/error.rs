use thiserror::Error;

/// Errors raised at the edges of the painting core.
///
/// Stamp rendering itself is total over finite input, so nothing here is
/// produced on the per-frame drawing path.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("unknown stamp '{0}' (expected one of: {list})", list = crate::stamp::Stamp::id_list())]
    UnknownStamp(String),

    #[error("invalid color '{0}' (expected #rgb, #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config data: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to export canvas: {0}")]
    Export(#[from] image::ImageError),

    #[error("Failed to start download: {0}")]
    Download(String),

    #[error("Canvas has no pixels to export")]
    EmptyCanvas,
}

pub type Result<T> = std::result::Result<T, PaintError>;
