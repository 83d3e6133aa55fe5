use crate::error::{GatewayError, Result};

/// Hand a saved media file to the platform's default viewer. The viewer
/// decides how to decode it; callers treat a launch failure as non-fatal
/// since the file is already on disk.
pub fn show(path: &str) -> Result<()> {
    open::that(path)
        .map_err(|e| GatewayError::IoError(format!("failed to open {} in viewer: {}", path, e)))
}
