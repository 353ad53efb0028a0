//! Static export of the login page.

use anyhow::{Context, Result};
use std::path::Path;

use crate::web::handlers::render_login_screen;

/// Writes the rendered login page to `path`, creating missing parent
/// directories.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn write_login_screen(path: &Path) -> Result<()> {
    let html = render_login_screen()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Login page written to {}", path.display());
    Ok(())
}
