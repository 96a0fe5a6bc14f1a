//! PNG export of finished canvases

use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_PREFIX};
use crate::io::error::{AlponaError, Result, file_system_error};
use crate::render::RasterSurface;
use std::path::{Path, PathBuf};

/// File name of the image with the given id, e.g. `image_7.png`
pub fn image_file_name(id: u64) -> String {
    format!("{OUTPUT_PREFIX}{id}.{OUTPUT_EXTENSION}")
}

/// Full output path of the image with the given id
pub fn image_path(output_dir: &Path, id: u64) -> PathBuf {
    output_dir.join(image_file_name(id))
}

/// Save a canvas as an RGBA PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(surface: &RasterSurface, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    surface
        .image()
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| AlponaError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
