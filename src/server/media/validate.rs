//! Upload validators.
//!
//! Validators only inspect their input. Callers run them before touching any stored
//! file so that a rejected upload leaves the previous file in place.

use std::io::Cursor;

use image::io::Reader as ImageReader;

use crate::server::error::validation::ValidationError;

/// Side length in pixels an icon may not exceed in both directions.
pub const ICON_MAX_DIMENSION: u32 = 70;

/// Accepted extensions, compared verbatim including the leading dot.
pub const ALLOWED_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".svg", ".png", ".gif"];

/// Rejects icons larger than 70x70.
///
/// An icon only fails when its width *and* its height exceed the limit, so a 60x80
/// image is accepted. This mirrors the behaviour existing clients were built against
/// even though a limit on either side was probably intended.
///
/// # Returns
/// - `Ok(())` - Icon is within the limit
/// - `Err(ValidationError::IconTooLarge)` - Both sides exceed the limit
/// - `Err(ValidationError::UnreadableImage)` - The bytes are not a decodable raster image
pub fn validate_icon_size(bytes: &[u8]) -> Result<(), ValidationError> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|_| ValidationError::UnreadableImage)?
        .into_dimensions()
        .map_err(|_| ValidationError::UnreadableImage)?;

    if width > ICON_MAX_DIMENSION && height > ICON_MAX_DIMENSION {
        return Err(ValidationError::IconTooLarge { width, height });
    }

    Ok(())
}

/// Rejects filenames whose extension is not in [`ALLOWED_EXTENSIONS`].
///
/// The comparison is case-sensitive: `photo.PNG` is rejected.
pub fn validate_file_extension(filename: &str) -> Result<(), ValidationError> {
    let extension = file_extension(filename);

    if !ALLOWED_EXTENSIONS.contains(&extension) {
        return Err(ValidationError::UnsupportedExtension);
    }

    Ok(())
}

/// Extension of the last path segment including the dot, or `""`.
///
/// Leading dots belong to the name, so `.png` has no extension.
fn file_extension(filename: &str) -> &str {
    let basename = filename.rsplit(['/', '\\']).next().unwrap_or_default();
    let stem_start = basename.len() - basename.trim_start_matches('.').len();

    match basename[stem_start..].rfind('.') {
        Some(dot) => &basename[stem_start + dot..],
        None => "",
    }
}
