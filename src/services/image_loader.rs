use crate::error::ReportError;
use crate::models::ResizeConfig;
use color_tally::PixelGrid;
use image::{imageops, ImageReader, RgbImage};
use std::path::Path;

/// Decode an image file and drop everything but the RGB channels.
///
/// The format is sniffed from the file content first, so a PNG saved
/// as `.jpg` still decodes; the extension is only a fallback. Alpha is
/// discarded, not composited: a transparent red pixel stays red.
pub fn load_rgb(path: &Path) -> Result<RgbImage, ReportError> {
    let open_error = |source| ReportError::Open {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_error)?
        .with_guessed_format()
        .map_err(open_error)?;

    let image = reader.decode().map_err(|source| ReportError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Decoded image"
    );

    if image.width() == 0 || image.height() == 0 {
        return Err(ReportError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    Ok(image.to_rgb8())
}

/// Resample to the configured grid, ignoring aspect ratio.
pub fn downscale(image: &RgbImage, resize: &ResizeConfig) -> Result<PixelGrid, ReportError> {
    tracing::debug!(
        from_width = image.width(),
        from_height = image.height(),
        to_width = resize.width,
        to_height = resize.height,
        filter = ?resize.filter,
        "Resizing"
    );

    let resized = imageops::resize(image, resize.width, resize.height, resize.filter.into());
    let (width, height) = resized.dimensions();

    Ok(PixelGrid::from_raw_rgb(resized.as_raw(), width, height)?)
}
