use std::path::Path;

use crate::series::ImageInfo;

#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("image {path} has zero width or height")]
    Empty { path: String },
}

/// Read the pixel dimensions of an image file without decoding its pixels.
pub fn probe_image(path: impl AsRef<Path>) -> Result<ImageInfo, ProbeError> {
    let path = path.as_ref();
    let (width, height) = image::image_dimensions(path)?;
    if width == 0 || height == 0 {
        return Err(ProbeError::Empty {
            path: path.display().to_string(),
        });
    }
    log::debug!("{}: {}x{}", path.display(), width, height);
    Ok(ImageInfo::new(width, height).with_source(path.to_string_lossy()))
}
