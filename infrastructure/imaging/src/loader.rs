use std::io::Write;
use std::path::Path;

use image::ImageReader;
use tempfile::NamedTempFile;

use business::domain::product::errors::LookupError;
use business::domain::product::value_objects::{PixelBuffer, ProductImage};

/// Decodes the encoded image at `path` into a `ProductImage` pointing at it.
pub fn load_product_image(path: &Path) -> Result<ProductImage, LookupError> {
    let decoded = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|_| LookupError::ImageInvalid)?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = PixelBuffer::new(width, height, rgb.into_raw())?;

    Ok(ProductImage::new(pixels, path))
}

/// An uploaded photo written to a temporary file for the duration of one
/// lookup. The file is removed when this value is dropped.
pub struct StagedImage {
    _file: NamedTempFile,
    image: ProductImage,
}

impl StagedImage {
    pub fn stage(dir: &Path, bytes: &[u8]) -> Result<Self, LookupError> {
        if bytes.is_empty() {
            return Err(LookupError::ImageEmpty);
        }

        let mut file = tempfile::Builder::new()
            .prefix("lookup-")
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        let image = load_product_image(file.path())?;
        Ok(Self { _file: file, image })
    }

    pub fn image(&self) -> &ProductImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;

    fn red_png() -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbImage::from_pixel(3, 2, Rgb([255, 0, 0]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn should_load_pixels_and_keep_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        std::fs::write(&path, red_png()).unwrap();

        let image = load_product_image(&path).unwrap();

        assert_eq!(image.path(), path.as_path());
        assert_eq!(image.pixels().width(), 3);
        assert_eq!(image.pixels().height(), 2);
        assert_eq!(&image.pixels().as_rgb()[..3], &[255, 0, 0]);
    }

    #[test]
    fn should_reject_bytes_that_are_not_an_image() {
        let dir = tempfile::tempdir().unwrap();

        let result = StagedImage::stage(dir.path(), b"definitely not a png");

        assert!(matches!(result.err().unwrap(), LookupError::ImageInvalid));
    }

    #[test]
    fn should_reject_empty_upload() {
        let dir = tempfile::tempdir().unwrap();

        let result = StagedImage::stage(dir.path(), &[]);

        assert!(matches!(result.err().unwrap(), LookupError::ImageEmpty));
    }

    #[test]
    fn should_remove_staged_file_when_dropped() {
        let dir = tempfile::tempdir().unwrap();

        let staged = StagedImage::stage(dir.path(), &red_png()).unwrap();
        let path = staged.image().path().to_path_buf();
        assert!(path.exists());
        assert!(path.starts_with(dir.path()));

        drop(staged);

        assert!(!path.exists());
    }
}
