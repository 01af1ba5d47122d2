pub mod audio;
pub mod fs;
pub mod presenters;
pub mod random;

pub use audio::{RodioAudioCue, SilentAudioCue};
pub use fs::WalkdirCatalogSource;
pub use presenters::{present_catalog, present_outfit};
pub use random::StdRandomSource;

use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use wardrobe_application::{ApplicationError, ImageRenderer};
use wardrobe_domain::{DisplaySize, ImageId, RenderedImage};

/// Decodes any format the `image` crate recognises and stretches it to the
/// display size.
#[derive(Debug, Default)]
pub struct ImageCrateRenderer;

impl ImageRenderer for ImageCrateRenderer {
    fn render_image(
        &self,
        image: &ImageId,
        size: DisplaySize,
    ) -> Result<RenderedImage, ApplicationError> {
        if size.width == 0 || size.height == 0 {
            return Err(ApplicationError::InvalidInput(format!(
                "display size must not be empty, got {}x{}",
                size.width, size.height
            )));
        }

        let decoded = ImageReader::open(image.as_path())
            .map_err(|error| ApplicationError::Io(format!("{image}: {error}")))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Decode(format!("{image}: {error}")))?
            .decode()
            .map_err(|error| ApplicationError::Decode(format!("{image}: {error}")))?;

        let fitted = decoded
            .resize_exact(size.width, size.height, FilterType::Lanczos3)
            .to_rgb8();
        let pixels = fitted
            .pixels()
            .map(|pixel| {
                let [r, g, b] = pixel.0;
                (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
            })
            .collect();

        Ok(RenderedImage {
            width: fitted.width(),
            height: fitted.height(),
            pixels,
        })
    }
}
