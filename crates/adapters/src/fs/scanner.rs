use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;
use wardrobe_application::{ApplicationError, CatalogSource};
use wardrobe_domain::{is_hidden_entry, ImageId};

/// Lists the top level of a category folder in the order the filesystem
/// returns it.
#[derive(Debug, Default)]
pub struct WalkdirCatalogSource;

impl CatalogSource for WalkdirCatalogSource {
    fn list_images(&self, folder: &Path) -> Result<Vec<ImageId>, ApplicationError> {
        if !folder.is_dir() {
            return Err(ApplicationError::Io(format!(
                "folder does not exist or is not a directory: {}",
                folder.display()
            )));
        }

        let mut images = Vec::new();
        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                // Depth zero is the folder itself; anything deeper is one bad entry.
                Err(error) if error.depth() == 0 => {
                    return Err(ApplicationError::Io(error.to_string()));
                }
                Err(error) => {
                    warn!(folder = %folder.display(), %error, "skipping unreadable entry");
                    continue;
                }
            };
            if is_hidden_entry(&entry.file_name().to_string_lossy()) {
                continue;
            }
            if entry.file_type().is_dir() {
                continue;
            }

            let Some(path) = entry.path().to_str() else {
                warn!(
                    path = %entry.path().display(),
                    "skipping entry whose name is not valid UTF-8"
                );
                continue;
            };
            images.push(ImageId::new(path));
        }

        Ok(images)
    }
}
