use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tosquare_pdc::{DrawCommandImage, parse_image, read_image};

/// Source of icon images.
pub trait ImageProvider {
    /// Returns the image for `id`, or `None` if it cannot be loaded.
    fn load(&self, id: &str) -> Option<DrawCommandImage>;
}

/// Loads `.pdc` files relative to a root directory.
///
/// Absolute identifiers are used as-is.
#[derive(Debug, Clone)]
pub struct FileImageProvider {
    root: PathBuf,
}

impl FileImageProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn try_load(&self, id: &str) -> Result<DrawCommandImage> {
        let path = self.root.join(id);
        let file = File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
        let image = read_image(BufReader::new(file)).with_context(|| format!("failed to decode {}", path.display()))?;
        Ok(image)
    }
}

impl ImageProvider for FileImageProvider {
    fn load(&self, id: &str) -> Option<DrawCommandImage> {
        match self.try_load(id) {
            Ok(image) => {
                log::debug!(
                    "loaded image {id}: {}x{}, {} command(s)",
                    image.bounds_size().w,
                    image.bounds_size().h,
                    image.commands().len()
                );
                Some(image)
            }
            Err(err) => {
                log::warn!("image {id} unavailable: {err:#}");
                None
            }
        }
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Decoded(DrawCommandImage),
    Encoded(Vec<u8>),
}

/// In-memory images, either decoded or as raw `.pdc` bytes.
///
/// Encoded entries are decoded on every `load`.
#[derive(Debug, Clone, Default)]
pub struct StaticImageProvider {
    entries: HashMap<String, Entry>,
}

impl StaticImageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, id: impl Into<String>, image: DrawCommandImage) -> Self {
        self.entries.insert(id.into(), Entry::Decoded(image));
        self
    }

    pub fn with_bytes(mut self, id: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(id.into(), Entry::Encoded(bytes.into()));
        self
    }
}

impl ImageProvider for StaticImageProvider {
    fn load(&self, id: &str) -> Option<DrawCommandImage> {
        match self.entries.get(id) {
            Some(Entry::Decoded(image)) => Some(image.clone()),
            Some(Entry::Encoded(bytes)) => match parse_image(bytes) {
                Ok(image) => Some(image),
                Err(err) => {
                    log::warn!("image {id} unavailable: {err}");
                    None
                }
            },
            None => {
                log::warn!("image {id} unavailable: unknown identifier");
                None
            }
        }
    }
}
