use std::future::Future;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use image_strip::{AssetLoadError, AssetSource, ImageAsset};

/// Resolves identifiers as image files and decodes them with the `image` crate.
///
/// With a root directory, identifiers are treated like web asset paths: a leading `/` is
/// stripped and the rest is joined onto the root (`/slider/1.jpg` -> `<root>/slider/1.jpg`).
/// Without a root, identifiers are used as paths unchanged.
#[derive(Clone, Debug, Default)]
pub struct FsSource {
    root: Option<PathBuf>,
}

impl FsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn path_for(&self, identifier: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(identifier.trim_start_matches('/')),
            None => PathBuf::from(identifier),
        }
    }
}

impl AssetSource for FsSource {
    type Pixels = RgbaImage;

    fn resolve(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<ImageAsset<RgbaImage>, AssetLoadError>> {
        let path = self.path_for(identifier);
        let identifier = identifier.to_owned();
        async move {
            let bytes = tokio::fs::read(&path).await.map_err(|e| {
                awarn!(path = %path.display(), error = %e, "FsSource: read failed");
                AssetLoadError::new(&identifier, e.to_string())
            })?;
            let decoded = image::load_from_memory(&bytes).map_err(|e| {
                awarn!(path = %path.display(), error = %e, "FsSource: decode failed");
                AssetLoadError::new(&identifier, e.to_string())
            })?;

            let rgba = decoded.to_rgba8();
            let (width, height) = rgba.dimensions();
            adebug!(path = %path.display(), width, height, "FsSource: loaded");
            Ok(ImageAsset::new(identifier, rgba, width, height))
        }
    }
}
