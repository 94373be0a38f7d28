use std::future::Future;
use std::ops::Index;

use crate::{AssetLoadError, Size};

/// A resolved image with known intrinsic pixel dimensions.
///
/// `P` is the host's pixel handle (a decoded buffer, a texture id, ...). The engine never looks
/// inside it; it only hands it back to the [`crate::Surface`] when drawing.
#[derive(Clone, Debug)]
pub struct ImageAsset<P> {
    pub identifier: String,
    pub pixels: P,
    pub intrinsic_width: u32,
    pub intrinsic_height: u32,
}

impl<P> ImageAsset<P> {
    pub fn new(
        identifier: impl Into<String>,
        pixels: P,
        intrinsic_width: u32,
        intrinsic_height: u32,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            pixels,
            intrinsic_width,
            intrinsic_height,
        }
    }

    pub fn intrinsic_size(&self) -> Size {
        Size {
            width: self.intrinsic_width as f64,
            height: self.intrinsic_height as f64,
        }
    }
}

/// Loaded assets in display order, index-aligned with the identifier list they came from.
#[derive(Clone, Debug)]
pub struct AssetSet<P> {
    assets: Vec<ImageAsset<P>>,
}

impl<P> Default for AssetSet<P> {
    fn default() -> Self {
        Self { assets: Vec::new() }
    }
}

impl<P> AssetSet<P> {
    pub fn new(assets: Vec<ImageAsset<P>>) -> Self {
        Self { assets }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageAsset<P>> {
        self.assets.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageAsset<P>> {
        self.assets.iter()
    }

    pub fn as_slice(&self) -> &[ImageAsset<P>] {
        &self.assets
    }

    /// `(identifier, width, height)` per asset, ignoring pixel handles.
    pub fn layout_key(&self) -> Vec<(&str, u32, u32)> {
        self.assets
            .iter()
            .map(|a| (a.identifier.as_str(), a.intrinsic_width, a.intrinsic_height))
            .collect()
    }

    pub fn into_vec(self) -> Vec<ImageAsset<P>> {
        self.assets
    }
}

impl<P> Index<usize> for AssetSet<P> {
    type Output = ImageAsset<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.assets[index]
    }
}

impl<'a, P> IntoIterator for &'a AssetSet<P> {
    type Item = &'a ImageAsset<P>;
    type IntoIter = std::slice::Iter<'a, ImageAsset<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

/// Host-provided primitive that turns an identifier into a loaded image.
///
/// Implementations decide what an identifier means (a path, a URL, a key into an embedded
/// bundle). A failed resolution must return an [`AssetLoadError`] naming the identifier.
pub trait AssetSource {
    type Pixels;

    fn resolve(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<ImageAsset<Self::Pixels>, AssetLoadError>>;
}
