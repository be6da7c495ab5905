//! Sub-viewer contract shared by the image and audio/video renderers

use media_fs::MediaFile;

/// Panel size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A renderer the media viewer delegates to
///
/// Implementations own their failure reporting: `load` never returns an
/// error, a renderer that cannot show the file displays a placeholder
/// instead.
pub trait SubViewer {
    /// Human-readable name for logs
    fn name(&self) -> &str;

    /// Prepare the backend. Called once; `false` means unusable.
    fn initialize(&mut self) -> bool;

    /// Start showing `file` scaled to `target`. Must not block.
    fn load(&mut self, file: &MediaFile, target: Dimensions);

    /// Stop any playback or decode and release transient resources
    fn reset(&mut self);
}

impl<T: SubViewer + ?Sized> SubViewer for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn initialize(&mut self) -> bool {
        (**self).initialize()
    }

    fn load(&mut self, file: &MediaFile, target: Dimensions) {
        (**self).load(file, target)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
