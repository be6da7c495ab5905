//! File-name based media classification

use crate::formats::ImageFormatProvider;
use std::collections::BTreeSet;

/// Video container suffixes handled by the playback renderer
pub const VIDEO_EXTENSIONS: &[&str] = &[
    ".mov", ".m4v", ".flv", ".mp4", ".3gp", ".avi", ".mpg", ".mpeg", ".wmv",
];

/// Audio suffixes handled by the playback renderer
pub const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".wma"];

/// Media category derived from a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCategory {
    Image,
    Video,
    Audio,
    Unsupported,
}

impl MediaCategory {
    /// Rendered by the audio/video sub-viewer?
    pub fn is_playback(self) -> bool {
        matches!(self, MediaCategory::Video | MediaCategory::Audio)
    }
}

/// Set of lowercase, dot-prefixed suffixes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    /// Build a set, adding the leading dot where missing and lower-casing
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = suffixes
            .into_iter()
            .map(|s| {
                let s = s.as_ref().to_lowercase();
                if s.starts_with('.') {
                    s
                } else {
                    format!(".{}", s)
                }
            })
            .collect();
        Self(set)
    }

    /// Exact membership of an already extracted suffix
    pub fn contains(&self, suffix: &str) -> bool {
        self.0.contains(suffix)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Suffix of `name` from the last `.` inclusive, lower-cased
///
/// Returns an empty string when the name has no dot.
pub fn suffix_of(name: &str) -> String {
    name.rfind('.')
        .map(|start| name[start..].to_lowercase())
        .unwrap_or_default()
}

/// Maps file names to a [`MediaCategory`]
#[derive(Debug, Clone)]
pub struct ExtensionClassifier {
    image: ExtensionSet,
    video: ExtensionSet,
    audio: ExtensionSet,
}

impl ExtensionClassifier {
    /// Query `provider` once for image suffixes; video and audio are fixed
    pub fn new(provider: &dyn ImageFormatProvider) -> Self {
        let image = ExtensionSet::new(provider.reader_suffixes());
        tracing::info!(count = image.len(), "Supported image formats by image renderer");
        for suffix in image.iter() {
            tracing::debug!("suffix: {}", suffix);
        }

        Self {
            image,
            video: ExtensionSet::new(VIDEO_EXTENSIONS),
            audio: ExtensionSet::new(AUDIO_EXTENSIONS),
        }
    }

    pub fn classify(&self, file_name: &str) -> MediaCategory {
        let suffix = suffix_of(file_name);
        if self.image.contains(&suffix) {
            MediaCategory::Image
        } else if self.video.contains(&suffix) {
            MediaCategory::Video
        } else if self.audio.contains(&suffix) {
            MediaCategory::Audio
        } else {
            MediaCategory::Unsupported
        }
    }

    pub fn image_extensions(&self) -> &ExtensionSet {
        &self.image
    }
}
