//! Support and preference decisions
//!
//! The host asks two separate questions of every registered viewer: can you
//! show this file, and how much do you want to. The highest preference wins.

use crate::availability::ViewerAvailability;
use crate::classifier::MediaCategory;
use media_fs::MediaFile;

/// Preference returned for any supported file this viewer wants to show.
/// Other viewers compare their own constants against it.
pub const PREFERRED_PRIORITY: u32 = 7;

/// Not preferred
pub const NOT_PREFERRED: u32 = 0;

pub fn is_supported(file: &MediaFile, category: MediaCategory, availability: &ViewerAvailability) -> bool {
    if file.size() == 0 {
        return false;
    }

    match category {
        MediaCategory::Image => availability.image_ready(),
        MediaCategory::Video | MediaCategory::Audio => availability.video_ready(),
        MediaCategory::Unsupported => false,
    }
}

/// Frame extraction from deleted video is unreliable, so deleted videos are
/// left to other viewers. Deleted images and audio keep their priority.
pub fn preference(file: &MediaFile, category: MediaCategory, is_supported: bool) -> u32 {
    if !is_supported {
        return NOT_PREFERRED;
    }

    if category == MediaCategory::Video && file.is_unallocated() {
        NOT_PREFERRED
    } else {
        PREFERRED_PRIORITY
    }
}
