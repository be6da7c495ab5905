//! Sub-viewer readiness

use crate::sub_viewer::SubViewer;

/// Which sub-viewers initialized successfully
///
/// Detected once when the viewer is built and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerAvailability {
    image_ready: bool,
    video_ready: bool,
}

impl ViewerAvailability {
    pub const fn new(image_ready: bool, video_ready: bool) -> Self {
        Self {
            image_ready,
            video_ready,
        }
    }

    /// Initialize both sub-viewers and record the outcome
    pub fn detect(image: &mut dyn SubViewer, video: &mut dyn SubViewer) -> Self {
        let availability = Self::new(Self::init_one(image), Self::init_one(video));
        tracing::info!(
            image = availability.image_ready,
            video = availability.video_ready,
            "Sub-viewer availability"
        );
        availability
    }

    fn init_one(viewer: &mut dyn SubViewer) -> bool {
        let ready = viewer.initialize();
        if !ready {
            tracing::warn!("{} failed to initialize, its formats will not be offered", viewer.name());
        }
        ready
    }

    pub fn image_ready(&self) -> bool {
        self.image_ready
    }

    pub fn video_ready(&self) -> bool {
        self.video_ready
    }
}
