//! Media content viewer: selection handling and host contract

use crate::availability::ViewerAvailability;
use crate::classifier::{ExtensionClassifier, MediaCategory};
use crate::config::{FormatSource, MediaViewConfig};
use crate::formats::{CodecFormats, ImageFormatProvider, ListedFormats};
use crate::multiplexer::{ActivePanel, DisplayMultiplexer};
use crate::policy;
use crate::sub_viewer::{Dimensions, SubViewer};
use media_fs::{FileId, MediaFile};

pub const VIEWER_TITLE: &str = "Media View";
pub const VIEWER_TOOLTIP: &str = "Displays supported multimedia files (images, videos, audio)";

/// Ordering hint among registered content viewers (lower sorts first)
pub const VIEWER_POSITION: u32 = 5;

/// Contract a host application expects from a content viewer
///
/// `is_supported` and `preference` must be free of side effects and agree
/// with what `set_selection` does for the same file.
pub trait ContentViewer {
    fn title(&self) -> &str;

    fn tooltip(&self) -> &str;

    fn position(&self) -> u32;

    /// Can this viewer display `file`?
    fn is_supported(&self, file: Option<&MediaFile>) -> bool;

    /// How much this viewer wants `file`; 0 means not preferred
    fn preference(&self, file: Option<&MediaFile>, is_supported: bool) -> u32;

    /// The user's selection changed
    fn set_selection(&mut self, file: Option<&MediaFile>);

    /// Panel the host should render
    fn component(&self) -> ActivePanel;

    /// Host-requested reset
    fn reset_component(&mut self);
}

/// Per-panel state
#[derive(Debug)]
pub struct ViewerState {
    pub availability: ViewerAvailability,
    pub display: DisplayMultiplexer,
    /// Identity of the last accepted selection, only used to skip reloads
    pub last_selected: Option<FileId>,
}

/// Media viewer driving an image sub-viewer `I` and an audio/video sub-viewer `V`
pub struct ViewerController<I, V> {
    image: I,
    video: V,
    classifier: ExtensionClassifier,
    state: ViewerState,
    dimensions: Dimensions,
}

impl<I: SubViewer, V: SubViewer> ViewerController<I, V> {
    /// Initialize both sub-viewers and query `formats` once
    pub fn new(mut image: I, mut video: V, formats: &dyn ImageFormatProvider, dimensions: Dimensions) -> Self {
        let availability = ViewerAvailability::detect(&mut image, &mut video);
        let classifier = ExtensionClassifier::new(formats);

        tracing::info!(?dimensions, "Created media viewer instance");

        Self {
            image,
            video,
            classifier,
            state: ViewerState {
                availability,
                display: DisplayMultiplexer::new(),
                last_selected: None,
            },
            dimensions,
        }
    }

    /// Build with the format source and panel size from `config`
    pub fn from_config(image: I, video: V, config: &MediaViewConfig) -> Self {
        let dimensions = config.panel.dimensions();
        match config.image.source {
            FormatSource::Codec => Self::new(image, video, &CodecFormats, dimensions),
            FormatSource::List => {
                let listed = ListedFormats(config.image.suffixes.clone());
                Self::new(image, video, &listed, dimensions)
            }
        }
    }

    /// Host panel was resized
    pub fn resize(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn classify(&self, file_name: &str) -> MediaCategory {
        self.classifier.classify(file_name)
    }

    pub fn classifier(&self) -> &ExtensionClassifier {
        &self.classifier
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn image_viewer(&self) -> &I {
        &self.image
    }

    pub fn video_viewer(&self) -> &V {
        &self.video
    }

    fn show_file(&mut self, file: &MediaFile) {
        let category = self.classifier.classify(file.name());
        let availability = self.state.availability;

        if category == MediaCategory::Image && availability.image_ready() {
            self.image.load(file, self.dimensions);
            self.state.display.show(ActivePanel::Image);
        } else if category.is_playback() && availability.video_ready() {
            self.video.load(file, self.dimensions);
            self.state.display.show(ActivePanel::Video);
        } else {
            tracing::debug!(name = file.name(), ?category, "No sub-viewer for selection");
        }
    }
}

impl<I: SubViewer, V: SubViewer> ContentViewer for ViewerController<I, V> {
    fn title(&self) -> &str {
        VIEWER_TITLE
    }

    fn tooltip(&self) -> &str {
        VIEWER_TOOLTIP
    }

    fn position(&self) -> u32 {
        VIEWER_POSITION
    }

    fn is_supported(&self, file: Option<&MediaFile>) -> bool {
        let Some(file) = file else {
            return false;
        };
        let category = self.classifier.classify(file.name());
        policy::is_supported(file, category, &self.state.availability)
    }

    fn preference(&self, file: Option<&MediaFile>, is_supported: bool) -> u32 {
        let Some(file) = file else {
            return policy::NOT_PREFERRED;
        };
        let category = self.classifier.classify(file.name());
        policy::preference(file, category, is_supported)
    }

    fn set_selection(&mut self, file: Option<&MediaFile>) {
        let Some(file) = file else {
            self.video.reset();
            return;
        };

        let id = file.id();
        if self.state.last_selected == Some(id) {
            tracing::trace!(name = file.name(), "Selection unchanged");
            return;
        }
        self.state.last_selected = Some(id);

        // Stop playback before anything else is shown
        self.video.reset();

        tracing::debug!(name = file.name(), size = file.size(), "Selection changed");
        self.show_file(file);
    }

    fn component(&self) -> ActivePanel {
        self.state.display.current()
    }

    fn reset_component(&mut self) {
        // Every selection already resets playback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_fs::NameFlag;

    #[derive(Default)]
    struct Recorder {
        ready: bool,
        loads: Vec<(String, Dimensions)>,
        resets: usize,
    }

    impl Recorder {
        fn ready() -> Self {
            Self { ready: true, ..Self::default() }
        }

        fn broken() -> Self {
            Self::default()
        }
    }

    impl SubViewer for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn initialize(&mut self) -> bool {
            self.ready
        }

        fn load(&mut self, file: &MediaFile, target: Dimensions) {
            self.loads.push((file.name().to_string(), target));
        }

        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    const DIMS: Dimensions = Dimensions::new(640, 480);

    fn formats() -> ListedFormats {
        ListedFormats(vec!["jpg".into(), "png".into(), "gif".into()])
    }

    fn viewer_with(image: Recorder, video: Recorder) -> ViewerController<Recorder, Recorder> {
        ViewerController::new(image, video, &formats(), DIMS)
    }

    fn viewer() -> ViewerController<Recorder, Recorder> {
        viewer_with(Recorder::ready(), Recorder::ready())
    }

    fn file(name: &str) -> MediaFile {
        MediaFile::new(format!("/img/vol2/Users/alice/{}", name), 4096).with_object_id(name.len() as u64)
    }

    #[test]
    fn test_metadata() {
        let v = viewer();
        assert_eq!(v.title(), "Media View");
        assert_eq!(v.tooltip(), VIEWER_TOOLTIP);
        assert_eq!(v.position(), 5);
    }

    #[test]
    fn test_initial_state() {
        let v = viewer();
        assert_eq!(v.component(), ActivePanel::Image);
        assert_eq!(v.state().last_selected, None);
        assert!(v.state().availability.image_ready());
        assert!(v.state().availability.video_ready());
    }

    #[test]
    fn test_image_selection() {
        let mut v = viewer();
        let evidence = file("evidence.jpg");

        assert_eq!(v.classify(evidence.name()), MediaCategory::Image);
        assert!(v.is_supported(Some(&evidence)));
        assert_eq!(v.preference(Some(&evidence), true), policy::PREFERRED_PRIORITY);

        v.set_selection(Some(&evidence));
        assert_eq!(v.component(), ActivePanel::Image);
        assert_eq!(v.image_viewer().loads, vec![("evidence.jpg".to_string(), DIMS)]);
        assert!(v.video_viewer().loads.is_empty());
        assert_eq!(v.video_viewer().resets, 1);
    }

    #[test]
    fn test_video_selection() {
        let mut v = viewer();
        let clip = file("clip.mp4");

        let supported = v.is_supported(Some(&clip));
        assert!(supported);
        assert_eq!(v.preference(Some(&clip), supported), 7);

        v.set_selection(Some(&clip));
        assert_eq!(v.component(), ActivePanel::Video);
        assert_eq!(v.video_viewer().loads, vec![("clip.mp4".to_string(), DIMS)]);
        assert!(v.image_viewer().loads.is_empty());
    }

    #[test]
    fn test_audio_uses_video_panel() {
        let mut v = viewer();
        v.set_selection(Some(&file("voicemail.WAV")));
        assert_eq!(v.component(), ActivePanel::Video);
        assert_eq!(v.video_viewer().loads.len(), 1);
    }

    #[test]
    fn test_deleted_video() {
        let v = viewer();
        let clip = file("clip.mp4").with_name_flag(NameFlag::Unallocated);

        let supported = v.is_supported(Some(&clip));
        assert!(supported);
        assert_eq!(v.preference(Some(&clip), supported), 0);
    }

    #[test]
    fn test_unsupported_file() {
        let pdf = file("doc.pdf");
        for (image_ok, video_ok) in [(false, false), (true, false), (false, true), (true, true)] {
            let image = if image_ok { Recorder::ready() } else { Recorder::broken() };
            let video = if video_ok { Recorder::ready() } else { Recorder::broken() };
            let v = viewer_with(image, video);

            assert_eq!(v.classify(pdf.name()), MediaCategory::Unsupported);
            assert!(!v.is_supported(Some(&pdf)));
            assert_eq!(v.preference(Some(&pdf), false), 0);
        }
    }

    #[test]
    fn test_unsupported_selection_keeps_panel() {
        let mut v = viewer();
        v.set_selection(Some(&file("clip.mp4")));
        v.set_selection(Some(&file("doc.pdf")));

        assert_eq!(v.component(), ActivePanel::Video);
        assert_eq!(v.video_viewer().loads.len(), 1);
        assert!(v.image_viewer().loads.is_empty());
        // Playback still stopped for the new selection
        assert_eq!(v.video_viewer().resets, 2);
    }

    #[test]
    fn test_empty_file_not_supported() {
        let v = viewer();
        let empty = MediaFile::new("/img/vol2/empty.jpg", 0);
        assert!(!v.is_supported(Some(&empty)));
        assert_eq!(v.preference(Some(&empty), false), 0);
    }

    #[test]
    fn test_repeated_selection_loads_once() {
        let mut v = viewer();
        let evidence = file("evidence.jpg");

        v.set_selection(Some(&evidence));
        v.set_selection(Some(&evidence));

        assert_eq!(v.image_viewer().loads.len(), 1);
        assert_eq!(v.video_viewer().resets, 1);
    }

    #[test]
    fn test_equal_but_distinct_objects_dedup() {
        let mut v = viewer();
        let first = file("clip.mp4");
        let again = file("clip.mp4");

        v.set_selection(Some(&first));
        v.set_selection(Some(&again));
        assert_eq!(v.video_viewer().loads.len(), 1);

        let other = file("clip.mp4").with_object_id(999);
        v.set_selection(Some(&other));
        assert_eq!(v.video_viewer().loads.len(), 2);
    }

    #[test]
    fn test_repeat_does_not_change_panel() {
        let mut v = viewer();
        let clip = file("clip.mp4");

        v.set_selection(Some(&clip));
        v.set_selection(Some(&file("evidence.jpg")));
        assert_eq!(v.component(), ActivePanel::Image);

        v.set_selection(Some(&clip));
        assert_eq!(v.component(), ActivePanel::Video);
        v.set_selection(Some(&clip));
        assert_eq!(v.component(), ActivePanel::Video);
        assert_eq!(v.video_viewer().loads.len(), 2);
    }

    #[test]
    fn test_null_selection_resets_playback() {
        let mut v = viewer();
        let clip = file("clip.mp4");

        v.set_selection(Some(&clip));
        v.set_selection(None);

        assert_eq!(v.video_viewer().resets, 2);
        assert_eq!(v.component(), ActivePanel::Video);
        assert_eq!(v.state().last_selected, Some(clip.id()));

        // Last selection survives, so the same file is still a no-op
        v.set_selection(Some(&clip));
        assert_eq!(v.video_viewer().loads.len(), 1);
    }

    #[test]
    fn test_null_selection_before_anything() {
        let mut v = viewer();
        v.set_selection(None);
        assert_eq!(v.component(), ActivePanel::Image);
        assert_eq!(v.video_viewer().resets, 1);
        assert!(v.image_viewer().loads.is_empty());
    }

    #[test]
    fn test_null_queries() {
        let v = viewer();
        assert!(!v.is_supported(None));
        assert_eq!(v.preference(None, true), 0);
    }

    #[test]
    fn test_not_ready_sub_viewers_never_load() {
        let mut v = viewer_with(Recorder::broken(), Recorder::broken());
        let evidence = file("evidence.jpg");
        let clip = file("clip.mp4");

        assert!(!v.is_supported(Some(&evidence)));
        assert!(!v.is_supported(Some(&clip)));

        v.set_selection(Some(&evidence));
        v.set_selection(Some(&clip));

        assert!(v.image_viewer().loads.is_empty());
        assert!(v.video_viewer().loads.is_empty());
        assert_eq!(v.component(), ActivePanel::Image);
        assert_eq!(v.state().last_selected, Some(clip.id()));
    }

    #[test]
    fn test_missing_playback_backend() {
        let mut v = viewer_with(Recorder::ready(), Recorder::broken());

        assert!(v.is_supported(Some(&file("evidence.jpg"))));
        assert!(!v.is_supported(Some(&file("song.mp3"))));

        v.set_selection(Some(&file("song.mp3")));
        assert!(v.video_viewer().loads.is_empty());
        assert_eq!(v.component(), ActivePanel::Image);
    }

    #[test]
    fn test_support_agrees_with_selection() {
        let names = [
            "a.jpg", "b.PNG", "c.gif", "d.jpeg", "e.mov", "f.3gp", "g.wma", "h.pdf", "README",
        ];
        for (image_ok, video_ok) in [(false, false), (true, false), (false, true), (true, true)] {
            for name in names {
                let image = if image_ok { Recorder::ready() } else { Recorder::broken() };
                let video = if video_ok { Recorder::ready() } else { Recorder::broken() };
                let mut v = viewer_with(image, video);
                let f = file(name);

                let supported = v.is_supported(Some(&f));
                v.set_selection(Some(&f));
                let loads = v.image_viewer().loads.len() + v.video_viewer().loads.len();
                assert_eq!(supported, loads == 1, "{} image={} video={}", name, image_ok, video_ok);
            }
        }
    }

    #[test]
    fn test_resize_used_at_load() {
        let mut v = viewer();
        let bigger = Dimensions::new(1920, 1080);
        v.resize(bigger);
        assert_eq!(v.dimensions(), bigger);

        v.set_selection(Some(&file("evidence.png")));
        assert_eq!(v.image_viewer().loads[0].1, bigger);
    }

    #[test]
    fn test_reset_component_is_noop() {
        let mut v = viewer();
        v.set_selection(Some(&file("clip.mp4")));
        v.reset_component();

        assert_eq!(v.component(), ActivePanel::Video);
        assert_eq!(v.video_viewer().resets, 1);
    }

    #[test]
    fn test_boxed_sub_viewers() {
        let image: Box<dyn SubViewer> = Box::new(Recorder::ready());
        let video: Box<dyn SubViewer> = Box::new(Recorder::ready());
        let mut v = ViewerController::new(image, video, &formats(), DIMS);

        v.set_selection(Some(&file("clip.avi")));
        assert_eq!(v.component(), ActivePanel::Video);
    }

    #[test]
    fn test_from_config_listed_formats() {
        let mut config = MediaViewConfig::default();
        config.image.source = FormatSource::List;
        config.image.suffixes = vec!["tif".into()];
        config.panel.width = 320;
        config.panel.height = 200;

        let v = ViewerController::from_config(Recorder::ready(), Recorder::ready(), &config);
        assert_eq!(v.classify("scan.TIF"), MediaCategory::Image);
        assert_eq!(v.classify("scan.jpg"), MediaCategory::Unsupported);
        assert_eq!(v.dimensions(), Dimensions::new(320, 200));
    }

    #[test]
    fn test_from_config_codec_formats() {
        let v = ViewerController::from_config(Recorder::ready(), Recorder::ready(), &MediaViewConfig::default());
        assert_eq!(v.classify("evidence.jpg"), MediaCategory::Image);
        assert_eq!(v.classify("clip.mp4"), MediaCategory::Video);
    }
}
