//! Selection driver: feeds files to a media viewer and reports the outcome

use crate::cli::Cli;
use anyhow::Result;
use media_core::{
    ActivePanel, ContentViewer, Dimensions, ImageFrame, ImagePanel, MediaCategory, MediaViewConfig,
    SubViewer, ViewerController,
};
use media_fs::{MediaFile, NameFlag};
use std::time::Duration;

const DECODE_WAIT: Duration = Duration::from_secs(10);

/// Audio/video sub-viewer without a playback backend
///
/// Records what would be played. `initialize` fails when playback is
/// disabled, which is how a missing codec backend looks to the viewer.
pub struct DryRunPlayer {
    enabled: bool,
    playing: Option<String>,
}

impl DryRunPlayer {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            playing: None,
        }
    }

    pub fn playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }
}

impl SubViewer for DryRunPlayer {
    fn name(&self) -> &str {
        "playback panel"
    }

    fn initialize(&mut self) -> bool {
        self.enabled
    }

    fn load(&mut self, file: &MediaFile, target: Dimensions) {
        tracing::info!(name = file.name(), ?target, "Would start playback");
        self.playing = Some(file.name().to_string());
    }

    fn reset(&mut self) {
        if let Some(name) = self.playing.take() {
            tracing::debug!(name = %name, "Playback stopped");
        }
    }
}

type MediaViewer = ViewerController<ImagePanel, DryRunPlayer>;

/// Outcome of selecting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub category: MediaCategory,
    pub supported: bool,
    pub preference: u32,
    pub panel: ActivePanel,
    pub rendered: String,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<32} {:<12} supported={:<5} preference={} panel={:<6} {}",
            self.name,
            format!("{:?}", self.category).to_lowercase(),
            self.supported,
            self.preference,
            format!("{:?}", self.panel).to_lowercase(),
            self.rendered
        )
    }
}

/// Ask the viewer about `file`, select it and describe what is on screen
pub fn inspect(viewer: &mut MediaViewer, file: &MediaFile) -> Report {
    let category = viewer.classify(file.name());
    let supported = viewer.is_supported(Some(file));
    let preference = viewer.preference(Some(file), supported);

    viewer.set_selection(Some(file));
    let panel = viewer.component();

    let rendered = match panel {
        ActivePanel::Image => match viewer.image_viewer().wait_for_frame(DECODE_WAIT) {
            ImageFrame::Decoded(image) if image.path == *file.path() => {
                format!("decoded {}x{}", image.width, image.height)
            }
            ImageFrame::Placeholder { path, reason } if path == *file.path() => {
                format!("placeholder ({})", reason)
            }
            ImageFrame::Loading(_) => "still decoding".to_string(),
            _ => "unchanged".to_string(),
        },
        ActivePanel::Video => match viewer.video_viewer().playing() {
            Some(name) if name == file.name() => format!("playing {}", name),
            _ => "unchanged".to_string(),
        },
    };

    Report {
        name: file.name().to_string(),
        category,
        supported,
        preference,
        panel,
        rendered,
    }
}

/// Run the selection sequence given on the command line
pub fn run(cli: &Cli, mut config: MediaViewConfig) -> Result<()> {
    if let Some(width) = cli.width {
        config.panel.width = width;
    }
    if let Some(height) = cli.height {
        config.panel.height = height;
    }

    let mut viewer = ViewerController::from_config(ImagePanel::new(), DryRunPlayer::new(!cli.no_video), &config);

    for path in &cli.files {
        let file = match MediaFile::from_path(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                eprintln!("{}: {}", path.display(), e);
                continue;
            }
        };
        let file = if cli.deleted {
            file.with_name_flag(NameFlag::Unallocated)
        } else {
            file
        };

        println!("{}", inspect(&mut viewer, &file));
    }

    viewer.set_selection(None);
    tracing::info!("media_view finished");
    Ok(())
}
