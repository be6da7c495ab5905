//! Image renderer backed by the `image` crate
//!
//! Decoding happens on a dedicated worker thread so `load` returns
//! immediately. Every `load` and `reset` bumps a generation counter; results
//! from older generations are dropped.

use crate::formats::{CodecFormats, ImageFormatProvider};
use crate::sub_viewer::{Dimensions, SubViewer};
use crate::MediaError;
use image::{GenericImageView, ImageReader};
use media_fs::{MediaFile, UniversalPath};
use parking_lot::{Condvar, Mutex};
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use xxhash_rust::xxh3::xxh3_64;

/// Decoded RGBA8 image ready for upload
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub path: UniversalPath,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub hash: u64,
}

/// What the image panel currently shows
#[derive(Debug, Clone, Default)]
pub enum ImageFrame {
    #[default]
    Empty,
    Loading(UniversalPath),
    Decoded(Arc<DecodedImage>),
    /// Broken-image placeholder with the reason
    Placeholder {
        path: UniversalPath,
        reason: String,
    },
}

impl ImageFrame {
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageFrame::Loading(_))
    }
}

#[derive(Debug)]
struct LoadRequest {
    path: UniversalPath,
    target: Dimensions,
    generation: u64,
}

#[derive(Default)]
struct Shared {
    frame: Mutex<ImageFrame>,
    settled: Condvar,
    generation: AtomicU64,
}

impl Shared {
    /// Replace the frame unless `generation` has been superseded
    fn publish(&self, generation: u64, frame: ImageFrame) {
        let mut current = self.frame.lock();
        if self.generation.load(Ordering::SeqCst) == generation {
            *current = frame;
            self.settled.notify_all();
        }
    }
}

/// Image sub-viewer
pub struct ImagePanel {
    request_tx: Option<mpsc::UnboundedSender<LoadRequest>>,
    shared: Arc<Shared>,
}

impl ImagePanel {
    pub fn new() -> Self {
        Self {
            request_tx: None,
            shared: Arc::new(Shared::default()),
        }
    }

    /// Snapshot of the current frame
    pub fn frame(&self) -> ImageFrame {
        self.shared.frame.lock().clone()
    }

    /// Block until the pending decode (if any) finishes or `timeout` passes
    pub fn wait_for_frame(&self, timeout: Duration) -> ImageFrame {
        let mut frame = self.shared.frame.lock();
        self.shared
            .settled
            .wait_while_for(&mut frame, |f| f.is_loading(), timeout);
        frame.clone()
    }

    fn next_generation(&self) -> u64 {
        self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn spawn_worker(&self) -> std::io::Result<mpsc::UnboundedSender<LoadRequest>> {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<LoadRequest>();
        let shared = Arc::clone(&self.shared);

        std::thread::Builder::new()
            .name("image-decode".into())
            .spawn(move || {
                while let Some(request) = request_rx.blocking_recv() {
                    if shared.generation.load(Ordering::SeqCst) != request.generation {
                        continue;
                    }

                    let frame = match decode_image(request.path.as_path(), request.target) {
                        Ok(image) => ImageFrame::Decoded(Arc::new(image)),
                        Err(e) => {
                            tracing::warn!(path = %request.path, "Image decode failed: {}", e);
                            ImageFrame::Placeholder {
                                path: request.path.clone(),
                                reason: e.user_message(),
                            }
                        }
                    };
                    shared.publish(request.generation, frame);
                }
                tracing::debug!("Image decode worker stopped");
            })?;

        Ok(request_tx)
    }
}

impl Default for ImagePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SubViewer for ImagePanel {
    fn name(&self) -> &str {
        "image panel"
    }

    fn initialize(&mut self) -> bool {
        if self.request_tx.is_some() {
            return true;
        }

        if CodecFormats.reader_suffixes().is_empty() {
            tracing::warn!("No image codecs compiled in");
            return false;
        }

        match self.spawn_worker() {
            Ok(tx) => {
                self.request_tx = Some(tx);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to start image decode worker: {}", e);
                false
            }
        }
    }

    fn load(&mut self, file: &MediaFile, target: Dimensions) {
        let generation = self.next_generation();
        let path = file.path().clone();

        let Some(tx) = &self.request_tx else {
            let err = MediaError::Init("image renderer not initialized".into());
            self.shared.publish(generation, ImageFrame::Placeholder { path, reason: err.user_message() });
            return;
        };

        *self.shared.frame.lock() = ImageFrame::Loading(path.clone());
        tracing::debug!(path = %path, ?target, "Queue image decode");

        if tx.send(LoadRequest { path: path.clone(), target, generation }).is_err() {
            let err = MediaError::Init("image decode worker stopped".into());
            self.shared.publish(generation, ImageFrame::Placeholder { path, reason: err.user_message() });
        }
    }

    fn reset(&mut self) {
        self.next_generation();
        *self.shared.frame.lock() = ImageFrame::Empty;
        self.shared.settled.notify_all();
    }
}

/// Decode `path` and scale it down to fit `target`
///
/// Images smaller than the target are left at their natural size. An empty
/// target disables scaling.
pub fn decode_image(path: &Path, target: Dimensions) -> Result<DecodedImage, MediaError> {
    let data = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MediaError::FileNotFound(path.display().to_string()),
        _ => MediaError::Io(e),
    })?;
    let hash = xxh3_64(&data);

    let img = ImageReader::new(Cursor::new(&data))
        .with_guessed_format()?
        .decode()?;

    let (w, h) = img.dimensions();
    let img = if !target.is_empty() && (w > target.width || h > target.height) {
        img.thumbnail(target.width, target.height)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        path: UniversalPath::new(path),
        width,
        height,
        data: rgba.into_raw(),
        hash,
    })
}
