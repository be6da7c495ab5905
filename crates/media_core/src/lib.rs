//! media_view Core Domain Logic
//!
//! This crate contains:
//! - File-name classification into image/video/audio
//! - Support and preference policy
//! - The exclusive image/video display switch
//! - The viewer controller implementing the host contract
//! - An image sub-viewer backed by the `image` crate
//! - Configuration and error types

pub mod availability;
pub mod classifier;
pub mod config;
pub mod controller;
pub mod error;
pub mod formats;
pub mod image_panel;
pub mod multiplexer;
pub mod policy;
pub mod sub_viewer;

pub use availability::ViewerAvailability;
pub use classifier::{ExtensionClassifier, ExtensionSet, MediaCategory, AUDIO_EXTENSIONS, VIDEO_EXTENSIONS};
pub use config::{FormatSource, ImageConfig, LoggingConfig, MediaViewConfig, PanelConfig};
pub use controller::{ContentViewer, ViewerController, ViewerState, VIEWER_POSITION, VIEWER_TITLE, VIEWER_TOOLTIP};
pub use error::MediaError;
pub use formats::{CodecFormats, ImageFormatProvider, ListedFormats};
pub use image_panel::{decode_image, DecodedImage, ImageFrame, ImagePanel};
pub use multiplexer::{ActivePanel, DisplayMultiplexer};
pub use policy::{NOT_PREFERRED, PREFERRED_PRIORITY};
pub use sub_viewer::{Dimensions, SubViewer};
