//! Image format capability sources

use image::ImageFormat;

/// Supplies the file suffixes the image renderer can decode
///
/// Queried once when a viewer is built. Suffixes are returned without the
/// leading dot, e.g. `"jpg"`.
pub trait ImageFormatProvider {
    fn reader_suffixes(&self) -> Vec<String>;
}

/// Formats readable by the compiled `image` codecs
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecFormats;

impl ImageFormatProvider for CodecFormats {
    fn reader_suffixes(&self) -> Vec<String> {
        ImageFormat::all()
            .filter(|format| format.reading_enabled())
            .flat_map(|format| format.extensions_str().iter())
            .map(|ext| ext.to_string())
            .collect()
    }
}

/// A fixed suffix list, typically from configuration
#[derive(Debug, Clone, Default)]
pub struct ListedFormats(pub Vec<String>);

impl ImageFormatProvider for ListedFormats {
    fn reader_suffixes(&self) -> Vec<String> {
        self.0.clone()
    }
}
