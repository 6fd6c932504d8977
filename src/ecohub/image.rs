use crate::error::{HubError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::str::FromStr;

/// Fixed downscaling presets for cover art. Each maps to a width cap and
/// a JPEG quality; nothing is tunable per call beyond picking one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePreset {
    /// Full-bleed covers.
    Cover,
    /// Default for article cards and post pages.
    Web,
    /// Bandwidth-constrained variants.
    Mobile,
}

impl ImagePreset {
    pub fn max_width(self) -> u32 {
        match self {
            ImagePreset::Cover => 1920,
            ImagePreset::Web => 1200,
            ImagePreset::Mobile => 800,
        }
    }

    pub fn quality(self) -> u8 {
        match self {
            ImagePreset::Cover => 90,
            ImagePreset::Web => 70,
            ImagePreset::Mobile => 50,
        }
    }
}

impl FromStr for ImagePreset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cover" => Ok(ImagePreset::Cover),
            "web" => Ok(ImagePreset::Web),
            "mobile" => Ok(ImagePreset::Mobile),
            other => Err(format!(
                "unknown image preset '{}' (expected cover, web or mobile)",
                other
            )),
        }
    }
}

/// Decodes raw image bytes, downscales to the preset's width cap when the
/// source is wider (never upscales), and re-encodes as an inline JPEG
/// data URI at the preset's quality.
pub fn optimize(bytes: &[u8], preset: ImagePreset) -> Result<String> {
    let decoded = image::load_from_memory(bytes).map_err(HubError::Image)?;
    let scaled = scale_to_width(decoded, preset.max_width());

    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(scaled.to_rgb8());
    let mut encoded = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut encoded, preset.quality());
    rgb.write_with_encoder(encoder).map_err(HubError::Image)?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&encoded)))
}

fn scale_to_width(img: DynamicImage, max_width: u32) -> DynamicImage {
    if img.width() <= max_width {
        return img;
    }
    let height = (img.height() as u64 * max_width as u64 / img.width() as u64).max(1) as u32;
    img.resize_exact(max_width, height, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 180, 90]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn decode_data_uri(uri: &str) -> DynamicImage {
        let payload = uri
            .strip_prefix("data:image/jpeg;base64,")
            .expect("jpeg data uri");
        let bytes = BASE64.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn wide_images_are_capped_at_the_preset_width() {
        let out = optimize(&png_bytes(1600, 400), ImagePreset::Mobile).unwrap();
        let img = decode_data_uri(&out);
        assert_eq!(img.width(), 800);
        assert_eq!(img.height(), 200);
    }

    #[test]
    fn narrow_images_are_never_upscaled() {
        let out = optimize(&png_bytes(640, 480), ImagePreset::Web).unwrap();
        let img = decode_data_uri(&out);
        assert_eq!(img.width(), 640);
        assert_eq!(img.height(), 480);
    }

    #[test]
    fn output_is_a_self_contained_jpeg_blob() {
        let out = optimize(&png_bytes(10, 10), ImagePreset::Cover).unwrap();
        assert!(out.starts_with("data:image/jpeg;base64,"));
        decode_data_uri(&out);
    }

    #[test]
    fn garbage_bytes_fail_with_an_image_error() {
        match optimize(b"not an image", ImagePreset::Web) {
            Err(crate::error::HubError::Image(_)) => {}
            other => panic!("expected image error, got {:?}", other),
        }
    }

    #[test]
    fn preset_parsing() {
        assert_eq!("web".parse::<ImagePreset>().unwrap(), ImagePreset::Web);
        assert_eq!("cover".parse::<ImagePreset>().unwrap(), ImagePreset::Cover);
        assert!("huge".parse::<ImagePreset>().is_err());
    }
}
