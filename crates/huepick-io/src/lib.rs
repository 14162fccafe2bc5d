//! Huepick IO - Image and palette file I/O
//!
//! Reading images into [`RgbImage`](huepick_core::RgbImage) and
//! writing them back, plus JSON persistence for extracted palettes.
//! Image format detection is delegated to the `image` crate; any
//! format it can decode is accepted and converted to 8-bit RGB.

mod error;

pub use error::{IoError, IoResult};

use huepick_core::RgbImage;
use huepick_palette::Palette;
use std::fs;
use std::path::Path;

/// Read an image from a file path
///
/// The image is decoded and converted to 8-bit RGB, discarding any
/// alpha channel.
///
/// # Errors
///
/// Fails when the file can't be read or decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let decoded = image::open(path)?.to_rgb8();
    let (width, height) = decoded.dimensions();
    Ok(RgbImage::from_data(width, height, decoded.into_raw())?)
}

/// Write an image to a file path
///
/// The format is chosen from the file extension, as supported by the
/// `image` crate.
///
/// # Errors
///
/// Fails when the extension names an unsupported format or the file
/// can't be written.
pub fn write_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> IoResult<()> {
    let (width, height) = img.dimensions();
    let buffer = image::RgbImage::from_raw(width, height, img.data().to_vec()).ok_or_else(
        || IoError::InvalidData(format!("buffer does not fit {}x{} image", width, height)),
    )?;
    buffer.save(path)?;
    Ok(())
}

/// Save a palette as pretty-printed JSON
pub fn save_palette<P: AsRef<Path>>(palette: &Palette, path: P) -> IoResult<()> {
    let json = serde_json::to_string_pretty(palette)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a palette from a JSON file
pub fn load_palette<P: AsRef<Path>>(path: P) -> IoResult<Palette> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use huepick_palette::PaletteEntry;

    fn tmp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("huepick-io-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_image_roundtrip_png() {
        let img = RgbImage::from_fn(16, 12, |x, y| ((x * 16) as u8, (y * 20) as u8, 200)).unwrap();
        let path = tmp_path("roundtrip.png");
        write_image(&img, &path).unwrap();
        let loaded = read_image(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let result = read_image(tmp_path("does-not-exist.png"));
        assert!(result.is_err());
    }

    #[test]
    fn test_palette_roundtrip_json() {
        let palette = Palette {
            entries: vec![
                PaletteEntry { rgb: [255, 0, 0], weight: 0.9 },
                PaletteEntry { rgb: [0, 128, 255], weight: 0.4 },
            ],
            requested: 5,
        };
        let path = tmp_path("palette.json");
        save_palette(&palette, &path).unwrap();
        let loaded = load_palette(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, palette);
        assert!(!loaded.is_complete());
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let path = tmp_path("bad.json");
        fs::write(&path, "not json").unwrap();
        let result = load_palette(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(IoError::Json(_))));
    }
}
