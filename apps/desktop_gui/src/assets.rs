//! Startup images: window background and icon.

use std::{fs, path::Path};

use anyhow::Context;
use eframe::egui;

pub const BACKGROUND_FILE: &str = "pokemon_bg.png";
pub const ICON_FILE: &str = "pokedex_icon.png";

pub struct StartupAssets {
    pub background: egui::ColorImage,
    pub icon: egui::IconData,
}

/// Both files are required; a missing or undecodable one aborts startup.
pub fn load_startup_assets(assets_dir: &Path) -> anyhow::Result<StartupAssets> {
    let background = decode_rgba(&assets_dir.join(BACKGROUND_FILE))?;
    let icon = decode_rgba(&assets_dir.join(ICON_FILE))?;

    let [w, h] = [background.width() as usize, background.height() as usize];
    Ok(StartupAssets {
        background: egui::ColorImage::from_rgba_unmultiplied([w, h], background.as_raw()),
        icon: egui::IconData {
            width: icon.width(),
            height: icon.height(),
            rgba: icon.into_raw(),
        },
    })
}

fn decode_rgba(path: &Path) -> anyhow::Result<image::RgbaImage> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read asset '{}'", path.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("failed to decode asset '{}'", path.display()))?;
    Ok(decoded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_assets_dir(label: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let dir = env::temp_dir().join(format!("pokedex_assets_{label}_{suffix}"));
        fs::create_dir_all(&dir).expect("temp dir");
        dir
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbaImage::from_pixel(width, height, image::Rgba([59, 76, 202, 255]))
            .save(path)
            .expect("write png");
    }

    #[test]
    fn loads_background_and_icon() {
        let dir = temp_assets_dir("ok");
        write_png(&dir.join(BACKGROUND_FILE), 4, 3);
        write_png(&dir.join(ICON_FILE), 2, 2);

        let assets = load_startup_assets(&dir).expect("assets");
        assert_eq!(assets.background.size, [4, 3]);
        assert_eq!((assets.icon.width, assets.icon.height), (2, 2));
        assert_eq!(assets.icon.rgba.len(), 2 * 2 * 4);

        fs::remove_dir_all(dir).expect("cleanup");
    }

    #[test]
    fn missing_icon_names_the_file() {
        let dir = temp_assets_dir("missing");
        write_png(&dir.join(BACKGROUND_FILE), 1, 1);

        let err = load_startup_assets(&dir)
            .err()
            .expect("icon is missing");
        assert!(format!("{err:#}").contains(ICON_FILE));

        fs::remove_dir_all(dir).expect("cleanup");
    }

    #[test]
    fn undecodable_background_is_rejected() {
        let dir = temp_assets_dir("garbage");
        fs::write(dir.join(BACKGROUND_FILE), b"not a png").expect("write");
        write_png(&dir.join(ICON_FILE), 1, 1);

        let err = load_startup_assets(&dir)
            .err()
            .expect("background is garbage");
        assert!(format!("{err:#}").contains("failed to decode asset"));

        fs::remove_dir_all(dir).expect("cleanup");
    }
}
