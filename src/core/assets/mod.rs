//=========================================================================
// Sprite Assets
//=========================================================================
//
// Sprite loading with placeholder fallback.
//
// The game attempts to load the two fighter sprites from the working
// directory at startup. A missing or unreadable file is the program's
// only recoverable failure: it is logged and replaced by a solid-colored
// placeholder rectangle, never fatal.
//
// Loaded sprites are scaled to 80×120; placeholders are 50×100 solid
// fills in the fighter's color.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::render::Color;

//=== Dimensions ==========================================================

/// Width sprites are scaled to on load.
pub const SPRITE_WIDTH: u32 = 80;

/// Height sprites are scaled to on load.
pub const SPRITE_HEIGHT: u32 = 120;

/// Placeholder width when an image is unavailable.
pub const PLACEHOLDER_WIDTH: u32 = 50;

/// Placeholder height when an image is unavailable.
pub const PLACEHOLDER_HEIGHT: u32 = 100;

//=== AssetError ==========================================================

/// Sprite loading failure (missing file, unreadable image, decode error).
///
/// Always recoverable: the loader substitutes a placeholder and logs the
/// error.
#[derive(Debug)]
pub enum AssetError {
    /// The image could not be read or decoded.
    Load {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { path, source } => {
                write!(f, "could not load sprite {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load { source, .. } => Some(source),
        }
    }
}

//=== SpriteId ============================================================

/// Identifies a sprite slot referenced by draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Enemy,
}

//=== Sprite ==============================================================

/// A decoded RGBA8 sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Sprite {
    /// Solid-colored placeholder used when an image fails to load.
    pub fn placeholder(width: u32, height: u32, color: Color) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[color.r, color.g, color.b, 0xFF]);
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Loads an image file and scales it to the fighter sprite size.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let decoded = image::open(path).map_err(|source| AssetError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let scaled = decoded
            .resize_exact(SPRITE_WIDTH, SPRITE_HEIGHT, FilterType::Triangle)
            .to_rgba8();

        Ok(Self {
            width: scaled.width(),
            height: scaled.height(),
            pixels: scaled.into_raw(),
        })
    }

    //--- Accessors --------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA8 pixel data, row-major from the top-left.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

//=== AssetPaths ==========================================================

/// Locations of the two fighter sprite images.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub player: PathBuf,
    pub enemy: PathBuf,
}

impl Default for AssetPaths {
    /// The reference layout: both images next to the executable's
    /// working directory.
    fn default() -> Self {
        Self {
            player: PathBuf::from("player.png"),
            enemy: PathBuf::from("enemy.png"),
        }
    }
}

//=== SpriteSet ===========================================================

/// The two fighter sprites, loaded or substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSet {
    player: Sprite,
    enemy: Sprite,
}

impl SpriteSet {
    /// Loads both sprites, falling back to placeholders on failure.
    ///
    /// This never fails; each load error is logged as a warning and
    /// replaced with the fighter-colored placeholder.
    pub fn load(paths: &AssetPaths) -> Self {
        Self {
            player: load_or_placeholder(&paths.player, Color::PLAYER),
            enemy: load_or_placeholder(&paths.enemy, Color::ENEMY),
        }
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::Player => &self.player,
            SpriteId::Enemy => &self.enemy,
        }
    }
}

fn load_or_placeholder(path: &Path, fallback: Color) -> Sprite {
    match Sprite::load(path) {
        Ok(sprite) => {
            info!("loaded sprite {}", path.display());
            sprite
        }
        Err(error) => {
            warn!("{}; using placeholder shape", error);
            Sprite::placeholder(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, fallback)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_requested_dimensions_and_fill() {
        let sprite = Sprite::placeholder(50, 100, Color::PLAYER);

        assert_eq!(sprite.width(), 50);
        assert_eq!(sprite.height(), 100);
        assert_eq!(sprite.pixels().len(), 50 * 100 * 4);
        assert_eq!(&sprite.pixels()[..4], &[0, 255, 0, 0xFF]);
    }

    #[test]
    fn missing_file_falls_back_to_placeholder() {
        let paths = AssetPaths {
            player: PathBuf::from("definitely-not-here/player.png"),
            enemy: PathBuf::from("definitely-not-here/enemy.png"),
        };
        let set = SpriteSet::load(&paths);

        let player = set.get(SpriteId::Player);
        assert_eq!(player.width(), PLACEHOLDER_WIDTH);
        assert_eq!(player.height(), PLACEHOLDER_HEIGHT);
        assert_eq!(&player.pixels()[..4], &[0, 255, 0, 0xFF]);

        let enemy = set.get(SpriteId::Enemy);
        assert_eq!(&enemy.pixels()[..4], &[255, 0, 0, 0xFF]);
    }

    #[test]
    fn load_reports_the_failing_path() {
        let path = PathBuf::from("nope/player.png");
        let error = Sprite::load(&path).expect_err("path does not exist");

        assert!(error.to_string().contains("nope/player.png"));
    }

    #[test]
    fn sprite_ids_select_the_matching_sprite() {
        let set = SpriteSet {
            player: Sprite::placeholder(1, 1, Color::PLAYER),
            enemy: Sprite::placeholder(2, 2, Color::ENEMY),
        };

        assert_eq!(set.get(SpriteId::Player).width(), 1);
        assert_eq!(set.get(SpriteId::Enemy).width(), 2);
    }

    #[test]
    fn asset_error_exposes_its_source() {
        use std::error::Error;

        let error = Sprite::load(Path::new("missing.png")).expect_err("missing file");
        assert!(error.source().is_some());
    }
}
