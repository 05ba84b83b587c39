/// Asynchronous image loading.
///
/// `load` hands each new asset to its own worker thread and returns at once;
/// finished decodes come back over a channel and are picked up by `poll`,
/// which the game loop calls once per frame while waiting.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use image::{Rgba, RgbaImage};
use log::{debug, warn};

use crate::entities::{
    bullet_sprite, enemy_sprite, explosion_sprite, player_sprite, BulletDirection,
};
use crate::error::{GameError, Result};
use crate::sprite::Sprite;

/// Asset identifier, a path relative to the asset root.
pub type AssetKey = &'static str;

pub const SPRITE_SHEET: AssetKey = "images/sprites.png";
pub const TERRAIN: AssetKey = "images/terrain.png";

/// Every asset the game declares up front.
pub const GAME_ASSETS: &[AssetKey] = &[SPRITE_SHEET, TERRAIN];

#[derive(Debug)]
pub enum LoadEvent {
    Loaded(AssetKey),
    /// Decode failed; a placeholder now stands in for the asset.
    Failed(GameError),
}

enum Slot {
    Pending,
    Ready(RgbaImage),
}

type Completion = (AssetKey, Result<RgbaImage>);

pub struct Resources {
    root: PathBuf,
    cache: HashMap<AssetKey, Slot>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    notified: bool,
}

impl Resources {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let (tx, rx) = mpsc::channel();
        Resources {
            root: root.as_ref().to_path_buf(),
            cache: HashMap::new(),
            tx,
            rx,
            notified: false,
        }
    }

    /// Request every key not already known.  Fire-and-forget.
    pub fn load(&mut self, keys: &[AssetKey]) {
        for &key in keys {
            if self.cache.contains_key(key) {
                continue;
            }
            self.cache.insert(key, Slot::Pending);
            self.notified = false;

            let path = self.root.join(key);
            let tx = self.tx.clone();
            thread::spawn(move || {
                let result = image::open(&path)
                    .map(|img| img.to_rgba8())
                    .map_err(|err| GameError::Asset {
                        key: key.to_string(),
                        message: err.to_string(),
                    });
                // receiver dropped → game shutting down
                let _ = tx.send((key, result));
            });
        }
    }

    /// Store an already-decoded image.  Hosts that embed their art, and
    /// tests, use this instead of `load`.
    pub fn insert(&mut self, key: AssetKey, image: RgbaImage) {
        self.cache.insert(key, Slot::Ready(image));
    }

    /// Collect finished loads without blocking.
    pub fn poll(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        while let Ok((key, result)) = self.rx.try_recv() {
            match result {
                Ok(image) => {
                    debug!("loaded {key} ({}x{})", image.width(), image.height());
                    self.cache.insert(key, Slot::Ready(image));
                    events.push(LoadEvent::Loaded(key));
                }
                Err(err) => {
                    warn!("{err}; using placeholder art");
                    self.cache.insert(key, Slot::Ready(placeholder(key)));
                    events.push(LoadEvent::Failed(err));
                }
            }
        }
        events
    }

    /// Loaded handle, or `None` while the asset is pending or unknown.
    pub fn get(&self, key: &str) -> Option<&RgbaImage> {
        match self.cache.get(key) {
            Some(Slot::Ready(image)) => Some(image),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.cache.values().all(|slot| matches!(slot, Slot::Ready(_)))
    }

    /// Readiness gate: true exactly once, the first time it is asked after
    /// every requested asset has a handle.
    pub fn take_ready(&mut self) -> bool {
        if self.notified || !self.is_ready() {
            return false;
        }
        self.notified = true;
        true
    }

    pub fn pending(&self) -> usize {
        self.cache
            .values()
            .filter(|slot| matches!(slot, Slot::Pending))
            .count()
    }
}

// ── Placeholder art ───────────────────────────────────────────────────────────

const UNKNOWN_COLOR: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Stand-in image for `key`, laid out so every catalogue sprite finds
/// coloured pixels where its frames live.
pub fn placeholder(key: &str) -> RgbaImage {
    match key {
        SPRITE_SHEET => placeholder_sheet(),
        TERRAIN => placeholder_terrain(),
        _ => RgbaImage::from_pixel(1, 1, UNKNOWN_COLOR),
    }
}

fn placeholder_sheet() -> RgbaImage {
    let mut sheet = RgbaImage::new(512, 160);
    let entries: [(Sprite, [u8; 3]); 6] = [
        (player_sprite(), [80, 200, 255]),
        (bullet_sprite(BulletDirection::Forward), [255, 230, 60]),
        (bullet_sprite(BulletDirection::Up), [255, 230, 60]),
        (bullet_sprite(BulletDirection::Down), [255, 230, 60]),
        (enemy_sprite(), [230, 50, 50]),
        (explosion_sprite(), [255, 150, 30]),
    ];

    for (sprite, [r, g, b]) in entries {
        let frame_count = sprite.frames.iter().copied().max().map_or(1, |max| max + 1);
        for frame in 0..frame_count {
            // later frames fade so animations are visible
            let fade = 1.0 - frame as f32 / (frame_count as f32 * 1.5);
            let color = Rgba([
                (r as f32 * fade) as u8,
                (g as f32 * fade) as u8,
                (b as f32 * fade) as u8,
                255,
            ]);
            let rect = sprite.source_rect(frame);
            for y in rect.y..(rect.y + rect.h).min(sheet.height()) {
                for x in rect.x..(rect.x + rect.w).min(sheet.width()) {
                    sheet.put_pixel(x, y, color);
                }
            }
        }
    }
    sheet
}

fn placeholder_terrain() -> RgbaImage {
    RgbaImage::from_fn(32, 32, |x, y| {
        if (x / 16 + y / 16) % 2 == 0 {
            Rgba([34, 68, 34, 255])
        } else {
            Rgba([40, 80, 40, 255])
        }
    })
}
