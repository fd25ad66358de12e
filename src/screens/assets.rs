//! Asset paths and preloaded item art

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::scene::{AnimationSource, Graphics, ImageHandle};
use crate::simulation::Item;

pub const VIEW_LABEL_FONT: &str = "Assets/FONTS/VCR_OSD.ttf";

pub const ARROW_LEFT: &str = "Assets/UI Elements/arrow left.jpg";
pub const ARROW_RIGHT: &str = "Assets/UI Elements/arrow right.jpg";
pub const WIN_BACKGROUND: &str = "Assets/UI Elements/winScreen.jpg";

pub const COUNTER_BACKGROUND: &str = "Assets/Counter/CounterBG.jpg";
pub const KITCHEN_BACKGROUND: &str = "Assets/Kitchen/KitchenBG.png";
pub const TRASH: &str = "Assets/Kitchen/Trash.png";
pub const DRIVE_THROUGH_BACKGROUND: &str = "Assets/Drive Through/DrivethroughBG.jpg";

pub const STORAGE_BACKGROUND: &str = "Assets/Storage Room/Storage_Room.png";
pub const FREEZER_BACKGROUND: &str = "Assets/Storage Room/Freezer.png";
pub const BURGER_BUN_HIGHLIGHT: &str =
    "Assets/Storage Room/Highlights/Storage Room Burger Bun Highlight.png";
pub const HOTDOG_BUN_HIGHLIGHT: &str =
    "Assets/Storage Room/Highlights/Storage Room Hotdog Bun Highlight.png";
pub const FREEZER_HIGHLIGHT: &str =
    "Assets/Storage Room/Highlights/Storage Room Freezer Highlight.png";

pub fn title_animation() -> AnimationSource {
    AnimationSource {
        folder: "Assets/UI Elements/Title Screen".to_string(),
        leading_name: "Title Screen".to_string(),
        extension: ".jpg".to_string(),
        total_frames: 71,
        extra_leading_zeroes: 0,
        frame_rate: 24,
    }
}

fn item_path(item: Item) -> String {
    format!("Assets/Items/{}.png", item.name())
}

pub fn load(gfx: &mut dyn Graphics, path: &str) -> Result<ImageHandle> {
    gfx.load_image(path)
        .with_context(|| format!("failed to load {path}"))
}

/// One unscaled image per item, loaded up front
#[derive(Debug, Clone)]
pub struct ItemArt {
    images: HashMap<Item, ImageHandle>,
}

impl ItemArt {
    pub fn load(gfx: &mut dyn Graphics) -> Result<Self> {
        let images = Item::ALL
            .iter()
            .map(|&item| Ok((item, load(gfx, &item_path(item))?)))
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { images })
    }

    pub fn get(&self, item: Item) -> Option<ImageHandle> {
        self.images.get(&item).copied()
    }
}
