//! The fixed set of generated assets and the builders that draw them.
//!
//! Character anchor points on the 1024×1024 canvas: head ~(512,270), hair top ~(512,140),
//! shoulders y≈400, waist ~(512,590), legs y 630–890, feet y 870–920.

use std::collections::BTreeSet;

use crate::{
    foundation::error::{WardrobeError, WardrobeResult},
    scene::Scene,
};

mod accessories;
mod hair;
mod outfits;
mod shoes;
mod stickers;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Outfits,
    Hairhats,
    Shoes,
    Accessories,
    Stickers,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outfits => "outfits",
            Self::Hairhats => "hairhats",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
            Self::Stickers => "stickers",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Builder = fn(&mut Scene);

#[derive(Clone, Copy)]
pub struct AssetSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub file: &'static str,
    pub build: Builder,
}

impl std::fmt::Debug for AssetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetSpec")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

impl AssetSpec {
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new();
        (self.build)(&mut scene);
        scene
    }

    /// File name without its extension; the serialized scene shares it.
    pub fn stem(&self) -> &str {
        std::path::Path::new(self.file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.file)
    }
}

const fn spec(
    id: &'static str,
    name: &'static str,
    category: Category,
    file: &'static str,
    build: Builder,
) -> AssetSpec {
    AssetSpec {
        id,
        name,
        category,
        file,
        build,
    }
}

pub const CATALOG: &[AssetSpec] = &[
    spec(
        "outfit_princess_dress",
        "Layered sparkle princess gown",
        Category::Outfits,
        "outfit_princess_dress.png",
        outfits::princess,
    ),
    spec(
        "outfit_jeans_top",
        "Bright top + comfy jeans",
        Category::Outfits,
        "outfit_jeans_top.png",
        outfits::jeans,
    ),
    spec(
        "outfit_ballet",
        "Ballet leotard with tutu",
        Category::Outfits,
        "outfit_ballet.png",
        outfits::ballet,
    ),
    spec(
        "hair_long_blonde",
        "Long flowing blonde hair",
        Category::Hairhats,
        "hair_long_blonde.png",
        hair::long_blonde,
    ),
    spec(
        "hair_bun_brown",
        "Chic brown bun",
        Category::Hairhats,
        "hair_bun_brown.png",
        hair::bun,
    ),
    spec(
        "hair_crown",
        "Princess crown",
        Category::Hairhats,
        "hair_crown.png",
        hair::crown,
    ),
    spec(
        "shoes_heels",
        "Pink party heels",
        Category::Shoes,
        "shoes_heels.png",
        shoes::heels,
    ),
    spec(
        "shoes_sneakers",
        "Bright white sneakers",
        Category::Shoes,
        "shoes_sneakers.png",
        shoes::sneakers,
    ),
    spec(
        "accessory_glasses",
        "Round glitter glasses",
        Category::Accessories,
        "accessory_glasses.png",
        accessories::glasses,
    ),
    spec(
        "accessory_handbag",
        "Pink bow handbag",
        Category::Accessories,
        "accessory_handbag.png",
        accessories::handbag,
    ),
    spec(
        "sticker_star",
        "Golden sparkle star",
        Category::Stickers,
        "sticker_star.png",
        stickers::star,
    ),
    spec(
        "sticker_heart",
        "Pink heart",
        Category::Stickers,
        "sticker_heart.png",
        stickers::heart,
    ),
    spec(
        "sticker_rainbow",
        "Rainbow",
        Category::Stickers,
        "sticker_rainbow.png",
        stickers::rainbow,
    ),
];

/// Checks that ids and file names are unique and non-empty within the batch.
pub fn validate_catalog(specs: &[AssetSpec]) -> WardrobeResult<()> {
    let mut ids = BTreeSet::new();
    let mut files = BTreeSet::new();
    for s in specs {
        if s.id.trim().is_empty() || s.file.trim().is_empty() {
            return Err(WardrobeError::validation(format!(
                "asset '{}' must have a non-empty id and file name",
                s.name
            )));
        }
        if !ids.insert(s.id) {
            return Err(WardrobeError::validation(format!(
                "duplicate asset id '{}'",
                s.id
            )));
        }
        if !files.insert(s.file) {
            return Err(WardrobeError::validation(format!(
                "duplicate asset file name '{}'",
                s.file
            )));
        }
    }
    Ok(())
}
