use std::collections::BTreeSet;

use wardrobe::{CATALOG, Category};

#[test]
fn every_scene_resolves_its_paint_references() {
    for asset in CATALOG {
        let scene = asset.scene();
        let defined: BTreeSet<_> = scene.defs.iter().map(|d| d.id.as_str()).collect();
        for id in scene.paint_refs() {
            assert!(defined.contains(id), "{}: dangling paint '{id}'", asset.id);
        }
        scene.validate().unwrap();
    }
}

#[test]
fn every_scene_parses_as_svg_at_canvas_size() {
    let opts = usvg::Options::default();
    for asset in CATALOG {
        let svg = asset.scene().to_svg().unwrap();
        assert!(svg.starts_with("<?xml"), "{}", asset.id);
        let tree = usvg::Tree::from_str(&svg, &opts)
            .unwrap_or_else(|e| panic!("{}: {e}", asset.id));
        assert_eq!(tree.size().width(), 1024.0);
        assert_eq!(tree.size().height(), 1024.0);
        assert!(tree.root().has_children(), "{} draws nothing", asset.id);
    }
}

#[test]
fn catalog_ids_match_file_stems() {
    wardrobe::validate_catalog(CATALOG).unwrap();
    for asset in CATALOG {
        assert_eq!(asset.stem(), asset.id);
        assert!(asset.file.ends_with(".png"));
    }
}

#[test]
fn every_category_is_populated() {
    let seen: BTreeSet<_> = CATALOG.iter().map(|a| a.category.as_str()).collect();
    for c in [
        Category::Outfits,
        Category::Hairhats,
        Category::Shoes,
        Category::Accessories,
        Category::Stickers,
    ] {
        assert!(seen.contains(c.as_str()), "no assets in {c}");
    }
}

#[test]
fn scenes_are_built_fresh_and_deterministic() {
    let a = CATALOG[0].scene().to_svg().unwrap();
    let b = CATALOG[0].scene().to_svg().unwrap();
    assert_eq!(a, b);
}
