use serde_json::json;
use wardrobe::{
    BackendKind, CATALOG, GenerateConfig, MetadataPolicy, RasterSettings, Rasterizer, Selection,
};

#[test]
fn documented_example() {
    let a = json!({"assets": {"outfits": [{"id": "x"}]}});
    let b = json!({"assets": {"outfits": [{"id": "y"}], "stickers": [{"id": "z"}]}});
    let merged = wardrobe::merge_fragments(&[a, b], MetadataPolicy::FirstWins).unwrap();
    assert_eq!(
        merged,
        json!({"assets": {"outfits": [{"id": "x"}, {"id": "y"}], "stickers": [{"id": "z"}]}})
    );
}

#[test]
fn disjoint_categories_keep_original_lists() {
    let a = json!({"assets": {"shoes": [1, 2]}});
    let b = json!({"assets": {"hairhats": [3]}});
    let c = json!({"assets": {"accessories": []}});
    let merged = wardrobe::merge_fragments(&[a, b, c], MetadataPolicy::FirstWins).unwrap();
    assert_eq!(
        wardrobe::category_summary(&merged),
        vec![
            ("shoes".to_owned(), 2),
            ("hairhats".to_owned(), 1),
            ("accessories".to_owned(), 0)
        ]
    );
    assert_eq!(merged["assets"]["shoes"], json!([1, 2]));
}

#[test]
fn generated_assets_can_be_injected() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = GenerateConfig {
        out_dir: dir.path().join("assets"),
        ..GenerateConfig::default()
    };
    let rasterizer = Rasterizer::from_selection(
        Selection::Selected(BackendKind::Resvg),
        &RasterSettings {
            size: 16,
            scratch_dir: None,
        },
    )
    .unwrap();
    let manifest = wardrobe::generate(CATALOG, &rasterizer, &cfg).unwrap();

    let mut doc = wardrobe::merge_fragments(
        &[json!({"version": 6, "assets": {"stickers": [{"id": "old"}]}})],
        MetadataPolicy::FirstWins,
    )
    .unwrap();
    let added = wardrobe::inject_generated(&mut doc, &manifest, dir.path()).unwrap();
    assert_eq!(added, CATALOG.len());

    let stickers = doc["assets"]["stickers"].as_array().unwrap();
    assert_eq!(stickers[0]["id"], "old");
    assert_eq!(stickers[1]["id"], "sticker_star");
    assert!(
        stickers[1]["dataUrl"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,iVBORw0KGgo")
    );

    let out = dir.path().join("merged.json");
    wardrobe::write_document(&out, &doc, false).unwrap();
    assert_eq!(wardrobe::read_fragment(&out).unwrap(), doc);
}
