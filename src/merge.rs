//! Merging independently authored game-data fragments into one document.
//!
//! Every fragment may carry an `assets` object mapping category keys to item lists. Lists
//! sharing a key are concatenated in fragment order; nothing is deduplicated. Everything else
//! in the output comes from the first fragment, subject to [`MetadataPolicy`].

use std::path::Path;

use anyhow::Context as _;
use base64::Engine as _;
use serde_json::{Map, Value, json};

use crate::{
    foundation::{
        error::{WardrobeError, WardrobeResult},
        fs::write_file,
    },
    manifest::Manifest,
};

const ASSETS_KEY: &str = "assets";

/// How top-level keys other than `assets` are reconciled across fragments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MetadataPolicy {
    /// The first fragment's value is kept; conflicts and extra keys are logged and dropped.
    #[default]
    FirstWins,
    /// Later fragments overwrite earlier values and contribute new keys.
    LastWins,
    /// Any conflicting value is a merge error.
    Reject,
}

pub fn read_fragment(path: &Path) -> WardrobeResult<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read fragment '{}'", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| WardrobeError::serde(format!("invalid JSON in '{}': {e}", path.display())))
}

/// Writes `doc` to `path`, compact unless `pretty`. Existing files are overwritten.
pub fn write_document(path: &Path, doc: &Value, pretty: bool) -> WardrobeResult<()> {
    let text = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    }
    .map_err(|e| WardrobeError::serde(e.to_string()))?;
    write_file(path, text)
}

#[tracing::instrument(skip_all, fields(fragments = fragments.len(), policy = ?policy))]
pub fn merge_fragments(fragments: &[Value], policy: MetadataPolicy) -> WardrobeResult<Value> {
    let Some((first, rest)) = fragments.split_first() else {
        return Err(WardrobeError::merge("at least one fragment is required"));
    };
    let mut merged = as_object(first, 0)?.clone();
    let mut assets: Option<Map<String, Value>> = None;

    for (idx, fragment) in fragments.iter().enumerate() {
        let obj = as_object(fragment, idx)?;
        let Some(categories) = obj.get(ASSETS_KEY) else {
            continue;
        };
        let categories = categories.as_object().ok_or_else(|| {
            WardrobeError::merge(format!("fragment {idx}: '{ASSETS_KEY}' is not an object"))
        })?;
        let acc = assets.get_or_insert_with(Map::new);
        for (category, items) in categories {
            let items = items.as_array().ok_or_else(|| {
                WardrobeError::merge(format!(
                    "fragment {idx}: category '{category}' is not a list"
                ))
            })?;
            append_items(acc, category, items.iter().cloned())?;
        }
    }

    for (offset, fragment) in rest.iter().enumerate() {
        reconcile_metadata(&mut merged, as_object(fragment, offset + 1)?, policy)?;
    }

    if let Some(assets) = assets {
        merged.insert(ASSETS_KEY.to_owned(), Value::Object(assets));
    }
    Ok(Value::Object(merged))
}

fn as_object(fragment: &Value, idx: usize) -> WardrobeResult<&Map<String, Value>> {
    fragment
        .as_object()
        .ok_or_else(|| WardrobeError::merge(format!("fragment {idx} is not a JSON object")))
}

fn append_items(
    acc: &mut Map<String, Value>,
    category: &str,
    items: impl IntoIterator<Item = Value>,
) -> WardrobeResult<()> {
    let slot = acc
        .entry(category.to_owned())
        .or_insert_with(|| Value::Array(Vec::new()));
    let list = slot.as_array_mut().ok_or_else(|| {
        WardrobeError::merge(format!("category '{category}' is not a list"))
    })?;
    list.extend(items);
    Ok(())
}

fn reconcile_metadata(
    merged: &mut Map<String, Value>,
    fragment: &Map<String, Value>,
    policy: MetadataPolicy,
) -> WardrobeResult<()> {
    for (key, value) in fragment.iter().filter(|(k, _)| *k != ASSETS_KEY) {
        match merged.get(key) {
            Some(existing) if existing == value => {}
            Some(_) => match policy {
                MetadataPolicy::FirstWins => {
                    tracing::warn!(key = %key, "conflicting metadata; keeping first fragment's value");
                }
                MetadataPolicy::LastWins => {
                    merged.insert(key.clone(), value.clone());
                }
                MetadataPolicy::Reject => {
                    return Err(WardrobeError::merge(format!(
                        "conflicting values for top-level key '{key}'"
                    )));
                }
            },
            None => match policy {
                MetadataPolicy::LastWins => {
                    merged.insert(key.clone(), value.clone());
                }
                MetadataPolicy::FirstWins | MetadataPolicy::Reject => {
                    tracing::warn!(key = %key, "metadata key missing from first fragment; ignored");
                }
            },
        }
    }
    Ok(())
}

/// Appends every manifest entry to its category as `{ id, label, dataUrl }`, embedding the
/// PNG found at `root/<entry.path>`. Returns the number of items added.
pub fn inject_generated(doc: &mut Value, manifest: &Manifest, root: &Path) -> WardrobeResult<usize> {
    let obj = doc
        .as_object_mut()
        .ok_or_else(|| WardrobeError::merge("merged document is not a JSON object"))?;
    let assets = obj
        .entry(ASSETS_KEY.to_owned())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| WardrobeError::merge(format!("'{ASSETS_KEY}' is not an object")))?;

    for entry in &manifest.assets {
        let png = root.join(&entry.path);
        let bytes =
            std::fs::read(&png).with_context(|| format!("read generated asset '{}'", png.display()))?;
        let data_url = format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(bytes)
        );
        let item = json!({
            "id": entry.id(),
            "label": entry.name,
            "dataUrl": data_url,
        });
        append_items(assets, entry.category.as_str(), [item])?;
        tracing::debug!(category = %entry.category, id = entry.id(), "injected asset");
    }
    Ok(manifest.assets.len())
}

/// Item count per category, in document order.
pub fn category_summary(doc: &Value) -> Vec<(String, usize)> {
    doc.get(ASSETS_KEY)
        .and_then(Value::as_object)
        .map(|assets| {
            assets
                .iter()
                .map(|(k, v)| (k.clone(), v.as_array().map_or(0, Vec::len)))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Category, manifest::ManifestEntry};

    #[test]
    fn shared_and_disjoint_categories() {
        let a = json!({"assets": {"outfits": [{"id": "x"}]}});
        let b = json!({"assets": {"outfits": [{"id": "y"}], "stickers": [{"id": "z"}]}});
        let merged = merge_fragments(&[a, b], MetadataPolicy::default()).unwrap();
        assert_eq!(
            merged["assets"],
            json!({"outfits": [{"id": "x"}, {"id": "y"}], "stickers": [{"id": "z"}]})
        );
    }

    #[test]
    fn duplicates_are_preserved() {
        let a = json!({"assets": {"shoes": [{"id": "s"}]}});
        let merged = merge_fragments(&[a.clone(), a], MetadataPolicy::default()).unwrap();
        assert_eq!(merged["assets"]["shoes"], json!([{"id": "s"}, {"id": "s"}]));
    }

    #[test]
    fn first_fragment_metadata_is_kept_in_order() {
        let a = json!({"version": 6, "title": "Starlet", "assets": {}});
        let b = json!({"version": 7, "extra": true, "assets": {"outfits": []}});
        let merged = merge_fragments(&[a, b], MetadataPolicy::FirstWins).unwrap();
        assert_eq!(merged["version"], 6);
        assert!(merged.get("extra").is_none());
        let keys: Vec<_> = merged.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["version", "title", "assets"]);
    }

    #[test]
    fn last_wins_and_reject() {
        let a = json!({"version": 6});
        let b = json!({"version": 7, "extra": true});
        let merged = merge_fragments(&[a.clone(), b.clone()], MetadataPolicy::LastWins).unwrap();
        assert_eq!(merged, json!({"version": 7, "extra": true}));

        let err = merge_fragments(&[a, b], MetadataPolicy::Reject).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn fragments_without_assets_contribute_nothing() {
        let a = json!({"title": "t"});
        let b = json!({"assets": {"hairhats": [1]}});
        let merged = merge_fragments(&[a.clone(), b], MetadataPolicy::default()).unwrap();
        assert_eq!(merged, json!({"title": "t", "assets": {"hairhats": [1]}}));

        let only = merge_fragments(&[a.clone()], MetadataPolicy::default()).unwrap();
        assert_eq!(only, a);
    }

    #[test]
    fn malformed_fragments_are_errors() {
        let ok = json!({"assets": {}});
        assert!(merge_fragments(&[], MetadataPolicy::default()).is_err());
        assert!(merge_fragments(&[ok.clone(), json!([1])], MetadataPolicy::default()).is_err());
        assert!(
            merge_fragments(&[ok.clone(), json!({"assets": []})], MetadataPolicy::default())
                .is_err()
        );
        let err = merge_fragments(
            &[ok, json!({"assets": {"outfits": {"id": "x"}}})],
            MetadataPolicy::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("outfits"));
    }

    #[test]
    fn inject_appends_data_urls() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/sticker_star.png"), b"PNG").unwrap();

        let manifest = Manifest {
            converter: "test".to_owned(),
            assets: vec![ManifestEntry {
                file: "sticker_star.png".to_owned(),
                category: Category::Stickers,
                name: "Gold Star".to_owned(),
                path: "assets/sticker_star.png".to_owned(),
            }],
        };
        let mut doc = json!({"assets": {"stickers": [{"id": "old"}]}});
        assert_eq!(inject_generated(&mut doc, &manifest, dir.path()).unwrap(), 1);

        let stickers = doc["assets"]["stickers"].as_array().unwrap();
        assert_eq!(stickers.len(), 2);
        assert_eq!(stickers[1]["id"], "sticker_star");
        assert_eq!(stickers[1]["label"], "Gold Star");
        assert_eq!(stickers[1]["dataUrl"], "data:image/png;base64,UE5H");
        assert_eq!(
            category_summary(&doc),
            vec![("stickers".to_owned(), 2)]
        );
    }

    #[test]
    fn inject_missing_png_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest {
            converter: "test".to_owned(),
            assets: vec![ManifestEntry {
                file: "gone.png".to_owned(),
                category: Category::Shoes,
                name: "Gone".to_owned(),
                path: "assets/gone.png".to_owned(),
            }],
        };
        let mut doc = json!({});
        let err = inject_generated(&mut doc, &manifest, dir.path()).unwrap_err();
        assert!(err.to_string().contains("gone.png"), "{err:#}");
    }

    #[test]
    fn read_and_write_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("merged.json");
        let doc = json!({"a": [1, 2]});
        write_document(&path, &doc, false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"a":[1,2]}"#);
        assert_eq!(read_fragment(&path).unwrap(), doc);

        write_document(&path, &doc, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains('\n'));

        std::fs::write(&path, "{nope").unwrap();
        let err = read_fragment(&path).unwrap_err();
        assert!(err.to_string().contains("merged.json"));
    }
}
