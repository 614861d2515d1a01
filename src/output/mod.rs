//! JSON projection writers.
//!
//! Serialization is strictly an adapter concern: the pipeline hands over a
//! [`CategoryTree`] and this module derives the four artifacts. Output is
//! UTF-8, pretty-printed, with CJK text written as-is.

pub mod combinations;

use std::fs;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::pipeline::organize::CategoryTree;

/// Hierarchical tree projection.
pub const TREE_FILE: &str = "processed_tags_data.json";
/// Flat weight-sorted projection for search.
pub const SEARCH_FILE: &str = "search_tags_data.json";
/// Category -> subcategory-name-list structure.
pub const STRUCTURE_FILE: &str = "structure_data.json";
/// Curated prompt combinations.
pub const COMBINATIONS_FILE: &str = "predefined_combinations.json";

/// One entry of the flat/searchable projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatTag {
    pub main_category: &'static str,
    pub sub_category: &'static str,
    pub tag_en: String,
    pub tag_cn: String,
    pub weight: f64,
    pub description: String,
}

/// Flatten the tree into one weight-sorted sequence annotated with its
/// bucket coordinates. The sort is stable, so entries with equal weight
/// keep tree order.
#[must_use]
pub fn flatten(tree: &CategoryTree) -> Vec<FlatTag> {
    let mut flat: Vec<FlatTag> = tree
        .iter()
        .flat_map(|(main_category, buckets)| {
            buckets.iter().flat_map(move |(&sub_category, tags)| {
                tags.iter().map(move |tag| FlatTag {
                    main_category,
                    sub_category,
                    tag_en: tag.text_en.clone(),
                    tag_cn: tag.text_cn.clone(),
                    weight: tag.weight,
                    description: tag.description.clone(),
                })
            })
        })
        .collect();

    flat.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    flat
}

/// The category structure: every main category mapped to the names of its
/// populated subcategories.
#[must_use]
pub fn structure(tree: &CategoryTree) -> IndexMap<&'static str, Vec<&'static str>> {
    tree.iter()
        .map(|(main_category, buckets)| (main_category, buckets.keys().copied().collect()))
        .collect()
}

/// Write the four projections into `dir`.
pub fn write_projections(tree: &CategoryTree, dir: &Path) -> anyhow::Result<()> {
    write_json(&dir.join(TREE_FILE), tree)?;
    write_json(&dir.join(SEARCH_FILE), &flatten(tree))?;
    write_json(&dir.join(STRUCTURE_FILE), &structure(tree))?;
    write_json(&dir.join(COMBINATIONS_FILE), &combinations::predefined())?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize projection")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "projection written");
    Ok(())
}
