//! Category organizer: buckets weighted tags into the two-level tree.

use indexmap::IndexMap;
use serde::Serialize;

use crate::classification::{Classifier, Taxonomy};
use crate::classification::taxonomy::FALLBACK_MAIN;

use super::dedup::MergedTag;

/// A tag after classification. Immutable; identity is no longer tracked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedTag {
    #[serde(rename = "tag_en")]
    pub text_en: String,
    #[serde(rename = "tag_cn")]
    pub text_cn: String,
    pub weight: f64,
    pub description: String,
    #[serde(skip)]
    pub main_category: &'static str,
    #[serde(skip)]
    pub sub_category: &'static str,
}

/// Subcategory buckets of one main category, keyed in first-insertion order.
pub type SubcategoryBuckets = IndexMap<&'static str, Vec<ClassifiedTag>>;

/// Main category -> subcategory -> weight-sorted tags.
///
/// Every main category key is always present, the six taxonomy domains plus
/// the fallback, even when its bucket map is empty. Subcategory keys appear
/// only once populated. Serializes as a mapping of mappings in precedence
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryTree {
    buckets: IndexMap<&'static str, SubcategoryBuckets>,
}

impl CategoryTree {
    /// Empty tree seeded with every main category of `taxonomy` plus the
    /// fallback, in precedence order.
    #[must_use]
    pub fn seeded(taxonomy: &Taxonomy) -> Self {
        let mut buckets = IndexMap::new();
        for name in taxonomy.main_names() {
            buckets.insert(name, SubcategoryBuckets::new());
        }
        buckets.insert(FALLBACK_MAIN, SubcategoryBuckets::new());
        Self { buckets }
    }

    /// Append a tag to its bucket, creating the subcategory on first use.
    pub fn insert(&mut self, tag: ClassifiedTag) {
        self.buckets
            .entry(tag.main_category)
            .or_default()
            .entry(tag.sub_category)
            .or_default()
            .push(tag);
    }

    /// Stable-sort every bucket by weight descending; equal weights keep
    /// their insertion (first-seen) order.
    pub fn sort_by_weight(&mut self) {
        for subcategories in self.buckets.values_mut() {
            for bucket in subcategories.values_mut() {
                bucket.sort_by(|a, b| b.weight.total_cmp(&a.weight));
            }
        }
    }

    /// Main categories in precedence order with their subcategory buckets.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SubcategoryBuckets)> {
        self.buckets.iter().map(|(name, buckets)| (*name, buckets))
    }

    /// Total number of tags across every bucket.
    #[must_use]
    pub fn total_tags(&self) -> usize {
        self.buckets
            .values()
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Tags of one bucket, if populated.
    #[must_use]
    pub fn bucket(&self, main: &str, sub: &str) -> Option<&[ClassifiedTag]> {
        self.buckets
            .get(main)
            .and_then(|subcategories| subcategories.get(sub))
            .map(Vec::as_slice)
    }
}

/// Classify every merged tag and bucket it into a sorted tree.
#[must_use]
pub fn organize(tags: &[MergedTag], classifier: &Classifier, taxonomy: &Taxonomy) -> CategoryTree {
    let mut tree = CategoryTree::seeded(taxonomy);

    for tag in tags {
        let (main_category, sub_category) = classifier.classify(&tag.text_en, &tag.text_cn);
        tree.insert(ClassifiedTag {
            text_en: tag.text_en.clone(),
            text_cn: tag.text_cn.clone(),
            weight: tag.weight,
            description: tag.description.clone(),
            main_category,
            sub_category,
        });
    }

    tree.sort_by_weight();
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::builtin_classifier;

    fn merged(en: &str, cn: &str, weight: f64) -> MergedTag {
        MergedTag {
            text_en: en.to_string(),
            text_cn: cn.to_string(),
            description: String::new(),
            weight,
            source: "S1".to_string(),
            occurrence_count: 1,
        }
    }

    #[test]
    fn empty_input_still_yields_all_main_categories() {
        let taxonomy = Taxonomy::builtin();
        let tree = organize(&[], builtin_classifier(), &taxonomy);

        let names: Vec<_> = tree.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["Body Parts", "Actions", "Clothing", "Scenes", "Art Styles", "Quality", "Other"]
        );
        assert_eq!(tree.total_tags(), 0);
        assert!(tree.iter().all(|(_, buckets)| buckets.is_empty()));
    }

    #[test]
    fn every_tag_lands_in_exactly_one_bucket() {
        let taxonomy = Taxonomy::builtin();
        let tags = vec![
            merged("hand", "", 1.1),
            merged("sci-fi", "科幻", 1.0),
            merged("qwzx", "", 1.0),
        ];
        let tree = organize(&tags, builtin_classifier(), &taxonomy);

        assert_eq!(tree.total_tags(), tags.len());
        assert_eq!(tree.bucket("Body Parts", "Upper Body").map(<[_]>::len), Some(1));
        assert_eq!(tree.bucket("Art Styles", "Science Fiction").map(<[_]>::len), Some(1));
        assert_eq!(tree.bucket("Other", "Unclassified").map(<[_]>::len), Some(1));
    }

    #[test]
    fn buckets_sort_by_weight_descending() {
        let taxonomy = Taxonomy::builtin();
        let tags = vec![merged("hand", "", 1.0), merged("arm", "", 1.5)];
        let tree = organize(&tags, builtin_classifier(), &taxonomy);

        let bucket = tree.bucket("Body Parts", "Upper Body").expect("bucket exists");
        assert_eq!(bucket[0].text_en, "arm");
        assert_eq!(bucket[1].text_en, "hand");
    }

    #[test]
    fn equal_weights_keep_insertion_order() {
        let taxonomy = Taxonomy::builtin();
        let tags = vec![
            merged("hand a", "", 1.0),
            merged("hand b", "", 1.0),
            merged("hand c", "", 1.0),
        ];
        let tree = organize(&tags, builtin_classifier(), &taxonomy);

        let bucket = tree.bucket("Body Parts", "Upper Body").expect("bucket exists");
        let order: Vec<_> = bucket.iter().map(|tag| tag.text_en.as_str()).collect();
        assert_eq!(order, ["hand a", "hand b", "hand c"]);
    }

    #[test]
    fn tree_serializes_in_precedence_order() {
        let taxonomy = Taxonomy::builtin();
        let tree = organize(&[merged("hand", "", 1.0)], builtin_classifier(), &taxonomy);
        let json = serde_json::to_value(&tree).expect("tree serializes");

        let keys: Vec<_> = json.as_object().expect("object").keys().cloned().collect();
        assert_eq!(
            keys,
            ["Body Parts", "Actions", "Clothing", "Scenes", "Art Styles", "Quality", "Other"]
        );
        assert_eq!(json["Body Parts"]["Upper Body"][0]["tag_en"], "hand");
    }
}
