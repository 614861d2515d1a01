//! Curated prompt combinations.
//!
//! Hand-authored starter sets shipped alongside the generated catalog; not
//! derived from the input data. Category references use the taxonomy's
//! names, so consumers can join them against the other projections.

use serde::Serialize;

/// One tag reference inside a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombinationTag {
    pub main_category: &'static str,
    pub sub_category: &'static str,
    pub tag_en: &'static str,
    pub tag_cn: &'static str,
}

/// A named, ready-to-use set of prompt tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    pub name: &'static str,
    pub name_cn: &'static str,
    pub tags: Vec<CombinationTag>,
}

/// The shipped combinations.
#[must_use]
pub fn predefined() -> Vec<Combination> {
    vec![
        Combination {
            name: "Anime-style girl",
            name_cn: "动漫风格少女",
            tags: vec![
                tag("Body Parts", "Head", "anime face", "动漫脸"),
                tag("Body Parts", "Full Body", "beautiful girl", "美少女"),
                tag("Art Styles", "Cartoon", "anime style", "动漫风格"),
                tag("Quality", "High Quality", "masterpiece", "杰作"),
            ],
        },
        Combination {
            name: "Natural scenery",
            name_cn: "自然风景",
            tags: vec![
                tag("Scenes", "Nature", "beautiful landscape", "美丽风景"),
                tag("Scenes", "Nature", "mountains", "山脉"),
                tag("Scenes", "Nature", "lake", "湖泊"),
                tag("Quality", "High Quality", "high quality", "高质量"),
            ],
        },
        Combination {
            name: "Sci-fi city",
            name_cn: "科幻城市",
            tags: vec![
                tag("Scenes", "Urban", "futuristic city", "未来城市"),
                tag("Art Styles", "Science Fiction", "sci-fi", "科幻"),
                tag("Art Styles", "Cyberpunk", "cyberpunk", "赛博朋克"),
                tag("Quality", "High Quality", "detailed", "细节"),
            ],
        },
        Combination {
            name: "Realistic portrait",
            name_cn: "写实人像",
            tags: vec![
                tag("Body Parts", "Head", "realistic face", "写实脸部"),
                tag("Body Parts", "Full Body", "human", "人类"),
                tag("Art Styles", "Realism", "photorealistic", "照片级写实"),
                tag("Quality", "High Quality", "high detail", "高细节"),
            ],
        },
    ]
}

const fn tag(
    main_category: &'static str,
    sub_category: &'static str,
    tag_en: &'static str,
    tag_cn: &'static str,
) -> CombinationTag {
    CombinationTag {
        main_category,
        sub_category,
        tag_en,
        tag_cn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Taxonomy;

    #[test]
    fn combinations_reference_real_taxonomy_buckets() {
        let taxonomy = Taxonomy::builtin();
        for combination in predefined() {
            for tag in &combination.tags {
                let category = taxonomy
                    .categories()
                    .iter()
                    .find(|category| category.name == tag.main_category)
                    .unwrap_or_else(|| panic!("unknown category {}", tag.main_category));
                assert!(
                    category
                        .subcategories
                        .iter()
                        .any(|sub| sub.name == tag.sub_category),
                    "unknown subcategory {}/{}",
                    tag.main_category,
                    tag.sub_category
                );
            }
        }
    }

    #[test]
    fn every_combination_is_bilingual_and_non_empty() {
        for combination in predefined() {
            assert!(!combination.tags.is_empty());
            assert!(!combination.name.is_empty());
            assert!(!combination.name_cn.is_empty());
            for tag in &combination.tags {
                assert!(!tag.tag_en.is_empty());
                assert!(!tag.tag_cn.is_empty());
            }
        }
    }
}
