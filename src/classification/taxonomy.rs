//! Static bilingual keyword taxonomy.
//!
//! Pure data: six main categories, each with ordered subcategories, each
//! subcategory a set of lowercase keywords in both scripts. The order of
//! categories and subcategories is the classification precedence and is
//! significant — the classifier returns the first match in this order.
//!
//! The taxonomy is injected into [`crate::classification::Classifier`]
//! rather than referenced as implicit global state, so tests can substitute
//! a smaller one.

/// Main category every unmatched tag falls back to.
pub const FALLBACK_MAIN: &str = "Other";
/// Subcategory every unmatched tag falls back to.
pub const FALLBACK_SUB: &str = "Unclassified";

/// A subcategory and its keyword set. Keywords are lowercase; matching is
/// plain substring, so multi-word phrases like `"living room"` are allowed.
#[derive(Debug, Clone, Copy)]
pub struct SubCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// A main category; subcategories are scanned in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct MainCategory {
    pub name: &'static str,
    pub subcategories: &'static [SubCategory],
}

/// An ordered list of main categories, evaluated first to last.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    categories: &'static [MainCategory],
}

impl Taxonomy {
    #[must_use]
    pub const fn new(categories: &'static [MainCategory]) -> Self {
        Self { categories }
    }

    /// The built-in catalog taxonomy.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_CATEGORIES)
    }

    /// Categories in precedence order.
    #[must_use]
    pub fn categories(&self) -> &'static [MainCategory] {
        self.categories
    }

    /// Main category names in precedence order, fallback excluded.
    pub fn main_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|category| category.name)
    }
}

const BODY_PARTS: MainCategory = MainCategory {
    name: "Body Parts",
    subcategories: &[
        SubCategory {
            name: "Head",
            keywords: &[
                "head", "face", "hair", "eye", "eyes", "nose", "mouth", "ear", "ears", "neck",
                "头", "脸", "头发", "眼睛", "鼻子", "嘴", "耳朵", "脖子", "表情", "头饰",
            ],
        },
        SubCategory {
            name: "Upper Body",
            keywords: &[
                "shoulder", "shoulders", "chest", "breast", "breasts", "arm", "arms", "hand",
                "hands", "finger", "fingers", "肩膀", "胸", "胸部", "手臂", "手", "手指",
                "上半身", "腰",
            ],
        },
        SubCategory {
            name: "Lower Body",
            keywords: &[
                "leg", "legs", "foot", "feet", "thigh", "thighs", "calf", "calves", "knee",
                "knees", "toe", "toes", "hip", "hips", "腿", "脚", "大腿", "小腿", "膝盖",
                "脚趾", "臀部", "下半身",
            ],
        },
        SubCategory {
            name: "Full Body",
            keywords: &[
                "body", "figure", "posture", "pose", "stance", "physique", "build", "身体",
                "体型", "姿势", "姿态", "体格", "全身",
            ],
        },
    ],
};

const ACTIONS: MainCategory = MainCategory {
    name: "Actions",
    subcategories: &[
        SubCategory {
            name: "Standing",
            keywords: &["stand", "standing", "upright", "erect", "站立", "站着", "直立"],
        },
        SubCategory {
            name: "Sitting",
            keywords: &["sit", "sitting", "seated", "坐", "坐着", "就座"],
        },
        SubCategory {
            name: "Lying",
            keywords: &[
                "lie", "lying", "recline", "recumbent", "prone", "supine", "躺", "躺着", "卧",
                "卧倒",
            ],
        },
        SubCategory {
            name: "Walking",
            keywords: &["walk", "walking", "stride", "striding", "走", "行走", "步行", "迈步"],
        },
        SubCategory {
            name: "Running",
            keywords: &[
                "run", "running", "jog", "jogging", "sprint", "sprinting", "跑", "跑步", "奔跑",
                "冲刺",
            ],
        },
        SubCategory {
            name: "Jumping",
            keywords: &[
                "jump", "jumping", "leap", "leaping", "hop", "hopping", "跳", "跳跃", "腾空",
                "跃起",
            ],
        },
        SubCategory {
            name: "Dancing",
            keywords: &["dance", "dancing", "ballet", "舞", "舞蹈", "跳舞", "芭蕾"],
        },
        SubCategory {
            name: "Bending",
            keywords: &[
                "bend", "bending", "stoop", "stooping", "crouch", "crouching", "弯腰", "弯身",
                "俯身", "蹲",
            ],
        },
        SubCategory {
            name: "Stretching",
            keywords: &[
                "stretch", "stretching", "extend", "extending", "伸展", "延伸", "拉伸",
            ],
        },
        SubCategory {
            name: "Fighting",
            keywords: &[
                "fight", "fighting", "punch", "punching", "kick", "kicking", "打", "打架",
                "格斗", "踢", "出拳",
            ],
        },
        SubCategory {
            name: "Hugging",
            keywords: &["hug", "hugging", "embrace", "embracing", "拥抱", "抱", "搂抱"],
        },
        SubCategory {
            name: "Kissing",
            keywords: &["kiss", "kissing", "peck", "吻", "亲吻", "亲", "接吻"],
        },
    ],
};

const CLOTHING: MainCategory = MainCategory {
    name: "Clothing",
    subcategories: &[
        SubCategory {
            name: "Tops",
            keywords: &[
                "shirt", "blouse", "top", "t-shirt", "sweater", "jacket", "coat", "hoodie",
                "衬衫", "上衣", "t恤", "毛衣", "夹克", "外套", "连帽衫",
            ],
        },
        SubCategory {
            name: "Bottoms",
            keywords: &[
                "pants", "trousers", "jeans", "shorts", "skirt", "leggings", "裤子", "牛仔裤",
                "短裤", "裙子", "紧身裤",
            ],
        },
        SubCategory {
            name: "One-Piece",
            keywords: &[
                "dress", "jumpsuit", "romper", "overalls", "uniform", "suit", "连衣裙",
                "连体裤", "工装连体裤", "制服", "套装",
            ],
        },
        SubCategory {
            name: "Underwear",
            keywords: &[
                "bra", "underwear", "panties", "briefs", "boxer", "lingerie", "胸罩", "内衣",
                "内裤", "三角裤", "平角裤", "情趣内衣",
            ],
        },
        SubCategory {
            name: "Footwear",
            keywords: &[
                "shoe", "shoes", "sock", "socks", "boot", "boots", "heel", "heels", "sneaker",
                "sneakers", "鞋", "袜子", "靴子", "高跟鞋", "运动鞋",
            ],
        },
        SubCategory {
            name: "Accessories",
            keywords: &[
                "hat", "cap", "scarf", "glove", "gloves", "jewelry", "necklace", "earring",
                "ring", "bracelet", "帽子", "围巾", "手套", "珠宝", "项链", "耳环", "戒指",
                "手镯",
            ],
        },
    ],
};

const SCENES: MainCategory = MainCategory {
    name: "Scenes",
    subcategories: &[
        SubCategory {
            name: "Nature",
            keywords: &[
                "nature", "forest", "mountain", "river", "lake", "ocean", "sea", "beach", "sky",
                "cloud", "自然", "森林", "山", "河", "湖", "海洋", "海", "沙滩", "天空", "云",
            ],
        },
        SubCategory {
            name: "Urban",
            keywords: &[
                "city", "urban", "street", "building", "skyscraper", "downtown", "suburb",
                "neighborhood", "城市", "市区", "街道", "建筑", "摩天大楼", "市中心", "郊区",
                "社区",
            ],
        },
        SubCategory {
            name: "Indoor",
            keywords: &[
                "indoor", "room", "living room", "bedroom", "bathroom", "kitchen", "office",
                "classroom", "室内", "房间", "客厅", "卧室", "浴室", "厨房", "办公室", "教室",
            ],
        },
        SubCategory {
            name: "Fantasy",
            keywords: &[
                "fantasy", "magical", "surreal", "dreamlike", "otherworldly", "mythical",
                "legendary", "幻想", "魔幻", "超现实", "梦境", "异世界", "神话", "传说",
            ],
        },
    ],
};

const ART_STYLES: MainCategory = MainCategory {
    name: "Art Styles",
    subcategories: &[
        SubCategory {
            name: "Realism",
            keywords: &[
                "realism", "realistic", "photorealistic", "hyperrealistic", "lifelike",
                "现实主义", "写实", "照片级", "超写实", "逼真",
            ],
        },
        SubCategory {
            name: "Cartoon",
            keywords: &[
                "cartoon", "animated", "anime", "manga", "comic", "卡通", "动画", "动漫",
                "漫画", "漫",
            ],
        },
        SubCategory {
            name: "Abstract",
            keywords: &[
                "abstract", "non-representational", "non-figurative", "non-objective", "抽象",
                "非具象", "非形象",
            ],
        },
        SubCategory {
            name: "Impressionism",
            keywords: &["impressionism", "impressionistic", "印象派", "印象主义"],
        },
        SubCategory {
            name: "Expressionism",
            keywords: &["expressionism", "expressionist", "表现主义"],
        },
        SubCategory {
            name: "Surrealism",
            keywords: &["surrealism", "surrealist", "dreamlike", "超现实主义", "梦境般"],
        },
        SubCategory {
            name: "Cyberpunk",
            keywords: &[
                "cyberpunk", "cyber", "futuristic", "neon", "赛博朋克", "未来主义", "霓虹",
            ],
        },
        SubCategory {
            name: "Fantasy",
            keywords: &[
                "fantasy", "magical", "mystical", "enchanted", "奇幻", "魔幻", "神秘", "魔法",
            ],
        },
        SubCategory {
            name: "Science Fiction",
            keywords: &[
                "sci-fi", "science fiction", "futuristic", "space", "科幻", "科学幻想", "未来",
                "太空",
            ],
        },
    ],
};

const QUALITY: MainCategory = MainCategory {
    name: "Quality",
    subcategories: &[
        SubCategory {
            name: "High Quality",
            keywords: &[
                "high quality", "hq", "masterpiece", "best quality", "detailed", "intricate",
                "fine detail", "高质量", "杰作", "最佳质量", "细节", "精细", "精致",
            ],
        },
        SubCategory {
            name: "Low Quality",
            keywords: &[
                "low quality", "lq", "worst quality", "blurry", "pixelated", "artifacts",
                "noise", "低质量", "最差质量", "模糊", "像素化", "噪点",
            ],
        },
    ],
};

const BUILTIN_CATEGORIES: &[MainCategory] =
    &[BODY_PARTS, ACTIONS, CLOTHING, SCENES, ART_STYLES, QUALITY];
