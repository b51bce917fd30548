//! Styling recommendations, one bundle per undertone.
//!
//! This is versioned reference data: names, hex strings and the order of
//! every list are part of the response contract (the first metal is the top
//! pick), so entries must not be reordered.

use super::classifier::Undertone;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Metal {
    pub name: &'static str,
    pub hex: &'static str,
    pub rating: u8,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ClothingColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LipstickShade {
    pub name: &'static str,
    pub hex: &'static str,
    pub finish: &'static str,
    pub vibe: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BlushShade {
    pub name: &'static str,
    pub hex: &'static str,
    pub finish: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EyeshadowShade {
    pub name: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HairColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub level: &'static str,
}

/// What to stay away from: either a list of items or a single sentence.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Avoid {
    Items(&'static [&'static str]),
    Note(&'static str),
}

#[derive(Debug, Serialize)]
pub struct JewelryAdvice {
    pub metals: &'static [Metal],
    pub styles: &'static [&'static str],
    pub gemstones: &'static [&'static str],
    pub avoid: Avoid,
}

#[derive(Debug, Serialize)]
pub struct ClothingAdvice {
    pub colors: &'static [ClothingColor],
    pub styles: &'static [&'static str],
    pub fabrics: &'static [&'static str],
    pub patterns: &'static [&'static str],
    pub avoid: Avoid,
}

#[derive(Debug, Serialize)]
pub struct HairAdvice {
    pub colors: &'static [HairColor],
    pub styles: &'static [&'static str],
    pub treatments: &'static [&'static str],
    pub avoid: Avoid,
}

#[derive(Debug, Serialize)]
pub struct RecommendationBundle {
    pub jewelry: JewelryAdvice,
    pub clothing: ClothingAdvice,
    pub lipstick: &'static [LipstickShade],
    pub blush: &'static [BlushShade],
    pub eyeshadow: &'static [EyeshadowShade],
    pub hair: HairAdvice,
}

pub type CatalogEntry = (Undertone, &'static RecommendationBundle);

static CATALOG_ENTRIES: &[CatalogEntry] = &[
    (Undertone::Warm, &WARM),
    (Undertone::Cool, &COOL),
    (Undertone::Neutral, &NEUTRAL),
];

/// Read-only lookup from undertone to its bundle.
#[derive(Clone, Copy, Debug)]
pub struct RecommendationCatalog {
    entries: &'static [CatalogEntry],
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        RecommendationCatalog {
            entries: CATALOG_ENTRIES,
        }
    }
}

impl RecommendationCatalog {
    pub fn with_entries(entries: &'static [CatalogEntry]) -> Self {
        RecommendationCatalog { entries }
    }

    /// Undertones without an entry get the neutral bundle.
    pub fn bundle_for(&self, undertone: Undertone) -> &'static RecommendationBundle {
        self.entries
            .iter()
            .find(|(u, _)| *u == undertone)
            .map(|(_, bundle)| *bundle)
            .unwrap_or(&NEUTRAL)
    }
}

pub static WARM: RecommendationBundle = RecommendationBundle {
    jewelry: JewelryAdvice {
        metals: &[
            Metal { name: "Yellow Gold", hex: "#FFD700", rating: 5, note: "Perfect — radiates with warm skin" },
            Metal { name: "Rose Gold", hex: "#B76E79", rating: 4, note: "Soft warmth, very flattering" },
            Metal { name: "Copper", hex: "#B87333", rating: 4, note: "Earthy and elegant" },
            Metal { name: "Bronze", hex: "#CD7F32", rating: 3, note: "Bold bohemian vibe" },
            Metal { name: "Brass", hex: "#B5A642", rating: 3, note: "Vintage and unique" },
            Metal { name: "Gold-filled", hex: "#DAA520", rating: 5, note: "Affordable gold alternative" },
        ],
        styles: &[
            "Chunky gold chains",
            "Layered pendant necklaces",
            "Hoop earrings",
            "Stacked bangles",
            "Tribal-inspired pieces",
            "Hammered gold cuffs",
            "Coin pendants",
            "Vintage cameo brooches",
        ],
        gemstones: &[
            "Amber", "Citrine", "Carnelian", "Coral", "Topaz", "Garnet", "Tiger's Eye", "Ruby",
        ],
        avoid: Avoid::Items(&["Silver", "White Gold", "Platinum"]),
    },
    clothing: ClothingAdvice {
        colors: &[
            ClothingColor { name: "Terracotta", hex: "#C65D3C", category: "Earth" },
            ClothingColor { name: "Warm Camel", hex: "#C19A6B", category: "Neutral" },
            ClothingColor { name: "Olive Green", hex: "#808000", category: "Earth" },
            ClothingColor { name: "Rust Orange", hex: "#B7410E", category: "Warm" },
            ClothingColor { name: "Cream", hex: "#FFFDD0", category: "Neutral" },
            ClothingColor { name: "Warm Brown", hex: "#8B4513", category: "Earth" },
            ClothingColor { name: "Golden Yellow", hex: "#FFD700", category: "Warm" },
            ClothingColor { name: "Coral", hex: "#FF6B5B", category: "Warm" },
            ClothingColor { name: "Burnt Sienna", hex: "#E97451", category: "Earth" },
            ClothingColor { name: "Mustard", hex: "#FFDB58", category: "Warm" },
            ClothingColor { name: "Peach", hex: "#FFCBA4", category: "Warm" },
            ClothingColor { name: "Forest Green", hex: "#228B22", category: "Earth" },
            ClothingColor { name: "Warm Beige", hex: "#F5F0E8", category: "Neutral" },
            ClothingColor { name: "Copper Rose", hex: "#CB6D51", category: "Warm" },
            ClothingColor { name: "Sage", hex: "#87AE73", category: "Earth" },
            ClothingColor { name: "Warm Red", hex: "#CC2200", category: "Bold" },
        ],
        styles: &[
            "Bohemian / Boho",
            "Earthy Minimalist",
            "Warm Contemporary",
            "Mediterranean",
            "Desert Luxe",
            "Golden Hour Aesthetic",
            "Afrocentric Prints",
            "Vintage 70s",
        ],
        fabrics: &["Linen", "Cotton", "Suede", "Leather", "Silk Satin", "Velvet in warm tones"],
        patterns: &[
            "Tribal prints",
            "Floral in warm hues",
            "Abstract earth tones",
            "Animal print",
            "Paisley",
            "Batik",
        ],
        avoid: Avoid::Items(&["Icy blue", "Cool grey", "Pure white", "Lavender", "Cool mint"]),
    },
    lipstick: &[
        LipstickShade { name: "Warm Coral", hex: "#FF6B5B", finish: "Gloss", vibe: "Playful" },
        LipstickShade { name: "Peachy Nude", hex: "#FFAB91", finish: "Matte", vibe: "Natural" },
        LipstickShade { name: "Terracotta Red", hex: "#C05A3A", finish: "Satin", vibe: "Earthy" },
        LipstickShade { name: "Brick Rose", hex: "#C45C75", finish: "Matte", vibe: "Romantic" },
        LipstickShade { name: "Warm Berry", hex: "#8B3A5A", finish: "Velvet", vibe: "Bold" },
        LipstickShade { name: "Papaya", hex: "#FF9A6C", finish: "Gloss", vibe: "Fresh" },
        LipstickShade { name: "Cinnamon", hex: "#8B4010", finish: "Matte", vibe: "Sultry" },
        LipstickShade { name: "Golden Brown", hex: "#996633", finish: "Satin", vibe: "Editorial" },
    ],
    blush: &[
        BlushShade { name: "Peach Glow", hex: "#FFCBA4", finish: "Shimmer" },
        BlushShade { name: "Warm Apricot", hex: "#FFB347", finish: "Matte" },
        BlushShade { name: "Coral Flush", hex: "#FF7F50", finish: "Satin" },
        BlushShade { name: "Golden Rose", hex: "#FF91A4", finish: "Glow" },
        BlushShade { name: "Sun-Kissed", hex: "#E8956D", finish: "Bronzy" },
        BlushShade { name: "Warm Honey", hex: "#F4A460", finish: "Shimmer" },
    ],
    eyeshadow: &[
        EyeshadowShade { name: "Warm Bronze", hex: "#CD7F32" },
        EyeshadowShade { name: "Copper Shimmer", hex: "#B87333" },
        EyeshadowShade { name: "Burnt Sienna", hex: "#E97451" },
        EyeshadowShade { name: "Golden Taupe", hex: "#8B7355" },
        EyeshadowShade { name: "Rich Brown", hex: "#5C4033" },
        EyeshadowShade { name: "Champagne", hex: "#F7E7CE" },
        EyeshadowShade { name: "Rust", hex: "#B7410E" },
        EyeshadowShade { name: "Amber", hex: "#FFBF00" },
    ],
    hair: HairAdvice {
        colors: &[
            HairColor { name: "Golden Blonde", hex: "#E8D5B7", level: "Light" },
            HairColor { name: "Honey Brown", hex: "#C4922A", level: "Medium" },
            HairColor { name: "Warm Auburn", hex: "#922B21", level: "Medium-Dark" },
            HairColor { name: "Rich Caramel", hex: "#D2691E", level: "Medium" },
            HairColor { name: "Copper Red", hex: "#B87333", level: "Medium" },
            HairColor { name: "Chocolate Brown", hex: "#5C3317", level: "Dark" },
            HairColor { name: "Warm Black", hex: "#1C0A00", level: "Darkest" },
            HairColor { name: "Strawberry Blonde", hex: "#E8B4A0", level: "Light" },
            HairColor { name: "Chestnut", hex: "#8B4513", level: "Medium-Dark" },
        ],
        styles: &[
            "Beachy waves",
            "Loose curls",
            "Bohemian braids",
            "Textured lob",
            "Voluminous blowout",
        ],
        treatments: &["Balayage", "Highlights", "Ombre", "Gloss treatment"],
        avoid: Avoid::Note("Ash blonde, cool platinum, blue-black, silver tones"),
    },
};

pub static COOL: RecommendationBundle = RecommendationBundle {
    jewelry: JewelryAdvice {
        metals: &[
            Metal { name: "Sterling Silver", hex: "#C0C0C0", rating: 5, note: "Classic — makes skin luminous" },
            Metal { name: "White Gold", hex: "#E8E8E8", rating: 5, note: "Luxurious and elegant" },
            Metal { name: "Platinum", hex: "#E5E4E2", rating: 4, note: "Ultra-premium cool metal" },
            Metal { name: "Rhodium", hex: "#D0D0D0", rating: 4, note: "High-shine, very modern" },
            Metal { name: "Pewter", hex: "#96A8A1", rating: 3, note: "Understated and artsy" },
            Metal { name: "Gunmetal", hex: "#2C3539", rating: 3, note: "Edgy and cool" },
        ],
        styles: &[
            "Delicate silver chains",
            "Geometric earrings",
            "Art deco pieces",
            "Minimalist studs",
            "Crystal-encrusted bands",
            "Modern sculptural rings",
            "Long drop earrings",
            "Layered fine chains",
        ],
        gemstones: &[
            "Diamond",
            "Sapphire",
            "Amethyst",
            "Aquamarine",
            "Moonstone",
            "Blue Topaz",
            "Tanzanite",
            "Pearl",
        ],
        avoid: Avoid::Items(&["Yellow Gold", "Copper", "Bronze", "Brass"]),
    },
    clothing: ClothingAdvice {
        colors: &[
            ClothingColor { name: "Icy Lavender", hex: "#B39DDB", category: "Cool" },
            ClothingColor { name: "Navy Blue", hex: "#283593", category: "Classic" },
            ClothingColor { name: "Emerald Green", hex: "#00695C", category: "Bold" },
            ClothingColor { name: "Rose Pink", hex: "#E91E63", category: "Warm-Cool" },
            ClothingColor { name: "True White", hex: "#FFFFFF", category: "Neutral" },
            ClothingColor { name: "Charcoal", hex: "#37474F", category: "Classic" },
            ClothingColor { name: "Ice Blue", hex: "#87CEEB", category: "Cool" },
            ClothingColor { name: "Fuchsia", hex: "#FF00FF", category: "Bold" },
            ClothingColor { name: "Cool Gray", hex: "#9E9E9E", category: "Neutral" },
            ClothingColor { name: "Royal Blue", hex: "#4169E1", category: "Bold" },
            ClothingColor { name: "Dusty Lilac", hex: "#DCC8E8", category: "Soft" },
            ClothingColor { name: "Jade", hex: "#00A86B", category: "Bold" },
            ClothingColor { name: "Cool Blush", hex: "#FFB6C1", category: "Soft" },
            ClothingColor { name: "Plum", hex: "#8E4585", category: "Bold" },
            ClothingColor { name: "Cool Mint", hex: "#98FF98", category: "Fresh" },
            ClothingColor { name: "Berry", hex: "#8B0057", category: "Deep" },
        ],
        styles: &[
            "Modern Minimalist",
            "Monochrome Cool",
            "Scandinavian",
            "Sharp Tailored",
            "Cool-Girl Aesthetic",
            "Art Deco Inspired",
            "Urban Chic",
            "Classic Preppy",
        ],
        fabrics: &["Silk", "Cotton poplin", "Crisp linen", "Cashmere", "Structured crepe", "Chiffon"],
        patterns: &[
            "Clean geometric",
            "Houndstooth",
            "Plaid",
            "Watercolor florals",
            "Abstract cool tones",
            "Stripes",
        ],
        avoid: Avoid::Items(&["Orange", "Yellow-green", "Warm brown", "Rust", "Mustard"]),
    },
    lipstick: &[
        LipstickShade { name: "Cool Berry", hex: "#8B008B", finish: "Velvet", vibe: "Bold" },
        LipstickShade { name: "Blue Mauve", hex: "#E0B0FF", finish: "Gloss", vibe: "Ethereal" },
        LipstickShade { name: "True Red", hex: "#CC0000", finish: "Matte", vibe: "Classic" },
        LipstickShade { name: "Dusty Rose", hex: "#D4909A", finish: "Satin", vibe: "Romantic" },
        LipstickShade { name: "Deep Plum", hex: "#4A0030", finish: "Matte", vibe: "Sultry" },
        LipstickShade { name: "Raspberry", hex: "#E30B5D", finish: "Gloss", vibe: "Vibrant" },
        LipstickShade { name: "Cool Pink", hex: "#FF69B4", finish: "Gloss", vibe: "Playful" },
        LipstickShade { name: "Burgundy", hex: "#800020", finish: "Velvet", vibe: "Dramatic" },
    ],
    blush: &[
        BlushShade { name: "Cool Pink", hex: "#FFB6C1", finish: "Shimmer" },
        BlushShade { name: "Berry Flush", hex: "#DDA0DD", finish: "Matte" },
        BlushShade { name: "Rose Mauve", hex: "#C9A0DC", finish: "Satin" },
        BlushShade { name: "Soft Lilac", hex: "#E8B4B8", finish: "Glow" },
        BlushShade { name: "Plum Dust", hex: "#B57EA0", finish: "Matte" },
        BlushShade { name: "Icy Pink", hex: "#FFC0CB", finish: "Pearl" },
    ],
    eyeshadow: &[
        EyeshadowShade { name: "Smoky Charcoal", hex: "#36454F" },
        EyeshadowShade { name: "Navy", hex: "#283593" },
        EyeshadowShade { name: "Cool Mauve", hex: "#967BB6" },
        EyeshadowShade { name: "Icy Pink", hex: "#FFB6C1" },
        EyeshadowShade { name: "Silver Chrome", hex: "#C0C0C0" },
        EyeshadowShade { name: "Deep Purple", hex: "#4B0082" },
        EyeshadowShade { name: "Steel Blue", hex: "#4682B4" },
        EyeshadowShade { name: "Pale Gold", hex: "#EEE8AA" },
    ],
    hair: HairAdvice {
        colors: &[
            HairColor { name: "Ash Blonde", hex: "#E5D3B3", level: "Light" },
            HairColor { name: "Platinum", hex: "#E8E8E8", level: "Lightest" },
            HairColor { name: "Cool Brown", hex: "#4E4040", level: "Dark" },
            HairColor { name: "Blue-Black", hex: "#0D0D0D", level: "Darkest" },
            HairColor { name: "Burgundy", hex: "#800020", level: "Dark" },
            HairColor { name: "Ash Brown", hex: "#8B8680", level: "Medium" },
            HairColor { name: "Cool Black", hex: "#1A1A2E", level: "Darkest" },
            HairColor { name: "Ice Blonde", hex: "#F5F5DC", level: "Lightest" },
            HairColor { name: "Violet Brown", hex: "#5C3A5C", level: "Dark" },
        ],
        styles: &[
            "Sleek straight",
            "Sharp bob",
            "Blunt cut",
            "Icy highlights",
            "Smooth blowout",
        ],
        treatments: &["Toning", "Gloss", "Ash highlights", "Cool balayage"],
        avoid: Avoid::Note("Golden blonde, warm auburn, copper, orange tones"),
    },
};

pub static NEUTRAL: RecommendationBundle = RecommendationBundle {
    jewelry: JewelryAdvice {
        metals: &[
            Metal { name: "Rose Gold", hex: "#B76E79", rating: 5, note: "Perfect balance of warm & cool" },
            Metal { name: "Yellow Gold", hex: "#FFD700", rating: 4, note: "Warm brightness" },
            Metal { name: "Silver", hex: "#C0C0C0", rating: 4, note: "Clean and versatile" },
            Metal { name: "Mixed Metal", hex: "#C0A080", rating: 5, note: "Mix freely — you can!" },
            Metal { name: "Gold-fill", hex: "#DAA520", rating: 4, note: "Everyday luxury" },
            Metal { name: "Brushed Gold", hex: "#C8A951", rating: 4, note: "Matte warmth" },
        ],
        styles: &[
            "Mixed metal layering",
            "Delicate stacking rings",
            "Statement pendants",
            "Huggie hoops",
            "Versatile chains",
            "Pearl drops",
            "Signet rings",
            "Charm bracelets",
        ],
        gemstones: &[
            "Rose Quartz",
            "Morganite",
            "Green Tourmaline",
            "Opal",
            "Alexandrite",
            "Pink Sapphire",
            "Labradorite",
        ],
        avoid: Avoid::Note("Nothing — neutral tones are the most versatile!"),
    },
    clothing: ClothingAdvice {
        colors: &[
            ClothingColor { name: "Dusty Rose", hex: "#D4A5A5", category: "Soft" },
            ClothingColor { name: "Sage Green", hex: "#8FBC8F", category: "Earth" },
            ClothingColor { name: "Soft Navy", hex: "#1F3A5F", category: "Classic" },
            ClothingColor { name: "Warm Gray", hex: "#9E9E9E", category: "Neutral" },
            ClothingColor { name: "Blush", hex: "#FFB6C1", category: "Soft" },
            ClothingColor { name: "Teal", hex: "#008080", category: "Bold" },
            ClothingColor { name: "Muted Mauve", hex: "#A07080", category: "Soft" },
            ClothingColor { name: "Warm Ivory", hex: "#FFFFF0", category: "Neutral" },
            ClothingColor { name: "Soft Camel", hex: "#C19A6B", category: "Neutral" },
            ClothingColor { name: "Dusty Blue", hex: "#788DB4", category: "Cool-Soft" },
            ClothingColor { name: "Lilac", hex: "#C8A2C8", category: "Soft" },
            ClothingColor { name: "Soft Olive", hex: "#A8A87A", category: "Earth" },
            ClothingColor { name: "Rose Taupe", hex: "#8B7D7B", category: "Neutral" },
            ClothingColor { name: "Periwinkle", hex: "#CCCCFF", category: "Cool-Soft" },
            ClothingColor { name: "Soft Terracotta", hex: "#CB8B6A", category: "Warm" },
            ClothingColor { name: "Berry Mist", hex: "#9B6B9B", category: "Soft" },
        ],
        styles: &[
            "Soft Romantic",
            "Effortless Chic",
            "Modern Classic",
            "Neutral Luxe",
            "Quiet Luxury",
            "Soft Power Dressing",
            "Transitional Seasons",
            "Versatile Capsule Wardrobe",
        ],
        fabrics: &["Soft jersey", "Modal", "Silk", "Cotton blend", "Cashmere", "Lightweight wool"],
        patterns: &[
            "Soft florals",
            "Subtle checks",
            "Watercolor prints",
            "Tonal texture",
            "Delicate stripe",
        ],
        avoid: Avoid::Note("Neon colors, very saturated extremes in either direction"),
    },
    lipstick: &[
        LipstickShade { name: "Rosy Nude", hex: "#C68642", finish: "Satin", vibe: "Natural" },
        LipstickShade { name: "Soft Mauve", hex: "#D8A0A0", finish: "Matte", vibe: "Everyday" },
        LipstickShade { name: "Blush Pink", hex: "#FFB6C1", finish: "Gloss", vibe: "Fresh" },
        LipstickShade { name: "Medium Rose", hex: "#C06080", finish: "Velvet", vibe: "Romantic" },
        LipstickShade { name: "Soft Berry", hex: "#8B4560", finish: "Satin", vibe: "Evening" },
        LipstickShade { name: "Warm Nude", hex: "#D2906A", finish: "Matte", vibe: "Classic" },
        LipstickShade { name: "Sheer Cherry", hex: "#DC143C", finish: "Gloss", vibe: "Playful" },
        LipstickShade { name: "Mocha", hex: "#7B4F3A", finish: "Matte", vibe: "Editorial" },
    ],
    blush: &[
        BlushShade { name: "Soft Rose", hex: "#FFB6C1", finish: "Shimmer" },
        BlushShade { name: "Neutral Pink", hex: "#D8A0B0", finish: "Matte" },
        BlushShade { name: "Dusty Mauve", hex: "#BC8F8F", finish: "Satin" },
        BlushShade { name: "Sheer Berry", hex: "#C8A0B8", finish: "Glow" },
        BlushShade { name: "Rosewood", hex: "#A05070", finish: "Matte" },
        BlushShade { name: "Petal", hex: "#E8C4C8", finish: "Pearl" },
    ],
    eyeshadow: &[
        EyeshadowShade { name: "Warm Taupe", hex: "#8B7355" },
        EyeshadowShade { name: "Dusty Rose", hex: "#D8A0A0" },
        EyeshadowShade { name: "Soft Brown", hex: "#6B4226" },
        EyeshadowShade { name: "Muted Plum", hex: "#7B5B8A" },
        EyeshadowShade { name: "Champagne", hex: "#F7E7CE" },
        EyeshadowShade { name: "Rosy Mauve", hex: "#C09080" },
        EyeshadowShade { name: "Soft Gray", hex: "#9E9E9E" },
        EyeshadowShade { name: "Blush Pearl", hex: "#F0D0D0" },
    ],
    hair: HairAdvice {
        colors: &[
            HairColor { name: "Medium Brown", hex: "#8B6914", level: "Medium" },
            HairColor { name: "Dark Blonde", hex: "#C9A84C", level: "Medium-Light" },
            HairColor { name: "Warm Brunette", hex: "#5C3A1E", level: "Dark" },
            HairColor { name: "Chestnut", hex: "#8B4513", level: "Medium-Dark" },
            HairColor { name: "Soft Black", hex: "#1C1C1C", level: "Darkest" },
            HairColor { name: "Mocha", hex: "#6B3A2A", level: "Dark" },
            HairColor { name: "Toffee", hex: "#A0522D", level: "Medium" },
            HairColor { name: "Cool-Warm Brown", hex: "#704214", level: "Dark" },
            HairColor { name: "Sun-Kissed Brunette", hex: "#7A5C2E", level: "Medium" },
        ],
        styles: &[
            "Soft waves",
            "Textured layers",
            "Balayage lob",
            "Natural texture",
            "Versatile length",
        ],
        treatments: &["Balayage", "Gloss", "Color melt", "Tonal highlights"],
        avoid: Avoid::Note("Very extreme warm OR very ashy — keep it balanced"),
    },
};
