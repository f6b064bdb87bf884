// src/display/images.rs

use url::form_urlencoded;

/// Used when an item has neither an image nor a name.
pub const GENERIC_PLACEHOLDER: &str = "https://placehold.co/600x400?text=Laptop";

/// Prefix for the name-bearing placeholder; the escaped name is appended.
pub const NAMED_PLACEHOLDER_PREFIX: &str = "https://placehold.co/600x400?text=";

/// A manufacturer image picked when the name mentions any of `keywords`.
pub struct ImageRule {
    pub brand: &'static str,
    pub keywords: &'static [&'static str],
    pub image_url: &'static str,
}

/// Checked top to bottom; the first group with a matching keyword wins.
pub const IMAGE_RULES: &[ImageRule] = &[
    ImageRule {
        brand: "Dell",
        keywords: &["dell", "inspiron", "latitude", "xps", "vostro", "alienware"],
        image_url: "https://placehold.co/600x400/0076ce/ffffff?text=Dell",
    },
    ImageRule {
        brand: "HP",
        keywords: &["hp", "pavilion", "envy", "omen", "elitebook", "probook", "victus"],
        image_url: "https://placehold.co/600x400/0096d6/ffffff?text=HP",
    },
    ImageRule {
        brand: "Lenovo",
        keywords: &["lenovo", "thinkpad", "ideapad", "legion", "yoga"],
        image_url: "https://placehold.co/600x400/e2231a/ffffff?text=Lenovo",
    },
    ImageRule {
        brand: "Asus",
        keywords: &["asus", "vivobook", "zenbook", "rog", "tuf"],
        image_url: "https://placehold.co/600x400/00539b/ffffff?text=Asus",
    },
    ImageRule {
        brand: "Acer",
        keywords: &["acer", "aspire", "nitro", "predator", "swift"],
        image_url: "https://placehold.co/600x400/83b81a/ffffff?text=Acer",
    },
    ImageRule {
        brand: "Apple",
        keywords: &["apple", "macbook"],
        image_url: "https://placehold.co/600x400/555555/ffffff?text=MacBook",
    },
    ImageRule {
        brand: "MSI",
        keywords: &["msi"],
        image_url: "https://placehold.co/600x400/ff0000/ffffff?text=MSI",
    },
    ImageRule {
        brand: "Microsoft",
        keywords: &["microsoft", "surface"],
        image_url: "https://placehold.co/600x400/737373/ffffff?text=Surface",
    },
    ImageRule {
        brand: "Samsung",
        keywords: &["samsung", "galaxy book"],
        image_url: "https://placehold.co/600x400/1428a0/ffffff?text=Samsung",
    },
    ImageRule {
        brand: "LG",
        keywords: &["lg gram", "lg "],
        image_url: "https://placehold.co/600x400/a50034/ffffff?text=LG",
    },
    ImageRule {
        brand: "Gigabyte",
        keywords: &["gigabyte", "aorus"],
        image_url: "https://placehold.co/600x400/ff6600/ffffff?text=Gigabyte",
    },
];

/// First rule whose keywords appear in the lower-cased `name`.
pub fn match_rule(name: &str) -> Option<&'static ImageRule> {
    IMAGE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| name.contains(kw)))
}

/// Picks the image to show for an item.
///
/// An explicit URL is passed through untouched. Otherwise the item name is
/// matched against [`IMAGE_RULES`], and failing that a placeholder carrying
/// the escaped name is built.
///
/// The brand is normalized and logged but does not choose the rule.
pub fn resolve_image_url(
    explicit_url: Option<&str>,
    item_name: Option<&str>,
    brand_name: Option<&str>,
) -> String {
    if let Some(url) = explicit_url.filter(|u| !u.is_empty()) {
        return url.to_string();
    }

    let Some(name) = item_name.filter(|n| !n.is_empty()) else {
        return GENERIC_PLACEHOLDER.to_string();
    };

    let lowered = name.to_lowercase();
    let brand = brand_name.unwrap_or_default().to_lowercase();

    if let Some(rule) = match_rule(&lowered) {
        tracing::trace!(name, brand = %brand, matched = rule.brand, "image rule matched");
        return rule.image_url.to_string();
    }

    tracing::trace!(name, brand = %brand, "no image rule matched, using named placeholder");
    let escaped: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("{NAMED_PLACEHOLDER_PREFIX}{escaped}")
}
