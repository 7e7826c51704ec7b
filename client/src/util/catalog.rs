//! Static product catalog shown in the product section and detail modal.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One catalog entry. Read-only for the lifetime of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub ingredients: &'static [&'static str],
    pub usage: &'static str,
}

impl ProductRecord {
    /// Emoji shown in place of a product photo.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        if self.name.contains("Essence") {
            "🧴"
        } else if self.name.contains("Cream") {
            "🫙"
        } else {
            "✨"
        }
    }
}

pub const PRODUCTS: &[ProductRecord] = &[
    ProductRecord {
        id: "product1",
        name: "Hydra Essence",
        price: "₩89,000",
        description: "A premium essence that delivers deep hydration with hyaluronic acid and natural moisturizing ingredients.",
        benefits: &["Deep moisture", "Soothing", "Firmer skin", "Stronger moisture barrier"],
        ingredients: &["Hyaluronic acid", "Ceramide", "Panthenol", "Aloe vera"],
        usage: "After cleansing and toner, smooth an appropriate amount over the whole face.",
    },
    ProductRecord {
        id: "product2",
        name: "Renewal Cream",
        price: "₩125,000",
        description: "An anti-aging cream with collagen and peptides that helps smooth wrinkles and restore elasticity.",
        benefits: &["Wrinkle care", "Elasticity", "Nourishment", "Skin renewal"],
        ingredients: &["Collagen", "Peptides", "Retinol", "Vitamin E"],
        usage: "After essence, apply an appropriate amount over the face and massage gently.",
    },
    ProductRecord {
        id: "product3",
        name: "Brightening Serum",
        price: "₩98,000",
        description: "A serum with glutathione and vitamin C that targets dark spots and blemishes for clear, even skin.",
        benefits: &["Whitening", "Dark spot care", "Brightening", "Even skin tone"],
        ingredients: &["Glutathione", "Vitamin C", "Niacinamide", "Arbutin"],
        usage: "Use in your evening routine after essence, together with sunscreen during the day.",
    },
];

/// Catalog entry for `id`, if there is one.
#[must_use]
pub fn find_product(id: &str) -> Option<&'static ProductRecord> {
    PRODUCTS.iter().find(|p| p.id == id)
}
