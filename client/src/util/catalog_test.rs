use super::*;

#[test]
fn catalog_has_three_products_with_unique_ids() {
    assert_eq!(PRODUCTS.len(), 3);
    let mut ids = PRODUCTS.iter().map(|p| p.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn find_product_by_id() {
    let product = find_product("product2").expect("renewal cream");
    assert_eq!(product.name, "Renewal Cream");
    assert_eq!(product.price, "₩125,000");
    assert_eq!(product.benefits.len(), 4);
}

#[test]
fn unknown_product_is_none() {
    assert!(find_product("product4").is_none());
    assert!(find_product("").is_none());
}

#[test]
fn icons_follow_product_type() {
    assert_eq!(find_product("product1").map(ProductRecord::icon), Some("🧴"));
    assert_eq!(find_product("product2").map(ProductRecord::icon), Some("🫙"));
    assert_eq!(find_product("product3").map(ProductRecord::icon), Some("✨"));
}
