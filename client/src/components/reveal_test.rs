use super::*;

#[test]
fn hidden_until_revealed() {
    assert_eq!(reveal_class("card", false, false), "card reveal");
    assert_eq!(reveal_class("card", true, false), "card reveal animate");
}

#[test]
fn compact_flag_appends_compact_class() {
    assert_eq!(reveal_class("card product-card", true, true), "card product-card reveal animate card-compact");
}
