use super::*;

#[test]
fn now_millis_is_after_2020() {
    assert!(now_millis() > 1_577_836_800_000);
}

#[test]
fn unique_millis_never_repeats() {
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(unique_millis()));
    }
}

#[test]
fn unique_millis_is_increasing() {
    let a = unique_millis();
    let b = unique_millis();
    assert!(b > a);
}

#[tokio::test]
async fn sleep_ms_resolves_outside_browser() {
    sleep_ms(10_000).await;
}
