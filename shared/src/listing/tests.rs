use super::*;

fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        title: title.into(),
        ..Product::default()
    }
}

#[test]
fn begin_clears_error_but_keeps_stale_products() {
    let mut state = ListingState::default();
    state.resolve_ok(vec![product(1, "a"), product(2, "b")], 2);

    state.error = Some("old".into());
    state.begin();

    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.products.len(), 2, "stale list stays visible while reloading");
}

#[test]
fn first_load_is_distinguished_from_reload() {
    let mut state = ListingState::default();
    state.begin();
    assert!(state.is_initial_load());

    state.resolve_ok(vec![product(1, "a")], 1);
    state.begin();
    assert!(!state.is_initial_load());
    assert!(state.loading);
}

#[test]
fn success_replaces_list_and_total_together() {
    let mut state = ListingState::default();
    state.begin();
    state.resolve_ok(vec![product(1, "a")], 37);

    assert!(!state.loading);
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.total, 37);
    assert_eq!(state.error, None);
}

#[test]
fn listing_error_empties_products_and_total() {
    let mut state = ListingState::default();
    state.resolve_ok(vec![product(1, "a")], 1);

    state.begin();
    state.resolve_err("upstream unavailable");

    assert!(state.products.is_empty());
    assert_eq!(state.total, 0);
    assert_eq!(state.error.as_deref(), Some("upstream unavailable"));
    assert!(!state.loading);
}

#[test]
fn category_error_degrades_to_empty_without_error() {
    let mut categories = CategoryList::default();
    categories.resolve_ok(vec!["smartphones".into(), "laptops".into()]);
    assert_eq!(categories.items.len(), 2);

    // 与商品请求不同：失败只清空选项，没有错误通道
    categories.resolve_err();
    assert!(categories.items.is_empty());
}

#[test]
fn overlapping_fetches_last_resolution_wins() {
    // 两个请求重叠：先发出的 A 在后发出的 B 之后才完成。
    // 没有请求排序或取消，后完成者覆盖先完成者——断言现状而非理想行为。
    let mut state = ListingState::default();

    state.begin(); // request A
    state.begin(); // request B supersedes A but does not cancel it

    // B resolves first
    state.resolve_ok(vec![product(2, "fresh")], 1);
    assert_eq!(state.products[0].title, "fresh");

    // A resolves late and clobbers B's data
    state.resolve_ok(vec![product(1, "stale")], 1);
    assert_eq!(state.products[0].title, "stale");
    assert!(!state.loading);
}
