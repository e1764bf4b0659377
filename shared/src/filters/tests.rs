use super::*;

fn state_with(f: impl FnOnce(&mut FilterState)) -> FilterState {
    let mut state = FilterState::default();
    f(&mut state);
    state
}

// =========================================================
// Active filter count
// =========================================================

#[test]
fn default_state_has_no_active_filters() {
    assert_eq!(FilterState::default().active_count(), 0);
}

#[test]
fn category_price_and_sort_each_count_once() {
    let state = state_with(|s| {
        s.category = "smartphones".into();
        s.price_min = Some(10.0);
        s.sort_by = SortKey::Price;
        s.sort_order = SortOrder::Desc;
    });
    assert_eq!(state.active_count(), 4);
}

#[test]
fn price_range_counts_once_even_with_both_bounds() {
    let state = state_with(|s| {
        s.price_min = Some(10.0);
        s.price_max = Some(50.0);
    });
    assert_eq!(state.active_count(), 1);
}

#[test]
fn search_does_not_count_as_active_filter() {
    let state = state_with(|s| s.search = "phone".into());
    assert_eq!(state.active_count(), 0);
}

#[test]
fn search_presence_is_tracked_separately_from_count() {
    // search alone must still surface a removable tag
    let state = state_with(|s| s.search = "phone".into());
    assert!(state.has_search());
    assert_eq!(state.active_count(), 0);

    assert!(!FilterState::default().has_search());
    assert!(!state_with(|s| s.search = "   ".into()).has_search());
}

#[test]
fn removing_search_keeps_other_filters() {
    let mut state = state_with(|s| {
        s.search = "galaxy".into();
        s.category = "smartphones".into();
        s.price_min = Some(10.0);
    });

    state.search = String::new();
    assert!(!state.has_search());
    assert_eq!(state.category, "smartphones");
    assert_eq!(state.price_min, Some(10.0));
    assert_eq!(state.active_count(), 2);
}

// =========================================================
// Query parameter derivation
// =========================================================

fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn default_state_derives_no_params() {
    assert!(FilterState::default().query_params().is_empty());
}

#[test]
fn search_is_trimmed_and_whitespace_only_omitted() {
    let state = state_with(|s| s.search = "  galaxy  ".into());
    let params = state.query_params();
    assert_eq!(param(&params, "search"), Some("galaxy"));

    let blank = state_with(|s| s.search = "   ".into());
    assert!(blank.query_params().is_empty());
}

#[test]
fn non_default_sort_is_sent() {
    let state = state_with(|s| {
        s.sort_by = SortKey::Rating;
        s.sort_order = SortOrder::Desc;
    });
    let params = state.query_params();
    assert_eq!(param(&params, "sortBy"), Some("rating"));
    assert_eq!(param(&params, "sortOrder"), Some("desc"));
}

#[test]
fn default_sort_is_omitted() {
    let state = state_with(|s| s.category = "laptops".into());
    let params = state.query_params();
    assert_eq!(param(&params, "category"), Some("laptops"));
    assert_eq!(param(&params, "sortBy"), None);
    assert_eq!(param(&params, "sortOrder"), None);
}

#[test]
fn valid_price_range_sends_both_bounds() {
    let state = state_with(|s| {
        s.price_min = Some(10.0);
        s.price_max = Some(99.5);
    });
    let params = state.query_params();
    assert_eq!(param(&params, "priceMin"), Some("10"));
    assert_eq!(param(&params, "priceMax"), Some("99.5"));
}

#[test]
fn inverted_price_range_drops_both_bounds() {
    let state = state_with(|s| {
        s.price_min = Some(500.0);
        s.price_max = Some(100.0);
    });
    let params = state.query_params();
    assert_eq!(param(&params, "priceMin"), None);
    assert_eq!(param(&params, "priceMax"), None);
}

#[test]
fn single_bound_is_sent_alone() {
    let min_only = state_with(|s| s.price_min = Some(25.0));
    assert_eq!(param(&min_only.query_params(), "priceMin"), Some("25"));
    assert_eq!(param(&min_only.query_params(), "priceMax"), None);

    let max_only = state_with(|s| s.price_max = Some(25.0));
    assert_eq!(param(&max_only.query_params(), "priceMax"), Some("25"));
    assert_eq!(param(&max_only.query_params(), "priceMin"), None);
}

#[test]
fn equal_bounds_are_a_valid_range() {
    let state = state_with(|s| {
        s.price_min = Some(42.0);
        s.price_max = Some(42.0);
    });
    let params = state.query_params();
    assert_eq!(param(&params, "priceMin"), Some("42"));
    assert_eq!(param(&params, "priceMax"), Some("42"));
}

// =========================================================
// Draft (staged filters)
// =========================================================

#[test]
fn draft_round_trips_through_state() {
    let state = state_with(|s| {
        s.search = "tablet".into();
        s.category = "tablets".into();
        s.sort_by = SortKey::Price;
        s.sort_order = SortOrder::Desc;
        s.price_min = Some(100.0);
        s.price_max = Some(800.0);
    });

    let draft = FilterDraft::from_state(&state);
    assert!(!draft.differs_from(&state));
    assert_eq!(draft.apply_to(&state), state);
}

#[test]
fn apply_preserves_search_text() {
    let state = state_with(|s| s.search = "keep me".into());
    let mut draft = FilterDraft::from_state(&state);
    draft.category = "beauty".into();

    let applied = draft.apply_to(&state);
    assert_eq!(applied.search, "keep me");
    assert_eq!(applied.category, "beauty");
}

#[test]
fn invalid_price_input_becomes_unset() {
    let state = FilterState::default();
    let mut draft = FilterDraft::from_state(&state);
    draft.price_min = "abc".into();
    draft.price_max = "-5".into();

    let applied = draft.apply_to(&state);
    assert_eq!(applied.price_min, None);
    assert_eq!(applied.price_max, None);
}

#[test]
fn price_conflict_only_when_both_bounds_valid() {
    let mut draft = FilterDraft::default();
    draft.price_min = "100".into();
    draft.price_max = "50".into();
    assert!(draft.price_conflict());

    draft.price_max = String::new();
    assert!(!draft.price_conflict());

    draft.price_max = "not a number".into();
    assert!(!draft.price_conflict());
}

#[test]
fn differs_detects_pending_edits() {
    let state = state_with(|s| s.category = "laptops".into());
    let mut draft = FilterDraft::from_state(&state);
    assert!(!draft.differs_from(&state));

    draft.sort_order = SortOrder::Desc;
    assert!(draft.differs_from(&state));
}

#[test]
fn clearing_yields_default_state() {
    let dirty = state_with(|s| {
        s.search = "x".into();
        s.category = "laptops".into();
        s.sort_by = SortKey::Rating;
        s.sort_order = SortOrder::Desc;
        s.price_min = Some(1.0);
        s.price_max = Some(2.0);
    });
    assert_ne!(dirty, FilterState::default());

    // "清空" 的约定就是回到 Default
    let cleared = FilterState::default();
    assert_eq!(cleared.search, "");
    assert_eq!(cleared.category, "");
    assert_eq!(cleared.sort_by, SortKey::Title);
    assert_eq!(cleared.sort_order, SortOrder::Asc);
    assert_eq!(cleared.price_min, None);
    assert_eq!(cleared.price_max, None);
}
