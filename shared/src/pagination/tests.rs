use super::*;

#[test]
fn defaults() {
    let p = Pagination::default();
    assert_eq!(p.page, 1);
    assert_eq!(p.limit, DEFAULT_LIMIT);
    assert_eq!(p.total, 0);
}

#[test]
fn changing_limit_resets_page() {
    let mut p = Pagination::default();
    p.total = 500;
    p.set_page(7);
    assert_eq!(p.page, 7);

    for size in PAGE_SIZES {
        p.set_page(3);
        p.set_limit(size);
        assert_eq!(p.page, 1, "limit change to {size} must reset page");
        assert_eq!(p.limit, size);
        assert_eq!(p.total, 500, "total survives a limit change");
    }
}

#[test]
fn reset_page_preserves_limit() {
    let mut p = Pagination::default();
    p.set_limit(50);
    p.set_page(4);

    p.reset_page();
    assert_eq!(p.page, 1);
    assert_eq!(p.limit, 50);
}

#[test]
fn skip_is_zero_based_offset() {
    let mut p = Pagination::default();
    p.set_limit(20);
    assert_eq!(p.skip(), 0);

    p.set_page(3);
    assert_eq!(p.skip(), 40);
}

#[test]
fn total_pages_is_ceiling_division() {
    let mut p = Pagination::default();
    p.set_limit(10);

    p.total = 0;
    assert_eq!(p.total_pages(), 0);
    assert!(!p.show_controls());

    p.total = 10;
    assert_eq!(p.total_pages(), 1);
    assert!(!p.show_controls());

    p.total = 11;
    assert_eq!(p.total_pages(), 2);
    assert!(p.show_controls());

    p.total = 95;
    assert_eq!(p.total_pages(), 10);
}

#[test]
fn item_range_is_clamped_to_total() {
    let mut p = Pagination::default();
    p.set_limit(20);
    p.total = 45;

    p.set_page(1);
    assert_eq!(p.item_range(), (1, 20));

    p.set_page(3);
    assert_eq!(p.item_range(), (41, 45));
}

#[test]
fn page_floor_is_one() {
    let mut p = Pagination::default();
    p.set_page(0);
    assert_eq!(p.page, 1);
}

fn items_for(total_pages: u32, page: u32) -> Vec<PageItem> {
    let mut p = Pagination::default();
    p.set_limit(10);
    p.total = total_pages * 10;
    p.set_page(page);
    p.page_items()
}

#[test]
fn page_items_short_range_lists_every_page() {
    assert_eq!(
        items_for(7, 4),
        (1..=7).map(PageItem::Page).collect::<Vec<_>>()
    );
    assert_eq!(items_for(1, 1), vec![PageItem::Page(1)]);
}

#[test]
fn page_items_collapses_right_side_near_start() {
    use PageItem::*;
    assert_eq!(
        items_for(10, 2),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Dots, Page(10)]
    );
}

#[test]
fn page_items_collapses_left_side_near_end() {
    use PageItem::*;
    assert_eq!(
        items_for(10, 9),
        vec![Page(1), Dots, Page(6), Page(7), Page(8), Page(9), Page(10)]
    );
}

#[test]
fn page_items_collapses_both_sides_in_the_middle() {
    use PageItem::*;
    assert_eq!(
        items_for(20, 10),
        vec![Page(1), Dots, Page(9), Page(10), Page(11), Dots, Page(20)]
    );
}
