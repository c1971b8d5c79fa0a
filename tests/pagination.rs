// tests/pagination.rs
use candidate_dash::paginate::{paginate, total_pages};

#[test]
fn total_pages_edges() {
    assert_eq!(total_pages(0, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(25, 10), 3);
}

#[test]
fn slices_for_25_rows() {
    assert_eq!(paginate(25, 10, 1).range, 0..10);
    assert_eq!(paginate(25, 10, 2).range, 10..20);
    assert_eq!(paginate(25, 10, 3).range, 20..25);
}

#[test]
fn beyond_last_page_clamps() {
    let w = paginate(25, 10, 7);
    assert_eq!(w.page, 3);
    assert_eq!(w.total_pages, 3);
    assert_eq!(w.range, 20..25);
    assert!(w.clamped);
}

#[test]
fn in_range_request_is_not_flagged() {
    assert!(!paginate(25, 10, 2).clamped);
}

#[test]
fn empty_view_has_one_empty_page() {
    let w = paginate(0, 10, 1);
    assert_eq!(w.total_pages, 1);
    assert_eq!(w.page, 1);
    assert!(w.is_empty());

    let w = paginate(0, 10, 5);
    assert_eq!(w.page, 1);
    assert!(w.clamped);
    assert!(w.is_empty());
}
