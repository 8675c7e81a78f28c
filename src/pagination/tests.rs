use super::Pagination;

#[test]
fn test_empty_first_page() {
    let pagination = Pagination::compute(1, 25, 0, 0);

    assert_eq!(pagination.total_pages, 1);
    assert!(!pagination.can_go_prev);
    assert!(!pagination.can_go_next);
    assert_eq!((pagination.range_start, pagination.range_end), (0, 0));
    assert_eq!(pagination, Pagination::default());
}

#[test]
fn test_total_pages_rounds_up() {
    assert_eq!(Pagination::compute(1, 25, 25, 25).total_pages, 1);
    assert_eq!(Pagination::compute(1, 25, 26, 25).total_pages, 2);
    assert_eq!(Pagination::compute(1, 100, 1001, 100).total_pages, 11);
}

#[test]
fn test_middle_page_range_and_navigation() {
    let pagination = Pagination::compute(3, 50, 400, 50);

    assert_eq!((pagination.range_start, pagination.range_end), (101, 150));
    assert!(pagination.can_go_prev);
    assert!(pagination.can_go_next);
    assert_eq!(pagination.total_pages, 8);
    assert_eq!(pagination.label(), "Showing 101-150 of 400");
}

#[test]
fn test_short_page_disables_next() {
    let pagination = Pagination::compute(2, 25, 40, 15);

    assert_eq!((pagination.range_start, pagination.range_end), (26, 40));
    assert!(pagination.can_go_prev);
    assert!(!pagination.can_go_next);
}

#[test]
fn test_next_follows_page_size_not_total() {
    // A full last page still offers "next"; a short page that is not last does not.
    assert!(Pagination::compute(2, 25, 50, 25).can_go_next);
    assert!(!Pagination::compute(1, 25, 500, 10).can_go_next);
}

#[test]
fn test_degenerate_inputs_are_clamped() {
    let pagination = Pagination::compute(0, 0, 3, 3);

    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.limit, 1);
    assert_eq!(pagination.total_pages, 3);
    assert_eq!((pagination.range_start, pagination.range_end), (1, 3));
}
