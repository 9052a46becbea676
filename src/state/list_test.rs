use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: i64,
    nom: String,
}

impl HasId for Row {
    fn id(&self) -> i64 {
        self.id
    }
}

fn row(id: i64) -> Row {
    Row { id, nom: format!("row-{id}") }
}

fn page_of(ids: &[i64], total: u64) -> Page<Row> {
    Page { items: ids.iter().copied().map(row).collect(), total }
}

// =============================================================================
// ListQuery::to_params
// =============================================================================

#[test]
fn params_omit_empty_search() {
    let query = ListQuery::default();
    let params = query.to_params();
    assert!(params.iter().all(|(key, _)| key != "search"));
    assert!(params.contains(&("page".to_owned(), "1".to_owned())));
    assert!(params.contains(&("page_size".to_owned(), "10".to_owned())));
}

#[test]
fn params_carry_search_page_and_filters() {
    let mut query = ListQuery { search: "rust".to_owned(), page: 3, ..ListQuery::default() };
    query.ordering = Some("-start_date".to_owned());
    query.filters.set("centre", FilterValue::Number(4));
    query.filters.set("is_actif", FilterValue::Flag(true));

    let params = query.to_params();
    assert!(params.contains(&("search".to_owned(), "rust".to_owned())));
    assert!(params.contains(&("page".to_owned(), "3".to_owned())));
    assert!(params.contains(&("ordering".to_owned(), "-start_date".to_owned())));
    assert!(params.contains(&("centre".to_owned(), "4".to_owned())));
    assert!(params.contains(&("is_actif".to_owned(), "true".to_owned())));
}

// =============================================================================
// page-reset rules
// =============================================================================

#[test]
fn search_change_resets_page_and_keeps_page_size() {
    let mut list: ListState<Row> = ListState::new();
    list.set_page(2);
    list.set_search("dupont");
    assert_eq!(list.query().page, 1);
    assert_eq!(list.query().page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(list.query().search, "dupont");
}

#[test]
fn filter_change_resets_page() {
    let mut list: ListState<Row> = ListState::new();
    list.set_page(5);
    list.set_filter("statut", FilterValue::Text("ouverte".to_owned()));
    assert_eq!(list.query().page, 1);
}

#[test]
fn clearing_a_filter_resets_page() {
    let mut list: ListState<Row> = ListState::new();
    list.set_filter("statut", FilterValue::Text("ouverte".to_owned()));
    list.set_page(4);
    list.clear_filter("statut");
    assert_eq!(list.query().page, 1);
    assert!(list.query().filters.is_empty());
}

#[test]
fn clearing_an_absent_filter_changes_nothing() {
    let mut list: ListState<Row> = ListState::new();
    list.set_page(4);
    list.clear_filter("statut");
    assert_eq!(list.query().page, 4);
}

#[test]
fn page_navigation_keeps_search_and_filters() {
    let mut list: ListState<Row> = ListState::new();
    list.set_search("alpha");
    list.set_filter("centre", FilterValue::Number(2));
    list.set_page(3);
    assert_eq!(list.query().search, "alpha");
    assert_eq!(list.query().filters.get("centre"), Some(&FilterValue::Number(2)));
    assert_eq!(list.query().page, 3);
}

#[test]
fn page_is_clamped_to_one() {
    let mut list: ListState<Row> = ListState::new();
    list.set_page(0);
    assert_eq!(list.query().page, 1);
}

#[test]
fn page_size_change_resets_page() {
    let mut list: ListState<Row> = ListState::new();
    list.set_page(7);
    list.set_page_size(25);
    assert_eq!(list.query().page, 1);
    assert_eq!(list.query().page_size, 25);
}

#[test]
fn setting_same_search_does_not_supersede() {
    let mut list: ListState<Row> = ListState::new();
    list.set_search("same");
    let (seq, _) = list.begin_fetch();
    list.set_search("same");
    assert!(list.apply_page(seq, page_of(&[1], 1)));
}

// =============================================================================
// stale-response discard
// =============================================================================

#[test]
fn stale_response_is_discarded() {
    let mut list: ListState<Row> = ListState::new();
    let (first, _) = list.begin_fetch();

    // A second fetch supersedes the first before it answers.
    let (second, _) = list.begin_fetch();
    assert!(list.apply_page(second, page_of(&[10, 11], 2)));

    // The slow first response arrives late and must not overwrite.
    assert!(!list.apply_page(first, page_of(&[99], 1)));
    assert_eq!(list.items(), &[row(10), row(11)]);
    assert_eq!(list.total(), 2);
}

#[test]
fn mutation_supersedes_in_flight_fetch() {
    let mut list: ListState<Row> = ListState::new();
    let (seq, _) = list.begin_fetch();
    list.set_search("newer");
    assert!(!list.apply_page(seq, page_of(&[1], 1)));
    assert!(list.items().is_empty());
}

#[test]
fn stale_error_is_discarded() {
    let mut list: ListState<Row> = ListState::new();
    let (first, _) = list.begin_fetch();
    let (second, _) = list.begin_fetch();
    assert!(!list.apply_error(first, "timeout"));
    assert!(list.apply_error(second, "boom"));
    assert_eq!(list.error(), Some("boom"));
    assert!(!list.is_loading());
}

#[test]
fn successful_apply_clears_previous_error() {
    let mut list: ListState<Row> = ListState::new();
    let (seq, _) = list.begin_fetch();
    list.apply_error(seq, "boom");
    let (seq, _) = list.begin_fetch();
    assert!(list.apply_page(seq, page_of(&[1], 1)));
    assert!(list.error().is_none());
}

#[test]
fn begin_fetch_sets_loading() {
    let mut list: ListState<Row> = ListState::new();
    let (seq, query) = list.begin_fetch();
    assert!(list.is_loading());
    assert_eq!(query.page, 1);
    assert!(list.apply_page(seq, page_of(&[], 0)));
    assert!(!list.is_loading());
}

// =============================================================================
// dedup
// =============================================================================

#[test]
fn duplicate_ids_keep_first_occurrence() {
    let mut list: ListState<Row> = ListState::new();
    let (seq, _) = list.begin_fetch();
    let page = Page {
        items: vec![row(1), row(2), Row { id: 1, nom: "dup".to_owned() }, row(3)],
        total: 4,
    };
    assert!(list.apply_page(seq, page));
    assert_eq!(list.items(), &[row(1), row(2), row(3)]);
}

// =============================================================================
// derived pagination
// =============================================================================

#[test]
fn total_pages_rounds_up() {
    let mut list: ListState<Row> = ListState::new();
    let (seq, _) = list.begin_fetch();
    list.apply_page(seq, page_of(&[1, 2, 3], 21));
    assert_eq!(list.total_pages(), 3);
}

#[test]
fn has_next_and_prev_track_position() {
    let mut list: ListState<Row> = ListState::new();
    let (seq, _) = list.begin_fetch();
    list.apply_page(seq, page_of(&[1], 25));
    assert!(list.has_next());
    assert!(!list.has_prev());

    list.set_page(3);
    assert!(!list.has_next());
    assert!(list.has_prev());
}
