// tests/filter_pipeline.rs
//
// Filter Pipeline properties over a small fixed table.
//
use candidate_dash::data::{FilteredView, SearchQuery};
use candidate_dash::model::{Candidate, Dataset};

fn cand(name: Option<&str>, role: Option<&str>, city: Option<&str>) -> Candidate {
    Candidate {
        name: name.map(String::from),
        role: role.map(String::from),
        city: city.map(String::from),
        ..Candidate::default()
    }
}

fn table() -> Dataset {
    vec![
        cand(Some("Tushar Patel"), Some("Data Entry Clerk"), Some("Surat")),
        cand(Some("Asha Rao"), Some("Sales Executive"), Some("Pune")),
        cand(Some("Ravi Kumar"), Some("Inside Sales"), Some("Surat")),
        cand(None, Some("Data Analyst"), None),
        cand(Some("Meera"), None, Some("Ahmedabad")),
        cand(Some("Asha Rao"), Some("Sales Executive"), Some("Pune")), // duplicate row
    ]
    .into_iter()
    .collect()
}

fn ix(ds: &Dataset, role: &str, name: &str, loc: &str) -> Vec<usize> {
    FilteredView::from_raw(ds, SearchQuery::new(role, name, loc)).row_ix
}

#[test]
fn role_match_is_case_insensitive_substring() {
    let ds = table();
    assert_eq!(ix(&ds, "data", "", ""), vec![0, 3]);
    assert_eq!(ix(&ds, "SALES", "", ""), vec![1, 2, 5]);
}

#[test]
fn empty_role_keeps_every_row() {
    let ds = table();
    assert_eq!(ix(&ds, "", "", ""), (0..ds.len()).collect::<Vec<_>>());
}

#[test]
fn filters_are_a_conjunction() {
    let ds = table();
    assert_eq!(ix(&ds, "sales", "", "surat"), vec![2]);
    assert_eq!(ix(&ds, "sales", "asha", "surat"), Vec::<usize>::new());
    assert_eq!(ix(&ds, "", "asha", "pune"), vec![1, 5]);
}

#[test]
fn missing_cells_never_match_a_pattern() {
    let ds = table();
    // row 3 has no name/city, row 4 has no role
    assert!(!ix(&ds, "", "a", "").contains(&3));
    assert!(!ix(&ds, "", "", "a").contains(&3));
    assert!(!ix(&ds, "e", "", "").contains(&4));
}

#[test]
fn every_kept_row_matches_and_no_dropped_row_does() {
    let ds = table();
    let queries = [("sales", "", ""), ("a", "r", ""), ("", "", "sur"), ("data", "", "surat")];
    for (r, n, l) in queries {
        let q = SearchQuery::new(r, n, l);
        let kept = FilteredView::from_raw(&ds, q).row_ix;
        assert!(kept.len() <= ds.len());
        for (i, c) in ds.rows().iter().enumerate() {
            assert_eq!(kept.contains(&i), q.matches(c), "row {i} for {q:?}");
        }
    }
}

#[test]
fn filtering_twice_is_idempotent() {
    let ds = table();
    let q = SearchQuery::new("sales", "", "pune");
    let once: Dataset = FilteredView::from_raw(&ds, q).iter().cloned().collect();
    let twice: Vec<Candidate> = FilteredView::from_raw(&once, q).iter().cloned().collect();
    assert_eq!(once.rows(), twice.as_slice());
}

#[test]
fn source_order_is_preserved() {
    let ds = table();
    let v = FilteredView::from_raw(&ds, SearchQuery::new("", "", "surat"));
    let names: Vec<_> = v.iter().map(|c| c.name().unwrap_or("")).collect();
    assert_eq!(names, vec!["Tushar Patel", "Ravi Kumar"]);
}
