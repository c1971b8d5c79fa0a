// tests/search_flow.rs
//
// Full render passes (Filter → Paginate → Render) and the CLI front-end.
//
use std::fs;

use candidate_dash::cli::{self, CliError};
use candidate_dash::config::state::SearchState;
use candidate_dash::model::{Candidate, Dataset};
use candidate_dash::runner::render_pass;

fn twelve_with_three_sales() -> Dataset {
    let roles = [
        "Sales Executive", "Data Entry", "Driver", "Accountant", "inside SALES",
        "Cook", "Teacher", "Data Analyst", "Field Sales", "Nurse", "Clerk", "Guard",
    ];
    roles
        .iter()
        .enumerate()
        .map(|(i, r)| Candidate {
            name: Some(format!("Candidate {}", i + 1)),
            role: Some(r.to_string()),
            ..Candidate::default()
        })
        .collect()
}

fn many(n: usize) -> Dataset {
    (0..n)
        .map(|i| Candidate {
            name: Some(format!("C{i}")),
            role: Some("Sales".into()),
            ..Candidate::default()
        })
        .collect()
}

#[test]
fn three_sales_matches_fit_on_one_page() {
    let ds = twelve_with_three_sales();
    let mut st = SearchState::new("sales", "", "");

    let r = render_pass(&ds, &mut st, 10);
    assert_eq!(r.total_results, 3);
    assert_eq!(r.total_pages, 1);
    let names: Vec<_> = r.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Candidate 1", "Candidate 5", "Candidate 9"]);
    assert_eq!(r.heading(), "Showing 3 result(s) for role: sales");

    // page 2 doesn't exist: clamp back to 1 and remember it
    st.set_page(2);
    let r = render_pass(&ds, &mut st, 10);
    assert_eq!(r.page, 1);
    assert!(r.clamped);
    assert_eq!(r.cards.len(), 3);
    assert_eq!(st.page(), 1);
}

#[test]
fn third_page_of_25_has_five_cards() {
    let ds = many(25);
    let mut st = SearchState::default();
    st.set_page(3);
    let r = render_pass(&ds, &mut st, 10);
    assert_eq!(r.cards.len(), 5);
    assert_eq!(r.cards[0].source_ix, 20);
    assert_eq!(r.footer(), "Page 3 of 3");
}

#[test]
fn filter_change_sends_operator_to_first_page() {
    let ds = many(25);
    let mut st = SearchState::default();
    st.set_page(3);
    let _ = render_pass(&ds, &mut st, 10);

    st.set_name("C1");
    let r = render_pass(&ds, &mut st, 10);
    assert_eq!(r.page, 1);
    // C1, C10..C19
    assert_eq!(r.total_results, 11);
    assert_eq!(r.total_pages, 2);
}

#[test]
fn empty_result_still_renders_one_page() {
    let ds = many(5);
    let mut st = SearchState::new("plumber", "", "");
    let r = render_pass(&ds, &mut st, 10);
    assert_eq!(r.total_results, 0);
    assert_eq!(r.total_pages, 1);
    assert!(r.cards.is_empty());
}

fn tmp_csv(name: &str) -> std::path::PathBuf {
    let p = std::env::temp_dir().join(format!("cand_dash_cli_{}_{}", std::process::id(), name));
    fs::write(
        &p,
        "Name,Job Type,City,Contact,Experience,Resume\n\
         Tushar,Data Entry Clerk,Surat,+91 98765-43210,2,https://cv.example/t.pdf\n\
         Meera,Sales,Pune,12345,1,\n",
    )
    .unwrap();
    p
}

fn args(v: &[&str]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

#[test]
fn cli_prints_page_and_dry_run_link() {
    let p = tmp_csv("dry.csv");
    let a = cli::parse_args(args(&[
        "--data", p.to_str().unwrap(), "-r", "data", "--open-whatsapp", "1", "--dry-run",
    ]))
    .unwrap();

    let mut out = Vec::new();
    cli::run(a, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Showing 1 result(s) for role: data"), "{text}");
    assert!(text.contains("Name: Tushar"), "{text}");
    assert!(text.trim_end().ends_with("https://web.whatsapp.com/send?phone=919876543210"), "{text}");
    let _ = fs::remove_file(p);
}

#[test]
fn cli_refuses_disabled_action() {
    let p = tmp_csv("disabled.csv");
    let a = cli::parse_args(args(&[
        "--data", p.to_str().unwrap(), "-r", "sales", "--open-resume", "1", "--dry-run",
    ]))
    .unwrap();

    let mut out = Vec::new();
    let err = cli::run(a, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No Resume"), "{text}");
    assert!(text.contains("No WhatsApp Number"), "{text}");
    let _ = fs::remove_file(p);
}

#[test]
fn cli_load_error_surfaces() {
    let a = cli::parse_args(args(&["--data", "/nonexistent/cand_dash.csv"])).unwrap();
    let mut out = Vec::new();
    assert!(matches!(cli::run(a, &mut out), Err(CliError::Load(_))));
}
