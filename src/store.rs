// src/store.rs
//
// Data Loader. Reads the candidate table from disk exactly once per session
// and hands out the cached copy afterwards. A failed load is cached too:
// the session can't recover without a restart.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use crate::csv::parse_rows;
use crate::error::LoadError;
use crate::model::{columns, Candidate, Dataset};

const SEP: char = ',';

/// Cell values read as "missing", same set spreadsheet exports and
/// dataframe tools emit for empty cells.
const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan",
    "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None",
    "n/a", "nan", "null",
];

enum Cached {
    Loaded(Arc<Dataset>),
    Failed(Arc<LoadError>),
}

/// Owns the source path and the session's single copy of the table.
pub struct CandidateStore {
    path: PathBuf,
    cached: Option<Cached>,
    loads: usize,
}

impl CandidateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), cached: None, loads: 0 }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// How many times the source was actually read. Never exceeds 1.
    pub fn loads(&self) -> usize { self.loads }

    /// The cached table, reading the source on first access only.
    pub fn table(&mut self) -> Result<Arc<Dataset>, Arc<LoadError>> {
        let cached = self.cached.get_or_insert_with(|| {
            self.loads += 1;
            let started = Instant::now();
            match load_dataset(&self.path) {
                Ok(ds) => {
                    logf!(
                        "Load: {} (rows={}, {} ms)",
                        self.path.display(),
                        ds.len(),
                        started.elapsed().as_millis()
                    );
                    Cached::Loaded(Arc::new(ds))
                }
                Err(e) => {
                    loge!("Load: {}", e);
                    Cached::Failed(Arc::new(e))
                }
            }
        });

        match cached {
            Cached::Loaded(ds) => Ok(Arc::clone(ds)),
            Cached::Failed(e) => Err(Arc::clone(e)),
        }
    }
}

/// Read and parse a candidate table from disk.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::Missing { path: path.to_path_buf() },
        _ => LoadError::Unreadable { path: path.to_path_buf(), source: e },
    })?;
    let text = String::from_utf8(bytes).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8 (byte offset {})", e.utf8_error().valid_up_to()),
    })?;
    parse_dataset(&text, path)
}

/// Parse candidate CSV text. `path` is only used for error reporting.
pub fn parse_dataset(text: &str, path: &Path) -> Result<Dataset, LoadError> {
    let rows = parse_rows(text, SEP).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return Err(LoadError::Empty { path: path.to_path_buf() });
    };

    let layout = ColumnLayout::resolve(&header)
        .map_err(|columns| LoadError::MissingColumns { path: path.to_path_buf(), columns })?;

    logd!("Load: header={:?}", header);

    let mut short = 0usize;
    let ds: Dataset = rows
        .map(|r| {
            if r.len() < header.len() { short += 1; }
            layout.candidate(&r)
        })
        .collect();

    if short > 0 {
        logw!("Load: {} row(s) shorter than the header; missing cells show as N/A", short);
    }
    Ok(ds)
}

/// Column positions for one header row.
struct ColumnLayout {
    name: usize,
    role: usize,
    city: usize,
    contact: usize,
    experience: usize,
    resume: Option<usize>,
    resume_url: Option<usize>,
}

impl ColumnLayout {
    /// Err carries every missing column name, in display order.
    fn resolve(header: &[String]) -> Result<Self, Vec<String>> {
        let find = |want: &str| {
            header.iter().position(|h| h.trim().eq_ignore_ascii_case(want))
        };

        let mut missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|c| find(**c).is_none())
            .map(|c| s!(*c))
            .collect();

        let resume = find(columns::RESUME);
        let resume_url = find(columns::RESUME_URL);
        if resume.is_none() && resume_url.is_none() {
            missing.push(columns::RESUME_ANY.join(" or "));
        }

        match (
            find(columns::NAME),
            find(columns::ROLE),
            find(columns::CITY),
            find(columns::CONTACT),
            find(columns::EXPERIENCE),
        ) {
            (Some(name), Some(role), Some(city), Some(contact), Some(experience))
                if missing.is_empty() =>
            {
                Ok(Self { name, role, city, contact, experience, resume, resume_url })
            }
            _ => Err(missing),
        }
    }

    fn candidate(&self, row: &[String]) -> Candidate {
        let cell = |ix: usize| row.get(ix).and_then(|c| clean_cell(c));
        // Links keep the raw cell text; only the null test looks at the trimmed form.
        let link = |ix: Option<usize>| {
            ix.and_then(|ix| row.get(ix)).filter(|c| clean_cell(c).is_some()).cloned()
        };

        Candidate {
            name: cell(self.name),
            role: cell(self.role),
            city: cell(self.city),
            contact: cell(self.contact),
            experience: cell(self.experience),
            resume_link: link(self.resume).or_else(|| link(self.resume_url)),
        }
    }
}

/// Trimmed cell text, or `None` for blanks and null markers.
fn clean_cell(raw: &str) -> Option<String> {
    let t = raw.trim();
    if t.is_empty() || NULL_MARKERS.contains(&t) { None } else { Some(s!(t)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> &'static Path { Path::new("mem.csv") }

    #[test]
    fn resolves_columns_in_any_order_and_case() {
        let text = "city,NAME,Contact,Experience,Job Type,resume_url\nSurat,Asha,9876543210,2,Sales,http://r\n";
        let ds = parse_dataset(text, p()).unwrap();
        let c = &ds.rows()[0];
        assert_eq!(c.name(), Some("Asha"));
        assert_eq!(c.city(), Some("Surat"));
        assert_eq!(c.role(), Some("Sales"));
        assert_eq!(c.resume_link(), Some("http://r"));
    }

    #[test]
    fn resume_falls_back_to_resume_url() {
        let text = "Name,Job Type,City,Contact,Experience,Resume,resume_url\nA,B,C,D,E,,http://b\nA,B,C,D,E,http://a,http://b\n";
        let ds = parse_dataset(text, p()).unwrap();
        assert_eq!(ds.rows()[0].resume_link(), Some("http://b"));
        assert_eq!(ds.rows()[1].resume_link(), Some("http://a"));
    }

    #[test]
    fn resume_link_is_kept_verbatim() {
        let text = "Name,Job Type,City,Contact,Experience,Resume\nA,B,C,D,E, http://a/cv.pdf \nA,B,C,D,E,  \n";
        let ds = parse_dataset(text, p()).unwrap();
        assert_eq!(ds.rows()[0].resume_link(), Some(" http://a/cv.pdf "));
        assert_eq!(ds.rows()[1].resume_link(), None);
    }

    #[test]
    fn unterminated_quote_is_malformed() {
        let text = "Name,Job Type,City,Contact,Experience,Resume\n\"Tushar,Data Entry,Surat,9876543210,2,http://x\nMeera,Sales,Pune,1,1,\n";
        assert!(matches!(parse_dataset(text, p()), Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn null_markers_and_short_rows_become_missing() {
        let text = "Name,Job Type,City,Contact,Experience,Resume\nnan,Sales,NaN\n";
        let ds = parse_dataset(text, p()).unwrap();
        let c = &ds.rows()[0];
        assert_eq!(c.name(), None);
        assert_eq!(c.role(), Some("Sales"));
        assert_eq!(c.city(), None);
        assert_eq!(c.contact(), None);
        assert_eq!(c.resume_link(), None);
    }

    #[test]
    fn missing_columns_are_all_listed() {
        let err = parse_dataset("Name,City\nA,B\n", p()).unwrap_err();
        match err {
            LoadError::MissingColumns { columns, .. } => {
                assert_eq!(columns, vec!["Job Type", "Contact", "Experience", "Resume or resume_url"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_text_is_an_error() {
        assert!(matches!(parse_dataset("", p()), Err(LoadError::Empty { .. })));
    }
}
