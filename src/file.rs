// src/file.rs
//
// Text export of a filtered view (clipboard copy). The source table is
// never written back.

use crate::csv::write_row;
use crate::data::FilteredView;
use crate::model::columns;

const SEP: char = ',';

const EXPORT_HEADERS: [&str; 6] = [
    columns::NAME,
    columns::ROLE,
    columns::CITY,
    columns::CONTACT,
    columns::EXPERIENCE,
    columns::RESUME,
];

/// CSV text of every row in `view`, header first. Missing cells are empty.
pub fn to_export_string(view: &FilteredView<'_>) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // Writes into a Vec can't fail.
    let _ = write_row(&mut buf, &EXPORT_HEADERS, SEP);
    for c in view.iter() {
        let cells = [
            c.name(),
            c.role(),
            c.city(),
            c.contact(),
            c.experience(),
            c.resume_link(),
        ]
        .map(|v| v.unwrap_or_default());
        let _ = write_row(&mut buf, &cells, SEP);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
