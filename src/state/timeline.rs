// Experience timeline.
// Merges work, volunteering, education, and achievements into one feed, newest first.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{Catalog, Record};

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]{4}").expect("valid year regex"));

/// Which collection a timeline entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Work,
    Volunteering,
    Education,
    Achievement,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Work => "Work",
            EntryKind::Volunteering => "Volunteering",
            EntryKind::Education => "Education",
            EntryKind::Achievement => "Achievement",
        }
    }
}

/// A record placed on the timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry<'a> {
    pub kind: EntryKind,
    pub year: u32,
    pub record: &'a Record,
}

/// Year of the first run of four digits in a period string, or 0 if none.
pub fn extract_year(period: &str) -> u32 {
    YEAR.find(period)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Merge the history collections, newest year first.
///
/// Equal years keep concatenation order: work, volunteering, education,
/// achievements, each in catalog order.
pub fn merged_timeline(catalog: &Catalog) -> Vec<TimelineEntry<'_>> {
    let groups = [
        (EntryKind::Work, &catalog.work),
        (EntryKind::Volunteering, &catalog.volunteering),
        (EntryKind::Education, &catalog.education),
        (EntryKind::Achievement, &catalog.achievements),
    ];

    let mut entries: Vec<TimelineEntry<'_>> = groups
        .into_iter()
        .flat_map(|(kind, records)| {
            records.iter().map(move |record| TimelineEntry {
                kind,
                year: extract_year(&record.period),
                record,
            })
        })
        .collect();

    // sort_by is stable.
    entries.sort_by(|a, b| b.year.cmp(&a.year));
    entries
}
