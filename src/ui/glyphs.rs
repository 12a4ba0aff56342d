// Glyph tables.
// Map catalog tags (tabs, project kinds, service icons, tech names) to a symbol and colour.

use ratatui::style::Color;

use crate::catalog::ProjectKind;
use crate::state::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub color: Color,
}

const fn glyph(symbol: &'static str, r: u8, g: u8, b: u8) -> Glyph {
    Glyph {
        symbol,
        color: Color::Rgb(r, g, b),
    }
}

const FALLBACK_KIND: Glyph = glyph("⎇", 0x9c, 0xa3, 0xaf);
const FALLBACK_SERVICE: Glyph = glyph("▣", 0xcc, 0xcc, 0xcc);
const FALLBACK_TECH: Glyph = glyph("›", 0x7f, 0x8c, 0x8d);

pub fn tab_glyph(tab: Tab) -> Glyph {
    match tab {
        Tab::Profile => glyph("≡", 0x56, 0x9c, 0xd6),
        Tab::Projects => glyph("{}", 0xe6, 0x7e, 0x22),
        Tab::Services => glyph("◈", 0x2e, 0xcc, 0x71),
        Tab::Experience => glyph("⎇", 0xf1, 0xc4, 0x0f),
        Tab::Skills => glyph("#", 0xe7, 0x4c, 0x3c),
    }
}

pub fn project_glyph(kind: &ProjectKind) -> Glyph {
    match kind {
        ProjectKind::System => glyph("▤", 0x38, 0xbd, 0xf8),
        ProjectKind::Api => glyph("⛁", 0x56, 0x9c, 0xd6),
        ProjectKind::Mvc => glyph("▦", 0xdc, 0xdc, 0xaa),
        ProjectKind::Console => glyph(">_", 0xce, 0x91, 0x78),
        ProjectKind::Other(_) => FALLBACK_KIND,
    }
}

static SERVICE_GLYPHS: &[(&str, Glyph)] = &[
    ("Server", glyph("▤", 0x38, 0xbd, 0xf8)),
    ("Database", glyph("⛁", 0xe7, 0x4c, 0x3c)),
    ("Workflow", glyph("⇄", 0x9b, 0x59, 0xb6)),
    ("Zap", glyph("ϟ", 0xf1, 0xc4, 0x0f)),
    ("Shield", glyph("⛨", 0x2e, 0xcc, 0x71)),
];

pub fn service_glyph(icon: &str) -> Glyph {
    SERVICE_GLYPHS
        .iter()
        .find(|(key, _)| *key == icon)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(FALLBACK_SERVICE)
}

/// Substring rules, checked in order against the lowercased tech name.
static TECH_GLYPHS: &[(&[&str], Glyph)] = &[
    (&["c#"], glyph("λ", 0x9b, 0x59, 0xb6)),
    (&["c++"], glyph("λ", 0x5e, 0x97, 0xd0)),
    (&["python"], glyph(">_", 0xff, 0xe8, 0x73)),
    (&["html"], glyph("<>", 0xe3, 0x4c, 0x26)),
    (&["css"], glyph("¶", 0x26, 0x4d, 0xe4)),
    (&["bootstrap"], glyph("▦", 0x79, 0x52, 0xb3)),
    (&["entity", "ef"], glyph("⛁", 0x68, 0x21, 0x7a)),
    (&["redis"], glyph("ϟ", 0xdc, 0x38, 0x2d)),
    (&["react"], glyph("⚛", 0x61, 0xdb, 0xfb)),
    (&["firebase", "firestore"], glyph("♨", 0xf3, 0x9c, 0x12)),
    (&["net core", "web api", ".net"], glyph("◎", 0x51, 0x2b, 0xd4)),
    (&["oop"], glyph("□", 0xe6, 0x7e, 0x22)),
    (&["design pattern", "clean"], glyph("☰", 0x2e, 0xcc, 0x71)),
    (&["cqrs"], glyph("⇄", 0x9b, 0x59, 0xb6)),
    (&["mvc"], glyph("▦", 0xe6, 0x7e, 0x22)),
    (&["repo"], glyph("◫", 0x95, 0xa5, 0xa6)),
    (&["automapper"], glyph("⇄", 0xe6, 0x7e, 0x22)),
    (&["sql", "mssql", "airtable"], glyph("⛁", 0xe7, 0x4c, 0x3c)),
    (&["linq"], glyph("⋔", 0x27, 0xae, 0x60)),
    (&["api", "webhook"], glyph("◎", 0x34, 0x98, 0xdb)),
    (
        &["jwt", "token", "auth", "identity", "security"],
        glyph("⚿", 0xf1, 0xc4, 0x0f),
    ),
    (&["payment", "kashier"], glyph("$", 0x2e, 0xcc, 0x71)),
    (
        &["networking", "distributed", "cloudinary"],
        glyph("⋈", 0x34, 0x49, 0x5e),
    ),
    (&["git"], glyph("⎇", 0xf1, 0x50, 0x2f)),
    (&["injection", "dependency"], glyph("⬡", 0x1a, 0xbc, 0x9c)),
    (&["whatsapp"], glyph("✆", 0x25, 0xd3, 0x66)),
    (&["vercel"], glyph("▲", 0xff, 0xff, 0xff)),
    (&["inventory"], glyph("□", 0xd3, 0x54, 0x00)),
];

pub fn tech_glyph(tech: &str) -> Glyph {
    let tech = tech.to_lowercase();
    TECH_GLYPHS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| tech.contains(needle)))
        .map(|(_, glyph)| *glyph)
        .unwrap_or(FALLBACK_TECH)
}
