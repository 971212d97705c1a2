//! Built-in demo catalog shown when the live catalog cannot be retrieved.

use shared::domain::{Resource, ResourceId};

use crate::ingest::Catalog;

const SAMPLE_PDF: &str = "https://mozilla.github.io/pdf.js/web/compressed.tracemonkey-pldi-09.pdf";

const DEMO_RECORDS: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "1",
        "Data Structures and Algorithms",
        "Computer Science",
        "2nd Year",
        "Notes",
        "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400&q=80",
    ),
    (
        "2",
        "Thermodynamics Fundamentals",
        "Mechanical",
        "1st Year",
        "Notes",
        "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=400&q=80",
    ),
    (
        "3",
        "Circuit Theory",
        "Electrical",
        "2nd Year",
        "Notes",
        "https://images.unsplash.com/photo-1597848212624-a19eb35e2651?w=400&q=80",
    ),
    (
        "4",
        "Operating Systems",
        "Computer Science",
        "3rd Year",
        "Question Papers",
        "https://images.unsplash.com/photo-1629654297299-c8506221ca97?w=400&q=80",
    ),
    (
        "5",
        "Machine Design",
        "Mechanical",
        "3rd Year",
        "Notes",
        "https://images.unsplash.com/photo-1537462715879-360eeb61a0ad?w=400&q=80",
    ),
    (
        "6",
        "Power Systems",
        "Electrical",
        "4th Year",
        "Question Papers",
        "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?w=400&q=80",
    ),
    (
        "7",
        "Database Management Systems",
        "Computer Science",
        "2nd Year",
        "Notes",
        "https://images.unsplash.com/photo-1544383835-bda2bc66a55d?w=400&q=80",
    ),
    (
        "8",
        "Fluid Mechanics",
        "Mechanical",
        "2nd Year",
        "Notes",
        "https://images.unsplash.com/photo-1517976487492-5750f3195933?w=400&q=80",
    ),
];

pub fn demo_resources() -> Vec<Resource> {
    DEMO_RECORDS
        .iter()
        .map(|(id, title, branch, year, kind, thumbnail)| Resource {
            id: ResourceId::new(*id),
            title: title.to_string(),
            branch: branch.to_string(),
            year: year.to_string(),
            kind: kind.to_string(),
            thumbnail_ref: thumbnail.to_string(),
            download_ref: SAMPLE_PDF.to_string(),
            document_ref: Some(SAMPLE_PDF.to_string()),
            companion_ref: None,
        })
        .collect()
}

pub fn demo_catalog() -> Catalog {
    Catalog::from_validated(demo_resources())
}
