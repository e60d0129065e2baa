/// The four department buckets that appear in the report columns.
/// Any other bucket is aggregated but never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Fabrication, // Fab
    Paint,       // Pai
    Canvas,      // Can
    Outfitting,  // Out
}

impl Department {
    /// Column order of the text table and the spreadsheet.
    pub const REPORTED: [Department; 4] = [
        Department::Fabrication,
        Department::Paint,
        Department::Canvas,
        Department::Outfitting,
    ];

    /// Three-character bucket the aggregation keys on.
    pub fn bucket(&self) -> &'static str {
        match self {
            Department::Fabrication => "Fab",
            Department::Paint => "Pai",
            Department::Canvas => "Can",
            Department::Outfitting => "Out",
        }
    }

    /// Column heading.
    pub fn label(&self) -> &'static str {
        match self {
            Department::Fabrication => "Fabrication",
            Department::Paint => "Paint",
            Department::Canvas => "Canvas",
            Department::Outfitting => "Outfitting",
        }
    }
}

/// Bucket a full department name by its first three characters.
/// Names sharing a prefix collapse into the same bucket.
pub fn department_bucket(name: &str) -> String {
    name.chars().take(3).collect()
}
