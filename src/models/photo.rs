/// Whether a photo documents the state before or after the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoKind {
    Before,
    After,
}

impl PhotoKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PhotoKind::Before => "before",
            PhotoKind::After => "after",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "before" => Some(PhotoKind::Before),
            "after" => Some(PhotoKind::After),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhotoKind::Before => "Antes",
            PhotoKind::After => "Después",
        }
    }
}

/// Reference to a stored photo. Only the path is kept; image storage
/// itself is handled outside this tool.
#[derive(Debug, Clone)]
pub struct JobPhoto {
    pub id: i64,
    pub job_id: i64,
    pub photo: String,       // ⇔ job_photos.photo (stored path)
    pub kind: PhotoKind,     // ⇔ job_photos.kind ('before' | 'after')
    pub uploaded_at: String, // ⇔ job_photos.uploaded_at (TEXT, ISO8601)
}
