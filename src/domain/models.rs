/// Domain models for note-smart
///
/// These models represent core business entities and are transport-agnostic.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A file uploaded alongside the transcript, held in memory for the
/// duration of a single note-generation request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Declared extension, lowercased, without the leading dot.
    pub fn extension(&self) -> String {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

/// Kind of meeting the transcript came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    AcademicSenate,
    DepartmentMeeting,
    CommitteeMeeting,
    ProfessionalDevelopment,
    Other,
}

impl MeetingType {
    /// Parse the label the UI sends. Unknown labels fall back to Other.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "academic senate" => MeetingType::AcademicSenate,
            "department meeting" => MeetingType::DepartmentMeeting,
            "committee meeting" => MeetingType::CommitteeMeeting,
            "professional development" => MeetingType::ProfessionalDevelopment,
            _ => MeetingType::Other,
        }
    }
}

impl std::fmt::Display for MeetingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingType::AcademicSenate => write!(f, "Academic Senate"),
            MeetingType::DepartmentMeeting => write!(f, "Department Meeting"),
            MeetingType::CommitteeMeeting => write!(f, "Committee Meeting"),
            MeetingType::ProfessionalDevelopment => write!(f, "Professional Development"),
            MeetingType::Other => write!(f, "Other"),
        }
    }
}

/// Requested depth of the generated notes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Standard,
    Detailed,
}

impl DetailLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(DetailLevel::Standard),
            "detailed" => Some(DetailLevel::Detailed),
            _ => None,
        }
    }
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailLevel::Standard => write!(f, "standard"),
            DetailLevel::Detailed => write!(f, "detailed"),
        }
    }
}

/// Per-request meeting metadata plus the uploaded materials, built fresh
/// for every note-generation request
#[derive(Debug, Clone)]
pub struct MeetingContext {
    pub date: NaiveDate,
    pub meeting_type: MeetingType,
    pub materials: Vec<UploadedFile>,
}

/// Fully composed prompt pair sent verbatim to the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Generated notes wrapped with the metadata of the request that produced them
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedNotes {
    pub notes: String,
    pub meeting_type: MeetingType,
    pub detail_level: DetailLevel,
    pub model: String,
}

/// Non-fatal per-file extraction failure, surfaced to the caller instead of
/// aborting the batch
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionDiagnostic {
    pub filename: String,
    pub message: String,
}

/// Aggregated text of all uploaded materials, in upload order, plus the
/// diagnostics collected along the way
#[derive(Debug, Clone, Default)]
pub struct MaterialsContent {
    pub text: String,
    pub diagnostics: Vec<ExtractionDiagnostic>,
}
