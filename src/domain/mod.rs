/// Domain layer - core business models
///
/// These models are transport-agnostic and represent core business entities.
pub mod glossary;
pub mod models;
pub mod prompts;

pub use glossary::Glossary;
pub use models::{
    DetailLevel, ExtractionDiagnostic, GeneratedNotes, MaterialsContent, MeetingContext,
    MeetingType, Prompt, UploadedFile,
};
