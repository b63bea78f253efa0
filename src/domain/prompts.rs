//! Prompt assembly for meeting-notes generation
//!
//! Builds the system/user prompt pair sent to the completion endpoint.
//! Everything here is pure string construction: given the same transcript,
//! context, detail level, and aggregated materials, the output is
//! byte-identical. Aggregation itself happens upstream in the pipeline.

use crate::domain::glossary::Glossary;
use crate::domain::models::{DetailLevel, MaterialsContent, MeetingContext, Prompt, UploadedFile};

/// Marker inserted into the materials slot when nothing was uploaded.
pub const NO_MATERIALS_MARKER: &str = "No additional materials provided";

/// Separator under which aggregated file content is appended to the transcript.
pub const MATERIALS_SEPARATOR: &str = "\n\nContent from uploaded materials:\n";

const SYSTEM_PROMPT: &str = r#"You are a professional note-taker for California Community Colleges, specializing in creating comprehensive, detailed meeting notes with rich narrative descriptions. Focus on:
1. Providing extensive context for each discussion point
2. Capturing the flow and evolution of discussions
3. Explaining rationale behind decisions
4. Using roles/functions instead of names
5. Including specific examples while maintaining anonymity
6. Preserving technical details and data points

Format notes with:
- Clear section headings
- Detailed bullet points with complete context
- Rich narrative descriptions
- Specific examples and data
- Decision rationale
- Next steps and implications"#;

const DETAILED_INTRO: &str =
    "Create detailed, narrative-style notes from this transcript following these requirements:";

const STANDARD_INTRO: &str = "Create clear, concise notes that capture the main points and decisions of this transcript, following these requirements:";

const DETAILED_SECTIONS: &str = r#"Required Sections:

1. Quick Navigation
- Links to major topics
- Key decisions summary
- Critical deadlines

2. Discussion Points
For each major topic, include:
• **Context & Background:** Detailed explanation of why this topic was discussed
• **Key Updates:** Rich narrative descriptions of main points
• **Challenges & Solutions:** Thorough exploration of issues raised and solutions proposed
• **Decisions & Rationale:** Complete context for why decisions were made
• **Implementation Details:** Specific steps and considerations
• **Examples & Data:** Relevant numbers, scenarios, or cases discussed

3. Action Items
By responsible area (not individual):
• Specific tasks with complete context
• Dependencies and requirements
• Resource needs
• Success criteria

4. Next Steps
• Upcoming work required
• Preparation needed
• Dependencies and timelines

Format Requirements:
- Use rich narrative bullet points that tell complete stories
- Include specific examples and data points
- Maintain anonymity while preserving context
- Bold key terms and concepts
- Preserve technical details and numbers
- Group related items logically"#;

const STANDARD_SECTIONS: &str = r#"Required Sections:

1. Meeting Overview
- Purpose and context
- Major takeaways

2. Discussion Points
- Clear, bolded headers for each topic
- Concise summaries of main points and decisions

3. Action Items
- Responsible parties
- Clear deadlines

4. Next Steps
- Upcoming deadlines
- Future meetings

Format Requirements:
- Use markdown formatting
- Bold (**) for headers and key terms
- Use bullet points for lists
- Maintain professional tone
- Maintain anonymity, referring to roles rather than individuals"#;

/// Fixed system instruction describing the assistant's role.
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Format the 1-indexed list of uploaded material filenames.
pub fn format_materials_list(materials: &[UploadedFile]) -> String {
    if materials.is_empty() {
        return NO_MATERIALS_MARKER.to_string();
    }

    let mut formatted = String::from("Uploaded Materials:\n");
    for (idx, material) in materials.iter().enumerate() {
        formatted.push_str(&format!("{}. {}\n", idx + 1, material.filename));
    }
    formatted
}

fn intro(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Standard => STANDARD_INTRO,
        DetailLevel::Detailed => DETAILED_INTRO,
    }
}

fn sections(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Standard => STANDARD_SECTIONS,
        DetailLevel::Detailed => DETAILED_SECTIONS,
    }
}

/// Compose the prompt pair for one note-generation request.
///
/// The transcript lands verbatim at the end of the user text; aggregated
/// materials text, when present, is appended to it under a fixed separator
/// first. The caller is responsible for rejecting empty transcripts.
pub fn build_notes_prompt(
    transcript: &str,
    context: &MeetingContext,
    detail_level: DetailLevel,
    materials: &MaterialsContent,
) -> Prompt {
    let mut text = transcript.to_string();
    if !materials.text.is_empty() {
        text.push_str(MATERIALS_SEPARATOR);
        text.push_str(&materials.text);
    }

    let user = format!(
        "{intro}\n\n\
         Meeting Context:\n\
         - Date: {date}\n\
         - Type: {meeting_type}\n\n\
         Referenced Materials:\n\
         {materials_list}\n\n\
         {sections}\n\n\
         Reference these terms and definitions when relevant:\n\n\
         {glossary}\n\n\
         Meeting transcript to analyze:\n\n\
         {text}",
        intro = intro(detail_level),
        date = context.date.format("%m/%d/%Y"),
        meeting_type = context.meeting_type,
        materials_list = format_materials_list(&context.materials),
        sections = sections(detail_level),
        glossary = Glossary::render(),
        text = text,
    );

    Prompt {
        system: system_prompt().to_string(),
        user,
    }
}
