//! Domain glossary referenced by the generated notes
//!
//! California Community College terms the note-taker is expected to expand
//! and define consistently. Process-wide constant, read-only, rendered in a
//! fixed order so prompt output stays deterministic.

/// Term definitions, in the order they are serialized into the prompt.
const TERMS: &[(&str, &str)] = &[
    (
        "Vision 2030",
        "The California Community Colleges Vision 2030 initiative - A strategic plan focusing on:
- Closing equity gaps
- Improving transfer rates
- Increasing workforce alignment
- Enhancing student success metrics
- Implementing innovative teaching practices",
    ),
    (
        "AB928",
        "Assembly Bill 928 (Student Transfer Achievement Reform Act of 2021):
- Establishes a singular lower-division general education pathway
- Creates the California General Education Transfer Curriculum (CalGETC)
- Requires implementation by Fall 2025
- Aims to streamline transfer between CCC, CSU, and UC systems",
    ),
    (
        "FTES",
        "Full-Time Equivalent Student:
- Key funding metric for California Community Colleges
- Calculated as 525 hours of student instruction annually
- Used for state funding allocations
- Critical for budget planning and resource allocation",
    ),
    (
        "CalGETC",
        "California General Education Transfer Curriculum:
- New unified GE pattern for UC/CSU transfer starting Fall 2025
- Replaces IGETC and CSU GE Breadth
- Requires 34 semester units
- Includes Ethnic Studies requirement
- Designed to simplify transfer process",
    ),
    (
        "IGETC",
        "Intersegmental General Education Transfer Curriculum:
- Current transfer pattern for UC/CSU
- Being replaced by CalGETC in Fall 2025
- Important for transfer planning and articulation",
    ),
    (
        "Title 5",
        "California Code of Regulations, Title 5:
- Governs California Community Colleges
- Establishes educational standards
- Defines degree and certificate requirements
- Sets policies for curriculum and instruction",
    ),
];

/// Fixed glossary of domain terms
pub struct Glossary;

impl Glossary {
    /// All terms in serialization order.
    pub fn entries() -> &'static [(&'static str, &'static str)] {
        TERMS
    }

    /// Serialize every term for embedding into the user prompt.
    pub fn render() -> String {
        let mut out = String::new();
        for (term, definition) in Self::entries() {
            out.push_str("**");
            out.push_str(term);
            out.push_str("**:\n");
            out.push_str(definition);
            out.push_str("\n\n");
        }
        out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_terms_present() {
        let terms: Vec<&str> = Glossary::entries().iter().map(|(t, _)| *t).collect();
        assert_eq!(
            terms,
            ["Vision 2030", "AB928", "FTES", "CalGETC", "IGETC", "Title 5"]
        );
    }

    #[test]
    fn test_ftes_definition() {
        let (_, definition) = Glossary::entries()
            .iter()
            .find(|(term, _)| *term == "FTES")
            .unwrap();
        assert!(definition.contains("525 hours of student instruction annually"));
    }

    #[test]
    fn test_render_contains_full_definitions() {
        let rendered = Glossary::render();
        assert!(rendered.contains("**FTES**:"));
        assert!(rendered.contains("Key funding metric for California Community Colleges"));
        assert!(rendered.contains("**Title 5**:"));
        // Deterministic: two renders are byte-identical
        assert_eq!(rendered, Glossary::render());
    }
}
