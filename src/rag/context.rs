//! Grounding-prompt construction from retrieved chunks

use std::fmt::Write;

use crate::rag::RetrievedChunk;

/// Instruction line telling the model how to cite the passages below it.
const CITATION_INSTRUCTION: &str = "Answer using the sources below. When you use a fact from a source, cite it with its marker, for example [source:1].";

/// Build the grounding prompt for a non-empty chunk sequence.
///
/// Pure and deterministic. Markers are 1-indexed in input order, so
/// `[source:N]` always refers to `chunks[N - 1]`; the orchestrator returns
/// the same sequence unreordered, keeping citations resolvable positionally.
pub fn build_grounding_prompt(chunks: &[RetrievedChunk]) -> String {
    let mut prompt = String::from(CITATION_INSTRUCTION);

    for (idx, chunk) in chunks.iter().enumerate() {
        let _ = write!(prompt, "\n\n[source:{}]\n{}", idx + 1, chunk.content);
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: &str, content: &str) -> RetrievedChunk {
        RetrievedChunk {
            id: id.to_string(),
            content: content.to_string(),
            score: None,
            citation: None,
        }
    }

    #[test]
    fn test_prompt_starts_with_citation_instruction() {
        let prompt = build_grounding_prompt(&[chunk("a", "alpha")]);
        assert!(prompt.starts_with(CITATION_INSTRUCTION));
    }

    #[test]
    fn test_markers_are_one_indexed_in_input_order() {
        let chunks = vec![chunk("a", "alpha"), chunk("b", "beta"), chunk("c", "gamma")];
        let prompt = build_grounding_prompt(&chunks);

        let pos1 = prompt.find("[source:1]\nalpha").unwrap();
        let pos2 = prompt.find("[source:2]\nbeta").unwrap();
        let pos3 = prompt.find("[source:3]\ngamma").unwrap();
        assert!(pos1 < pos2 && pos2 < pos3);
        assert!(!prompt.contains("[source:4]"));
    }

    #[test]
    fn test_blank_line_precedes_each_marker() {
        let prompt = build_grounding_prompt(&[chunk("a", "alpha"), chunk("b", "beta")]);
        assert!(prompt.contains("\n\n[source:1]\n"));
        assert!(prompt.contains("alpha\n\n[source:2]\n"));
    }

    #[test]
    fn test_chunk_content_is_raw() {
        let prompt = build_grounding_prompt(&[chunk("a", "line one\nline two")]);
        assert!(prompt.contains("[source:1]\nline one\nline two"));
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let chunks = vec![chunk("a", "alpha"), chunk("b", "beta")];
        assert_eq!(build_grounding_prompt(&chunks), build_grounding_prompt(&chunks));
    }
}
