//! Prompt template for the slide outline request.

/// Build the outline request prompt for a topic and its joined snippet
/// text (newline-separated, possibly empty).
///
/// The 7-slide structure is advisory only; the model is not constrained
/// and the downstream parser tolerates any number of well- or malformed
/// segments.
pub fn outline_prompt(topic: &str, snippets: &str) -> String {
    format!(
        "You are an assistant that creates professional slide decks.\n\
         \n\
         Topic: {topic}\n\
         \n\
         Use the search results below + your knowledge to create a structured \
         slide outline for a 7-slide deck:\n\
         \n\
         - Slide 1: Title\n\
         - Slide 2: Overview\n\
         - Slide 3-6: Key points, trends, or arguments (each slide should have \
         a title + 3-4 bullet points)\n\
         - Slide 7: Conclusion / Takeaways\n\
         \n\
         Make it concise, clear, and presentation-ready.\n\
         \n\
         Search Results:\n\
         {snippets}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_interpolates_topic_and_snippets() {
        let prompt = outline_prompt("Rust in 2026", "Title A: body A\nTitle B: body B");

        assert!(prompt.contains("Topic: Rust in 2026"));
        assert!(prompt.contains("Title A: body A\nTitle B: body B"));
    }

    #[test]
    fn test_prompt_requests_seven_slides() {
        let prompt = outline_prompt("anything", "");

        assert!(prompt.contains("7-slide deck"));
        assert!(prompt.contains("Slide 1: Title"));
        assert!(prompt.contains("Slide 7: Conclusion / Takeaways"));
    }

    #[test]
    fn test_prompt_tolerates_empty_snippets() {
        let prompt = outline_prompt("quiet topic", "");

        assert!(prompt.ends_with("Search Results:\n\n"));
    }
}
