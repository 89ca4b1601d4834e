use indoc::formatdoc;

/// Output budget for image descriptions
pub const DESCRIPTION_MAX_TOKENS: u32 = 1000;

/// Output budget for follow-up answers
pub const FOLLOW_UP_MAX_TOKENS: u32 = 800;

/// Description returned when no model backend answered
pub const DEGRADED_DESCRIPTION: &str = "This appears to be an educational image with visual content that requires \
    detailed analysis. The AI system has received your image and is processing the visual elements to provide \
    comprehensive educational insights.";

pub(crate) fn description(seed: &str) -> String {
    formatdoc! {"
        You are an expert educator specializing in describing visual content for visually impaired students.

        Your task is to create a detailed, engaging audio description that covers:
        - Context: what kind of material this is and what it shows
        - Key elements: the important parts and how they relate to each other
        - Text: any written content, read out clearly
        - Educational significance: why this matters and what a learner should take away

        Use clear, descriptive language suited to listening rather than reading, and keep an
        encouraging, educational tone.

        Content to describe: {seed}

        Provide a comprehensive description suitable for a visually impaired student:"
    }
}

pub(crate) fn follow_up(original_description: &str, question: &str) -> String {
    formatdoc! {"
        You are an expert educator helping a visually impaired student understand visual content.

        Original content description: {original_description}

        Student's question: {question}

        Provide a clear, detailed answer that:
        - Directly addresses the student's question
        - References the original content when relevant
        - Explains concepts in an accessible way
        - Uses encouraging, supportive language
        - Is optimized for audio delivery

        Answer:"
    }
}

/// Answer returned when no model backend answered
pub fn follow_up_fallback(question: &str) -> String {
    format!(
        "Thank you for your question about '{question}'. Based on the educational content we've been discussing, \
         I can help explain this concept in more detail. Let me provide you with a comprehensive answer that \
         builds on what we've already covered."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_prompt_embeds_seed() {
        let prompt = description("This image contains: Heart, Artery");

        assert!(prompt.contains("Content to describe: This image contains: Heart, Artery"));
        assert!(prompt.starts_with("You are an expert educator"));
    }

    #[test]
    fn follow_up_prompt_embeds_context_and_question() {
        let prompt = follow_up("Diagram of a heart.", "What pumps blood?");

        assert!(prompt.contains("Original content description: Diagram of a heart."));
        assert!(prompt.contains("Student's question: What pumps blood?"));
        assert!(prompt.trim_end().ends_with("Answer:"));
    }

    #[test]
    fn fallback_quotes_question() {
        let answer = follow_up_fallback("What pumps blood?");

        assert!(answer.starts_with("Thank you for your question about 'What pumps blood?'. "));
    }
}
