/// Sentence the model must use when asked for anything other than analysis.
pub const OUT_OF_SCOPE_REPLY: &str =
    "Please provide text data for analysis. I am specialized in summarization only.";

/// Fixed instruction wrapped around every user input.
pub const SUMMARY_INSTRUCTIONS: &str = "You are a professional AI intelligence assistant specialized ONLY in text summarization and analysis.

Strict Scope Rule:
- ONLY perform summarization, key topic extraction, or analysis of the provided text.
- If the user asks for anything else (general chat, unrelated questions, coding, jokes, etc.), you MUST politely refuse and say: \"{refusal}\"

Strict Response Guidelines:
1. DEFAULT LANGUAGE: Always respond in professional English by default.
2. EXPLICIT REQUESTS: If and ONLY IF the user explicitly asks for another language, follow that.
3. FORMATTING: If the user asks for bullet points, topics, or specific lengths, follow them strictly.
4. METADATA FOOTER: At the very end of your response, always include a clear count of what you delivered (e.g., \"Total Points: 5\" or \"Word Count: 85 words\").
5. QUALITY: Provide a high-quality, concise, and professional result.";

/// Prompt handed to every provider adapter.
///
/// `max_length` is an output budget for adapters that take one; cloud
/// adapters rely on the instructions instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub max_length: u32,
}

impl Prompt {
    /// Negative lengths clamp to zero and oversized ones to `u32::MAX`.
    #[must_use]
    pub fn for_summary(user_text: &str, max_length: i64) -> Self {
        Self {
            text: build_summary_prompt(user_text),
            max_length: u32::try_from(max_length.max(0)).unwrap_or(u32::MAX),
        }
    }

    /// A bare prompt without the summarization instructions.
    #[must_use]
    pub fn raw(text: impl Into<String>, max_length: u32) -> Self {
        Self {
            text: text.into(),
            max_length,
        }
    }
}

/// Wraps raw user text in the fixed summarization instructions.
#[must_use]
pub fn build_summary_prompt(user_text: &str) -> String {
    format!(
        "{}\n\nUser Input:\n{}\n",
        SUMMARY_INSTRUCTIONS.replace("{refusal}", OUT_OF_SCOPE_REPLY),
        user_text
    )
}

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}
