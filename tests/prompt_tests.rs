use summarizer::prompt::{
    OUT_OF_SCOPE_REPLY, Prompt, build_summary_prompt, estimate_tokens,
};

#[test]
fn test_prompt_wraps_user_text_verbatim() {
    let text = "Quarterly revenue grew 12% while costs stayed flat.\nHeadcount is unchanged.";
    let prompt = build_summary_prompt(text);

    assert!(prompt.ends_with(&format!("User Input:\n{text}\n")));
    assert!(prompt.starts_with("You are a professional AI intelligence assistant"));
}

#[test]
fn test_prompt_carries_scope_language_and_footer_rules() {
    let prompt = build_summary_prompt("anything");

    assert!(prompt.contains("ONLY perform summarization"));
    assert!(prompt.contains(OUT_OF_SCOPE_REPLY));
    assert!(prompt.contains("professional English by default"));
    assert!(prompt.contains("METADATA FOOTER"));
    assert!(!prompt.contains("{refusal}"));
}

#[test]
fn test_prompt_only_varies_by_user_text() {
    let a = build_summary_prompt("first input");
    let b = build_summary_prompt("second input");

    assert_eq!(
        a.replace("first input", ""),
        b.replace("second input", "")
    );
}

#[test]
fn test_summary_prompt_keeps_length_budget() {
    let prompt = Prompt::for_summary("text", 200);
    assert_eq!(prompt.max_length, 200);
    assert!(prompt.text.contains("User Input:\ntext"));

    let raw = Prompt::raw("ping", 10);
    assert_eq!(raw.text, "ping");
}

#[test]
fn test_out_of_range_length_budget_is_clamped() {
    assert_eq!(Prompt::for_summary("text", -1).max_length, 0);
    assert_eq!(Prompt::for_summary("text", 5_000_000_000).max_length, u32::MAX);
}

#[test]
fn test_estimate_tokens() {
    assert_eq!(estimate_tokens(""), 1);
    assert_eq!(estimate_tokens("abcdefgh"), 3);
}
