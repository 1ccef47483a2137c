use privatepen::pipeline::{ExpansionMode, IssueKind, Sentiment, Tone};
use privatepen::{AnalysisResult, Operation};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::*;

/// Every operation returns the variant tagged with its own name
#[test]
fn test_run_tags_every_operation() {
    let pipeline = toolbar_pipeline();
    for operation in Operation::ALL {
        let result = pipeline.run(operation, REPORT_TEXT);
        assert_eq!(result.operation(), operation, "Wrong variant for {operation}");
    }
}

/// Operations are total: empty input never panics and gives empty-ish results
#[test]
fn test_empty_input_is_total() {
    for pipeline in [toolbar_pipeline(), side_panel_pipeline()] {
        for operation in Operation::ALL {
            let _ = pipeline.run(operation, "");
        }
        assert!(pipeline.check_grammar("").is_empty());
        let lists = pipeline.format_lists("");
        assert!(lists.bullets.is_empty() && lists.numbered.is_empty());
        let profile = pipeline.profile_style("");
        assert_eq!(profile.sample_size, 0);
        assert_eq!(profile.avg_sentence_length, 0);
        assert_eq!(profile.avg_word_length, 0.0);
        let summary = pipeline.summarize("   ");
        assert_eq!(summary.brief, "   ");
        assert!(summary.key_points.is_empty());
    }
}

#[test]
fn test_grammar_double_space_position() {
    let issues = toolbar_pipeline().check_grammar("Double  space.");
    let spacing: Vec<_> = issues.iter().filter(|i| i.kind == IssueKind::Spacing).collect();
    assert_eq!(spacing.len(), 1);
    assert_eq!(spacing[0].position, Some(6));
}

#[test]
fn test_grammar_terminal_punctuation() {
    let pipeline = toolbar_pipeline();
    let issues = pipeline.check_grammar("no terminal punctuation even though long enough");
    assert!(issues.iter().any(|i| i.kind == IssueKind::Punctuation));
    assert!(issues.iter().any(|i| i.kind == IssueKind::Capitalization));

    let clean = pipeline.check_grammar("Ends properly.");
    assert!(!clean.iter().any(|i| i.kind == IssueKind::Punctuation));
}

/// Passive voice and repetition run in the canonical rule set, after the mechanical rules
#[test]
fn test_grammar_extended_rules_order() {
    let text = "the report was reviewed  and the report was filed, report after report after report";
    let issues = toolbar_pipeline().check_grammar(text);
    let kinds: Vec<IssueKind> = issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            IssueKind::Spacing,
            IssueKind::Punctuation,
            IssueKind::Capitalization,
            IssueKind::Style,
            IssueKind::Repetition,
        ]
    );
    assert_eq!(issues[4].message, "Word \"report\" appears 5 times");
}

/// Side panel flags missing punctuation on any non-empty text
#[test]
fn test_side_panel_punctuation_threshold() {
    let issues = side_panel_pipeline().check_grammar("Short");
    assert!(issues.iter().any(|i| i.kind == IssueKind::Punctuation));
    let issues = toolbar_pipeline().check_grammar("Short");
    assert!(!issues.iter().any(|i| i.kind == IssueKind::Punctuation));
}

#[test]
fn test_sentiment_examples() {
    let pipeline = toolbar_pipeline();
    let positive = pipeline.analyze_tone("This is good and great!");
    assert_eq!(positive.sentiment.label, Sentiment::Positive);
    assert_eq!(positive.sentiment.score, 0.7);

    let negative = pipeline.analyze_tone("This is bad and terrible.");
    assert_eq!(negative.sentiment.label, Sentiment::Negative);
    assert_eq!(negative.sentiment.score, 0.3);
}

/// Side panel scales the score by keyword count
#[test]
fn test_side_panel_scaled_sentiment() {
    let analysis = side_panel_pipeline().analyze_tone("This is good and great!");
    assert_eq!(analysis.sentiment.label, Sentiment::Positive);
    assert!((analysis.sentiment.score - 0.7).abs() < 1e-9);
}

#[test]
fn test_tone_presets_diverge() {
    let toolbar = toolbar_pipeline().analyze_tone(FORMAL_TEXT);
    assert_eq!(toolbar.tone.primary, Tone::Formal);
    assert_eq!(toolbar.tone.confidence, 0.85);

    // Short sentences keep the side panel from calling it formal
    let side_panel = side_panel_pipeline().analyze_tone(FORMAL_TEXT);
    assert_eq!(side_panel.tone.primary, Tone::Neutral);

    let casual = toolbar_pipeline().analyze_tone(CASUAL_TEXT);
    assert_eq!(casual.tone.primary, Tone::Casual);
    assert!(casual
        .suggestions
        .contains(&"Great for informal communication".to_string()));
}

#[test]
fn test_tone_is_deterministic() {
    let pipeline = toolbar_pipeline();
    assert_eq!(pipeline.analyze_tone(REPORT_TEXT), pipeline.analyze_tone(REPORT_TEXT));
}

#[test]
fn test_summary_short_text_verbatim() {
    let text = "  Just one thought, no terminator ";
    let summary = toolbar_pipeline().summarize(text);
    assert_eq!(summary.brief, text);
    assert_eq!(summary.detailed, text);
    assert_eq!(summary.key_points, vec![text.to_string()]);
}

#[test]
fn test_summary_toolbar_policy() {
    let summary = toolbar_pipeline().summarize(REPORT_TEXT);
    assert_eq!(summary.brief, "We met on Monday.");
    assert_eq!(
        summary.detailed,
        "We met on Monday. It is important to finish the audit. We adjourned at noon."
    );
    assert_eq!(summary.key_points, vec!["It is important to finish the audit".to_string()]);
}

#[test]
fn test_summary_side_panel_policy() {
    let summary = side_panel_pipeline().summarize(REPORT_TEXT);
    assert_eq!(summary.brief, "We met on Monday. We adjourned at noon.");
    assert_eq!(summary.detailed, "We met on Monday. The budget was reviewed.");
}

#[test]
fn test_rephrase_variants() {
    let result = toolbar_pipeline().rephrase("I think we should utilize the good stuff.");
    assert_eq!(result.formal, "I think we should utilize the good material.");
    assert_eq!(result.simple, "I think we should use the good stuff.");
    assert_eq!(result.creative, "I believe we should utilize the remarkable stuff.");
}

#[test]
fn test_side_panel_simple_truncates() {
    let text = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen seventeen. Short one.";
    let result = side_panel_pipeline().rephrase(text);
    assert_eq!(
        result.simple,
        "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen. Short one."
    );
}

#[test]
fn test_expand_short_and_condense_long() {
    let pipeline = toolbar_pipeline();
    let short = "This short note has exactly ten words in it, really.";
    let expanded = pipeline.expand_or_condense(short);
    assert_eq!(expanded.mode, ExpansionMode::Expand);
    assert!(expanded.result.starts_with(short));

    let long = (0..12)
        .map(|i| format!("Sentence {i} has exactly five words."))
        .collect::<Vec<_>>()
        .join(" ");
    let condensed = pipeline.expand_or_condense(&long);
    assert_eq!(condensed.mode, ExpansionMode::Condense);
    assert_eq!(condensed.result.lines().count(), 3);
    assert!(condensed.result.starts_with("1. Sentence 0 has exactly five words"));

    let side_panel = side_panel_pipeline().expand_or_condense(&long);
    assert_eq!(side_panel.result.lines().count(), 5);
    assert!(side_panel.result.starts_with("• Sentence 0"));
}

#[test]
fn test_simplify_counts_entries() {
    let result = toolbar_pipeline().simplify("Utilize it to demonstrate and utilize again.");
    assert_eq!(result.simplified, "use it to show and use again.");
    assert_eq!(result.change_count, 2);

    let untouched = toolbar_pipeline().simplify("Plain words only.");
    assert_eq!(untouched.change_count, 0);
    assert_eq!(untouched.simplified, "Plain words only.");
}

#[test]
fn test_list_line_counts_match_sentences() {
    let lists = toolbar_pipeline().format_lists(REPORT_TEXT);
    for rendered in [&lists.bullets, &lists.numbered, &lists.checkboxes, &lists.arrows] {
        assert_eq!(rendered.lines().count(), 5);
    }
    assert_eq!(lists.numbered.lines().last(), Some("5. We adjourned at noon"));
}

/// JSON shape carries the operation tag next to the typed payload
#[test]
fn test_result_json_is_tagged() {
    let result = toolbar_pipeline().run(Operation::Simplify, "We utilize tools.");
    let json = serde_json::to_value(&result).expect("Result should serialize");
    assert_eq!(json["operation"], "simplify");
    assert_eq!(json["result"]["changeCount"], 1);

    let back: AnalysisResult = serde_json::from_value(json).expect("Result should deserialize");
    assert_eq!(back, result);
}
