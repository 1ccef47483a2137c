use privatepen::pipeline::{
    AnalysisResult, ExpansionMode, GrammarIssue, ListResult, RephraseResult, Sentiment,
    SimplificationResult, StyleProfile, SummaryResult, Tone, ToneAnalysis, Translations,
};
use privatepen::stats::format_count;
use privatepen::{Operation, Settings, Snippet, WritingStats};

pub fn loading_message(operation: Operation) -> &'static str {
    match operation {
        Operation::Grammar => "Checking grammar...",
        Operation::Tone => "Analyzing tone...",
        Operation::Summarize => "Creating summary...",
        Operation::Rephrase => "Generating alternatives...",
        Operation::Expand => "Processing text...",
        Operation::Translate => "Translating...",
        Operation::Simplify => "Simplifying text...",
        Operation::Bullets => "Formatting lists...",
    }
}

pub fn analysis_result(result: &AnalysisResult) -> String {
    match result {
        AnalysisResult::Grammar(issues) => grammar(issues),
        AnalysisResult::Tone(analysis) => tone(analysis),
        AnalysisResult::Summarize(summary) => summarize(summary),
        AnalysisResult::Rephrase(variants) => rephrase(variants),
        AnalysisResult::Expand(expansion) => {
            let title = match expansion.mode {
                ExpansionMode::Expand => "Expanded Text",
                ExpansionMode::Condense => "Condensed Text",
            };
            format!("{title}\n{}", expansion.result)
        }
        AnalysisResult::Translate(translations) => translate(translations),
        AnalysisResult::Simplify(simplification) => simplify(simplification),
        AnalysisResult::Bullets(lists) => bullets(lists),
    }
}

fn grammar(issues: &[GrammarIssue]) -> String {
    if issues.is_empty() {
        return "✓ Perfect! No grammar issues found.".to_string();
    }
    let plural = if issues.len() > 1 { "s" } else { "" };
    let mut out = format!("Grammar Check - {} issue{plural}", issues.len());
    for issue in issues {
        out.push_str(&format!("\n  [{}] {}", issue.kind, issue.message));
        if let Some(suggestion) = &issue.suggestion {
            out.push_str(&format!("\n      {suggestion}"));
        }
    }
    out
}

fn tone(analysis: &ToneAnalysis) -> String {
    let face = match analysis.sentiment.label {
        Sentiment::Positive => "😊",
        Sentiment::Negative => "😟",
        Sentiment::Neutral => "😐",
    };
    let mut out = format!(
        "Tone Analysis\n  Tone: {} ({}% confident)\n  Sentiment: {face} {} ({:.0}%)",
        capitalize(analysis.tone.primary.as_str()),
        (analysis.tone.confidence * 100.0).round(),
        capitalize(&analysis.sentiment.label.to_string()),
        analysis.sentiment.score * 100.0,
    );
    for suggestion in &analysis.suggestions {
        out.push_str(&format!("\n  • {suggestion}"));
    }
    out
}

fn summarize(summary: &SummaryResult) -> String {
    let mut out = format!("Text Summary\n  Brief: {}\n  Detailed: {}", summary.brief, summary.detailed);
    if !summary.key_points.is_empty() {
        out.push_str("\n  Key points:");
        for point in &summary.key_points {
            out.push_str(&format!("\n    • {point}"));
        }
    }
    out
}

fn rephrase(variants: &RephraseResult) -> String {
    format!(
        "Rephrase Options\n  Formal: {}\n  Simple: {}\n  Creative: {}",
        variants.formal, variants.simple, variants.creative
    )
}

fn translate(translations: &Translations) -> String {
    let mut out = "Translations".to_string();
    for (language, text) in translations.entries() {
        out.push_str(&format!("\n  {}: {text}", capitalize(language)));
    }
    out
}

fn simplify(simplification: &SimplificationResult) -> String {
    let summary = if simplification.change_count > 0 {
        format!("Simplified {} complex terms!", simplification.change_count)
    } else {
        "Text is already simple!".to_string()
    };
    format!("Simplified Text\n  {summary}\n{}", simplification.simplified)
}

fn bullets(lists: &ListResult) -> String {
    format!(
        "Bullets\n{}\n\nNumbered\n{}\n\nCheckboxes\n{}\n\nArrows\n{}",
        lists.bullets, lists.numbered, lists.checkboxes, lists.arrows
    )
}

pub fn style_profile(profile: &StyleProfile) -> String {
    format!(
        "Average sentence length: {} words\nAverage word length: {:.1} characters\nCommon phrases: {}\nSentences sampled: {}",
        profile.avg_sentence_length,
        profile.avg_word_length,
        profile.common_phrases.join(", "),
        profile.sample_size
    )
}

pub fn writing_stats(stats: &WritingStats) -> String {
    let mut out = format!(
        "Total words: {}\nSessions: {}\nAverage sentence length: {}",
        format_count(stats.total_words),
        stats.sessions_count,
        stats.avg_sentence_length.round()
    );
    for tone in [Tone::Formal, Tone::Casual, Tone::Neutral] {
        out.push_str(&format!(
            "\n  {:<8} {:>5} ({:.0}%)",
            capitalize(tone.as_str()),
            stats.tone_distribution.get(tone),
            stats.tone_distribution.percentage(tone)
        ));
    }
    out
}

pub fn snippets(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return "No snippets saved yet".to_string();
    }
    snippets
        .iter()
        .enumerate()
        .map(|(index, snippet)| format!("[{index}] {}\n    {}", snippet.title, snippet.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn settings(settings: &Settings) -> String {
    format!(
        "privacyMode: {}\ntheme: {}\nwhisperMode: {}\nautoComplete: {}\nlanguage: {}",
        settings.privacy_mode,
        settings.theme,
        settings.whisper_mode,
        settings.auto_complete,
        settings.language
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
