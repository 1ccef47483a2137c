use std::sync::Arc;

use privatepen::pipeline::style_profile::analyze_writing_style_at;
use privatepen::pipeline::Tone;
use privatepen::{Settings, SettingsUpdate, StatsDelta, StateStore, Theme, WritingStats};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::*;

/// Snippets keep insertion order and allow duplicate titles
#[tokio::test]
async fn test_snippet_add_list_delete() {
    let fixture = TestFixture::new();
    let store = fixture.store();

    store.add_snippet("Greeting", "Hello team,").await.unwrap();
    store.add_snippet("Sign-off", "Best regards").await.unwrap();
    store.add_snippet("Greeting", "Hi all,").await.unwrap();

    let titles: Vec<String> = store
        .snippets()
        .await
        .unwrap()
        .into_iter()
        .map(|snippet| snippet.title)
        .collect();
    assert_eq!(titles, vec!["Greeting", "Sign-off", "Greeting"]);

    let removed = store.delete_snippet(1).await.unwrap();
    assert_eq!(removed.content, "Best regards");

    let remaining = store.snippets().await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[1].content, "Hi all,");
}

#[tokio::test]
async fn test_snippet_validation_errors() {
    let fixture = TestFixture::new();
    let store = fixture.store();

    assert!(store.add_snippet("   ", "content").await.is_err());
    assert!(store.add_snippet("title", "").await.is_err());
    assert!(store.delete_snippet(0).await.is_err());

    store.add_snippet("Only", "one").await.unwrap();
    assert!(store.delete_snippet(1).await.is_err());
    assert_eq!(store.snippets().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_settings_partial_update() {
    let fixture = TestFixture::new();
    let store = fixture.store();
    assert_eq!(store.settings().await.unwrap(), Settings::default());

    let updated = store
        .update_settings(SettingsUpdate {
            theme: Some(Theme::Dark),
            whisper_mode: Some(true),
            ..SettingsUpdate::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.theme, Theme::Dark);
    assert!(updated.whisper_mode);
    assert!(updated.privacy_mode);

    let updated = store
        .update_settings(SettingsUpdate {
            language: Some("fr".to_string()),
            ..SettingsUpdate::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.theme, Theme::Dark);
    assert_eq!(updated.language, "fr");
}

/// A new profile replaces the previous one
#[tokio::test]
async fn test_style_profile_overwrite() {
    let fixture = TestFixture::new();
    let store = fixture.store();
    assert_eq!(store.style_profile().await.unwrap(), None);

    let first = analyze_writing_style_at("I write short notes. I write them often.", 1);
    store.save_style_profile(first.clone()).await.unwrap();
    assert_eq!(store.style_profile().await.unwrap(), Some(first));

    let second = analyze_writing_style_at("Completely different sample text here.", 2);
    store.save_style_profile(second.clone()).await.unwrap();
    assert_eq!(store.style_profile().await.unwrap(), Some(second));
}

/// Concurrent read-modify-write sequences on one store never lose a session
#[tokio::test]
async fn test_concurrent_stats_updates_do_not_race() {
    let fixture = TestFixture::new();
    let store = Arc::new(fixture.store());

    let mut handles = Vec::new();
    for i in 0..16u64 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let tone = if i % 2 == 0 { Tone::Formal } else { Tone::Neutral };
            let delta = StatsDelta { word_count: 10, sentence_count: 2, tone: Some(tone) };
            store.update_stats(&delta).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.sessions_count, 16);
    assert_eq!(stats.total_words, 160);
    assert_eq!(stats.tone_distribution.formal, 8);
    assert_eq!(stats.tone_distribution.neutral, 8);
    assert_eq!(stats.avg_sentence_length, 5.0);
}

/// Separate stores on one file, as two surfaces would open it, never lose a session
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_independent_stores_share_one_file_safely() {
    let fixture = TestFixture::new();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let dir = fixture.root_path.clone();
        handles.push(tokio::spawn(async move {
            let store = StateStore::in_dir(&dir);
            let delta = StatsDelta { word_count: 1, sentence_count: 1, tone: Some(Tone::Casual) };
            store.update_stats(&delta).await
        }));
    }
    for handle in handles {
        handle
            .await
            .expect("Update task should not panic")
            .expect("Every update should be written");
    }

    let store = fixture.store();
    let stats = store.stats().await.unwrap();
    assert_eq!(stats.sessions_count, 20);
    assert_eq!(stats.total_words, 20);
    assert_eq!(stats.tone_distribution.casual, 20);

    // Only the record and its lock file remain; temporary files were all renamed away
    let mut names: Vec<String> = std::fs::read_dir(&fixture.root_path)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec![".privatepen_state.json", ".privatepen_state.json.lock"]);
}

/// Records written before sentence totals were tracked still load
#[tokio::test]
async fn test_legacy_record_loads() {
    let fixture = TestFixture::new();
    let path = fixture.create_sample(
        "legacy.json",
        r#"{
            "privacyMode": false,
            "theme": "light",
            "writingStats": {
                "totalWords": 120,
                "sessionsCount": 4,
                "avgSentenceLength": 0,
                "toneDistribution": { "formal": 1, "casual": 2, "neutral": 1 }
            },
            "snippets": []
        }"#,
    );
    let store = StateStore::new(path);

    let record = store.load().await.unwrap();
    assert!(!record.settings.privacy_mode);
    assert_eq!(record.settings.theme, Theme::Light);
    assert_eq!(record.settings.language, "en");
    assert_eq!(record.writing_stats.total_sentences, 0);
    assert_eq!(record.writing_stats.tone_distribution.casual, 2);

    let stats = store
        .update_stats(&StatsDelta { word_count: 6, sentence_count: 3, tone: None })
        .await
        .unwrap();
    assert_eq!(stats.total_words, 126);
    assert_eq!(stats.sessions_count, 5);
    assert_eq!(stats.avg_sentence_length, 42.0);
}

#[tokio::test]
async fn test_reset_keeps_other_records() {
    let fixture = TestFixture::new();
    let store = fixture.store();
    store.add_snippet("Keep", "me").await.unwrap();
    store
        .update_stats(&StatsDelta { word_count: 3, sentence_count: 1, tone: None })
        .await
        .unwrap();

    let reset = store.reset_stats().await.unwrap();
    assert_eq!(reset, WritingStats::default());
    assert_eq!(store.snippets().await.unwrap().len(), 1);
}
