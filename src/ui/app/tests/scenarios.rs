//! End-to-end controller scenarios against a scripted diff service.

use super::fixtures::{structured_no_diff_result, text_diff_result};
use super::harness::{MemoryThemeStore, TestAppBuilder, test_app};
use crate::domain::{DARK_MARKER, DiffRequest, DiffServiceError, LineClass, THEME_STORAGE_KEY, Theme};
use crate::ui::components::diff::mount::PLACEHOLDER_TEXT;
use crate::ui::components::diff::render::utils::display_content;
use crate::ui::components::{Column, Layout};

fn plain(text: &str) -> String {
    text.replace('\u{a0}', " ")
}

#[tokio::test]
async fn text_comparison_renders_two_columns_with_counts() {
    let mut t = test_app();
    t.service.push(Ok(text_diff_result()));

    t.app.set_original("a\nb");
    t.app.set_altered("a\nc");
    t.app.on_compare();
    t.app.wait_until_settled().await;

    assert_eq!(
        t.service.requests(),
        vec![DiffRequest {
            original: "a\nb".into(),
            altered: "a\nc".into(),
            structured_mode: false,
        }]
    );

    let doc = t.app.surface();
    assert_eq!(doc.layout(), Layout::TwoColumn);
    assert!(doc.compare_enabled());

    let original = doc.column(Column::Original);
    let altered = doc.column(Column::Altered);
    assert_eq!(original.len(), 2);
    assert_eq!(altered.len(), 2);
    assert_eq!(original[1].class, LineClass::Removed);
    assert_eq!(altered[1].class, LineClass::Added);
    assert_eq!(altered[1].line_number_text, "2");

    let summary = doc.summary().expect("summary shown");
    assert_eq!(summary.removals_text, "1 removals");
    assert_eq!(summary.additions_text, "1 additions");
    assert!(!summary.changes_visible);
    assert!(summary.line_counts_visible);
    assert_eq!(summary.original_count_text, "2 linhas");
    assert_eq!(summary.altered_count_text, "2 linhas");
}

#[tokio::test]
async fn structured_comparison_renders_single_block() {
    let mut t = test_app();
    t.service.push(Ok(structured_no_diff_result()));

    t.app.set_original("a=1\nb=2");
    t.app.set_altered("a=1\nb=2");
    t.app.set_structured_mode(true);
    t.app.on_compare();
    t.app.wait_until_settled().await;

    assert!(t.service.requests()[0].structured_mode);

    let doc = t.app.surface();
    assert_eq!(doc.layout(), Layout::OneColumn);
    assert_eq!(doc.column(Column::Original).len(), 1);
    assert_eq!(
        plain(&doc.column(Column::Original)[0].display_content),
        "Nenhuma diferença encontrada."
    );
    assert!(doc.column(Column::Altered).is_empty());

    let summary = doc.summary().expect("summary shown");
    assert_eq!(summary.removals_text, "0 removals");
    assert_eq!(summary.additions_text, "0 additions");
    assert!(!summary.changes_visible);
    assert!(!summary.line_counts_visible);
}

#[tokio::test]
async fn server_error_fails_with_status_text() {
    let mut t = test_app();
    t.service.push(Err(DiffServiceError::Status {
        status: 500,
        status_text: "Internal Server Error".into(),
    }));

    t.app.on_compare();
    t.app.wait_until_settled().await;

    assert_eq!(
        t.app.state().last_error(),
        Some("Erro na API: Internal Server Error")
    );

    let doc = t.app.surface();
    let original = doc.column(Column::Original);
    assert_eq!(original.len(), 1);
    assert_eq!(original[0].class, LineClass::Removed);
    assert!(plain(&original[0].display_content).contains("Internal Server Error"));
    assert!(plain(&original[0].display_content).starts_with("Ocorreu um erro: "));
    assert!(doc.column(Column::Altered).is_empty());
    assert!(doc.summary().is_none());
    assert!(doc.compare_enabled());
}

#[tokio::test]
async fn trigger_while_pending_issues_no_second_request() {
    let mut t = test_app();
    t.service.push(Ok(text_diff_result()));
    t.service.push(Ok(structured_no_diff_result()));

    t.app.on_compare();
    t.app.on_compare();

    let doc = t.app.surface();
    assert!(!doc.compare_enabled());
    assert_eq!(
        doc.column(Column::Original)[0].display_content,
        display_content(PLACEHOLDER_TEXT)
    );
    assert_eq!(
        doc.column(Column::Altered)[0].display_content,
        display_content(PLACEHOLDER_TEXT)
    );
    assert!(doc.summary().is_none());

    t.app.wait_until_settled().await;
    tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    assert!(!t.app.poll_action_messages());

    assert_eq!(t.service.calls(), 1);
    assert_eq!(t.app.surface().layout(), Layout::TwoColumn);
}

#[tokio::test]
async fn dark_preference_then_toggle_persists_light() {
    let mut t = TestAppBuilder::new().prefers_dark(true).build();

    assert_eq!(t.app.state().theme, Theme::Dark);
    assert!(t.app.surface().has_root_marker(DARK_MARKER));
    assert_eq!(t.store.get(THEME_STORAGE_KEY), None);

    t.app.on_toggle_theme();

    assert_eq!(t.app.state().theme, Theme::Light);
    assert_eq!(t.store.get(THEME_STORAGE_KEY).as_deref(), Some(""));
    assert!(!t.app.surface().has_root_marker(DARK_MARKER));
}

#[tokio::test]
async fn failure_is_not_sticky() {
    let mut t = test_app();
    t.service.push(Err(DiffServiceError::Malformed("expected value".into())));
    t.service.push(Ok(text_diff_result()));

    t.app.on_compare();
    t.app.wait_until_settled().await;
    assert!(t.app.state().last_error().is_some());

    t.app.on_compare();
    t.app.wait_until_settled().await;
    assert!(t.app.state().last_error().is_none());
    assert_eq!(t.app.surface().column(Column::Original).len(), 2);
    assert!(t.app.surface().summary().is_some());
}

#[tokio::test]
async fn persisted_dark_wins_over_platform_preference() {
    let store = MemoryThemeStore::with(THEME_STORAGE_KEY, "dark-mode");
    let t = TestAppBuilder::new().store(store).prefers_dark(false).build();
    assert_eq!(t.app.state().theme, Theme::Dark);
    assert!(t.app.surface().has_root_marker(DARK_MARKER));
}

#[tokio::test]
async fn persisted_light_marker_defers_to_platform_preference() {
    let store = MemoryThemeStore::with(THEME_STORAGE_KEY, "");
    let t = TestAppBuilder::new().store(store).prefers_dark(true).build();
    assert_eq!(t.app.state().theme, Theme::Dark);

    let store = MemoryThemeStore::with(THEME_STORAGE_KEY, "");
    let t = TestAppBuilder::new().store(store).prefers_dark(false).build();
    assert_eq!(t.app.state().theme, Theme::Light);
    assert!(!t.app.surface().has_root_marker(DARK_MARKER));
}

#[tokio::test]
async fn toggle_to_light_on_dark_platform_reloads_dark() {
    let mut t = TestAppBuilder::new().prefers_dark(true).build();
    t.app.on_toggle_theme();
    assert_eq!(t.app.state().theme, Theme::Light);

    let reloaded = TestAppBuilder::new()
        .store(t.store.clone())
        .prefers_dark(true)
        .build();
    assert_eq!(reloaded.app.state().theme, Theme::Dark);
}
