//! End-to-end application flows against an in-process backend.

use axum::routing::{get, post};
use axum::{Json, Router as AxumRouter};
use glance_app::{App, AppConfig, UiEvent};
use glance_core::Theme;
use glance_ui::{Page, PageSurface, RegionIds};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::mpsc;

type Posts = Arc<Mutex<Vec<(String, Value)>>>;

/// Backend recording every POST body by endpoint.
async fn spawn_backend() -> (String, Posts) {
    let posts: Posts = Arc::new(Mutex::new(Vec::new()));

    let feedback_sink = Arc::clone(&posts);
    let metrics_sink = Arc::clone(&posts);
    let app = AxumRouter::new()
        .route(
            "/api/initial-data",
            get(|| async { Json(json!({"performance": 42, "activeUsers": 7, "status": "OK"})) }),
        )
        .route(
            "/api/feedback",
            post(move |Json(body): Json<Value>| {
                let sink = Arc::clone(&feedback_sink);
                async move {
                    sink.lock().push(("feedback".to_string(), body));
                    Json(json!({"status": "Feedback received"}))
                }
            }),
        )
        .route(
            "/api/metrics",
            post(move |Json(body): Json<Value>| {
                let sink = Arc::clone(&metrics_sink);
                async move {
                    sink.lock().push(("metrics".to_string(), body));
                    Json(json!({"status": "ok"}))
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), posts)
}

fn test_app(origin: String, prefs_dir: &tempfile::TempDir, default_route: &str) -> (Page, App) {
    let config = AppConfig {
        base_url: origin,
        default_route: default_route.to_string(),
        prefs_path: prefs_dir
            .path()
            .join("prefs.json")
            .to_string_lossy()
            .into_owned(),
        ..AppConfig::default()
    };

    let page = Page::with_regions(["loading", "notification", "content"]);
    let surface = PageSurface::new(page.clone(), RegionIds::default()).unwrap();
    let app = App::new(config, Arc::new(surface)).unwrap();
    (page, app)
}

#[tokio::test]
async fn test_startup_renders_default_route_and_reports_init_time() {
    let (origin, posts) = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let (page, app) = test_app(origin, &dir, "dashboard");

    app.start().await.unwrap();

    let content = page.region("content").unwrap().markup;
    assert!(content.contains("42%"));
    assert!(!page.region("loading").unwrap().visible);

    let posts = posts.lock();
    let metrics: Vec<_> = posts.iter().filter(|(ep, _)| ep == "metrics").collect();
    assert_eq!(metrics.len(), 1);
    assert!(metrics[0].1["initTime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_feedback_submission_posts_clears_and_notifies() {
    let (origin, posts) = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let (page, app) = test_app(origin, &dir, "feedback");

    page.set_feedback_input("great tool");

    let (tx, rx) = mpsc::channel(16);
    tx.send(UiEvent::FeedbackSubmitted("great tool".to_string()))
        .await
        .unwrap();
    tx.send(UiEvent::Shutdown).await.unwrap();
    app.run(rx).await.unwrap();

    let posts = posts.lock();
    let feedback: Vec<_> = posts.iter().filter(|(ep, _)| ep == "feedback").collect();
    assert_eq!(feedback.len(), 1);
    assert_eq!(
        feedback[0].1,
        json!({"user_id": "anonymous", "comments": "great tool"})
    );

    assert_eq!(page.feedback_input(), "");
    let banner = page.region("notification").unwrap();
    assert!(banner.visible);
    assert!(banner.markup.contains("Feedback submitted successfully"));
    assert_eq!(banner.css_class, "notification success");
}

#[tokio::test]
async fn test_feedback_failure_keeps_textarea_and_shows_error() {
    // Backend without a /api/feedback route: POST yields 404.
    let app_router = AxumRouter::new().route(
        "/api/initial-data",
        get(|| async { Json(json!({"performance": 1, "activeUsers": 1, "status": "OK"})) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app_router).await.unwrap();
    });

    let dir = tempfile::tempdir().unwrap();
    let (page, app) = test_app(format!("http://{addr}"), &dir, "chat");
    page.set_feedback_input("lost words");

    let (tx, rx) = mpsc::channel(16);
    tx.send(UiEvent::FeedbackSubmitted("lost words".to_string()))
        .await
        .unwrap();
    tx.send(UiEvent::Shutdown).await.unwrap();
    app.run(rx).await.unwrap();

    assert_eq!(page.feedback_input(), "lost words");
    let banner = page.region("notification").unwrap();
    assert!(banner.visible);
    assert_eq!(banner.css_class, "notification error");
}

#[tokio::test]
async fn test_theme_toggle_twice_round_trips() {
    let (origin, _posts) = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let (page, app) = test_app(origin, &dir, "chat");

    let (tx, rx) = mpsc::channel(16);
    tx.send(UiEvent::ThemeToggled).await.unwrap();
    tx.send(UiEvent::ThemeToggled).await.unwrap();
    tx.send(UiEvent::Shutdown).await.unwrap();
    app.run(rx).await.unwrap();

    assert_eq!(page.theme(), Theme::Light);

    // The persisted value round-tripped too.
    let persisted = std::fs::read_to_string(dir.path().join("prefs.json")).unwrap();
    assert!(persisted.contains(r#""theme": "light""#));
}

#[tokio::test]
async fn test_unknown_route_event_is_not_fatal() {
    let (origin, _posts) = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let (page, app) = test_app(origin, &dir, "chat");

    let (tx, rx) = mpsc::channel(16);
    tx.send(UiEvent::NavClicked("nowhere".to_string())).await.unwrap();
    tx.send(UiEvent::NavClicked("dashboard".to_string())).await.unwrap();
    tx.send(UiEvent::Shutdown).await.unwrap();
    app.run(rx).await.unwrap();

    // The bad route changed nothing and the next navigation still worked.
    assert_eq!(page.active_link().as_deref(), Some("dashboard"));
    assert!(page.region("content").unwrap().markup.contains("42%"));
}
