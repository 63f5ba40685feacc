//! Built-in route table: dashboard, chat and feedback views.

use crate::router::{RouteHandler, RouteTable};
use futures_util::FutureExt;
use glance_api::{ApiClient, InitialData};
use glance_core::Fragment;
use std::sync::Arc;

/// Build the fixed route table the client ships with.
///
/// `dashboard` reads `/initial-data` from the backend; `chat` and
/// `feedback` are static views whose forms are wired up by the app.
pub fn default_routes(api: ApiClient) -> RouteTable {
    let mut routes = RouteTable::new();

    let dashboard_api = api.clone();
    let dashboard: RouteHandler = Arc::new(move || {
        let api = dashboard_api.clone();
        async move {
            let value = api.get("/initial-data").await?;
            let data: InitialData = serde_json::from_value(value)?;
            Ok(dashboard_fragment(&data))
        }
        .boxed()
    });
    routes.insert("dashboard".to_string(), dashboard);

    routes.insert(
        "chat".to_string(),
        Arc::new(|| async { Ok(chat_fragment()) }.boxed()) as RouteHandler,
    );
    routes.insert(
        "feedback".to_string(),
        Arc::new(|| async { Ok(feedback_fragment()) }.boxed()) as RouteHandler,
    );

    routes
}

/// Dashboard view: performance, active users and system status cards.
fn dashboard_fragment(data: &InitialData) -> Fragment {
    Fragment::new(format!(
        r#"<div class="dashboard">
    <div class="card">
        <h3>Performance</h3>
        <p>{performance}%</p>
        <div class="chart" id="performanceChart"></div>
    </div>
    <div class="card">
        <h3>Active Users</h3>
        <p>{active_users}</p>
        <div class="chart" id="usersChart"></div>
    </div>
    <div class="card">
        <h3>System Status</h3>
        <p class="status {status_class}">{status}</p>
    </div>
</div>"#,
        performance = data.performance,
        active_users = data.active_users,
        status_class = data.status.to_lowercase(),
        status = data.status,
    ))
}

/// Chat view: message list plus input form.
fn chat_fragment() -> Fragment {
    Fragment::new(
        r#"<div class="chat-container">
    <div class="chat-messages" id="chatMessages"></div>
    <form class="chat-input" id="chatForm">
        <input type="text" placeholder="Type your message..." required>
        <button type="submit">Send</button>
    </form>
</div>"#,
    )
}

/// Feedback view: textarea form.
fn feedback_fragment() -> Fragment {
    Fragment::new(
        r#"<div class="feedback-container">
    <h2>Feedback</h2>
    <form class="feedback-form">
        <textarea placeholder="Your feedback helps us improve..." required></textarea>
        <button type="submit">Submit Feedback</button>
    </form>
</div>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_fragment_renders_metrics() {
        let data = InitialData {
            performance: 42.0,
            active_users: 7,
            status: "OK".to_string(),
        };
        let fragment = dashboard_fragment(&data);
        let markup = fragment.as_str();

        assert!(markup.contains("42%"));
        assert!(markup.contains("<p>7</p>"));
        assert!(markup.contains("OK"));
        assert!(markup.contains(r#"class="status ok""#));
    }

    #[test]
    fn test_static_fragments_carry_their_forms() {
        assert!(chat_fragment().as_str().contains("chat-input"));
        assert!(feedback_fragment().as_str().contains("feedback-form"));
        assert!(feedback_fragment().as_str().contains("<textarea"));
    }

    #[tokio::test]
    async fn test_default_table_has_fixed_route_set() {
        let api = ApiClient::new("http://127.0.0.1:1").unwrap();
        let routes = default_routes(api);
        let mut names: Vec<_> = routes.keys().cloned().collect();
        names.sort();
        assert_eq!(names, ["chat", "dashboard", "feedback"]);
    }
}
