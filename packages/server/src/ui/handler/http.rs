//! HTTP endpoint handlers.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Chat client page
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
