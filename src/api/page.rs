//! HTML page with the time display and start button

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
};
use tracing::error;

use crate::state::AppState;

/// Handle GET / - Render the display element and button
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.display().text()))
}

/// Handle POST / - Button press from the page form
pub async fn button_handler(State(state): State<Arc<AppState>>) -> Result<Redirect, StatusCode> {
    match state.press_start() {
        Ok(_) => Ok(Redirect::to("/")),
        Err(e) => {
            error!("Failed to press start: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn render_page(time: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="1">
<title>Countdown</title>
</head>
<body>
<div>Time remaining: <span id="time">{time}</span></div>
<form method="post" action="/">
<button type="submit">Start</button>
</form>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_time() {
        let html = render_page("15:00");
        assert!(html.contains(r#"<span id="time">15:00</span>"#));
        assert!(html.contains("<button"));
    }
}
