//! Request builders and response readers

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use pollboard_core::Config;
use tower::ServiceExt;

/// Cookie header value for a session id under the default cookie name
pub fn session_cookie(session_id: &str) -> String {
    format!("{}={session_id}", Config::default().session.cookie_name)
}

pub async fn get(app: Router, uri: &str, session: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(session) = session {
        request = request.header(header::COOKIE, session_cookie(session));
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST an urlencoded form body to the delete action
pub async fn post_delete(app: Router, session: Option<&str>, form: &str) -> Response<Body> {
    let mut request = Request::builder()
        .method("POST")
        .uri("/admin/polls/delete")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(session) = session {
        request = request.header(header::COOKIE, session_cookie(session));
    }
    app.oneshot(request.body(Body::from(form.to_string())).unwrap())
        .await
        .unwrap()
}

/// Delete form body for one poll id
pub fn delete_form(poll_id: &str) -> String {
    serde_urlencoded::to_string([("pollId", poll_id)]).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// Assert a 303 to `target`
pub fn assert_see_other(response: &Response<Body>, target: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), Some(target));
}

/// Poll ids of the rendered cards, top to bottom
pub fn card_ids(html: &str) -> Vec<String> {
    html.split("data-poll-id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(String::from)
        .collect()
}
