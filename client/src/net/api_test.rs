use super::*;

fn config() -> ApiConfig {
    ApiConfig::new("http://localhost:3500/")
}

#[test]
fn items_endpoint_formats_collection_path() {
    assert_eq!(items_endpoint(&config()), "http://localhost:3500/items");
}

#[test]
fn item_endpoint_formats_member_path() {
    assert_eq!(item_endpoint(&config(), "1700000000000"), "http://localhost:3500/items/1700000000000");
}

#[test]
fn requests_declare_json_content_type() {
    assert_eq!(JSON_CONTENT_TYPE, "application/json");
}

#[test]
fn status_error_displays_response_text() {
    let err = ApiError::Status { status: 404, body: "Not Found".to_owned() };
    assert_eq!(err.to_string(), "Network request failed: Not Found");
    assert_eq!(err.detail(), "Not Found");
}

#[test]
fn network_error_detail_is_display_message() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.detail(), "Network request failed: connection refused");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_items_is_unavailable_off_browser() {
    let result = poll_once(fetch_items(&config()));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn mutations_are_unavailable_off_browser() {
    let item = Item::new("1", "Milk");
    assert_eq!(poll_once(create_item(&config(), &item)), Err(ApiError::Unavailable));
    assert_eq!(poll_once(set_item_checked(&config(), "1", true)), Err(ApiError::Unavailable));
    assert_eq!(poll_once(delete_item(&config(), "1")), Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
/// The non-browser branches never await, so a single poll completes them.
fn poll_once<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not complete on first poll"),
    }
}
