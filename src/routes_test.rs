use super::*;

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn route_error_names_the_leptos_config() {
    let err = RouteError::LeptosConfig("missing [package.metadata.leptos]".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing [package.metadata.leptos]");
}
