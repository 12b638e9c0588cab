//! HTTP Integration Tests for the Widget Handler
//!
//! These tests validate the widget end-to-end via HTTP: a wiremock server
//! stands in for the source page, and requests go through the real actix
//! routing, handler, and error surface.

#[cfg(test)]
mod http_integration_tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::Value;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::AppState;
    use crate::config::Config;
    use crate::handlers::configure_widget_routes;
    use crate::handlers::widget::get_widget;
    use crate::services::{SourceClient, WidgetService};

    /// A source page with one fully-populated repository card
    const ONE_CARD_PAGE: &str = r#"<html><body>
        <article class="Box-row">
          <h2 class="h3"><a href="/octo/repo">octo / repo</a></h2>
          <p class="col-9 my-1 pr-4">A repo</p>
          <div class="f6">
            <span itemprop="programmingLanguage">Go</span>
            <a href="/octo/repo/stargazers">1,234</a>
            <a href="/octo/repo/forks">56</a>
            <span class="d-inline-block float-sm-right">12 stars today</span>
          </div>
        </article>
    </body></html>"#;

    /// Create test config pointing at the given source URL
    fn create_test_config(source_url: &str) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8081,
            source_url: source_url.to_string(),
            fetch_timeout_secs: 2,
        }
    }

    /// Create test app state wired to the given source URL
    fn create_test_app_state(source_url: &str) -> web::Data<AppState> {
        let config = create_test_config(source_url);
        let source = SourceClient::new(config.source_url.clone(), config.fetch_timeout_secs)
            .expect("Failed to build test client");
        web::Data::new(AppState {
            config,
            widget: WidgetService::new(source),
        })
    }

    /// Start a mock source server responding to GET / with the given body
    async fn start_source_server(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[actix_web::test]
    async fn widget_renders_fragment_from_source_page() {
        let source = start_source_server(200, ONE_CARD_PAGE).await;
        let state = create_test_app_state(&source.uri());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_widget_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).expect("utf-8 body");
        assert_eq!(body.matches(r#"<li class="list-item">"#).count(), 1);
        assert!(body.contains(r#"href="https://github.com/octo/repo""#));
        assert!(body.contains("⭐ 12 stars today"));
    }

    #[actix_web::test]
    async fn success_response_carries_widget_and_anti_caching_headers() {
        let source = start_source_server(200, ONE_CARD_PAGE).await;
        let state = create_test_app_state(&source.uri());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_widget_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        let headers = resp.headers();
        assert_eq!(
            headers.get("Widget-Content-Type").map(|v| v.as_bytes()),
            Some(b"html".as_slice())
        );
        assert_eq!(
            headers.get("Cache-Control").map(|v| v.as_bytes()),
            Some(b"no-cache, no-store, must-revalidate".as_slice())
        );
        assert_eq!(
            headers.get("Pragma").map(|v| v.as_bytes()),
            Some(b"no-cache".as_slice())
        );
        assert_eq!(
            headers.get("Expires").map(|v| v.as_bytes()),
            Some(b"0".as_slice())
        );
        assert!(
            headers
                .get("Content-Type")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with("text/html"))
        );
    }

    #[actix_web::test]
    async fn empty_source_page_yields_empty_list_with_success_status() {
        let source = start_source_server(200, "<html><body></body></html>").await;
        let state = create_test_app_state(&source.uri());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_widget_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).expect("utf-8 body");
        assert!(body.contains(r#"<ul class="list gh-trending-list"></ul>"#));
        assert!(!body.contains(r#"<li class="list-item">"#));
    }

    #[actix_web::test]
    async fn non_success_source_status_yields_generic_server_error() {
        let source = start_source_server(503, "upstream down").await;
        let state = create_test_app_state(&source.uri());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_widget_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FETCH_ERROR");
        // The upstream detail stays out of the response body
        assert_eq!(body["error"]["message"], "Error fetching data");
    }

    #[actix_web::test]
    async fn unreachable_source_yields_generic_server_error() {
        // Port 9 (discard) is assumed closed; connection is refused
        let state = create_test_app_state("http://127.0.0.1:9/");

        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_widget_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FETCH_ERROR");
    }

    #[actix_web::test]
    async fn non_get_method_on_root_serves_the_widget() {
        let source = start_source_server(200, ONE_CARD_PAGE).await;
        let state = create_test_app_state(&source.uri());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_widget_routes)
                .default_service(web::route().to(get_widget)),
        )
        .await;

        let req = test::TestRequest::post().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Widget-Content-Type").map(|v| v.as_bytes()),
            Some(b"html".as_slice())
        );
        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).expect("utf-8 body");
        assert!(body.contains(r#"<li class="list-item">"#));
    }

    #[actix_web::test]
    async fn non_get_method_on_other_path_serves_the_widget() {
        let source = start_source_server(200, ONE_CARD_PAGE).await;
        let state = create_test_app_state(&source.uri());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_widget_routes)
                .default_service(web::route().to(get_widget)),
        )
        .await;

        let req = test::TestRequest::put().uri("/anything").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Widget-Content-Type").map(|v| v.as_bytes()),
            Some(b"html".as_slice())
        );
    }

    #[actix_web::test]
    async fn any_path_serves_the_widget_via_default_service() {
        let source = start_source_server(200, ONE_CARD_PAGE).await;
        let state = create_test_app_state(&source.uri());

        // Mirror the app wiring from main: explicit / plus catch-all
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_widget_routes)
                .default_service(web::route().to(get_widget)),
        )
        .await;

        let req = test::TestRequest::get().uri("/some/other/path").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Widget-Content-Type").map(|v| v.as_bytes()),
            Some(b"html".as_slice())
        );
    }
}
