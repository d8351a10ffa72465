//! Request tests against the Postgres repository with no database behind it.
//!
//! The pool points at a closed port, so every `Gateway::execute` comes back
//! empty. Both paths must degrade the documented way: the write path shows the
//! failure view, the read path the fixed 500 page.

use std::time::Duration;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use petition::errors::INTERNAL_ERROR_BODY;
use petition::handlers;
use petition::middleware::RequestLogging;
use petition::{Gateway, SignatureRepository};

fn unreachable_repository() -> web::Data<SignatureRepository> {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .ssl_mode(PgSslMode::Disable);
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy_with(options);
    web::Data::new(SignatureRepository::new(Gateway::from_pool(pool)))
}

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data($store.clone())
                .wrap(RequestLogging)
                .configure(handlers::configure::<SignatureRepository>),
        )
        .await
    };
}

fn body_text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[actix_web::test]
async fn failed_insert_renders_failure_view_without_redirect() {
    let store = unreachable_repository();
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([
            ("name", "Jón"),
            ("nationalId", "123456-7890"),
            ("comment", "hi"),
            ("showName", "on"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::LOCATION).is_none());
    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("Could not save your signature"));
}

#[actix_web::test]
async fn failed_listing_is_a_generic_500() {
    let store = unreachable_repository();
    let app = app!(store);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(&test::read_body(resp).await), INTERNAL_ERROR_BODY);
}
