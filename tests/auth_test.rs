//! Session and auth-policy tests — anonymous requests are redirected to the
//! login page, a backend 401 forces a logout, and CSRF mismatches are
//! rejected.

use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, test, web};

use teampulse::api::ApiError;
use teampulse::auth;
use teampulse::errors::AppError;
use teampulse::handlers;

fn session_mw() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_secure(false)
        .build()
}

/// Test-only route that seeds a logged-in session.
async fn seed(session: Session) -> HttpResponse {
    session.insert("token", "test-token").unwrap();
    session.insert("csrf_token", "good-token").unwrap();
    HttpResponse::Ok().finish()
}

/// Test-only route standing in for a handler whose backend call came back 401.
async fn backend_rejects() -> Result<HttpResponse, AppError> {
    Err(AppError::Api(ApiError::Unauthorized))
}

async fn page_ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .wrap(session_mw())
                .route("/seed", web::get().to(seed))
                .service(
                    web::scope("")
                        .wrap(actix_web::middleware::from_fn(
                            auth::middleware::require_auth,
                        ))
                        .route("/dashboard", web::get().to(page_ok))
                        .route("/boom", web::get().to(backend_rejects))
                        .route("/logout", web::post().to(handlers::auth_handlers::logout)),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn anonymous_request_redirects_to_login() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("Location").unwrap(), "/login");
}

#[actix_web::test]
async fn authenticated_request_passes_through() {
    let app = test_app!();

    let seed_resp = test::call_service(&app, test::TestRequest::get().uri("/seed").to_request()).await;
    let cookie = seed_resp.response().cookies().next().unwrap().into_owned();

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn backend_401_forces_logout_redirect() {
    let app = test_app!();

    let seed_resp = test::call_service(&app, test::TestRequest::get().uri("/seed").to_request()).await;
    let cookie = seed_resp.response().cookies().next().unwrap().into_owned();

    let req = test::TestRequest::get()
        .uri("/boom")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("Location").unwrap(), "/login");
}

#[actix_web::test]
async fn logout_rejects_wrong_csrf_token() {
    let app = test_app!();

    let seed_resp = test::call_service(&app, test::TestRequest::get().uri("/seed").to_request()).await;
    let cookie = seed_resp.response().cookies().next().unwrap().into_owned();

    let req = test::TestRequest::post()
        .uri("/logout")
        .cookie(cookie)
        .set_form([("csrf_token", "wrong-token")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn logout_with_valid_csrf_redirects_to_login() {
    let app = test_app!();

    let seed_resp = test::call_service(&app, test::TestRequest::get().uri("/seed").to_request()).await;
    let cookie = seed_resp.response().cookies().next().unwrap().into_owned();

    let req = test::TestRequest::post()
        .uri("/logout")
        .cookie(cookie)
        .set_form([("csrf_token", "good-token")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("Location").unwrap(), "/login");
}
