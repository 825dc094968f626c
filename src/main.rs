use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use teampulse::auth;
use teampulse::config::AppConfig;
use teampulse::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let http = reqwest::Client::new();

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!(
        "Starting server at http://{} (backend: {})",
        config.bind_addr,
        config.api_base_url
    );
    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(http.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            .route("/register", web::get().to(handlers::auth_handlers::register_page))
            .route("/register", web::post().to(handlers::auth_handlers::register_submit))
            // Root redirect
            .route("/", web::get().to(|| async {
                actix_web::HttpResponse::SeeOther()
                    .insert_header(("Location", "/dashboard"))
                    .finish()
            }))
            // Protected routes
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                    .route("/dashboard", web::get().to(handlers::dashboard::index))
                    .route("/logout", web::post().to(handlers::auth_handlers::logout))
                    // Feedback — /feedback/new BEFORE /feedback/{id} to avoid routing conflict
                    .route("/feedback/new", web::get().to(handlers::feedback_handlers::new_form))
                    .route("/feedback", web::post().to(handlers::feedback_handlers::create))
                    .route("/feedback/{id}/edit", web::get().to(handlers::feedback_handlers::edit_form))
                    .route("/feedback/{id}", web::post().to(handlers::feedback_handlers::update))
                    .route("/feedback/{id}/acknowledge", web::post().to(handlers::feedback_handlers::acknowledge))
                    // Feedback requests
                    .route("/requests/new", web::get().to(handlers::request_handlers::new_form))
                    .route("/requests", web::post().to(handlers::request_handlers::create))
                    .route("/requests/{id}/complete", web::post().to(handlers::request_handlers::complete))
                    .route("/requests/{id}/cancel", web::post().to(handlers::request_handlers::cancel))
                    // Report export
                    .route("/export/pdf", web::get().to(handlers::export_handlers::export_pdf))
                    .route("/export/csv", web::get().to(handlers::export_handlers::export_csv))
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
