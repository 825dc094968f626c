use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    middleware::Next,
};

fn login_redirect() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish()
}

/// Middleware for the protected scope.
///
/// Requests without a session token are redirected to /login before the
/// handler runs. When a handler comes back with 401 — the backend rejected
/// the stored token — the session is purged and the user is sent back to
/// the login page, mirroring the forced-logout policy of the backend client.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let session = req.get_session();
    let has_token = session.get::<String>("token").unwrap_or(None).is_some();

    if !has_token {
        return Ok(req.into_response(login_redirect()).map_into_right_body());
    }

    let res = next.call(req).await?;

    if res.status() == StatusCode::UNAUTHORIZED {
        res.request().get_session().purge();
        let (req, _) = res.into_parts();
        return Ok(ServiceResponse::new(req, login_redirect()).map_into_right_body());
    }

    Ok(res.map_into_left_body())
}
