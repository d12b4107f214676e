// Access gate: per-request route classification and forward/redirect policy
// Decision: classification and the decision itself are pure functions; the
// axum middleware only wires them to the cookie jar and the response.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use barberbuzz_core::Identity;

use super::session::SESSION_COOKIE;
use crate::AppState;

/// Authorization level a path requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No session required
    Public,
    /// Any valid session
    Authenticated,
    /// Valid session with the admin flag
    AdminOnly,
}

/// Outcome of evaluating the gate for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Forward,
    RedirectToLogin,
    RedirectToApp,
}

/// True for `/{slug}` and `/{slug}/thank-you`, the public per-store
/// feedback form paths. A trailing slash is tolerated.
fn is_feedback_form_path(path: &str) -> bool {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .trim_end_matches('/')
        .split('/')
        .collect();
    match segments.as_slice() {
        [slug] => !slug.is_empty(),
        [slug, "thank-you"] => !slug.is_empty(),
        _ => false,
    }
}

/// Classify a request path against the fixed, ordered rule set.
///
/// The public allow-list is checked first, so a bare single-segment path
/// always reads as a feedback form slug; only paths below `/admin` and
/// `/app` are gated. Anything unmatched falls through to Public
/// (default-allow, preserved from the original policy).
pub fn classify(path: &str) -> RouteClass {
    // 1. Public allow-list
    if matches!(path, "/" | "/login" | "/signup" | "/forgot-password")
        || path.starts_with("/static")
        || path == "/favicon.ico"
        || path.starts_with("/api/login")
        || path.starts_with("/api/signup")
        || is_feedback_form_path(path)
    {
        return RouteClass::Public;
    }

    // 2. Admin section
    if path.starts_with("/admin/") {
        return RouteClass::AdminOnly;
    }

    // 3. Authenticated barber application
    if path.starts_with("/app/") {
        return RouteClass::Authenticated;
    }

    // 4. Default-allow fallback
    RouteClass::Public
}

/// Pure policy decision: what to do with a request of the given class
/// carrying the given session.
pub fn decide(class: RouteClass, session: Option<&Identity>) -> GateDecision {
    match class {
        RouteClass::Public => GateDecision::Forward,
        RouteClass::Authenticated => match session {
            Some(_) => GateDecision::Forward,
            None => GateDecision::RedirectToLogin,
        },
        RouteClass::AdminOnly => match session {
            None => GateDecision::RedirectToLogin,
            Some(identity) if !identity.is_admin => GateDecision::RedirectToApp,
            Some(_) => GateDecision::Forward,
        },
    }
}

/// Middleware applied to every route. Runs before any handler work and
/// never errors: a token that fails verification is simply no session.
pub async fn access_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let class = classify(request.uri().path());

    // Public requests are forwarded without even touching the cookie
    let session = match class {
        RouteClass::Public => None,
        _ => state
            .sessions
            .verify(jar.get(SESSION_COOKIE).map(|c| c.value())),
    };

    match decide(class, session.as_ref()) {
        GateDecision::Forward => next.run(request).await,
        GateDecision::RedirectToLogin => Redirect::to("/login").into_response(),
        GateDecision::RedirectToApp => Redirect::to("/app").into_response(),
    }
}
