// Authentication and authorization core
//
// Three cooperating pieces:
// - verifier: email/password against the record store (bcrypt, cost 10)
// - session: signed 24-hour JWT session tokens bound to a cookie
// - gate: per-request route classification and forward/redirect policy

pub mod extract;
pub mod gate;
pub mod password;
pub mod routes;
pub mod session;
pub mod verifier;

pub use extract::{AdminUser, CurrentUser};
pub use gate::{access_gate, classify, decide, GateDecision, RouteClass};
pub use routes::routes;
pub use session::{SessionService, SESSION_COOKIE};
pub use verifier::{authenticate, AuthError};
