// BarberBuzz domain types
// Decision: wire casing is camelCase to match the existing JSON surface

pub mod identity;
pub mod models;

pub use identity::Identity;
pub use models::{Barber, Feedback, Store, VisitAgain};
