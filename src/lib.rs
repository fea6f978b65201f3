//! Domain model and shared client services for a commodities marketplace:
//! listings with expiry, orders with counter-offers and localized role
//! labels, reviews, verification, session flags, and the shared ticker that
//! drives countdown displays.

pub mod access;
pub mod config;
pub mod error;
pub mod listings;
pub mod orders;
pub mod reviews;
pub mod session;
pub mod telemetry;
pub mod ticker;
pub mod verification;

pub use error::AppError;
pub use ticker::{SharedTicker, TickerSubscription};
