pub mod domain;
pub mod expiry;

pub use domain::{Expires, ListingUnit, Offer, Request};
pub use expiry::{
    expiration_status, expiration_status_at, filter_active, filter_active_at, is_expired,
    is_expired_at, ExpirationStatus,
};
