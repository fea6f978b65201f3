pub mod domain;
pub mod roles;

pub use domain::{CounterOffer, Order, OrderStatus};
pub use roles::{RoleLabels, RolePair};
