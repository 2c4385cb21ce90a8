pub mod badge;
pub mod button;
pub mod collapsible;

pub use badge::{Badge, OrderStatusBadge};
pub use button::Button;
pub use collapsible::Collapsible;
