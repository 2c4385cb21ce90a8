pub mod about;
pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod products;
pub mod test;
pub mod users;
