pub mod extract;
pub mod health;
pub mod index;
pub mod local;
pub mod oauth;
