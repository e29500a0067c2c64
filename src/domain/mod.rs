pub mod oauth;
pub mod session;
