pub mod provider;
pub mod token_client;

pub use provider::OAuthProvider;
pub use token_client::HttpTokenClient;
