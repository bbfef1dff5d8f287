pub mod directory;
pub mod store;

pub use directory::InMemoryUserDirectory;
pub use store::InMemoryRefreshTokenStore;
