pub mod guard;
pub mod jwt;
pub mod store;

pub use store::SessionStore;
