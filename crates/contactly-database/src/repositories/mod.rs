//! Concrete PostgreSQL repository implementations.

pub mod contact;
pub mod session;
pub mod user;

pub use contact::ContactRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
