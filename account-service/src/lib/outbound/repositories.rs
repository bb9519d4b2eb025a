pub mod memory;
pub mod profile;
pub mod user;

pub use memory::InMemoryProfileRepository;
pub use memory::InMemoryUserRepository;
pub use profile::PostgresProfileRepository;
pub use user::PostgresUserRepository;
