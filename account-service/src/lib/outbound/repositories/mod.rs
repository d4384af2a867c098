pub mod ad;
pub mod user;

pub use ad::PostgresAdRepository;
pub use user::PostgresUserRepository;
