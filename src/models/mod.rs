//! Modelos de dominio
//!
//! Structs que mapean a las tablas PostgreSQL vía sqlx::FromRow.

pub mod driver;
pub mod fillup;
pub mod receipt;
pub mod session;
pub mod trip;
pub mod user;
pub mod vehicle;
