pub mod auth;
pub mod dish;
pub mod dump_dish;
pub mod shop;
pub mod user;

mod router;
pub use router::get_router;
