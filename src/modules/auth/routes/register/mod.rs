mod handler;
mod router;
mod service;
pub mod types;

pub use router::get_router;
