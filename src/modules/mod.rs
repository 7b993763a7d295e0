pub mod chef;
pub mod recipe;

mod router;
pub use router::get_router;
