pub mod persistence;
pub mod router;
