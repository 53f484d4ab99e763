//! Row models, write DTOs and read-side view models.

pub mod artist;
pub mod show;
pub mod summary;
pub mod venue;
