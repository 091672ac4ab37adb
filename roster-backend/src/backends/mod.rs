//! Backend dialect implementations

#[cfg(feature = "campus")]
pub mod campus;

#[cfg(feature = "simple")]
pub mod simple;
