// trackfit_core/src/lib.rs

// This file defines the public modules of your library.
pub mod config;
pub mod errors;
pub mod hits;
pub mod prelude;
pub mod surfaces;
pub mod types;
