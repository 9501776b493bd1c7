// Start of file: /src/api/demo/mod.rs

// Demo endpoints showing the envelope and generic response paths

pub mod handler;
pub mod routes;

// End of file: /src/api/demo/mod.rs
