// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting helpers for the demo server, like middleware error mapping.
*/

pub mod error_handler;

// End of file: /src/utils/mod.rs
