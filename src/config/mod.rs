// Start of file: /src/config/mod.rs

/*
* Re-export submodules related to configuration: the demo server's
* environment variables and the JSON response settings.
*/

pub mod environment;
pub mod response_config;
pub mod state;

// End of file: /src/config/mod.rs
