// Start of file: /src/response/mod.rs

/*
    * JSON response building: envelopes, transforms, header resolution,
    * serialization and the per-status convenience functions.
*/

pub mod emit;
pub mod envelope;
pub mod error;
pub mod generic;
pub mod status;
pub mod transform;
pub mod writer;

mod excuses;

// End of file: /src/response/mod.rs
