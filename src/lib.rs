//! `shelter_db` is a library for working with shelter animal records stored in MongoDB.
//! It wraps the official driver behind a client with a lightweight CRUD interface,
//! keeping connection handling and collection binding in one place.
//! The backend can be enabled or disabled through feature flags.

// region:    --- Modules

// -- Modules

#[cfg(feature = "mongo")]
pub mod mongo;

// endregion: --- Modules
