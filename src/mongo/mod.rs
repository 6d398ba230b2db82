//! MongoDB client implementation
//!
//! This module provides an implementation of a MongoDB client built on the
//! official `mongodb` driver. It includes the components necessary for
//! establishing connections, performing CRUD operations on a bound
//! collection, and handling errors.
//!
//! # Modules
//!
//! - `client`: Contains the implementation of the Mongo client for
//!   interacting with a single database/collection pair.
//! - `connection`: Defines parameters and methods for building the
//!   connection string and opening the connection.
//! - `error`: Defines custom error types and result types for handling
//!   errors throughout the client.
//!
//! This module facilitates modular development and simplifies the
//! maintenance of the Mongo client, allowing each component to be developed
//! and tested in isolation.

// region:    --- Modules

mod client;
mod connection;
mod error;

pub mod driver {
    pub use mongodb::*;
}

pub use client::Client;
pub use connection::ConnectionParams;
pub use error::{Error, Result};
pub use mongodb::bson::{doc, Bson, Document};

// endregion: --- Modules
