use derive_more::derive::From;

pub type Result<T> = core::result::Result<T, Error>;

/// An enumeration representing the errors that can occur in the Mongo client
///
/// # Variants
///
/// - `EmptyDocument` - An insert was requested with no data; the store is
///   never contacted in this case.
/// - `Mongo` - Represents an error that originates from the `mongodb` driver
///   during connection or any store operation.
#[derive(Debug, From)]
pub enum Error {
    EmptyDocument,

    #[from]
    Mongo(mongodb::error::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
