use thiserror::Error;

/// Failure kinds shared by all collections in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The collection holds no elements, so there is nothing to return.
    #[error("collection is empty")]
    EmptyCollection,

    /// The requested element is not present in the collection.
    #[error("element not found")]
    NotFound,
}
