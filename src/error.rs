use thiserror::Error;

/// Error types for `SimpleVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SimpleVecError {
    /// Index does not refer to a live element (or, for insertion, lies past the end)
    #[error("Index out of range: index {index} is beyond vector length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// The allocation service could not provide the requested number of slots
    #[error("Allocation failure: unable to allocate storage for {requested} elements")]
    AllocationFailure {
        /// Number of slots requested
        requested: usize,
    },
}
