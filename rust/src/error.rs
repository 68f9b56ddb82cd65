//! Error handling and result types for AvlTreeSet operations.
//!
//! Only contract violations are errors. "No result" outcomes such as `first()`
//! on an empty set or a nearest search with nothing nearby are `Option`s.

/// Error type for AVL tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvlTreeError {
    /// A value was rejected, e.g. inserted through a range view it does not fit.
    InvalidArgument(String),
    /// An operation was called in a state that does not allow it.
    IllegalState(String),
    /// The tree changed structurally behind a cursor's back.
    ConcurrentModification { expected: u64, actual: u64 },
    /// A cursor was advanced past its last element.
    NoSuchElement,
    /// Tree corruption detected.
    CorruptedTree(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
}

impl AvlTreeError {
    /// Create an InvalidArgument error for a value outside a range view
    pub fn outside_view(operation: &str) -> Self {
        Self::InvalidArgument(format!("{} got a value outside the view bounds", operation))
    }

    /// Create an InvalidArgument error for a buffer that cannot hold a snapshot
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self::InvalidArgument(format!(
            "buffer holds {} elements but the set has {}",
            available, needed
        ))
    }

    /// Create an IllegalState error with context
    pub fn illegal_state(operation: &str, state: &str) -> Self {
        Self::IllegalState(format!("Cannot {} {}", operation, state))
    }

    /// Create a ConcurrentModification error from two generation counters
    pub fn concurrent_modification(expected: u64, actual: u64) -> Self {
        Self::ConcurrentModification { expected, actual }
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error came from a stale cursor
    pub fn is_concurrent_modification(&self) -> bool {
        matches!(self, Self::ConcurrentModification { .. })
    }
}

impl std::fmt::Display for AvlTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlTreeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            AvlTreeError::IllegalState(msg) => write!(f, "Illegal state: {}", msg),
            AvlTreeError::ConcurrentModification { expected, actual } => write!(
                f,
                "Concurrent modification: cursor expected generation {} but tree is at {}",
                expected, actual
            ),
            AvlTreeError::NoSuchElement => write!(f, "No such element"),
            AvlTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
            AvlTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
        }
    }
}

impl std::error::Error for AvlTreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, AvlTreeError>;

/// Public result type for tree operations that may fail
pub type AvlResult<T> = Result<T, AvlTreeError>;

/// Result extension trait for improved error handling
pub trait AvlResultExt<T> {
    /// Convert to an AvlResult with additional context
    fn with_context(self, context: &str) -> AvlResult<T>;

    /// Convert to an AvlResult with operation context
    fn with_operation(self, operation: &str) -> AvlResult<T>;
}

impl<T> AvlResultExt<T> for Result<T, AvlTreeError> {
    fn with_context(self, context: &str) -> AvlResult<T> {
        self.map_err(|e| match e {
            AvlTreeError::InvalidArgument(msg) => {
                AvlTreeError::InvalidArgument(format!("{}: {}", context, msg))
            }
            AvlTreeError::IllegalState(msg) => {
                AvlTreeError::IllegalState(format!("{}: {}", context, msg))
            }
            AvlTreeError::CorruptedTree(msg) => AvlTreeError::corrupted_tree(context, &msg),
            AvlTreeError::DataIntegrityError(msg) => AvlTreeError::data_integrity(context, &msg),
            other => other,
        })
    }

    fn with_operation(self, operation: &str) -> AvlResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}
