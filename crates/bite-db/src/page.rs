//! 1-based pagination window.

use crate::error::DatabaseError;

/// A validated `(size, number)` pair. `number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    size: u32,
    number: u32,
}

impl Page {
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` if `size` or `number` is 0.
    pub fn new(size: u32, number: u32) -> Result<Self, DatabaseError> {
        if size < 1 {
            return Err(DatabaseError::InvalidArgument(
                "page size must be at least 1".into(),
            ));
        }
        if number < 1 {
            return Err(DatabaseError::InvalidArgument(
                "page number must be at least 1".into(),
            ));
        }
        Ok(Self { size, number })
    }

    /// The first page of the given size.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` if `size` is 0.
    pub fn first(size: u32) -> Result<Self, DatabaseError> {
        Self::new(size, 1)
    }

    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    #[must_use]
    pub const fn number(self) -> u32 {
        self.number
    }

    /// SQL `LIMIT` value.
    #[must_use]
    pub fn limit(self) -> i64 {
        i64::from(self.size)
    }

    /// SQL `OFFSET` value: `(number - 1) * size`.
    #[must_use]
    pub fn offset(self) -> i64 {
        let skip = u64::from(self.number - 1) * u64::from(self.size);
        i64::try_from(skip).unwrap_or(i64::MAX)
    }
}
