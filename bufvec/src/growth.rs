use crate::error::BufVecError;

/// Multiplier applied to a capacity when a growable container must expand.
///
/// Stored as the ratio `numerator / denominator` so that growth is computed
/// with exact, overflow-checked integer arithmetic. The ratio is always
/// strictly greater than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthFactor {
    numerator: usize,
    denominator: usize,
}

impl GrowthFactor {
    /// 2.0, the default policy of `Vector`.
    pub const DOUBLE: Self = Self {
        numerator: 2,
        denominator: 1,
    };

    /// 1.75, the policy of string buffers.
    pub const SEVEN_QUARTERS: Self = Self {
        numerator: 7,
        denominator: 4,
    };

    /// Creates a growth factor of `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::InvalidArgument` if `denominator` is 0 or the
    /// ratio is not greater than one.
    pub fn new(numerator: usize, denominator: usize) -> Result<Self, BufVecError> {
        if denominator == 0 {
            return Err(BufVecError::InvalidArgument {
                reason: "growth factor denominator must be non-zero",
            });
        }
        if numerator <= denominator {
            return Err(BufVecError::InvalidArgument {
                reason: "growth factor must be greater than one",
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    #[must_use]
    pub fn numerator(self) -> usize {
        self.numerator
    }

    #[must_use]
    pub fn denominator(self) -> usize {
        self.denominator
    }

    /// Scales `amount` by the factor, rounding down.
    ///
    /// Returns `None` on arithmetic overflow.
    #[must_use]
    pub fn scale(self, amount: usize) -> Option<usize> {
        amount
            .checked_mul(self.numerator)
            .map(|scaled| scaled / self.denominator)
    }

    /// Capacity to grow to from a full container of `capacity` elements.
    ///
    /// The result is `capacity * factor`, but never less than `capacity + 1`.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::AllocationFailure` if the new capacity does not
    /// fit in `usize`.
    pub fn next_capacity(self, capacity: usize) -> Result<usize, BufVecError> {
        let at_least = capacity
            .checked_add(1)
            .ok_or(BufVecError::alloc(usize::MAX))?;
        let scaled = self.scale(capacity).ok_or(BufVecError::alloc(usize::MAX))?;
        Ok(scaled.max(at_least))
    }
}

impl Default for GrowthFactor {
    fn default() -> Self {
        Self::DOUBLE
    }
}
