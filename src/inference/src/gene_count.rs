use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneCountError {
    #[error("Invalid number of gene copies: {0} (expected 0, 1 or 2)")]
    InvalidCount(u8),
}

/// Number of copies of the gene an individual carries.
///
/// This is the hidden variable of the model: it is never directly observed,
/// and only inferred through trait evidence and parentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum GeneCount {
    Zero = 0,
    One  = 1,
    Two  = 2,
}

impl GeneCount {
    /// Every carriable number of gene copies, in ascending order.
    pub const ALL: [GeneCount; 3] = [Self::Zero, Self::One, Self::Two];

    /// Bucket index of this gene count within size-three accumulator arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next gene count in ascending order. `None` past [`GeneCount::Two`].
    /// Used by the base-3 odometer of the assignment generator.
    pub(crate) fn bump(self) -> Option<GeneCount> {
        match self {
            Self::Zero => Some(Self::One),
            Self::One  => Some(Self::Two),
            Self::Two  => None,
        }
    }
}

impl std::fmt::Display for GeneCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl TryFrom<u8> for GeneCount {
    type Error = GeneCountError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            n => Err(GeneCountError::InvalidCount(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_indices() {
        for (expected, count) in GeneCount::ALL.iter().enumerate() {
            assert_eq!(count.index(), expected);
        }
    }

    #[test]
    fn bump_order() {
        assert_eq!(GeneCount::Zero.bump(), Some(GeneCount::One));
        assert_eq!(GeneCount::One.bump(),  Some(GeneCount::Two));
        assert_eq!(GeneCount::Two.bump(),  None);
    }

    #[test]
    fn from_u8() {
        for count in 0..=2 {
            let gene_count = GeneCount::try_from(count).expect("Count should be valid");
            assert_eq!(gene_count as u8, count);
        }
        assert_eq!(GeneCount::try_from(3), Err(GeneCountError::InvalidCount(3)));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", GeneCount::Two), "2");
    }
}
