use rand::Rng;

/// Correlation key grouping listings by owner.
///
/// The remote service does not authenticate sellers, so tests isolate
/// their data by drawing a fresh identifier from the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct SellerId(u32);

impl SellerId {
    pub const MIN: u32 = 111_111;
    pub const MAX: u32 = 999_999;

    pub fn parse(value: u32) -> Result<SellerId, String> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "{} is not a valid seller id, expected a value in [{}, {}].",
                value,
                Self::MIN,
                Self::MAX
            ))
        }
    }

    /// Uniformly random identifier in `[MIN, MAX]`.
    pub fn generate() -> Self {
        Self(rand::thread_rng().gen_range(Self::MIN..=Self::MAX))
    }

    /// Lowest identifier of the range, used as a probe for an unused seller.
    pub fn lowest() -> Self {
        Self(Self::MIN)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SellerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
