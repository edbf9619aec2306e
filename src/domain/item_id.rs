use rand::Rng;
use rand::distributions::Alphanumeric;

const NON_EXISTENT_ID_LENGTH: usize = 24;
const UUID_LENGTH: usize = 36;

/// Server-assigned identifier of a listing.
///
/// Kept opaque: the creation endpoint may hand back any value in its `id`
/// field, so no shape is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Random alphanumeric id that can never be UUID-shaped.
    ///
    /// Probes the not-found and invalid-id handling of the service.
    pub fn non_existent() -> Self {
        let value = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NON_EXISTENT_ID_LENGTH)
            .map(char::from)
            .collect::<String>();
        Self(value)
    }

    /// 36 characters of lowercase hex digits and hyphens.
    pub fn is_uuid_shaped(&self) -> bool {
        self.0.len() == UUID_LENGTH
            && self
                .0
                .chars()
                .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c))
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
