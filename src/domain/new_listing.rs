use crate::domain::SellerId;

const DEFAULT_LISTING_NAME: &str = "Test Item";
const DEFAULT_LISTING_PRICE: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub likes: i64,
    pub view_count: i64,
    pub contacts: i64,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            likes: 10,
            view_count: 100,
            contacts: 5,
        }
    }
}

/// Body of a creation request against `/api/1/item`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NewListing {
    #[serde(rename = "sellerID")]
    pub seller_id: SellerId,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
}

impl NewListing {
    /// A valid listing with deterministic secondary fields.
    pub fn for_seller(seller_id: SellerId) -> Self {
        Self {
            seller_id,
            name: DEFAULT_LISTING_NAME.to_string(),
            price: DEFAULT_LISTING_PRICE,
            statistics: Statistics::default(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn priced(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn with_statistics(mut self, likes: i64, view_count: i64, contacts: i64) -> Self {
        self.statistics = Statistics {
            likes,
            view_count,
            contacts,
        };
        self
    }
}
