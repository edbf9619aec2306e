//! In-process stand-in for the classified-ads service.
//!
//! Reproduces the behaviour observed on the QA deployment, quirks included:
//! v1 lookups answer 400 for unknown ids while v2 answers 404, deleting a
//! malformed id answers 400, and malformed creation payloads are rejected
//! with either 400 or 500.
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;
use wiremock::{Request, Respond, ResponseTemplate};

/// Body shape of a successful creation.
// The live suite never builds a fake, so some variants remain unused there.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationShape {
    /// `{"status": "Saved listing - <uuid>"}`
    StatusMessage,
    /// The stored listing, including its `id`.
    IdField,
}

pub struct FakeListingService {
    creation_shape: CreationShape,
    listings: Mutex<HashMap<String, Value>>,
}

impl FakeListingService {
    pub fn new(creation_shape: CreationShape) -> Self {
        Self {
            creation_shape,
            listings: Mutex::new(HashMap::new()),
        }
    }

    fn create(&self, body: &[u8]) -> ResponseTemplate {
        let Ok(payload) = serde_json::from_slice::<Value>(body) else {
            return error(400, "request body is not valid JSON");
        };
        for field in ["sellerID", "name", "price", "statistics"] {
            if payload.get(field).is_none() {
                return error(400, &format!("field {} is required", field));
            }
        }
        let statistics = &payload["statistics"];
        let valid_types = payload["sellerID"].is_i64()
            && payload["name"].is_string()
            && payload["price"].is_i64()
            && ["likes", "viewCount", "contacts"]
                .iter()
                .all(|counter| statistics[counter].is_i64());
        if !valid_types {
            return error(500, "cannot decode the listing");
        }

        let id = uuid::Uuid::new_v4().to_string();
        let listing = json!({
            "id": id,
            "sellerId": payload["sellerID"],
            "name": payload["name"],
            "price": payload["price"],
            "statistics": statistics,
        });
        self.listings
            .lock()
            .unwrap()
            .insert(id.clone(), listing.clone());

        match self.creation_shape {
            CreationShape::StatusMessage => ResponseTemplate::new(200)
                .set_body_json(json!({ "status": format!("Saved listing - {}", id) })),
            CreationShape::IdField => ResponseTemplate::new(200).set_body_json(listing),
        }
    }

    fn get(&self, id: &str) -> ResponseTemplate {
        match self.listings.lock().unwrap().get(id) {
            Some(listing) => ResponseTemplate::new(200).set_body_json(json!([listing])),
            None => error(400, "item not found"),
        }
    }

    fn list_by_seller(&self, seller_id: &str) -> ResponseTemplate {
        let Ok(seller_id) = seller_id.parse::<i64>() else {
            return error(400, "seller id is not a number");
        };
        let listings: Vec<Value> = self
            .listings
            .lock()
            .unwrap()
            .values()
            .filter(|listing| listing["sellerId"].as_i64() == Some(seller_id))
            .cloned()
            .collect();
        ResponseTemplate::new(200).set_body_json(listings)
    }

    fn statistics(&self, id: &str, not_found_status: u16) -> ResponseTemplate {
        match self.listings.lock().unwrap().get(id) {
            Some(listing) => {
                ResponseTemplate::new(200).set_body_json(json!([listing["statistics"]]))
            }
            None => error(not_found_status, "statistic not found"),
        }
    }

    fn delete(&self, id: &str) -> ResponseTemplate {
        if !is_uuid(id) {
            return error(400, "item id is not a UUID");
        }
        match self.listings.lock().unwrap().remove(id) {
            Some(_) => ResponseTemplate::new(200),
            None => error(404, "item not found"),
        }
    }
}

impl Respond for FakeListingService {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let segments: Vec<&str> = request.url.path().trim_matches('/').split('/').collect();
        match (request.method.as_str(), segments.as_slice()) {
            ("POST", ["api", "1", "item"]) => self.create(&request.body),
            ("GET", ["api", "1", "item", id]) => self.get(id),
            ("GET", ["api", "1", "statistic", id]) => self.statistics(id, 400),
            ("GET", ["api", "2", "statistic", id]) => self.statistics(id, 404),
            ("DELETE", ["api", "2", "item", id]) => self.delete(id),
            ("GET", ["api", "1", seller_id, "item"]) => self.list_by_seller(seller_id),
            _ => ResponseTemplate::new(404),
        }
    }
}

fn is_uuid(id: &str) -> bool {
    uuid::Uuid::parse_str(id).is_ok()
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "result": { "message": message, "messages": {} },
        "status": status.to_string(),
    }))
}
