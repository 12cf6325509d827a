// src/models/document.rs

use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Parses a path identifier into an ObjectId (24 hex characters).
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

/// Converts a request body into a BSON document, field for field.
pub fn from_json(body: Map<String, Value>) -> Result<Document, AppError> {
    bson::to_document(&body).map_err(|e| AppError::InvalidDocument(e.to_string()))
}

/// Renders a stored document as plain JSON. Object ids become hex strings;
/// everything else uses relaxed extended JSON.
pub fn to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use serde_json::json;

    #[test]
    fn object_ids_render_as_hex() {
        let oid = ObjectId::new();
        let rendered = to_json(doc! {
            "_id": oid,
            "likes": 3,
            "tags": [ { "ref": oid } ],
        });
        assert_eq!(
            rendered,
            json!({ "_id": oid.to_hex(), "likes": 3, "tags": [ { "ref": oid.to_hex() } ] })
        );
    }

    #[test]
    fn body_keeps_nested_fields() {
        let body = json!({ "category": "breakfast", "price": 4.5, "meta": { "chef": "Ana" } });
        let doc = from_json(body.as_object().unwrap().clone()).unwrap();
        assert_eq!(doc.get_str("category").unwrap(), "breakfast");
        assert_eq!(doc.get_f64("price").unwrap(), 4.5);
        assert_eq!(doc.get_document("meta").unwrap().get_str("chef").unwrap(), "Ana");
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(matches!(parse_object_id("not-an-id"), Err(AppError::InvalidId(_))));
        assert!(parse_object_id("65a1f0c2e4b0a1b2c3d4e5f6").is_ok());
    }
}
