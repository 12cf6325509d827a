// src/services/store.rs

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde::{Serialize, Serializer};

use crate::error::AppError;
use crate::models::document::bson_to_json;

/// Which documents an operation applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    Id(ObjectId),
    /// Exact, case-sensitive string equality on one field.
    FieldEq(&'static str, String),
}

impl Filter {
    pub fn to_document(&self) -> Document {
        match self {
            Filter::All => Document::new(),
            Filter::Id(oid) => doc! { "_id": *oid },
            Filter::FieldEq(field, value) => doc! { *field: value.as_str() },
        }
    }

    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Id(oid) => doc.get_object_id("_id").map(|id| id == *oid).unwrap_or(false),
            Filter::FieldEq(field, value) => doc
                .get_str(field)
                .map(|v| v == value.as_str())
                .unwrap_or(false),
        }
    }
}

/// A single-field mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Atomic increment by one; a missing field counts as zero.
    Increment(&'static str),
    Set(&'static str, Bson),
}

impl Update {
    pub fn to_document(&self) -> Document {
        match self {
            Update::Increment(field) => doc! { "$inc": { *field: 1 } },
            Update::Set(field, value) => doc! { "$set": { *field: value.clone() } },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    #[serde(serialize_with = "serialize_bson")]
    pub inserted_id: Bson,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    #[serde(serialize_with = "serialize_optional_bson")]
    pub upserted_id: Option<Bson>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

fn serialize_bson<S: Serializer>(value: &Bson, serializer: S) -> Result<S::Ok, S::Error> {
    bson_to_json(value.clone()).serialize(serializer)
}

fn serialize_optional_bson<S: Serializer>(
    value: &Option<Bson>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    value.clone().map(bson_to_json).serialize(serializer)
}

/// The document-store operations the router is built on. Every handler
/// performs exactly one of these calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<Document>, AppError>;

    async fn find_one(&self, collection: &str, filter: Filter)
        -> Result<Option<Document>, AppError>;

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertAck, AppError>;

    /// With `upsert`, a miss inserts a new document seeded from the filter
    /// and then updated, all as one atomic step.
    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        update: Update,
        upsert: bool,
    ) -> Result<UpdateAck, AppError>;

    async fn delete_one(&self, collection: &str, filter: Filter) -> Result<DeleteAck, AppError>;

    /// Releases the underlying connection. Called once on shutdown.
    async fn close(&self) {}
}
