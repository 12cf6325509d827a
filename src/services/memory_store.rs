// src/services/memory_store.rs

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::services::store::{DeleteAck, DocumentStore, Filter, InsertAck, Update, UpdateAck};

/// In-process document store. Every operation holds the lock for its whole
/// duration, so increment-or-create is atomic just like `$inc` with upsert.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Puts a fresh `_id` in front of the document unless it already has one.
fn with_id(doc: Document) -> Document {
    if doc.contains_key("_id") {
        return doc;
    }
    let mut identified = doc! { "_id": ObjectId::new() };
    identified.extend(doc);
    identified
}

/// Applies the update in place and reports whether anything changed.
fn apply(doc: &mut Document, update: &Update) -> Result<bool, AppError> {
    match update {
        Update::Increment(field) => {
            let next = match doc.get(*field) {
                None => Bson::Int32(1),
                Some(Bson::Int32(n)) => match n.checked_add(1) {
                    Some(n) => Bson::Int32(n),
                    None => Bson::Int64(i64::from(*n) + 1),
                },
                Some(Bson::Int64(n)) => match n.checked_add(1) {
                    Some(n) => Bson::Int64(n),
                    None => {
                        return Err(AppError::InvalidDocument(format!(
                            "increment of '{}' overflows a 64-bit integer",
                            field
                        )))
                    }
                },
                Some(Bson::Double(n)) => Bson::Double(n + 1.0),
                Some(other) => {
                    return Err(AppError::InvalidDocument(format!(
                        "cannot increment non-numeric field '{}' ({:?})",
                        field,
                        other.element_type()
                    )))
                }
            };
            doc.insert(*field, next);
            Ok(true)
        }
        Update::Set(field, value) => {
            if doc.get(*field) == Some(value) {
                return Ok(false);
            }
            doc.insert(*field, value.clone());
            Ok(true)
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<Option<Document>, AppError> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertAck, AppError> {
        let doc = with_id(doc);
        let inserted_id = doc.get("_id").cloned().unwrap_or(Bson::Null);

        let mut collections = self.collections.lock().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|d| d.get("_id") == Some(&inserted_id)) {
            return Err(AppError::InvalidDocument(format!(
                "duplicate key in '{}': _id {}",
                collection, inserted_id
            )));
        }
        docs.push(doc);

        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        update: Update,
        upsert: bool,
    ) -> Result<UpdateAck, AppError> {
        let mut collections = self.collections.lock().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if let Some(existing) = docs.iter_mut().find(|d| filter.matches(d)) {
            let modified = apply(existing, &update)?;
            return Ok(UpdateAck {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_count: 0,
                upserted_id: None,
            });
        }

        if !upsert {
            return Ok(UpdateAck {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_count: 0,
                upserted_id: None,
            });
        }

        // An upsert starts from the filter's equality fields.
        let mut created = with_id(filter.to_document());
        apply(&mut created, &update)?;
        let upserted_id = created.get("_id").cloned();
        docs.push(created);

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
            upserted_id,
        })
    }

    async fn delete_one(&self, collection: &str, filter: Filter) -> Result<DeleteAck, AppError> {
        let mut collections = self.collections.lock().await;
        let deleted = match collections.get_mut(collection) {
            Some(docs) => match docs.iter().position(|d| filter.matches(d)) {
                Some(index) => {
                    docs.remove(index);
                    1
                }
                None => 0,
            },
            None => 0,
        };

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: deleted,
        })
    }
}
