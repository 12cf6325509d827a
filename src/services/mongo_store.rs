// src/services/mongo_store.rs

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::options::UpdateOptions;
use mongodb::{Client, Collection, Database};

use crate::error::AppError;
use crate::services::store::{DeleteAck, DocumentStore, Filter, InsertAck, Update, UpdateAck};

/// Document store backed by one long-lived MongoDB client.
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    pub fn new(client: Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self { client, db }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend_tag(&self) -> &'static str {
        "mongo"
    }

    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .collection(collection)
            .find(filter.to_document(), None)
            .await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<Option<Document>, AppError> {
        Ok(self
            .collection(collection)
            .find_one(filter.to_document(), None)
            .await?)
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertAck, AppError> {
        let result = self.collection(collection).insert_one(doc, None).await?;
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: result.inserted_id,
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        update: Update,
        upsert: bool,
    ) -> Result<UpdateAck, AppError> {
        let options = UpdateOptions::builder().upsert(upsert).build();
        let result = self
            .collection(collection)
            .update_one(filter.to_document(), update.to_document(), options)
            .await?;
        let upserted_count = u64::from(result.upserted_id.is_some());
        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count,
            upserted_id: result.upserted_id.filter(|id| *id != Bson::Null),
        })
    }

    async fn delete_one(&self, collection: &str, filter: Filter) -> Result<DeleteAck, AppError> {
        let result = self
            .collection(collection)
            .delete_one(filter.to_document(), None)
            .await?;
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn close(&self) {
        log::info!("Closing MongoDB connection");
        self.client.clone().shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use mongodb::bson::{doc, oid::ObjectId};

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn increment_upserts_against_a_live_server() {
        dotenv::dotenv().ok();
        let uri =
            std::env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = init_db(&uri, "StudentLodgeTest").await.unwrap();
        let store = MongoStore::new(client, "StudentLodgeTest");
        let oid = ObjectId::new();

        for _ in 0..3 {
            store
                .update_one("meals", Filter::Id(oid), Update::Increment("likes"), true)
                .await
                .unwrap();
        }
        let meal = store.find_one("meals", Filter::Id(oid)).await.unwrap().unwrap();
        assert_eq!(meal.get_i32("likes").unwrap(), 3);

        let ack = store.delete_one("meals", Filter::Id(oid)).await.unwrap();
        assert_eq!(ack.deleted_count, 1);
        assert!(store.find("meals", Filter::Id(oid)).await.unwrap().is_empty());

        let ack = store.insert_one("meals", doc! { "category": "test" }).await.unwrap();
        store
            .delete_one("meals", Filter::Id(ack.inserted_id.as_object_id().unwrap()))
            .await
            .unwrap();
        store.close().await;
    }
}
