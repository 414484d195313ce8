use crate::post::post_model::{Post, PostInput};
use crate::utils::error::CustomError;
use futures_util::TryStreamExt;
use log::error;
use mongodb::{
    Client, Collection,
    bson::{doc, oid::ObjectId, to_document},
    options::ReturnDocument,
};

pub struct PostService {
    collection: Collection<Post>,
}

impl PostService {
    pub fn new(client: &Client) -> Self {
        let database_name =
            std::env::var("DATABASE_NAME").unwrap_or_else(|_| "posts_db".to_string());
        let collection = client.database(&database_name).collection::<Post>("posts");
        PostService { collection }
    }

    // Malformed ids must be rejected before the collection is touched.
    fn parse_object_id(id: &str) -> Result<ObjectId, CustomError> {
        ObjectId::parse_str(id).map_err(|_| CustomError::BadRequestError("Invalid post id".into()))
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, CustomError> {
        let cursor = self.collection.find(doc! {}).await.map_err(|e| {
            error!("Failed to query posts: {e}");
            CustomError::InternalServerError("Failed to fetch posts".into())
        })?;

        cursor.try_collect().await.map_err(|e| {
            error!("Failed to read posts cursor: {e}");
            CustomError::InternalServerError("Failed to fetch posts".into())
        })
    }

    pub async fn create_post(&self, post: Post) -> Result<Post, CustomError> {
        self.collection.insert_one(&post).await.map_err(|e| {
            error!("Failed to insert post: {e}");
            CustomError::InternalServerError("Failed to create post".into())
        })?;

        Ok(post)
    }

    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, CustomError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| {
                error!("Failed to fetch post {id}: {e}");
                CustomError::InternalServerError("Failed to fetch post".into())
            })
    }

    /// Replaces the stored content with the validated payload. `createdAt`
    /// is only rewritten when the payload supplies one.
    pub async fn update_post(
        &self,
        id: &str,
        input: PostInput,
    ) -> Result<Option<Post>, CustomError> {
        let object_id = Self::parse_object_id(id)?;

        let update_doc = to_document(&input).map_err(|e| {
            error!("Failed to serialize post update: {e}");
            CustomError::InternalServerError("Failed to update post".into())
        })?;

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                error!("Failed to update post {id}: {e}");
                CustomError::InternalServerError("Failed to update post".into())
            })
    }

    pub async fn delete_post(&self, id: &str) -> Result<Option<Post>, CustomError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| {
                error!("Failed to delete post {id}: {e}");
                CustomError::InternalServerError("Failed to delete post".into())
            })
    }
}
