use crate::post::post_model::PostInput;
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use validator::Validate;

pub async fn list_posts(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let posts = post_service.list_posts().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Posts fetched successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "posts": posts
    })))
}

pub async fn create_post(
    post_service: web::Data<PostService>,
    input: web::Json<PostInput>,
) -> Result<HttpResponse, CustomError> {
    input.validate().map_err(CustomError::from)?;

    let new_post = input.into_inner().into_post();
    post_service.create_post(new_post).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Post created successfully",
        "httpStatusCode": 201,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
    })))
}

pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let post = post_service.get_post(&post_id).await?;

    match post {
        Some(p) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Post fetched successfully",
            "httpStatusCode": 200,
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
            "post": p
        }))),
        None => Err(CustomError::NotFoundError("Post not found".into())),
    }
}

pub async fn update_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    input: web::Json<PostInput>,
) -> Result<HttpResponse, CustomError> {
    // The full payload is re-validated; there are no partial updates.
    input.validate().map_err(CustomError::from)?;

    let post_id = post_id.into_inner();
    let updated = post_service
        .update_post(&post_id, input.into_inner())
        .await?;

    match updated {
        Some(p) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Post updated successfully",
            "httpStatusCode": 200,
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
            "post": p
        }))),
        None => Err(CustomError::NotFoundError("Post not found".into())),
    }
}

pub async fn delete_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let deleted = post_service.delete_post(&post_id).await?;

    match deleted {
        Some(p) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Post deleted successfully",
            "httpStatusCode": 200,
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
            "post": p
        }))),
        None => Err(CustomError::NotFoundError("Post not found".into())),
    }
}
