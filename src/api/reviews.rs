use log::info;

use super::{
    client::ApiClient,
    error::{ApiError, ApiResult},
};
use crate::models::review::{NewReview, Review, MAX_RATING, MIN_RATING};

const REVIEW_PATH: &str = "/api/review";

pub fn validate_review(review: &NewReview) -> ApiResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&review.rating) {
        return Err(ApiError::Validation(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }
    if review.comment.trim().is_empty() {
        return Err(ApiError::Validation(String::from(
            "Please write a comment before submitting",
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ReviewClient {
    api: ApiClient,
}

impl ReviewClient {
    pub fn new(api: ApiClient) -> ReviewClient {
        ReviewClient { api }
    }

    pub async fn list_reviews(&self) -> ApiResult<Vec<Review>> {
        let body = self.api.get_value(REVIEW_PATH).await?;
        if body.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(body)?)
    }

    pub async fn reviews_for_order(&self, order_id: i64) -> ApiResult<Vec<Review>> {
        let reviews = self.list_reviews().await?;
        Ok(reviews
            .into_iter()
            .filter(|review| review.order_id == order_id)
            .collect())
    }

    pub async fn create_review(&self, review: &NewReview) -> ApiResult<Review> {
        validate_review(review)?;
        let created: Review = self.api.post(REVIEW_PATH, review).await?;
        info!("Created review {} for order {}", created.id, created.order_id);
        Ok(created)
    }

    pub async fn update_review(&self, id: i64, review: &NewReview) -> ApiResult<Review> {
        validate_review(review)?;
        self.api
            .put(&format!("{}/{}", REVIEW_PATH, id), review)
            .await
    }

    pub async fn delete_review(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("{}/{}", REVIEW_PATH, id)).await
    }
}
