use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;
use urlencoding::encode;

use super::{
    client::ApiClient,
    envelope::normalize_basket,
    error::{ApiError, ApiResult},
};
use crate::models::basket::{Basket, BasketItem};

/// Name of the change notification, kept identical to what listening views
/// subscribe to.
pub const BASKET_CHANGED: &str = "basket:changed";

const EVENT_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketChange {
    Added,
    Updated,
    Removed,
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasketEvent {
    pub user_id: String,
    pub change: BasketChange,
    pub product_id: Option<String>,
}

impl BasketEvent {
    pub fn name(&self) -> &'static str {
        BASKET_CHANGED
    }
}

#[derive(Serialize)]
struct QuantityUpdate {
    quantity: u32,
}

/// Remote basket keyed by user id. Every mutation is one REST call followed
/// by a `basket:changed` broadcast; nothing is retried or applied optimistically.
#[derive(Debug, Clone)]
pub struct BasketClient {
    api: ApiClient,
    events: broadcast::Sender<BasketEvent>,
}

// Ids are escaped so `#`, `?` or `/` inside them stay in their own segment
fn basket_path(user_id: &str) -> String {
    format!("/api/Basket/{}", encode(user_id))
}

fn item_path(user_id: &str, product_id: &str) -> String {
    format!("{}/items/{}", basket_path(user_id), encode(product_id))
}

fn require_user(user_id: &str) -> ApiResult<()> {
    if user_id.trim().is_empty() {
        return Err(ApiError::Validation(String::from(
            "A user id is required to use the basket",
        )));
    }
    Ok(())
}

impl BasketClient {
    pub fn new(api: ApiClient) -> BasketClient {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        BasketClient { api, events }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BasketEvent> {
        self.events.subscribe()
    }

    fn notify(&self, user_id: &str, change: BasketChange, product_id: Option<&str>) {
        let event = BasketEvent {
            user_id: user_id.to_string(),
            change,
            product_id: product_id.map(str::to_string),
        };
        // No subscribers is fine, nobody needs to refetch
        if self.events.send(event).is_err() {
            debug!("{} emitted with no listeners", BASKET_CHANGED);
        }
    }

    pub async fn get_basket(&self, user_id: &str) -> ApiResult<Basket> {
        require_user(user_id)?;
        let body = self.api.get_value(&basket_path(user_id)).await?;
        Ok(normalize_basket(user_id, &body).unwrap_or_else(|| Basket::empty(user_id)))
    }

    /// Mutation endpoints may answer with the whole basket or with nothing;
    /// in the latter case the basket is fetched again.
    async fn mirror(&self, user_id: &str, body: Value) -> ApiResult<Basket> {
        match normalize_basket(user_id, &body) {
            Some(basket) => Ok(basket),
            None => self.get_basket(user_id).await,
        }
    }

    pub async fn add_item(&self, user_id: &str, item: &BasketItem) -> ApiResult<Basket> {
        require_user(user_id)?;
        if item.quantity == 0 {
            return Err(ApiError::Validation(String::from(
                "Quantity must be at least 1",
            )));
        }

        let body = self
            .api
            .post_value(&format!("{}/items", basket_path(user_id)), item)
            .await?;
        let basket = self.mirror(user_id, body).await?;

        info!("Added {} x{} to basket of {}", item.product_id, item.quantity, user_id);
        self.notify(user_id, BasketChange::Added, Some(&item.product_id));
        Ok(basket)
    }

    pub async fn update_quantity(
        &self,
        user_id: &str,
        product_id: &str,
        quantity: u32,
    ) -> ApiResult<Basket> {
        if quantity == 0 {
            return self.remove_item(user_id, product_id).await;
        }
        require_user(user_id)?;

        let body = self
            .api
            .put_value(&item_path(user_id, product_id), &QuantityUpdate { quantity })
            .await?;
        let basket = self.mirror(user_id, body).await?;

        self.notify(user_id, BasketChange::Updated, Some(product_id));
        Ok(basket)
    }

    pub async fn remove_item(&self, user_id: &str, product_id: &str) -> ApiResult<Basket> {
        require_user(user_id)?;

        let body = self.api.delete_value(&item_path(user_id, product_id)).await?;
        let basket = self.mirror(user_id, body).await?;

        info!("Removed {} from basket of {}", product_id, user_id);
        self.notify(user_id, BasketChange::Removed, Some(product_id));
        Ok(basket)
    }

    pub async fn clear_basket(&self, user_id: &str) -> ApiResult<()> {
        require_user(user_id)?;

        self.api.delete_value(&basket_path(user_id)).await?;

        info!("Cleared basket of {}", user_id);
        self.notify(user_id, BasketChange::Cleared, None);
        Ok(())
    }
}
