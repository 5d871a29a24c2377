use log::info;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{client::ApiClient, error::ApiResult};
use crate::models::{
    hotel::{Hotel, Room},
    show::Show,
    transport::{Transport, TransportTrip},
};

/// A record type managed through the staff CRUD screens.
pub trait Resource: Serialize + DeserializeOwned + Clone {
    const PATH: &'static str;

    fn id(&self) -> i64;
}

impl Resource for Hotel {
    const PATH: &'static str = "/api/Hotel";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Room {
    const PATH: &'static str = "/api/Room";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Transport {
    const PATH: &'static str = "/api/Transport";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for TransportTrip {
    const PATH: &'static str = "/api/TransportTrip";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Show {
    const PATH: &'static str = "/api/Show";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    api: ApiClient,
}

impl CatalogClient {
    pub fn new(api: ApiClient) -> CatalogClient {
        CatalogClient { api }
    }

    pub async fn list<T: Resource>(&self) -> ApiResult<Vec<T>> {
        let body = self.api.get_value(T::PATH).await?;
        if body.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(body)?)
    }

    pub async fn get<T: Resource>(&self, id: i64) -> ApiResult<T> {
        self.api.get(&format!("{}/{}", T::PATH, id)).await
    }

    /// Backends that answer 201/204 without a body leave the submitted record
    /// as the best local copy.
    pub async fn create<T: Resource>(&self, record: &T) -> ApiResult<T> {
        let body = self.api.post_value(T::PATH, record).await?;
        info!("Created record at {}", T::PATH);
        echo_or_decode(body, record)
    }

    pub async fn update<T: Resource>(&self, record: &T) -> ApiResult<T> {
        let body = self
            .api
            .put_value(&format!("{}/{}", T::PATH, record.id()), record)
            .await?;
        info!("Updated record {} at {}", record.id(), T::PATH);
        echo_or_decode(body, record)
    }

    pub async fn delete<T: Resource>(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("{}/{}", T::PATH, id)).await?;
        info!("Deleted record {} at {}", id, T::PATH);
        Ok(())
    }

    pub async fn rooms_for_hotel(&self, hotel_id: i64) -> ApiResult<Vec<Room>> {
        let rooms: Vec<Room> = self.list().await?;
        Ok(rooms
            .into_iter()
            .filter(|room| room.hotel_id == hotel_id)
            .collect())
    }

    pub async fn trips_for_transport(&self, transport_id: i64) -> ApiResult<Vec<TransportTrip>> {
        let trips: Vec<TransportTrip> = self.list().await?;
        Ok(trips
            .into_iter()
            .filter(|trip| trip.transport_id == transport_id)
            .collect())
    }
}

fn echo_or_decode<T: Resource>(body: Value, record: &T) -> ApiResult<T> {
    match body {
        Value::Null | Value::String(_) => Ok(record.clone()),
        other => Ok(serde_json::from_value(other)?),
    }
}
