use std::{convert::Infallible, sync::Arc};

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use futures::StreamExt;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    catalog,
    chat::{ChatProxy, ChatRequest},
    config::Config,
    listing::{self, trips::TripQuery, Listing, ListingFilter, SortSpec},
    models::{activity::Activity, car::Car, flight::Flight, tour::Tour},
};

/// Appended to a streamed answer when the provider stream breaks, since the
/// status line has already gone out.
pub const CHAT_INTERRUPTED_NOTICE: &str =
    "\n\n[The assistant's answer was cut off. Please try again.]";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub chat: Arc<ChatProxy>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> AppState {
        let chat = Arc::new(ChatProxy::from_config(&config));
        AppState { config, chat }
    }
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Deserialize)]
pub struct ListingQuery {
    pub q: Option<String>,
    pub sort: Option<String>,
}

#[derive(Deserialize)]
pub struct FlightQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<NaiveDate>,
    pub passengers: Option<u32>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/chat", post(chat))
        .route("/api/tours", get(list_tours))
        .route("/api/flights", get(list_flights))
        .route("/api/cars", get(list_cars))
        .route("/api/activities", get(list_activities))
        .layer(middleware::from_fn(cors_layer))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) -> anyhow::Result<()> {
    let bind_addr = state.config.bind_address();

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| anyhow::anyhow!("failed to bind http listener on {}: {}", bind_addr, err))?;
    info!("Listening on {}", bind_addr);
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await?;
    Ok(())
}

async fn cors_layer(req: axum::http::Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(Body::empty());
        apply_cors_headers(response.headers_mut());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    } else {
        let mut response = next.run(req).await;
        apply_cors_headers(response.headers_mut());
        response
    }
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type, authorization"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse {
        data: HealthResponse { status: "ok" },
    })
}

async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    match state.chat.stream(&request).await {
        Ok(chunks) => {
            let body = chunks.map(|chunk| {
                Ok::<String, Infallible>(chunk.unwrap_or_else(|e| {
                    warn!("Ending chat answer early: {}", e);
                    CHAT_INTERRUPTED_NOTICE.to_string()
                }))
            });
            (
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                Body::from_stream(body),
            )
                .into_response()
        }
        Err(e) if e.is_client_error() => {
            warn!("Rejected chat request: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e) => {
            error!("Chat relay failed: {}", e);
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}

fn run_listing<T: Listing + Clone + Serialize>(
    items: &[T],
    query: ListingQuery,
) -> Result<Json<ApiResponse<Vec<T>>>, (StatusCode, String)> {
    let filter = query
        .q
        .as_deref()
        .map(ListingFilter::from_query)
        .unwrap_or_default();
    let sort = query
        .sort
        .as_deref()
        .map(str::parse::<SortSpec>)
        .transpose()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(ApiResponse {
        data: listing::search(items, &filter, sort),
    }))
}

async fn list_tours(
    Query(query): Query<ListingQuery>,
) -> Result<Json<ApiResponse<Vec<Tour>>>, (StatusCode, String)> {
    run_listing(catalog::tours(), query)
}

async fn list_cars(
    Query(query): Query<ListingQuery>,
) -> Result<Json<ApiResponse<Vec<Car>>>, (StatusCode, String)> {
    run_listing(catalog::cars(), query)
}

async fn list_activities(
    Query(query): Query<ListingQuery>,
) -> Result<Json<ApiResponse<Vec<Activity>>>, (StatusCode, String)> {
    run_listing(catalog::activities(), query)
}

async fn list_flights(Query(query): Query<FlightQuery>) -> Json<ApiResponse<Vec<Flight>>> {
    let mut trip_query = TripQuery::new().passengers(query.passengers.unwrap_or(1));
    trip_query.origin = query.from;
    trip_query.destination = query.to;
    trip_query.date = query.date;

    let flights: Vec<Flight> = trip_query
        .apply(catalog::flights())
        .into_iter()
        .cloned()
        .collect();
    Json(ApiResponse { data: flights })
}
