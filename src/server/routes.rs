//! Request routing for the HTTP transport.
//!
//! | Route | Queue operation |
//! |---|---|
//! | `GET /getOrder` | count |
//! | `POST /placeOrder` | enqueue |
//! | `GET /getQueueNumber?uuid=` | position lookup |
//! | `POST /cancelOrder` | cancel |
//!
//! Every response is JSON. Failures carry `{ "error": "..." }`.

use crate::clients::{ActorClient, OrderClient};
use crate::model::{OrderCreate, OrderId};
use crate::order_actor::OrderError;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Method, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub uuid: String,
    pub order: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CancelOrderRequest {
    pub uuid: String,
}

#[derive(Debug, Serialize)]
pub struct OrderCountResponse {
    pub order_count: usize,
}

#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub message: &'static str,
    pub queue_number: usize,
}

#[derive(Debug, Serialize)]
pub struct QueueNumberResponse {
    pub queue_number: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Answers one request. Never fails: every error becomes a JSON error response.
pub async fn route<B>(client: &OrderClient, req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = match dispatch(client, req).await {
        Ok(response) => response,
        Err(rejection) => rejection.into_response(),
    };

    info!(%method, %path, status = response.status().as_u16(), "Request handled");
    response
}

async fn dispatch<B>(client: &OrderClient, req: Request<B>) -> Result<Response<Full<Bytes>>, Rejection>
where
    B: Body,
    B::Error: Display,
{
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/getOrder") => {
            let order_count = client.count().await?;
            Ok(json_response(StatusCode::OK, &OrderCountResponse { order_count }))
        }
        (&Method::POST, "/placeOrder") => {
            let body: PlaceOrderRequest = read_json(req).await?;
            let params = OrderCreate {
                id: OrderId(body.uuid),
                items: body.order,
            };
            let queue_number = client.place_order(params).await?;
            Ok(json_response(
                StatusCode::OK,
                &PlaceOrderResponse {
                    message: "Order placed",
                    queue_number,
                },
            ))
        }
        (&Method::GET, "/getQueueNumber") => {
            let uuid = query_param(req.uri().query(), "uuid")
                .ok_or_else(|| Rejection::unprocessable("Missing query parameter: uuid"))?;
            let queue_number = client.queue_number(OrderId(uuid)).await?;
            Ok(json_response(StatusCode::OK, &QueueNumberResponse { queue_number }))
        }
        (&Method::POST, "/cancelOrder") => {
            let body: CancelOrderRequest = read_json(req).await?;
            client.cancel_order(OrderId(body.uuid)).await?;
            Ok(json_response(
                StatusCode::OK,
                &MessageResponse {
                    message: "Order cancelled",
                },
            ))
        }
        (_, "/getOrder" | "/placeOrder" | "/getQueueNumber" | "/cancelOrder") => Err(
            Rejection::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
        ),
        _ => Err(Rejection::new(StatusCode::NOT_FOUND, "Not found")),
    }
}

/// A request that ends in an error response.
#[derive(Debug)]
struct Rejection {
    status: StatusCode,
    message: String,
}

impl Rejection {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    fn into_response(self) -> Response<Full<Bytes>> {
        json_response(self.status, &ErrorResponse { error: self.message })
    }
}

impl From<OrderError> for Rejection {
    fn from(e: OrderError) -> Self {
        let status = match e {
            OrderError::DuplicateOrder(_) => StatusCode::BAD_REQUEST,
            OrderError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            OrderError::ActorCommunicationError(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self::new(status, e.to_string())
    }
}

async fn read_json<T, B>(req: Request<B>) -> Result<T, Rejection>
where
    T: DeserializeOwned,
    B: Body,
    B::Error: Display,
{
    let bytes = req
        .into_body()
        .collect()
        .await
        .map_err(|e| Rejection::new(StatusCode::BAD_REQUEST, format!("Failed to read body: {}", e)))?
        .to_bytes();
    serde_json::from_slice(&bytes)
        .map_err(|e| Rejection::unprocessable(format!("Invalid request body: {}", e)))
}

/// First value of `name` in a form-urlencoded query string.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_json_body(status, bytes),
        Err(e) => {
            error!(error = %e, "Failed to serialize response");
            with_json_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"error":"Internal server error"}"#.to_vec(),
            )
        }
    }
}

fn with_json_body(status: StatusCode, bytes: Vec<u8>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(bytes)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
