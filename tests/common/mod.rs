#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use unicrm_api::auth::{generate_jwt, Claims};
use unicrm_api::database::{NewCourse, Store, StoreError};
use unicrm_api::AppState;

pub const SECRET: &str = "integration-test-secret";

/// In-memory store that records how often it is hit
#[derive(Default)]
pub struct MemoryStore {
    courses: Mutex<Vec<Value>>,
    leads: Mutex<Vec<Value>>,
    failing: AtomicBool,
    saturated: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_leads(leads: Vec<Value>) -> Arc<Self> {
        let store = Self::default();
        *store.leads.lock().unwrap() = leads;
        Arc::new(store)
    }

    /// Make every subsequent call fail like a dropped connection
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent call time out waiting for a pooled connection
    pub fn saturate(&self) {
        self.saturated.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset by peer");
            return Err(StoreError::Sqlx(sqlx::Error::Io(io)));
        }
        if self.saturated.load(Ordering::SeqCst) {
            return Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_courses(&self) -> Result<Vec<Value>, StoreError> {
        self.enter()?;
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn insert_course(&self, course: &NewCourse) -> Result<Value, StoreError> {
        self.enter()?;
        let mut courses = self.courses.lock().unwrap();
        let row = json!({
            "id": courses.len() + 1,
            "title": course.title,
            "description": course.description,
            "price": course.price,
            "duration": course.duration,
        });
        courses.push(row.clone());
        Ok(row)
    }

    async fn list_leads(&self) -> Result<Vec<Value>, StoreError> {
        self.enter()?;
        Ok(self.leads.lock().unwrap().clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.enter()
    }
}

pub fn app_with(store: Arc<MemoryStore>) -> Router {
    unicrm_api::app(AppState::new(store, SECRET), true)
}

/// Sign an arbitrary payload, as a foreign issuer would
pub fn sign_payload(payload: &Value) -> String {
    let key = jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes());
    jsonwebtoken::encode(&jsonwebtoken::Header::default(), payload, &key).unwrap()
}

pub fn valid_token() -> String {
    generate_jwt(&Claims::new("tester", 1), SECRET).unwrap()
}

pub fn expired_token() -> String {
    let mut claims = Claims::new("tester", 1);
    claims.exp = Some(Value::from(chrono::Utc::now().timestamp() - 60));
    generate_jwt(&claims, SECRET).unwrap()
}

/// Fire one request at the router and return status plus raw body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, auth, body).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
