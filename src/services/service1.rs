// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service 1: welcome and example endpoints

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::http::{build_router, ApiResponse, HttpApp, ServiceContext};

pub const NAME: &str = "service1";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeData {
    pub message: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleData {
    pub id: String,
    pub name: String,
    pub value: i64,
}

/// `GET /api/service1/`
pub async fn welcome() -> Json<ApiResponse<WelcomeData>> {
    Json(ApiResponse::success(WelcomeData {
        message: "Welcome to Service 1".into(),
        service: NAME.into(),
    }))
}

/// `GET /api/service1/example`
pub async fn example() -> Json<ApiResponse<ExampleData>> {
    Json(ApiResponse::success(ExampleData {
        id: "1".into(),
        name: "Example from Service 1".into(),
        value: 100,
    }))
}

pub fn routes() -> Router<Arc<ServiceContext>> {
    Router::new()
        .route("/api/service1", get(welcome))
        .route("/api/service1/example", get(example))
}

/// Complete service router
pub fn app(production: bool) -> HttpApp {
    build_router(ServiceContext::new(NAME, production), routes())
}
