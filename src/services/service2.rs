// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service 2: welcome and data endpoints

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::http::{build_router, ApiResponse, HttpApp, ServiceContext};

pub const NAME: &str = "service2";
pub const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeData {
    pub message: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataItem {
    pub id: String,
    pub title: String,
    pub count: i64,
}

/// `GET /api/service2/`
pub async fn welcome() -> Json<ApiResponse<WelcomeData>> {
    Json(ApiResponse::success(WelcomeData {
        message: "Welcome to Service 2".into(),
        service: NAME.into(),
    }))
}

/// `GET /api/service2/data`
pub async fn data() -> Json<ApiResponse<Vec<DataItem>>> {
    Json(ApiResponse::success(vec![
        DataItem {
            id: "1".into(),
            title: "Item 1 from Service 2".into(),
            count: 10,
        },
        DataItem {
            id: "2".into(),
            title: "Item 2 from Service 2".into(),
            count: 20,
        },
    ]))
}

pub fn routes() -> Router<Arc<ServiceContext>> {
    Router::new()
        .route("/api/service2", get(welcome))
        .route("/api/service2/data", get(data))
}

/// Complete service router
pub fn app(production: bool) -> HttpApp {
    build_router(ServiceContext::new(NAME, production), routes())
}
