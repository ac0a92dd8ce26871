// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployed HTTP services
//!
//! Two independent services returning static payloads. Each exposes
//! `GET /health`, `GET /api/{service}/` and one data endpoint.

pub mod service1;
pub mod service2;
