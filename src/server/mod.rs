//! HTTP backend for the booking API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, DTO conversion and OpenAPI docs
//! - **Service Layer** (`service/`) - Not-found handling, email uniqueness, logging
//! - **Data Layer** (`data/`) - SeaORM queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Util** (`util/`) - Request extractors reporting failures as `AppError`
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection and migrations
//! - **Router** (`router`) - Route table and middleware stack
//!
//! # Request Flow
//!
//! 1. **Router** matches the request and runs CORS, tracing and panic middleware
//! 2. **Extractors** parse the path ID and body, rejecting malformed input with 400
//! 3. **Controller** validates the payload into a parameter type (422 on failure)
//! 4. **Service** runs the business rules and calls the repository
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** wraps the domain model in a response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
