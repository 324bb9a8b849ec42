//! Storefront backend.
//!
//! This module contains the complete backend: API endpoints, the checkout flow, business
//! logic and data access. The backend uses Axum as the web framework, SeaORM for database
//! operations and tower-sessions for the server-side checkout state.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameters and the checkout state machine
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Identity resolution, access policies and typed session access
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, identity provider)
//! - **Startup** (`startup`) - Initialization of database and sessions
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** applies the access policy, converts DTOs to params, calls service
//! 3. **Service** executes business logic inside a transaction where writes span entities
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** records step results in the session, converts the domain model to a DTO
//!    or answers with a redirect

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
