//! Checkout orchestration.
//!
//! `CheckoutService` runs the database side of each checkout step. Every operation takes the
//! caller's [`CheckoutSession`](crate::server::model::checkout::CheckoutSession), performs and
//! commits its writes, and only then records its result on the session value and returns the
//! [`Transition`](crate::server::model::checkout::Transition) to follow. Persisting the
//! session is left to the controller, which therefore always writes it after the database.
//!
//! The service is organized into separate modules by step:
//! - `entry` - Starting checkout and signing in
//! - `selection` - Shipping and payment submissions
//! - `placement` - Review, order placement and confirmation

pub mod entry;
pub mod placement;
pub mod selection;

use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::checkout::{CheckoutStep, Transition},
};

pub struct CheckoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CheckoutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Turns a missing referenced entity into a transition back to the step that produces it.
///
/// Ownership failures and persistence errors still propagate.
fn back_on_missing<T>(
    result: Result<T, AppError>,
    step: CheckoutStep,
) -> Result<Result<T, Transition>, AppError> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(AppError::NotFound(reason)) => {
            tracing::debug!("Checkout routing back to {}: {}", step.name(), reason);
            Ok(Err(Transition::Back(step)))
        }
        Err(err) => Err(err),
    }
}
