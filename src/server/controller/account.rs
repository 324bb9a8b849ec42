use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        address::{AddressDto, AddressPayloadDto, SetPrimaryAddressDto},
        order::OrderDto,
        payment::{CardDto, CreatePaymentDto, SetPrimaryPaymentDto},
        user::UpdateAccountDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            address::{Address, AddressParam},
            order::Order,
            payment::{Card, CreatePaymentParam},
            user::{UpdateAccountParam, User},
        },
        service::{
            account::AccountService, address::AddressService, order::OrderService,
            payment::PaymentService,
        },
        state::AppState,
    },
};

/// Every account endpoint requires a signed-in caller and only touches the caller's rows.
async fn require_user(state: &AppState, headers: &HeaderMap) -> Result<User, AppError> {
    AuthGuard::new(&state.db, &state.identity, headers)
        .require()
        .await
}

/// Get the caller's account.
///
/// # Access Control
/// - `Authenticated` - Bearer header or access-token cookie
///
/// # Returns
/// - `200 OK` - Profile with primary address and payment ids
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn get_account(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let account = AccountService::new(&state.db).get_account(user.id).await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Update the caller's name.
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `400 Bad Request` - Empty first or last name
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn update_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let account = AccountService::new(&state.db)
        .update(user.id, UpdateAccountParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Set the caller's primary address.
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `403 Forbidden` - Address belongs to another user
/// - `404 Not Found` - No such address
pub async fn set_primary_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SetPrimaryAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let account = AccountService::new(&state.db)
        .set_primary_address(user.id, payload.address_id)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Set the caller's primary payment card.
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `403 Forbidden` - Card belongs to another user
/// - `404 Not Found` - No such card
pub async fn set_primary_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SetPrimaryPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let account = AccountService::new(&state.db)
        .set_primary_payment(user.id, payload.payment_id)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

pub async fn list_addresses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let addresses = AddressService::new(&state.db).list(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            addresses
                .into_iter()
                .map(Address::into_dto)
                .collect::<Vec<AddressDto>>(),
        ),
    ))
}

/// Save a new address for the caller.
///
/// # Returns
/// - `201 Created` - The stored address
/// - `400 Bad Request` - A required field is empty
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn create_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddressPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let address = AddressService::new(&state.db)
        .create(user.id, AddressParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(address.into_dto())))
}

pub async fn get_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(address_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let address = AddressService::new(&state.db)
        .get(user.id, address_id)
        .await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

/// Replace a saved address.
///
/// # Returns
/// - `200 OK` - The updated address
/// - `400 Bad Request` - A required field is empty
/// - `403 Forbidden` - Address belongs to another user
/// - `404 Not Found` - No such address
pub async fn update_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(address_id): Path<i32>,
    Json(payload): Json<AddressPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let address = AddressService::new(&state.db)
        .update(user.id, address_id, AddressParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

/// Delete a saved address.
///
/// # Returns
/// - `204 No Content` - Address deleted
/// - `403 Forbidden` - Address belongs to another user
/// - `404 Not Found` - No such address
/// - `409 Conflict` - A saved card still bills to the address
pub async fn delete_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(address_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    AddressService::new(&state.db)
        .delete(user.id, address_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the caller's saved cards. Card numbers are masked to their last four digits.
pub async fn list_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let cards = PaymentService::new(&state.db).list(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(cards.into_iter().map(Card::into_dto).collect::<Vec<CardDto>>()),
    ))
}

/// Save a new card with its billing address.
///
/// # Returns
/// - `201 Created` - The stored card, masked
/// - `400 Bad Request` - Invalid card or billing address
/// - `403 Forbidden` - Billing address belongs to another user
/// - `404 Not Found` - No such billing address
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let card = PaymentService::new(&state.db)
        .create(user.id, CreatePaymentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

pub async fn get_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(payment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let card = PaymentService::new(&state.db)
        .get(user.id, payment_id)
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Delete a saved card.
///
/// # Returns
/// - `204 No Content` - Card deleted
/// - `403 Forbidden` - Card belongs to another user
/// - `404 Not Found` - No such card
pub async fn delete_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(payment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    PaymentService::new(&state.db)
        .delete(user.id, payment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the caller's orders, newest first.
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let orders = OrderService::new(&state.db).list(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(orders.into_iter().map(Order::into_dto).collect::<Vec<OrderDto>>()),
    ))
}

/// Get one of the caller's orders with its lines.
///
/// # Returns
/// - `200 OK` - Order and lines
/// - `403 Forbidden` - Order belongs to another user
/// - `404 Not Found` - No such order
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;

    let detail = OrderService::new(&state.db)
        .get_detail(user.id, order_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto()?)))
}
