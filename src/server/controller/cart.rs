use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::cart::{AddCartItemDto, CartDto, UpdateCartItemDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::CheckoutFlowSession},
        model::cart::{Cart, CartCaller},
        service::cart::CartService,
        state::AppState,
    },
};

/// Get the caller's cart.
///
/// Anonymous callers get the cart remembered by their session; signed-in callers get their
/// own cart. A caller without a cart receives an empty cart with no id.
///
/// # Access Control
/// - `Public` - A presented credential must be valid
///
/// # Returns
/// - `200 OK` - The cart
/// - `401 Unauthorized` - Invalid credential
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (flow, caller) = cart_caller(&state, &session, &headers).await?;

    let cart = CartService::new(&state.db).get(caller).await?;
    flow.set_cart_id(cart.as_ref().map(|cart| cart.id)).await?;

    Ok((StatusCode::OK, Json(cart_dto(cart)?)))
}

/// Add units of a product to the cart.
///
/// Creates the cart on the first add and remembers it in the session.
///
/// # Arguments
/// - `payload` - Product id and a quantity of at least 1 (default 1)
///
/// # Returns
/// - `201 Created` - The cart after the add
/// - `400 Bad Request` - Quantity below 1 or too large
/// - `404 Not Found` - No such product
pub async fn add_item(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<AddCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let (flow, caller) = cart_caller(&state, &session, &headers).await?;

    let cart = CartService::new(&state.db)
        .add_item(caller, payload.product_id, payload.quantity)
        .await?;
    flow.set_cart_id(Some(cart.id)).await?;

    Ok((StatusCode::CREATED, Json(cart.into_dto()?)))
}

/// Set the quantity of a cart line. A quantity of 0 removes the line.
///
/// # Returns
/// - `200 OK` - The cart after the change, empty if the last line was removed
/// - `400 Bad Request` - Negative quantity
/// - `404 Not Found` - No cart, or the product is not in it
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
    Json(payload): Json<UpdateCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let (flow, caller) = cart_caller(&state, &session, &headers).await?;

    let cart = CartService::new(&state.db)
        .set_quantity(caller, product_id, payload.quantity)
        .await?;
    flow.set_cart_id(cart.as_ref().map(|cart| cart.id)).await?;

    Ok((StatusCode::OK, Json(cart_dto(cart)?)))
}

/// Remove a product from the cart.
///
/// # Returns
/// - `200 OK` - The cart after the removal, empty if it was the last line
/// - `404 Not Found` - No cart, or the product is not in it
pub async fn remove_item(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (flow, caller) = cart_caller(&state, &session, &headers).await?;

    let cart = CartService::new(&state.db)
        .remove_item(caller, product_id)
        .await?;
    flow.set_cart_id(cart.as_ref().map(|cart| cart.id)).await?;

    Ok((StatusCode::OK, Json(cart_dto(cart)?)))
}

/// Delete the cart and all of its lines.
///
/// # Returns
/// - `204 No Content` - Cart deleted, or there was none
pub async fn delete_cart(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (flow, caller) = cart_caller(&state, &session, &headers).await?;

    CartService::new(&state.db).delete(caller).await?;
    flow.set_cart_id(None).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn cart_caller<'s>(
    state: &AppState,
    session: &'s Session,
    headers: &HeaderMap,
) -> Result<(CheckoutFlowSession<'s>, CartCaller), AppError> {
    let user = AuthGuard::new(&state.db, &state.identity, headers)
        .permissive()
        .await?;

    let flow = CheckoutFlowSession::new(session);
    let caller = flow.cart_caller(user.map(|user| user.id)).await?;

    Ok((flow, caller))
}

fn cart_dto(cart: Option<Cart>) -> Result<CartDto, AppError> {
    match cart {
        Some(cart) => cart.into_dto(),
        None => Ok(Cart::empty_dto()),
    }
}
