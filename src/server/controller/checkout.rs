//! Checkout step handlers.
//!
//! Each GET renders the data for one step as JSON, or redirects when the session has not
//! reached it. Each POST records its step and answers with a 302 to the next step. Invalid
//! submissions send the customer back to the step with a one-shot flash message, which the
//! following GET returns.
//!
//! The checkout session is saved only after the step's database work has committed.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        checkout::{
            AuthStepDto, PaymentStepDto, PaymentSubmissionDto, ShippingStepDto,
            ShippingSubmissionDto,
        },
        user::{LoginDto, RegisterDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{Access, AuthGuard},
            session::CheckoutFlowSession,
        },
        model::{
            address::{Address, AddressChoice},
            cart::Cart,
            checkout::{CheckoutSession, CheckoutStep, Transition},
            payment::{Card, PaymentChoice},
            user::{AuthenticatedUser, LoginParam, RegisterParam},
        },
        service::{auth::AuthService, cart::CartService, checkout::CheckoutService},
        state::AppState,
        util::{
            cookie::access_token_cookie,
            redirect::{found, found_with_cookie},
        },
    },
};

/// Start checkout.
///
/// Signed-in customers have their guest cart merged into their account and go to shipping;
/// anonymous customers go to the auth step.
///
/// # Access Control
/// - `Public` - An invalid credential is treated as anonymous
///
/// # Returns
/// - `302 Found` - To `/checkout/auth` or `/checkout/shipping`
/// - `404 Not Found` - No cart, or the cart is empty
pub async fn begin(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user_id = match gate(&state, &headers).await? {
        Access::Granted(user) => Some(user.id),
        Access::Redirect(_) => None,
    };

    let flow = CheckoutFlowSession::new(&session);
    let mut checkout = flow.load().await?;

    let result = CheckoutService::new(&state.db)
        .begin(&mut checkout, user_id)
        .await;

    // An empty cart still updates which cart the session points at
    if matches!(result, Ok(_) | Err(AppError::NotFound(_))) {
        flow.save(&checkout).await?;
    }

    Ok(found(result?.location()))
}

/// Get the auth step: the cart summary and any flash left by a failed sign-in.
///
/// # Returns
/// - `200 OK` - `AuthStepDto`
/// - `302 Found` - To `/checkout/shipping` when already signed in
pub async fn auth_step(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Access::Granted(_) = gate(&state, &headers).await? {
        return Ok(found(CheckoutStep::Shipping.path()));
    }

    let flow = CheckoutFlowSession::new(&session);
    let cart = CartService::new(&state.db)
        .get(flow.cart_caller(None).await?)
        .await?;
    let cart = match cart {
        Some(cart) => cart.into_dto()?,
        None => Cart::empty_dto(),
    };

    let dto = AuthStepDto {
        step: CheckoutStep::Auth.name().to_string(),
        cart,
        flash: flow.take_flash().await?,
    };

    Ok((StatusCode::OK, Json(dto)).into_response())
}

/// Sign in during checkout.
///
/// # Returns
/// - `302 Found` - To `/checkout/shipping` with the access-token cookie set, or back to
///   `/checkout/auth` with a flash on bad credentials
pub async fn auth_login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let flow = CheckoutFlowSession::new(&session);

    let Ok(Json(payload)) = payload else {
        return back_with_flash(&flow, CheckoutStep::Auth, "Email and password are required").await;
    };

    let result = AuthService::new(&state.db, &state.identity)
        .login(LoginParam::from_dto(payload))
        .await;

    complete_sign_in(&state, &flow, result).await
}

/// Register during checkout.
///
/// # Returns
/// - `302 Found` - To `/checkout/shipping` with the access-token cookie set, or back to
///   `/checkout/auth` with a flash when the registration is invalid or the email is taken
pub async fn auth_register(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let flow = CheckoutFlowSession::new(&session);

    let Ok(Json(payload)) = payload else {
        return back_with_flash(&flow, CheckoutStep::Auth, "Registration details are required")
            .await;
    };

    let result = AuthService::new(&state.db, &state.identity)
        .register(RegisterParam::from_dto(payload))
        .await;

    complete_sign_in(&state, &flow, result).await
}

/// Get the shipping step: saved addresses and the current selection.
///
/// # Access Control
/// - `Checkout` - Anonymous callers are redirected to `/checkout`
pub async fn shipping_step(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user = match gate(&state, &headers).await? {
        Access::Granted(user) => user,
        Access::Redirect(transition) => return Ok(found(transition.location())),
    };

    let flow = CheckoutFlowSession::new(&session);
    let checkout = flow.load().await?;
    let options = CheckoutService::new(&state.db)
        .shipping_options(user.id)
        .await?;

    let dto = ShippingStepDto {
        step: CheckoutStep::Shipping.name().to_string(),
        addresses: options.addresses.into_iter().map(Address::into_dto).collect(),
        primary_address_id: options.primary_address_id,
        selected_address_id: checkout.shipping_address_id,
        flash: flow.take_flash().await?,
    };

    Ok((StatusCode::OK, Json(dto)).into_response())
}

/// Submit the shipping address: a saved address id or a new address.
///
/// # Returns
/// - `302 Found` - To `/checkout/payment`, or back to `/checkout/shipping` with a flash
/// - `403 Forbidden` - Address belongs to another user
pub async fn submit_shipping(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    payload: Result<Json<ShippingSubmissionDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let user = match gate(&state, &headers).await? {
        Access::Granted(user) => user,
        Access::Redirect(transition) => return Ok(found(transition.location())),
    };

    let flow = CheckoutFlowSession::new(&session);

    let Ok(Json(payload)) = payload else {
        return back_with_flash(&flow, CheckoutStep::Shipping, "Choose or enter an address")
            .await;
    };

    let mut checkout = flow.load().await?;
    let result = CheckoutService::new(&state.db)
        .submit_shipping(&mut checkout, user.id, AddressChoice::from_dto(payload))
        .await;

    advance(&flow, &checkout, result, CheckoutStep::Shipping).await
}

/// Get the payment step: saved cards, addresses for billing, and the primary card.
///
/// # Access Control
/// - `Checkout` - Anonymous callers are redirected to `/checkout`
pub async fn payment_step(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user = match gate(&state, &headers).await? {
        Access::Granted(user) => user,
        Access::Redirect(transition) => return Ok(found(transition.location())),
    };

    let flow = CheckoutFlowSession::new(&session);
    let options = CheckoutService::new(&state.db)
        .payment_options(user.id)
        .await?;

    let dto = PaymentStepDto {
        step: CheckoutStep::Payment.name().to_string(),
        cards: options.cards.into_iter().map(Card::into_dto).collect(),
        addresses: options.addresses.into_iter().map(Address::into_dto).collect(),
        primary_payment_id: options.primary_payment_id,
        flash: flow.take_flash().await?,
    };

    Ok((StatusCode::OK, Json(dto)).into_response())
}

/// Submit the payment method: a saved card, optionally re-billed, or a new card with its
/// billing address.
///
/// # Returns
/// - `302 Found` - To `/checkout/order`, or back to `/checkout/payment` with a flash
/// - `403 Forbidden` - Card or address belongs to another user
pub async fn submit_payment(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    payload: Result<Json<PaymentSubmissionDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let user = match gate(&state, &headers).await? {
        Access::Granted(user) => user,
        Access::Redirect(transition) => return Ok(found(transition.location())),
    };

    let flow = CheckoutFlowSession::new(&session);

    let Ok(Json(payload)) = payload else {
        return back_with_flash(&flow, CheckoutStep::Payment, "Choose or enter a card").await;
    };

    let mut checkout = flow.load().await?;
    let result = CheckoutService::new(&state.db)
        .submit_payment(&mut checkout, user.id, PaymentChoice::from_dto(payload))
        .await;

    advance(&flow, &checkout, result, CheckoutStep::Payment).await
}

/// Review the order before placing it.
///
/// # Returns
/// - `200 OK` - Cart, shipping address, billing address and masked card
/// - `302 Found` - To the step whose selection is missing, or to the cart
/// - `403 Forbidden` - A selection belongs to another user
pub async fn review(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user = match gate(&state, &headers).await? {
        Access::Granted(user) => user,
        Access::Redirect(transition) => return Ok(found(transition.location())),
    };

    let checkout = CheckoutFlowSession::new(&session).load().await?;

    match CheckoutService::new(&state.db)
        .review(&checkout, user.id)
        .await?
    {
        Ok(review) => Ok((StatusCode::OK, Json(review.into_dto()?)).into_response()),
        Err(transition) => Ok(found(transition.location())),
    }
}

/// Place the order.
///
/// The order, its lines and the removal of the cart commit together. On success the session
/// keeps only the order id.
///
/// # Returns
/// - `302 Found` - To `/checkout/order/confirmation`, or to the step whose selection is missing
/// - `403 Forbidden` - A selection belongs to another user
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user = match gate(&state, &headers).await? {
        Access::Granted(user) => user,
        Access::Redirect(transition) => return Ok(found(transition.location())),
    };

    let flow = CheckoutFlowSession::new(&session);
    let mut checkout = flow.load().await?;

    let transition = CheckoutService::new(&state.db)
        .place_order(&mut checkout, user.id)
        .await?;

    if transition == Transition::Advance(CheckoutStep::Placed) {
        flow.save(&checkout).await?;
    }

    Ok(found(transition.location()))
}

/// Get the order placed by this checkout.
///
/// # Returns
/// - `200 OK` - Order and lines
/// - `302 Found` - To the cart when this session has not placed an order
pub async fn confirmation(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user = match gate(&state, &headers).await? {
        Access::Granted(user) => user,
        Access::Redirect(transition) => return Ok(found(transition.location())),
    };

    let checkout = CheckoutFlowSession::new(&session).load().await?;

    match CheckoutService::new(&state.db)
        .confirmation(&checkout, user.id)
        .await?
    {
        Ok(detail) => Ok((StatusCode::OK, Json(detail.into_dto()?)).into_response()),
        Err(transition) => Ok(found(transition.location())),
    }
}

async fn gate(state: &AppState, headers: &HeaderMap) -> Result<Access, AppError> {
    AuthGuard::new(&state.db, &state.identity, headers)
        .checkout_gated()
        .await
}

/// Saves the session and follows the transition, or recovers from bad input with a flash.
async fn advance(
    flow: &CheckoutFlowSession<'_>,
    checkout: &CheckoutSession,
    result: Result<Transition, AppError>,
    step: CheckoutStep,
) -> Result<Response, AppError> {
    match result {
        Ok(transition) => {
            flow.save(checkout).await?;
            Ok(found(transition.location()))
        }
        Err(err) if err.is_recoverable_input() => {
            back_with_flash(flow, step, &err.to_string()).await
        }
        Err(err) => Err(err),
    }
}

async fn complete_sign_in(
    state: &AppState,
    flow: &CheckoutFlowSession<'_>,
    result: Result<AuthenticatedUser, AppError>,
) -> Result<Response, AppError> {
    let authenticated = match result {
        Ok(authenticated) => authenticated,
        Err(err @ AppError::BadRequest(_))
        | Err(err @ AppError::AuthErr(AuthError::InvalidCredentials))
        | Err(err @ AppError::AuthErr(AuthError::DuplicateEmail)) => {
            return back_with_flash(flow, CheckoutStep::Auth, &err.to_string()).await;
        }
        Err(err) => return Err(err),
    };

    let mut checkout = flow.load().await?;
    let transition = CheckoutService::new(&state.db)
        .sign_in(&mut checkout, authenticated.user.id)
        .await?;
    flow.save(&checkout).await?;

    let cookie = access_token_cookie(
        authenticated.token,
        state.identity.ttl(),
        state.secure_cookies,
    );

    Ok(found_with_cookie(transition.location(), cookie))
}

async fn back_with_flash(
    flow: &CheckoutFlowSession<'_>,
    step: CheckoutStep,
    message: &str,
) -> Result<Response, AppError> {
    tracing::debug!("Checkout {} step rejected submission: {}", step.name(), message);

    flow.set_flash(message.to_string()).await?;

    Ok(found(Transition::Back(step).location()))
}
