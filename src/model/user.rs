use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub primary_address_id: Option<i32>,
    pub primary_payment_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegisterDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by register and login. The same token is also set as the `access_token` cookie.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateAccountDto {
    pub first_name: String,
    pub last_name: String,
}
