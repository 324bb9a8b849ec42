use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AddressDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Address fields supplied when creating or replacing an address.
///
/// Every field defaults to empty so that missing fields reach validation and are reported as
/// a bad request instead of failing deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AddressPayloadDto {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
}

/// Either a reference to a saved address or a new address to create.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum AddressChoiceDto {
    Existing { address_id: i32 },
    New { address: AddressPayloadDto },
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SetPrimaryAddressDto {
    pub address_id: i32,
}
