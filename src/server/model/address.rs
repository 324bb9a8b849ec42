//! Address book models and parameters.

use crate::{
    model::address::{AddressChoiceDto, AddressDto, AddressPayloadDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Address {
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            address1: entity.address1,
            address2: entity.address2,
            city: entity.city,
            state: entity.state,
            zip: entity.zip,
            country: entity.country,
        }
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            address1: self.address1,
            address2: self.address2,
            city: self.city,
            state: self.state,
            zip: self.zip,
            country: self.country,
        }
    }
}

/// Address fields for creating or replacing an address.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressParam {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl AddressParam {
    /// Trims every field; a blank `address2` becomes `None`.
    pub fn from_dto(dto: AddressPayloadDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            address1: dto.address1.trim().to_string(),
            address2: dto
                .address2
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            city: dto.city.trim().to_string(),
            state: dto.state.trim().to_string(),
            zip: dto.zip.trim().to_string(),
            country: dto.country.trim().to_string(),
        }
    }

    /// Checks required fields and the postal code shape.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address", &self.address1),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
            ("country", &self.country),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(AppError::BadRequest(format!("Address {} is required", field)));
        }

        let zip_len = self.zip.chars().count();
        let zip_chars_ok = self
            .zip
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-');
        if !(3..=10).contains(&zip_len) || !zip_chars_ok {
            return Err(AppError::BadRequest("Zip code is not valid".to_string()));
        }

        Ok(())
    }
}

/// A saved address picked by id, or a new one to create.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressChoice {
    Existing(i32),
    New(AddressParam),
}

impl AddressChoice {
    pub fn from_dto(dto: AddressChoiceDto) -> Self {
        match dto {
            AddressChoiceDto::Existing { address_id } => Self::Existing(address_id),
            AddressChoiceDto::New { address } => Self::New(AddressParam::from_dto(address)),
        }
    }
}
