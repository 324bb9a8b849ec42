use super::*;
use chrono::{Datelike, Utc};

fn card(number: &str) -> NewCardParam {
    NewCardParam {
        cardholder_name: "Ada Lovelace".to_string(),
        card_number: number.to_string(),
        exp_month: 1,
        exp_year: Utc::now().year() + 1,
        cvv: "9876".to_string(),
    }
}

/// Tests saving a card billed to an owned address.
///
/// Expected: card stored with the given billing address
#[tokio::test]
async fn saves_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let address = factory::create_address(db, user.id).await?;

    let created = PaymentService::new(db)
        .create(
            user.id,
            CreatePaymentParam {
                card: card("5500000000000004"),
                billing: AddressChoice::Existing(address.id),
            },
        )
        .await?;

    assert_eq!(created.billing_address_id, address.id);
    assert_eq!(created.into_dto().card_number, "************0004");

    Ok(())
}

/// Tests saving a card billed to another user's address.
///
/// Expected: Err(Forbidden) and no card stored
#[tokio::test]
async fn rejects_foreign_billing_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let foreign = factory::create_address(db, other.id).await?;

    let result = PaymentService::new(db)
        .create(
            user.id,
            CreatePaymentParam {
                card: card("5500000000000004"),
                billing: AddressChoice::Existing(foreign.id),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(CardRepository::new(db).list_by_user(user.id).await?.is_empty());

    Ok(())
}
