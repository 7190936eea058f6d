//! End-to-end checkout scenarios over in-memory collaborators.

use jiff::Timestamp;
use testresult::TestResult;

use tindahan::{
    context::AppContext,
    domain::{
        carts::models::Cart,
        checkout::{
            CheckoutError,
            models::{CheckoutForm, ContactInfo},
        },
        identity::CurrentUser,
        orders::{models::ShippingAddress, status::OrderStatus},
        products::models::Product,
    },
    ids::{ProductUuid, UserUuid},
};

fn maria() -> CurrentUser {
    CurrentUser {
        uuid: UserUuid::new(),
        email: "maria@example.ph".to_string(),
        first_name: "Maria".to_string(),
        last_name: "Santos".to_string(),
    }
}

fn product(name: &str, price: u64) -> Product {
    Product {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        image: format!("{name}.webp"),
        price,
        original_price: None,
        created_at: Timestamp::now(),
        updated_at: Timestamp::now(),
    }
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        contact: ContactInfo {
            email: "maria@example.ph".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
        },
        shipping: ShippingAddress {
            recipient_name: "Maria Santos".to_string(),
            phone: "+63 917 555 0101".to_string(),
            address_line: "12 Sampaguita St".to_string(),
            barangay: "Barangay Malinis".to_string(),
            city: "Quezon City".to_string(),
            province: "Metro Manila".to_string(),
            postal_code: Some("1100".to_string()),
        },
        payment_method: "gcash".to_string(),
        customer_notes: None,
        attempt_uuid: None,
    }
}

#[tokio::test]
async fn large_order_ships_free_and_empties_the_cart() -> TestResult {
    // 3 × 5,000.00 clears the 10,000.00 free-shipping threshold.
    let rug = product("Abaca Rug", 500_000);
    let rug_uuid = rug.uuid;
    let ctx = AppContext::in_memory(maria(), vec![rug]).await;

    let mut cart = Cart::new();
    ctx.carts.add_to_cart(&mut cart, rug_uuid, 3).await?;

    assert_eq!(cart.totals().total_price, 1_500_000);

    let order = ctx.checkout.submit_checkout(&mut cart, checkout_form()).await?;

    assert_eq!(order.total_amount, 1_500_000);
    assert_eq!(order.shipping_fee, 0);
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(cart.is_empty());

    // The order shows up in the customer's listing.
    let listed = ctx.orders.list_orders(order.user_uuid, None, None, 0).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(|o| o.order_number.clone()), Some(order.order_number));

    Ok(())
}

#[tokio::test]
async fn small_order_pays_the_flat_fee() -> TestResult {
    let tray = product("Bamboo Tray", 300_000);
    let tray_uuid = tray.uuid;
    let ctx = AppContext::in_memory(maria(), vec![tray]).await;

    let mut cart = Cart::new();
    ctx.carts.add_to_cart(&mut cart, tray_uuid, 1).await?;

    let order = ctx.checkout.submit_checkout(&mut cart, checkout_form()).await?;

    assert_eq!(order.shipping_fee, 10_000);
    assert_eq!(order.amount_due(), 310_000);

    Ok(())
}

#[tokio::test]
async fn snapshot_survives_catalog_price_change() -> TestResult {
    use std::sync::Arc;

    use tindahan::domain::{
        orders::store::InMemoryOrderStore, pricing::PricingConfig,
        products::catalog::InMemoryProductCatalog,
    };

    let catalog = Arc::new(InMemoryProductCatalog::new());
    let lamp = product("Capiz Lamp", 1_250_00);
    let lamp_uuid = lamp.uuid;
    catalog.insert(lamp).await;

    let ctx = AppContext::over(
        catalog.clone(),
        Arc::new(InMemoryOrderStore::new()),
        maria(),
        PricingConfig::default(),
    );

    let mut cart = Cart::new();
    ctx.carts.add_to_cart(&mut cart, lamp_uuid, 2).await?;

    let order = ctx.checkout.submit_checkout(&mut cart, checkout_form()).await?;

    // The catalog price moves after the sale; the snapshot must not.
    catalog.set_price(lamp_uuid, 9_999_00).await;

    let fetched = ctx.orders.get_order(order.user_uuid, order.uuid).await?;
    let line = fetched.items.first().ok_or("line missing")?;

    assert_eq!(line.unit_price, 1_250_00);
    assert_eq!(fetched.total_amount, 2_500_00);

    Ok(())
}

#[tokio::test]
async fn checkout_with_unknown_payment_method_is_rejected() -> TestResult {
    let tray = product("Bamboo Tray", 300_000);
    let tray_uuid = tray.uuid;
    let ctx = AppContext::in_memory(maria(), vec![tray]).await;

    let mut cart = Cart::new();
    ctx.carts.add_to_cart(&mut cart, tray_uuid, 1).await?;

    let mut form = checkout_form();
    form.payment_method = "check".to_string();

    let result = ctx.checkout.submit_checkout(&mut cart, form).await;

    assert!(
        matches!(result, Err(CheckoutError::MissingPaymentMethod)),
        "expected MissingPaymentMethod, got {result:?}"
    );
    assert_eq!(cart.totals().total_items, 1, "cart must be untouched");

    Ok(())
}
