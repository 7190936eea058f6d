//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    domain::{
        carts::models::{Cart, CartLineItem},
        checkout::{errors::CheckoutError, models::CheckoutForm},
        identity::IdentityProvider,
        orders::{
            errors::OrderStoreError,
            models::{NewOrder, Order, OrderLineItem, PaymentMethod},
            store::OrderStore,
        },
        pricing::{self, PricingConfig},
    },
    ids::{OrderUuid, UserUuid},
};

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Turn the cart into a persisted order.
    ///
    /// All validation runs before any side effect. The cart is cleared
    /// only once the order store has confirmed the write; a failed
    /// submission leaves the cart exactly as it was so the customer can
    /// retry.
    async fn submit_checkout(
        &self,
        cart: &mut Cart,
        form: CheckoutForm,
    ) -> Result<Order, CheckoutError>;
}

/// Checkout orchestrator over the order store and identity collaborators.
#[derive(Clone)]
pub struct DefaultCheckoutService {
    orders: Arc<dyn OrderStore>,
    identity: Arc<dyn IdentityProvider>,
    pricing: PricingConfig,
}

impl DefaultCheckoutService {
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrderStore>,
        identity: Arc<dyn IdentityProvider>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            orders,
            identity,
            pricing,
        }
    }

    /// Field checks in presentation order, so the customer is told about
    /// the first gap in the form rather than an arbitrary one.
    fn validate(form: &CheckoutForm) -> Result<PaymentMethod, CheckoutError> {
        let contact = &form.contact;

        if is_blank(&contact.email) || is_blank(&contact.first_name) || is_blank(&contact.last_name)
        {
            return Err(CheckoutError::IncompleteContact);
        }

        let shipping = &form.shipping;

        if is_blank(&shipping.address_line) || is_blank(&shipping.city) || is_blank(&shipping.province)
        {
            return Err(CheckoutError::IncompleteAddress);
        }

        if is_blank(&shipping.phone) {
            return Err(CheckoutError::MissingPhone);
        }

        form.payment_method
            .trim()
            .parse::<PaymentMethod>()
            .map_err(|_| CheckoutError::MissingPaymentMethod)
    }

    /// A retried attempt whose first run was durably persisted: hand back
    /// the original order instead of failing or double-charging.
    async fn resume_attempt(
        &self,
        cart: &mut Cart,
        uuid: OrderUuid,
        user: UserUuid,
    ) -> Result<Order, CheckoutError> {
        let existing = self.orders.get(uuid).await?;

        if existing.user_uuid != user {
            return Err(CheckoutError::Storage(OrderStoreError::AlreadyExists));
        }

        let order = Order::try_from(existing)?;
        cart.clear();

        info!(order_uuid = %order.uuid, "resumed already-persisted checkout attempt");

        Ok(order)
    }
}

#[async_trait]
impl CheckoutService for DefaultCheckoutService {
    #[tracing::instrument(
        name = "checkout.service.submit_checkout",
        skip(self, cart, form),
        fields(
            user_uuid = tracing::field::Empty,
            order_uuid = tracing::field::Empty,
            total_amount = tracing::field::Empty,
            shipping_fee = tracing::field::Empty
        ),
        err
    )]
    async fn submit_checkout(
        &self,
        cart: &mut Cart,
        form: CheckoutForm,
    ) -> Result<Order, CheckoutError> {
        let payment_method = Self::validate(&form)?;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let totals = cart.totals();
        let shipping_fee = pricing::shipping_fee(totals.total_price, &self.pricing);

        let user = self.identity.current_user().await?;
        let uuid = form.attempt_uuid.unwrap_or_else(OrderUuid::new);

        let span = Span::current();
        span.record("user_uuid", tracing::field::display(user.uuid));
        span.record("order_uuid", tracing::field::display(uuid));
        span.record("total_amount", totals.total_price);
        span.record("shipping_fee", shipping_fee);

        let order = NewOrder {
            uuid,
            order_number: order_number(uuid),
            user_uuid: user.uuid,
            items: cart.items().map(freeze_line).collect(),
            total_amount: totals.total_price,
            shipping_fee,
            shipping_address: form.shipping,
            payment_method,
            customer_notes: form.customer_notes,
        };

        let record = match self.orders.create(order).await {
            Ok(record) => record,
            Err(OrderStoreError::AlreadyExists) if form.attempt_uuid.is_some() => {
                return self.resume_attempt(cart, uuid, user.uuid).await;
            }
            // The cart is deliberately left untouched here.
            Err(error) => return Err(error.into()),
        };

        let order = Order::try_from(record)?;
        cart.clear();

        info!(order_number = %order.order_number, "created order");

        Ok(order)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Human-facing order code derived from the time-ordered order id.
fn order_number(uuid: OrderUuid) -> String {
    let compact: String = uuid
        .into_uuid()
        .simple()
        .to_string()
        .chars()
        .take(12)
        .collect();

    format!("SO-{}", compact.to_uppercase())
}

/// Freeze a cart line into the order snapshot, capturing the price charged
/// and the total discount granted for the line.
fn freeze_line(line: &CartLineItem) -> OrderLineItem {
    OrderLineItem {
        product_uuid: line.product_uuid,
        name: line.name.clone(),
        image: line.image.clone(),
        unit_price: line.unit_price,
        discount: line.line_discount(),
        quantity: line.quantity,
    }
}
