//! App Context

use std::sync::Arc;

use crate::domain::{
    carts::{CartsService, DefaultCartsService},
    checkout::{CheckoutService, DefaultCheckoutService},
    identity::{CurrentUser, FixedIdentityProvider},
    orders::{
        DefaultOrdersService, OrdersService,
        store::{InMemoryOrderStore, OrderStore},
    },
    pricing::PricingConfig,
    products::{ProductCatalog, catalog::InMemoryProductCatalog, models::Product},
    reviews::{DefaultReviewsService, ReviewsService, store::InMemoryReviewStore},
};

/// Wired-up services for one storefront session.
#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub orders: Arc<dyn OrdersService>,
    pub reviews: Arc<dyn ReviewsService>,
}

impl AppContext {
    /// Build a context over in-memory collaborators.
    ///
    /// The catalog is seeded with the given products and the identity
    /// provider is pinned to the given user.
    pub async fn in_memory(user: CurrentUser, products: Vec<Product>) -> Self {
        let catalog = Arc::new(InMemoryProductCatalog::new());

        for product in products {
            catalog.insert(product).await;
        }

        Self::over(
            catalog,
            Arc::new(InMemoryOrderStore::new()),
            user,
            PricingConfig::default(),
        )
    }

    /// Wire the services over explicit collaborators.
    #[must_use]
    pub fn over(
        catalog: Arc<dyn ProductCatalog>,
        order_store: Arc<dyn OrderStore>,
        user: CurrentUser,
        pricing: PricingConfig,
    ) -> Self {
        let identity = Arc::new(FixedIdentityProvider::new(user));
        let review_store = Arc::new(InMemoryReviewStore::new());

        Self {
            carts: Arc::new(DefaultCartsService::new(catalog)),
            checkout: Arc::new(DefaultCheckoutService::new(
                order_store.clone(),
                identity,
                pricing,
            )),
            orders: Arc::new(DefaultOrdersService::new(order_store.clone())),
            reviews: Arc::new(DefaultReviewsService::new(review_store, order_store)),
        }
    }
}
