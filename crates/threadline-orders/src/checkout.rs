//! The checkout orchestrator.

use std::sync::Arc;

use rust_decimal::Decimal;
use threadline_core::clock::Clock;
use threadline_core::error::DomainError;
use threadline_core::notify::{ConfirmationSender, OrderSummary};
use threadline_core::order::{Order, OrderItem, OrderStatus};
use threadline_core::repository::{OrderRepository, ProductRepository, UserRepository};
use tracing::{info, warn};
use uuid::Uuid;

use crate::view::{OrderView, expand_order};

/// Convert the user's cart into a persisted order and empty the cart.
///
/// The order insert and the cart clear are two independent writes with no
/// transaction around them. A failure after the insert leaves the order in
/// place with the cart still populated — a known re-submission window that
/// is preserved for behavioral parity with the system this replaces.
/// Hardening it is a separate, explicit task.
///
/// The confirmation send is spawned after the order exists and never affects
/// the result.
///
/// # Errors
///
/// `NotFound` if the user does not exist or a cart line's product has been
/// deleted, `Validation` if the cart is empty, `Unexpected` on datastore
/// failure.
pub async fn place_order(
    users: &dyn UserRepository,
    products: &dyn ProductRepository,
    orders: &dyn OrderRepository,
    clock: &dyn Clock,
    sender: &Arc<dyn ConfirmationSender>,
    user_id: Uuid,
) -> Result<OrderView, DomainError> {
    let user = users
        .find_by_id(user_id)
        .await?
        .ok_or(DomainError::NotFound("User"))?;
    let cart = threadline_cart::resolve_cart(products, &user.cart).await?;

    if cart.is_empty() {
        return Err(DomainError::validation("Cart is empty"));
    }

    // Snapshot product name and price as they are right now; later catalog
    // changes must not affect this order. A line whose product is gone has
    // nothing to snapshot, so checkout is the one place a stale line fails.
    let items: Vec<OrderItem> = cart
        .iter()
        .map(|line| {
            let product = line
                .product
                .as_ref()
                .ok_or(DomainError::NotFound("Product"))?;
            Ok(OrderItem {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity: line.quantity,
                size: line.size,
            })
        })
        .collect::<Result<_, DomainError>>()?;
    let total_price: Decimal = items.iter().map(OrderItem::line_total).sum();

    let order = Order {
        id: Uuid::new_v4(),
        user_id: user.id,
        items,
        total_price,
        order_date: clock.now(),
        status: OrderStatus::Pending,
    };
    orders.insert(&order).await?;

    info!(order_id = %order.id, user_id = %user.id, total = %order.total_price, "order placed");

    // Not transactional with the insert above.
    users.save_cart(user.id, &[]).await?;

    let summary = OrderSummary::from_order(&order);
    let email = user.email.clone();
    let sender = Arc::clone(sender);
    tokio::spawn(async move {
        if let Err(err) = sender.send(&email, &summary).await {
            warn!(order_id = %summary.order_id, %err, "order confirmation not delivered");
        }
    });

    expand_order(products, &user, order).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use threadline_cart::{AddItem, add_item};
    use threadline_core::product::Size;
    use threadline_test_support::{
        FailingSender, FixedClock, InMemoryOrders, InMemoryProducts, InMemoryUsers, RecordingSender,
        demo_product, user_named,
    };

    struct Harness {
        users: InMemoryUsers,
        products: InMemoryProducts,
        orders: InMemoryOrders,
        clock: FixedClock,
        sender: Arc<dyn ConfirmationSender>,
    }

    impl Harness {
        fn new(sender: Arc<dyn ConfirmationSender>) -> Self {
            Self {
                users: InMemoryUsers::new(),
                products: InMemoryProducts::new(),
                orders: InMemoryOrders::new(),
                clock: FixedClock::default_instant(),
                sender,
            }
        }

        fn recording() -> (Self, Arc<RecordingSender>) {
            let recorder = Arc::new(RecordingSender::new());
            (Self::new(recorder.clone()), recorder)
        }

        async fn place(&self, user_id: Uuid) -> Result<OrderView, DomainError> {
            place_order(
                &self.users,
                &self.products,
                &self.orders,
                &self.clock,
                &self.sender,
                user_id,
            )
            .await
        }

        async fn fill_cart(&self, user_id: Uuid, product_id: Uuid, size: Size, quantity: i32) {
            add_item(
                &self.users,
                &self.products,
                Some(user_id),
                AddItem {
                    product_id,
                    size,
                    quantity,
                },
            )
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn test_checkout_snapshots_cart_and_totals() {
        let (h, _) = Harness::recording();
        let shirt = demo_product("Classic Cotton T-Shirt", 2999);
        let user = user_named("Ada");
        h.products.insert(shirt.clone());
        h.users.insert(user.clone());
        h.fill_cart(user.id, shirt.id, Size::M, 2).await;
        h.fill_cart(user.id, shirt.id, Size::M, 1).await;

        let view = h.place(user.id).await.unwrap();

        // 3 × 29.99
        assert_eq!(view.total_price, Decimal::new(8997, 2));
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 3);
        assert_eq!(view.items[0].name, "Classic Cotton T-Shirt");
        assert_eq!(view.status, OrderStatus::Pending);
        assert_eq!(view.order_date, h.clock.0);
        assert_eq!(view.user.email, user.email);
    }

    #[tokio::test]
    async fn test_checkout_empties_the_cart() {
        let (h, _) = Harness::recording();
        let shirt = demo_product("Classic Cotton T-Shirt", 2999);
        let user = user_named("Ada");
        h.products.insert(shirt.clone());
        h.users.insert(user.clone());
        h.fill_cart(user.id, shirt.id, Size::M, 2).await;

        h.place(user.id).await.unwrap();

        assert!(h.users.cart_of(user.id).is_empty());
    }

    #[tokio::test]
    async fn test_checkout_total_is_immune_to_later_price_changes() {
        let (h, _) = Harness::recording();
        let shirt = demo_product("Classic Cotton T-Shirt", 2999);
        let user = user_named("Ada");
        h.products.insert(shirt.clone());
        h.users.insert(user.clone());
        h.fill_cart(user.id, shirt.id, Size::M, 2).await;

        let view = h.place(user.id).await.unwrap();

        // Wipe the catalog entirely; the persisted snapshot must not move.
        h.products.delete_all().await.unwrap();
        let stored = h.orders.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].total_price, view.total_price);
        assert_eq!(stored[0].items[0].price, Decimal::new(2999, 2));
    }

    #[tokio::test]
    async fn test_checkout_with_empty_cart_is_rejected_without_an_order() {
        let (h, _) = Harness::recording();
        let user = user_named("Ada");
        h.users.insert(user.clone());

        let err = h.place(user.id).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Cart is empty");
        assert!(h.orders.all().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_with_a_stale_cart_line_creates_no_order() {
        let (h, _) = Harness::recording();
        let shirt = demo_product("Classic Cotton T-Shirt", 2999);
        let user = user_named("Ada");
        h.products.insert(shirt.clone());
        h.users.insert(user.clone());
        h.fill_cart(user.id, shirt.id, Size::M, 2).await;
        h.products.delete_all().await.unwrap();

        let err = h.place(user.id).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound("Product")));
        assert!(h.orders.all().is_empty());
        assert_eq!(h.users.cart_of(user.id).len(), 1);
    }

    #[tokio::test]
    async fn test_checkout_for_unknown_user_creates_no_order() {
        let (h, _) = Harness::recording();

        let err = h.place(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound("User")));
        assert!(h.orders.all().is_empty());
    }

    #[tokio::test]
    async fn test_order_insert_failure_leaves_cart_untouched() {
        let (h, _) = Harness::recording();
        let shirt = demo_product("Classic Cotton T-Shirt", 2999);
        let user = user_named("Ada");
        h.products.insert(shirt.clone());
        h.users.insert(user.clone());
        h.fill_cart(user.id, shirt.id, Size::M, 2).await;
        h.orders.fail_next_insert();

        let err = h.place(user.id).await.unwrap_err();

        assert!(matches!(err, DomainError::Unexpected(_)));
        assert!(h.orders.all().is_empty());
        assert_eq!(h.users.cart_of(user.id).len(), 1);
    }

    #[tokio::test]
    async fn test_cart_clear_failure_leaves_order_and_cart_both_present() {
        // The documented non-transactional window: the order insert succeeds,
        // the cart clear fails, and nothing repairs the divergence.
        let (h, _) = Harness::recording();
        let shirt = demo_product("Classic Cotton T-Shirt", 2999);
        let user = user_named("Ada");
        h.products.insert(shirt.clone());
        h.users.insert(user.clone());
        h.fill_cart(user.id, shirt.id, Size::M, 2).await;
        h.users.fail_next_save_cart();

        let err = h.place(user.id).await.unwrap_err();

        assert!(matches!(err, DomainError::Unexpected(_)));
        assert_eq!(h.orders.all().len(), 1);
        assert_eq!(h.users.cart_of(user.id).len(), 1);
    }

    #[tokio::test]
    async fn test_confirmation_is_sent_with_the_order_summary() {
        let (h, recorder) = Harness::recording();
        let shirt = demo_product("Classic Cotton T-Shirt", 2999);
        let user = user_named("Ada");
        h.products.insert(shirt.clone());
        h.users.insert(user.clone());
        h.fill_cart(user.id, shirt.id, Size::M, 3).await;

        let view = h.place(user.id).await.unwrap();

        // The send is spawned; give it a moment to land.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let sent = recorder.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, user.email);
        assert_eq!(sent[0].1.order_id, view.id);
        assert_eq!(sent[0].1.total_price, view.total_price);
        assert_eq!(sent[0].1.lines.len(), 1);
    }

    #[tokio::test]
    async fn test_confirmation_failure_does_not_fail_checkout() {
        let h = Harness::new(Arc::new(FailingSender));
        let shirt = demo_product("Classic Cotton T-Shirt", 2999);
        let user = user_named("Ada");
        h.products.insert(shirt.clone());
        h.users.insert(user.clone());
        h.fill_cart(user.id, shirt.id, Size::M, 1).await;

        let view = h.place(user.id).await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(h.orders.all().len(), 1);
        assert!(h.users.cart_of(user.id).is_empty());
        assert_eq!(view.total_price, Decimal::new(2999, 2));
    }
}
