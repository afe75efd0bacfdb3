use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flora_catalog::Product;
use flora_core::{Aggregate, AggregateRoot, DomainError, Price, ProductId, SessionId};
use flora_events::Event;

/// A cart line: the product as it was when first added, plus a quantity.
///
/// While a line exists its quantity is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    product: Product,
    quantity: u32,
}

impl CartItem {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id_typed()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> Price {
        self.product.price().times(self.quantity)
    }
}

/// Aggregate root: Cart.
///
/// Owned by one storefront session and identified by that session's id. Lines are
/// unique by product id and keep the order in which products were first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: SessionId,
    items: Vec<CartItem>,
    version: u64,
}

impl Cart {
    pub fn empty(id: SessionId) -> Self {
        Self {
            id,
            items: Vec::new(),
            version: 0,
        }
    }

    /// Rebuild a cart by applying recorded events in order.
    pub fn replay<'a>(id: SessionId, events: impl IntoIterator<Item = &'a CartEvent>) -> Self {
        let mut cart = Self::empty(id);
        for event in events {
            cart.apply(event);
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of line totals. Recomputed on every call.
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities (the cart badge).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id() == product_id)
    }
}

impl AggregateRoot for Cart {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddToCart. Carries the whole product so the line keeps a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveFromCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromCart {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: UpdateQuantity.
///
/// `quantity` is signed because it usually comes from user input: negative values
/// are rejected, 0 removes the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuantity {
    pub product_id: ProductId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddToCart(AddToCart),
    RemoveFromCart(RemoveFromCart),
    UpdateQuantity(UpdateQuantity),
}

/// Event: ItemAdded (new line with quantity 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityIncremented (product added again).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityIncremented {
    pub product_id: ProductId,
    /// Quantity after the increment.
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityChanged (explicit quantity set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityIncremented(QuantityIncremented),
    QuantityChanged(QuantityChanged),
    ItemRemoved(ItemRemoved),
}

impl CartEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            CartEvent::ItemAdded(e) => e.product.id_typed(),
            CartEvent::QuantityIncremented(e) => e.product_id,
            CartEvent::QuantityChanged(e) => e.product_id,
            CartEvent::ItemRemoved(e) => e.product_id,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::QuantityIncremented(_) => "cart.item.incremented",
            CartEvent::QuantityChanged(_) => "cart.item.quantity_changed",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantityIncremented(e) => e.occurred_at,
            CartEvent::QuantityChanged(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => match self.position(e.product.id_typed()) {
                Some(idx) => self.items[idx].quantity = self.items[idx].quantity.saturating_add(1),
                None => self.items.push(CartItem {
                    product: e.product.clone(),
                    quantity: 1,
                }),
            },
            CartEvent::QuantityIncremented(QuantityIncremented {
                product_id,
                quantity,
                ..
            })
            | CartEvent::QuantityChanged(QuantityChanged {
                product_id,
                quantity,
                ..
            }) => {
                if let Some(idx) = self.position(*product_id) {
                    self.items[idx].quantity = *quantity;
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.items.retain(|i| i.product_id() != e.product_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddToCart(cmd) => self.handle_add(cmd),
            CartCommand::RemoveFromCart(cmd) => Ok(self.handle_remove(cmd.product_id, cmd.occurred_at)),
            CartCommand::UpdateQuantity(cmd) => self.handle_update_quantity(cmd),
        }
    }
}

impl Cart {
    fn handle_add(&self, cmd: &AddToCart) -> Result<Vec<CartEvent>, DomainError> {
        let product_id = cmd.product.id_typed();

        match self.get(product_id) {
            Some(item) => {
                let quantity = item.quantity.checked_add(1).ok_or_else(|| {
                    DomainError::invariant(format!("quantity of product {product_id} overflowed"))
                })?;
                Ok(vec![CartEvent::QuantityIncremented(QuantityIncremented {
                    product_id,
                    quantity,
                    occurred_at: cmd.occurred_at,
                })])
            }
            None => Ok(vec![CartEvent::ItemAdded(ItemAdded {
                product: cmd.product.clone(),
                occurred_at: cmd.occurred_at,
            })]),
        }
    }

    fn handle_remove(&self, product_id: ProductId, occurred_at: DateTime<Utc>) -> Vec<CartEvent> {
        if !self.contains(product_id) {
            return Vec::new();
        }

        vec![CartEvent::ItemRemoved(ItemRemoved {
            product_id,
            occurred_at,
        })]
    }

    fn handle_update_quantity(&self, cmd: &UpdateQuantity) -> Result<Vec<CartEvent>, DomainError> {
        if cmd.quantity < 0 {
            return Err(DomainError::validation(format!(
                "quantity must not be negative (got {})",
                cmd.quantity
            )));
        }

        if cmd.quantity == 0 {
            return Ok(self.handle_remove(cmd.product_id, cmd.occurred_at));
        }

        let quantity = u32::try_from(cmd.quantity).map_err(|_| {
            DomainError::validation(format!("quantity {} is too large", cmd.quantity))
        })?;

        match self.get(cmd.product_id) {
            Some(item) if item.quantity != quantity => {
                Ok(vec![CartEvent::QuantityChanged(QuantityChanged {
                    product_id: cmd.product_id,
                    quantity,
                    occurred_at: cmd.occurred_at,
                })])
            }
            // Same quantity, or nothing to update.
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flora_catalog::{Category, sample_bouquets};

    fn test_session_id() -> SessionId {
        SessionId::new()
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn product(id: u32, price: u64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("bouquet {id}"),
            Price::new(price),
            format!("https://example.test/{id}.jpg"),
            Category::new("test"),
        )
    }

    fn add(cart: &mut Cart, product: &Product) -> Vec<CartEvent> {
        cart.execute(&CartCommand::AddToCart(AddToCart {
            product: product.clone(),
            occurred_at: test_time(),
        }))
        .unwrap()
    }

    fn remove(cart: &mut Cart, id: u32) -> Vec<CartEvent> {
        cart.execute(&CartCommand::RemoveFromCart(RemoveFromCart {
            product_id: ProductId::new(id),
            occurred_at: test_time(),
        }))
        .unwrap()
    }

    fn update(cart: &mut Cart, id: u32, quantity: i64) -> Result<Vec<CartEvent>, DomainError> {
        cart.execute(&CartCommand::UpdateQuantity(UpdateQuantity {
            product_id: ProductId::new(id),
            quantity,
            occurred_at: test_time(),
        }))
    }

    fn quantities(cart: &Cart) -> Vec<(u32, u32)> {
        cart.items()
            .iter()
            .map(|i| (i.product_id().get(), i.quantity()))
            .collect()
    }

    #[test]
    fn first_add_emits_item_added() {
        let cart = Cart::empty(test_session_id());
        let p = product(1, 3500);

        let events = cart
            .handle(&CartCommand::AddToCart(AddToCart {
                product: p.clone(),
                occurred_at: test_time(),
            }))
            .unwrap();

        assert_eq!(events.len(), 1);
        match &events[0] {
            CartEvent::ItemAdded(e) => assert_eq!(e.product, p),
            _ => panic!("Expected ItemAdded event"),
        }
    }

    #[test]
    fn adding_twice_increments_and_doubles_the_total() {
        let mut cart = Cart::empty(test_session_id());
        let p = product(1, 3500);

        add(&mut cart, &p);
        let events = add(&mut cart, &p);

        match &events[0] {
            CartEvent::QuantityIncremented(e) => assert_eq!(e.quantity, 2),
            _ => panic!("Expected QuantityIncremented event"),
        }
        assert_eq!(quantities(&cart), vec![(1, 2)]);
        assert_eq!(cart.total_price(), Price::new(7000));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn set_quantity_to_zero_empties_the_cart() {
        let mut cart = Cart::empty(test_session_id());
        add(&mut cart, &product(2, 5500));

        let events = update(&mut cart, 2, 0).unwrap();

        assert!(matches!(events.as_slice(), [CartEvent::ItemRemoved(_)]));
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn removing_an_unknown_id_is_a_no_op() {
        let mut cart = Cart::empty(test_session_id());
        add(&mut cart, &product(1, 3500));
        let before = cart.clone();

        let events = remove(&mut cart, 42);

        assert!(events.is_empty());
        assert_eq!(cart, before);
    }

    #[test]
    fn update_sets_exact_quantity() {
        let mut cart = Cart::empty(test_session_id());
        add(&mut cart, &product(1, 100));
        add(&mut cart, &product(1, 100));

        update(&mut cart, 1, 5).unwrap();
        assert_eq!(quantities(&cart), vec![(1, 5)]);

        update(&mut cart, 1, 1).unwrap();
        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn update_of_absent_line_does_nothing() {
        let mut cart = Cart::empty(test_session_id());
        let events = update(&mut cart, 9, 3).unwrap();
        assert!(events.is_empty());
        assert!(cart.is_empty());
        assert_eq!(cart.version(), 0);
    }

    #[test]
    fn update_to_same_quantity_emits_nothing() {
        let mut cart = Cart::empty(test_session_id());
        add(&mut cart, &product(1, 100));
        let version = cart.version();

        assert!(update(&mut cart, 1, 1).unwrap().is_empty());
        assert_eq!(cart.version(), version);
    }

    #[test]
    fn negative_quantity_is_rejected_without_side_effects() {
        let mut cart = Cart::empty(test_session_id());
        add(&mut cart, &product(1, 100));
        let before = cart.clone();

        let err = update(&mut cart, 1, -1).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("must not be negative") => {}
            _ => panic!("Expected Validation error for negative quantity"),
        }
        assert_eq!(cart, before);
    }

    #[test]
    fn oversized_quantity_is_rejected() {
        let mut cart = Cart::empty(test_session_id());
        add(&mut cart, &product(1, 100));
        let err = update(&mut cart, 1, i64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn increment_overflow_is_an_invariant_violation() {
        let mut cart = Cart::empty(test_session_id());
        let p = product(1, 1);
        add(&mut cart, &p);
        update(&mut cart, 1, i64::from(u32::MAX)).unwrap();

        let err = cart
            .handle(&CartCommand::AddToCart(AddToCart {
                product: p,
                occurred_at: test_time(),
            }))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn lines_keep_insertion_order_across_updates() {
        let mut cart = Cart::empty(test_session_id());
        for id in [3, 1, 2] {
            add(&mut cart, &product(id, 100));
        }
        update(&mut cart, 1, 7).unwrap();
        add(&mut cart, &product(3, 100));

        assert_eq!(quantities(&cart), vec![(3, 2), (1, 7), (2, 1)]);

        remove(&mut cart, 1);
        assert_eq!(quantities(&cart), vec![(3, 2), (2, 1)]);
    }

    #[test]
    fn line_keeps_the_product_snapshot_from_add_time() {
        let mut cart = Cart::empty(test_session_id());
        add(&mut cart, &product(1, 3500));

        // Same id, different price: the existing line is only incremented.
        add(&mut cart, &product(1, 9999));

        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.product().price(), Price::new(3500));
        assert_eq!(cart.total_price(), Price::new(7000));
    }

    #[test]
    fn total_over_sample_catalog() {
        let catalog = sample_bouquets();
        let mut cart = Cart::empty(test_session_id());
        for p in catalog.products() {
            add(&mut cart, p);
        }
        assert_eq!(cart.total_price(), Price::new(3500 + 5500 + 2800 + 4200 + 3800 + 6200));
        assert_eq!(cart.item_count(), 6);
        assert_eq!(cart.len(), 6);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let mut cart = Cart::empty(test_session_id());
        add(&mut cart, &product(1, 100));
        let before = cart.clone();

        let cmd = CartCommand::UpdateQuantity(UpdateQuantity {
            product_id: ProductId::new(1),
            quantity: 4,
            occurred_at: test_time(),
        });
        let events1 = cart.handle(&cmd).unwrap();
        let events2 = cart.handle(&cmd).unwrap();

        assert_eq!(cart, before);
        assert_eq!(events1, events2);
    }

    #[test]
    fn replay_reproduces_state_and_version() {
        let mut cart = Cart::empty(test_session_id());
        let mut history = Vec::new();
        history.extend(add(&mut cart, &product(1, 100)));
        history.extend(add(&mut cart, &product(2, 200)));
        history.extend(add(&mut cart, &product(1, 100)));
        history.extend(update(&mut cart, 2, 4).unwrap());
        history.extend(remove(&mut cart, 1));

        let rebuilt = Cart::replay(*cart.id(), &history);

        assert_eq!(rebuilt, cart);
        assert_eq!(rebuilt.version(), 5);
    }

    #[test]
    fn event_types_are_stable() {
        let events = [
            CartEvent::ItemAdded(ItemAdded {
                product: product(1, 1),
                occurred_at: test_time(),
            }),
            CartEvent::QuantityIncremented(QuantityIncremented {
                product_id: ProductId::new(1),
                quantity: 2,
                occurred_at: test_time(),
            }),
            CartEvent::QuantityChanged(QuantityChanged {
                product_id: ProductId::new(1),
                quantity: 3,
                occurred_at: test_time(),
            }),
            CartEvent::ItemRemoved(ItemRemoved {
                product_id: ProductId::new(1),
                occurred_at: test_time(),
            }),
        ];
        let types: Vec<_> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            vec![
                "cart.item.added",
                "cart.item.incremented",
                "cart.item.quantity_changed",
                "cart.item.removed"
            ]
        );
        assert!(events.iter().all(|e| e.product_id() == ProductId::new(1)));
    }

    #[test]
    fn cart_item_serializes_flat() {
        let mut cart = Cart::empty(test_session_id());
        add(&mut cart, &product(1, 3500));
        add(&mut cart, &product(1, 3500));

        let json = serde_json::to_value(&cart.items()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], 3500);
        assert_eq!(json["quantity"], 2);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u32),
            Remove(u32),
            Update(u32, i64),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u32..6).prop_map(Op::Add),
                (0u32..6).prop_map(Op::Remove),
                (0u32..6, -2i64..6).prop_map(|(id, q)| Op::Update(id, q)),
            ]
        }

        fn price_of(id: u32) -> u64 {
            u64::from(id) * 1000 + 500
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: N adds of one product leave one line with quantity N.
            #[test]
            fn repeated_adds_count_up(n in 1usize..50) {
                let mut cart = Cart::empty(test_session_id());
                let p = product(7, 1234);
                for _ in 0..n {
                    add(&mut cart, &p);
                }
                prop_assert_eq!(cart.len(), 1);
                prop_assert_eq!(cart.get(ProductId::new(7)).map(CartItem::quantity), Some(n as u32));
                prop_assert_eq!(cart.total_price(), Price::new(1234 * n as u64));
            }

            /// Property: after any op sequence, lines are unique, positive, and totals add up;
            /// setting quantity 0 always removes the line.
            #[test]
            fn invariants_hold_for_any_op_sequence(ops in prop::collection::vec(op(), 0..60)) {
                let mut cart = Cart::empty(test_session_id());
                let mut history = Vec::new();

                for op in ops {
                    match op {
                        Op::Add(id) => history.extend(add(&mut cart, &product(id, price_of(id)))),
                        Op::Remove(id) => {
                            history.extend(remove(&mut cart, id));
                            prop_assert!(!cart.contains(ProductId::new(id)));
                        }
                        Op::Update(id, q) => {
                            let before = cart.clone();
                            match update(&mut cart, id, q) {
                                Ok(events) => history.extend(events),
                                Err(_) => {
                                    prop_assert!(q < 0);
                                    prop_assert_eq!(&cart, &before);
                                }
                            }
                            if q == 0 {
                                prop_assert!(!cart.contains(ProductId::new(id)));
                            }
                        }
                    }

                    let mut ids: Vec<u32> = cart.items().iter().map(|i| i.product_id().get()).collect();
                    let count = ids.len();
                    ids.sort_unstable();
                    ids.dedup();
                    prop_assert_eq!(ids.len(), count);
                    prop_assert!(cart.items().iter().all(|i| i.quantity() >= 1));

                    let expected: u64 = cart
                        .items()
                        .iter()
                        .map(|i| i.product().price().amount() * u64::from(i.quantity()))
                        .sum();
                    prop_assert_eq!(cart.total_price(), Price::new(expected));
                }

                prop_assert_eq!(Cart::replay(*cart.id(), &history), cart);
            }
        }
    }
}
