use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::order::{Order, OrderLine};
use crate::domain::product::{Product, ProductId};
use crate::errors::{EngineError, EngineResult, Entity};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Per-session shopping cart. Lines keep insertion order and never hold a
/// zero quantity; an empty cart is a valid, reportable state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartViewLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub subtotal: Decimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartView<'a> {
    pub lines: Vec<CartViewLine<'a>>,
    pub total: Decimal,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds one unit of the product, creating the line at quantity 1 on
    /// first add. Stock is informational only: it is neither checked here
    /// nor decremented by checkout.
    pub fn add_item<'a>(
        &mut self,
        catalog: &'a Catalog,
        product_id: &ProductId,
    ) -> EngineResult<&'a Product> {
        let product =
            catalog.product(product_id).ok_or(EngineError::NotFound(Entity::Product))?;

        match self.lines.iter_mut().find(|line| &line.product_id == product_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { product_id: product_id.clone(), quantity: 1 }),
        }
        Ok(product)
    }

    /// Resolves every line against the catalog. Lines whose product vanished
    /// from the catalog cannot occur with the fixed seed; treat one as
    /// catalog corruption rather than a business error.
    pub fn view<'a>(&self, catalog: &'a Catalog) -> CartView<'a> {
        let lines: Vec<CartViewLine<'a>> = self
            .lines
            .iter()
            .filter_map(|line| catalog.product(&line.product_id).map(|product| CartViewLine {
                product,
                quantity: line.quantity,
                subtotal: product.unit_price * Decimal::from(line.quantity),
            }))
            .collect();

        let total = lines.iter().map(|line| line.subtotal).sum();
        CartView { lines, total }
    }

    /// Idempotent: clearing an already-empty cart is a successful no-op.
    /// Returns whether anything was removed, so replies can differ.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.lines.is_empty();
        self.lines.clear();
        had_items
    }

    /// Atomically snapshots the cart into an order, appends it to the
    /// history, and empties the cart. Nothing changes on `EmptyCart`.
    pub fn checkout(
        &mut self,
        catalog: &Catalog,
        history: &mut Vec<Order>,
        now: DateTime<Utc>,
    ) -> EngineResult<Order> {
        if self.lines.is_empty() {
            return Err(EngineError::EmptyCart);
        }

        let view = self.view(catalog);
        let order = Order {
            lines: view
                .lines
                .iter()
                .map(|line| OrderLine {
                    product_id: line.product.id.clone(),
                    product_name: line.product.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.product.unit_price,
                })
                .collect(),
            total: view.total,
            placed_at: now,
        };

        history.push(order.clone());
        self.lines.clear();
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use crate::catalog::seed;
    use crate::domain::product::ProductId;
    use crate::errors::{EngineError, Entity};

    use super::Cart;

    fn id(raw: &str) -> ProductId {
        ProductId(raw.to_owned())
    }

    #[test]
    fn add_unknown_product_is_not_found() {
        let catalog = seed();
        let mut cart = Cart::default();
        assert_eq!(
            cart.add_item(&catalog, &id("99")),
            Err(EngineError::NotFound(Entity::Product))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn repeated_adds_increment_quantity() {
        let catalog = seed();
        let mut cart = Cart::default();
        cart.add_item(&catalog, &id("1")).unwrap();
        cart.add_item(&catalog, &id("1")).unwrap();
        cart.add_item(&catalog, &id("3")).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn view_total_is_sum_of_line_subtotals_to_the_cent() {
        let catalog = seed();
        let mut cart = Cart::default();
        cart.add_item(&catalog, &id("1")).unwrap();
        cart.add_item(&catalog, &id("1")).unwrap();
        cart.add_item(&catalog, &id("4")).unwrap();

        let view = cart.view(&catalog);
        // 2 * 1299.99 + 79.99
        assert_eq!(view.total, Decimal::new(2679_97, 2));
        assert_eq!(view.lines[0].subtotal, Decimal::new(2599_98, 2));
    }

    #[test]
    fn every_seeded_product_prices_consistently() {
        let catalog = seed();
        for product in catalog.products() {
            let mut cart = Cart::default();
            cart.add_item(&catalog, &product.id).unwrap();
            cart.add_item(&catalog, &product.id).unwrap();
            let view = cart.view(&catalog);
            assert_eq!(view.total, product.unit_price * Decimal::from(2u32), "{}", product.name);
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let catalog = seed();
        let mut cart = Cart::default();
        assert!(!cart.clear());

        cart.add_item(&catalog, &id("2")).unwrap();
        assert!(cart.clear());
        assert!(!cart.clear());
    }

    #[test]
    fn checkout_on_empty_cart_never_touches_history() {
        let catalog = seed();
        let mut cart = Cart::default();
        let mut history = Vec::new();

        assert_eq!(cart.checkout(&catalog, &mut history, Utc::now()), Err(EngineError::EmptyCart));
        assert!(history.is_empty());
    }

    #[test]
    fn checkout_snapshots_clears_and_appends() {
        let catalog = seed();
        let mut cart = Cart::default();
        let mut history = Vec::new();

        cart.add_item(&catalog, &id("5")).unwrap();
        cart.add_item(&catalog, &id("5")).unwrap();

        let now = Utc::now();
        let order = cart.checkout(&catalog, &mut history, now).unwrap();

        assert_eq!(order.total, Decimal::new(399_98, 2));
        assert_eq!(order.placed_at, now);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 2);

        assert!(cart.is_empty());
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], order);

        // A second checkout sees the cleared cart, not stale lines.
        assert_eq!(cart.checkout(&catalog, &mut history, now), Err(EngineError::EmptyCart));
        assert_eq!(history.len(), 1);
    }
}
