//! The storefront client.
//!
//! [`StoreClient`] owns the cart, the catalog, the current filter criteria,
//! the toast stack and the deferred-effect queue. The presentation layer
//! constructs one client, forwards user actions to it, renders the
//! projections it exposes, and advances its clock.

use std::collections::HashMap;
use std::time::Duration;

use tracing::instrument;

use navjyoti_core::Price;

use crate::cart::{Cart, CartBadge, CartItem, CartManager, CartSummary, QuantityChange};
use crate::catalog::{Catalog, CategoryOption, ProductCard};
use crate::checkout::{
    CheckoutError, CheckoutForm, CheckoutHandoff, FormValidation, validate_checkout_form,
};
use crate::config::TimingConfig;
use crate::effects::{Effect, EffectQueue};
use crate::error::{self, AppError, Result};
use crate::filter::{self, CategoryFilter, FilterCriteria, FilterOutcome, ResultCount, SortKey};
use crate::notify::{Notifier, Toast, ToastId, ToastKind};
use crate::store::KeyValueStore;

/// Label shown on a button while its action is in flight.
pub const LOADING_LABEL: &str = "Loading...";

/// A user action routed to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddToCart {
        name: String,
        unit_price: Price,
        quantity: u32,
    },
    RemoveFromCart {
        index: usize,
    },
    SetQuantity {
        index: usize,
        quantity: i64,
    },
    ClearCart,
    Checkout,
}

/// What a dispatched action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// The cart after the action.
    Cart(CartSummary),
    /// The checkout hand-off.
    Checkout(CheckoutHandoff),
}

/// A button currently in its loading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingButton {
    /// Label restored when loading ends.
    pub original_label: String,
}

/// Storefront client state.
#[derive(Debug)]
pub struct StoreClient<S> {
    timing: TimingConfig,
    cart: CartManager<S>,
    catalog: Catalog,
    criteria: FilterCriteria,
    outcome: FilterOutcome,
    revealed: Vec<bool>,
    notifier: Notifier,
    effects: EffectQueue,
    loading: HashMap<String, LoadingButton>,
}

impl<S: KeyValueStore> StoreClient<S> {
    /// Create a client, restoring the cart from `store`.
    pub fn new(store: S, timing: TimingConfig) -> Self {
        let cart = CartManager::new(store);
        tracing::info!(
            lines = cart.cart().len(),
            items = cart.cart().total_quantity(),
            "Storefront client started"
        );
        Self {
            timing,
            cart,
            catalog: Catalog::default(),
            criteria: FilterCriteria::default(),
            outcome: FilterOutcome {
                order: Vec::new(),
                total: 0,
            },
            revealed: Vec::new(),
            notifier: Notifier::new(),
            effects: EffectQueue::new(),
            loading: HashMap::new(),
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    /// The durable store backing the cart.
    #[must_use]
    pub const fn store(&self) -> &S {
        self.cart.store()
    }

    /// Line and grand totals for the cart page.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.cart.cart().summary()
    }

    /// Cart count badge.
    #[must_use]
    pub fn badge(&self) -> CartBadge {
        self.cart.cart().badge()
    }

    /// Add units of a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`](crate::cart::CartError::InvalidQuantity) when `quantity` is zero; an
    /// error toast is shown and the cart is unchanged.
    #[instrument(skip(self, unit_price), fields(price = %unit_price))]
    pub fn add_item(&mut self, name: &str, unit_price: Price, quantity: u32) -> Result<CartBadge> {
        if let Err(e) = self.cart.add_item(name, unit_price, quantity) {
            self.notify("Please choose a quantity of at least 1", ToastKind::Error);
            return Err(reported(e));
        }

        error::add_breadcrumb("cart", "Added to cart", Some(&[("name", name)]));
        self.notify(format!("{name} added to cart!"), ToastKind::Success);
        Ok(self.badge())
    }

    /// Remove the cart line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`](crate::cart::CartError::IndexOutOfRange) if there is no such line. The
    /// cart is unchanged and no toast is shown.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, index: usize) -> Result<CartItem> {
        let removed = self.cart.remove_item(index).map_err(reported)?;
        error::add_breadcrumb("cart", "Removed from cart", Some(&[("name", removed.name.as_str())]));
        self.notify("Item removed from cart", ToastKind::Info);
        Ok(removed)
    }

    /// Change the quantity of the cart line at `index`.
    ///
    /// Zero or negative quantities remove the line exactly like
    /// [`StoreClient::remove_item`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`](crate::cart::CartError::IndexOutOfRange) if there is no such line.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<QuantityChange> {
        if quantity <= 0 {
            return self.remove_item(index).map(QuantityChange::Removed);
        }
        self.cart
            .set_quantity(index, quantity)
            .map_err(reported)
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cart.clear();
        error::add_breadcrumb("cart", "Cleared cart", None);
        self.notify("Cart cleared", ToastKind::Info);
    }

    /// Route an action to the matching cart operation.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation.
    pub fn dispatch(&mut self, action: Action) -> Result<Dispatched> {
        tracing::debug!(?action, "Dispatching action");
        match action {
            Action::AddToCart {
                name,
                unit_price,
                quantity,
            } => {
                self.add_item(&name, unit_price, quantity)?;
            }
            Action::RemoveFromCart { index } => {
                self.remove_item(index)?;
            }
            Action::SetQuantity { index, quantity } => {
                self.set_quantity(index, quantity)?;
            }
            Action::ClearCart => self.clear(),
            Action::Checkout => return self.proceed_to_checkout().map(Dispatched::Checkout),
        }
        Ok(Dispatched::Cart(self.summary()))
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Replace the catalog with freshly rendered product cards.
    ///
    /// Every product is shown until criteria are applied.
    #[instrument(skip(self, cards), fields(cards = cards.len()))]
    pub fn load_products(&mut self, cards: &[ProductCard]) {
        self.catalog = Catalog::scan(cards);
        self.outcome = FilterOutcome {
            order: (0..self.catalog.len()).collect(),
            total: self.catalog.len(),
        };
        self.effects
            .cancel_where(|effect| matches!(effect, Effect::RevealProduct(_)));
        self.revealed = vec![true; self.catalog.len()];
    }

    /// The scanned catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The current filter result.
    #[must_use]
    pub const fn outcome(&self) -> &FilterOutcome {
        &self.outcome
    }

    /// Per-product visibility, indexed like the catalog.
    #[must_use]
    pub fn visibility(&self) -> Vec<bool> {
        self.outcome.visibility()
    }

    /// Whether the product at `index` has finished its reveal.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Counts for the results line.
    #[must_use]
    pub fn result_count(&self) -> ResultCount {
        self.outcome.count()
    }

    /// Category drop-down options.
    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.catalog.category_options()
    }

    /// Update the search text and re-filter.
    pub fn set_search_query(&mut self, query: &str) -> ResultCount {
        self.criteria.set_search(query);
        self.filter_products()
    }

    /// Select a category (`all` or a slug) and re-filter.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError` for unknown values; the criteria are unchanged.
    pub fn set_category(&mut self, value: &str) -> Result<ResultCount> {
        let category = CategoryFilter::parse(value).map_err(reported)?;
        self.criteria.category = category;
        Ok(self.filter_products())
    }

    /// Select a sort order and re-filter.
    pub fn set_sort(&mut self, value: &str) -> ResultCount {
        self.criteria.sort = SortKey::parse(value);
        self.filter_products()
    }

    /// Run the search explicitly and announce the number of matches.
    pub fn perform_search(&mut self) -> ResultCount {
        let count = self.filter_products();
        self.notify(format!("Found {} products", count.shown), ToastKind::Info);
        count
    }

    /// Apply the current criteria and schedule the staggered reveal.
    fn filter_products(&mut self) -> ResultCount {
        self.outcome = filter::apply(&self.catalog, &self.criteria);

        self.effects
            .cancel_where(|effect| matches!(effect, Effect::RevealProduct(_)));
        self.revealed = vec![false; self.catalog.len()];

        let mut delay = Duration::ZERO;
        for &index in &self.outcome.order {
            self.effects.schedule(delay, Effect::RevealProduct(index));
            delay = delay.saturating_add(self.timing.reveal_stagger);
        }

        let count = self.outcome.count();
        tracing::debug!(
            query = self.criteria.search_query(),
            category = %self.criteria.category,
            sort = self.criteria.sort.as_str(),
            shown = count.shown,
            total = count.total,
            "Products filtered"
        );
        count
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Show a toast that dismisses itself after the configured delay.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = self.notifier.push(message, kind);
        self.effects
            .schedule(self.timing.toast_duration, Effect::DismissToast(id));
        id
    }

    /// Close a toast before its timer fires.
    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.effects
            .cancel_where(|effect| *effect == Effect::DismissToast(id));
        self.notifier.dismiss(id)
    }

    /// Active toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        self.notifier.active()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Prepare the checkout hand-off.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] with an error toast when the cart
    /// is empty.
    #[instrument(skip(self))]
    pub fn proceed_to_checkout(&mut self) -> Result<CheckoutHandoff> {
        match CheckoutHandoff::from_cart(self.cart.cart()) {
            Ok(handoff) => {
                tracing::info!(total = %handoff.total, "Checkout prepared");
                Ok(handoff)
            }
            Err(CheckoutError::EmptyCart) => {
                self.notify("Your cart is empty!", ToastKind::Error);
                Err(reported(CheckoutError::EmptyCart))
            }
            Err(e) => Err(reported(e)),
        }
    }

    /// Validate the checkout form, showing one error toast per failing rule.
    pub fn validate_checkout_form(&mut self, form: &CheckoutForm) -> FormValidation {
        let validation = validate_checkout_form(form);
        for rule in validation.failed_rules() {
            self.notify(rule.message(), ToastKind::Error);
        }
        if !validation.is_valid() {
            tracing::debug!(fields = ?validation.invalid_fields(), "Checkout form rejected");
        }
        validation
    }

    /// Validate and submit the checkout form.
    ///
    /// On success the submit button enters its loading state and the
    /// hand-off is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidForm`] when validation fails and
    /// [`CheckoutError::EmptyCart`] when there is nothing to order.
    #[instrument(skip(self, form))]
    pub fn submit_checkout(&mut self, form: &CheckoutForm, button: &str, label: &str) -> Result<CheckoutHandoff> {
        self.validate_checkout_form(form)
            .into_result()
            .map_err(reported)?;
        let handoff = self.proceed_to_checkout()?;
        self.begin_loading(button, label);
        Ok(handoff)
    }

    // =========================================================================
    // Buttons
    // =========================================================================

    /// Put a button into its loading state until the reset delay elapses.
    ///
    /// Returns `false` if the button is already loading.
    pub fn begin_loading(&mut self, button: &str, label: &str) -> bool {
        if self.loading.contains_key(button) {
            return false;
        }
        self.loading.insert(
            button.to_owned(),
            LoadingButton {
                original_label: label.to_owned(),
            },
        );
        self.effects
            .schedule(self.timing.button_reset, Effect::ResetButton(button.to_owned()));
        true
    }

    /// Loading state of a button, `None` when it is idle.
    #[must_use]
    pub fn loading_button(&self, button: &str) -> Option<&LoadingButton> {
        self.loading.get(button)
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Advance the logical clock and apply every effect that came due.
    pub fn advance(&mut self, elapsed: Duration) {
        for effect in self.effects.advance(elapsed) {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::DismissToast(id) => {
                if !self.notifier.dismiss(id) {
                    tracing::trace!(toast_id = %id, "Toast already dismissed");
                }
            }
            Effect::ResetButton(button) => {
                if self.loading.remove(&button).is_none() {
                    tracing::trace!(button = %button, "Button already reset");
                }
            }
            Effect::RevealProduct(index) => {
                if let Some(flag) = self.revealed.get_mut(index) {
                    *flag = true;
                }
            }
        }
    }
}

/// Report an error and hand it back for propagation.
fn reported(err: impl Into<AppError>) -> AppError {
    let err = err.into();
    error::report(&err);
    err
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::cart::CartError;
    use crate::checkout::{FormField, fields};
    use crate::store::{MemoryStore, keys};

    fn client() -> StoreClient<MemoryStore> {
        StoreClient::new(MemoryStore::new(), TimingConfig::default())
    }

    fn messages(client: &StoreClient<MemoryStore>) -> Vec<&str> {
        client.toasts().iter().map(|t| t.message.as_str()).collect()
    }

    fn cards() -> Vec<ProductCard> {
        vec![
            ProductCard::new("Cotton Kurta", "Breathable cotton ₹500"),
            ProductCard::new("Jute Bag", "Sturdy jute ₹300"),
            ProductCard::new("Silk Suit", "Festive silk ₹1200"),
        ]
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut client = client();
        client.add_item("Kurta A", Price::from_units(500), 1).unwrap();
        let badge = client.add_item("Kurta A", Price::from_units(500), 2).unwrap();

        assert_eq!(client.cart().len(), 1);
        assert_eq!(client.cart().items()[0].quantity, 3);
        assert_eq!(client.summary().grand_total, Price::from_units(1500));
        assert_eq!(badge.count, 3);
        assert!(badge.visible);
        assert_eq!(messages(&client), ["Kurta A added to cart!", "Kurta A added to cart!"]);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut client = client();
        let err = client.add_item("Kurta A", Price::from_units(500), 0).unwrap_err();

        assert!(matches!(err, AppError::Cart(CartError::InvalidQuantity(0))));
        assert!(client.cart().is_empty());
        assert_eq!(client.toasts()[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_mutations_persist() {
        let mut client = client();
        client.add_item("Jute Bag", Price::from_units(300), 2).unwrap();

        let stored = client.store().get(keys::CART).unwrap().unwrap();
        assert_eq!(Cart::from_json(&stored).unwrap(), *client.cart());

        let restored = StoreClient::new(client.store().clone(), TimingConfig::default());
        assert_eq!(restored.cart(), client.cart());
    }

    #[test]
    fn test_remove_item() {
        let mut client = client();
        client.add_item("Jute Bag", Price::from_units(300), 1).unwrap();
        client.add_item("Silk Suit", Price::from_units(1200), 1).unwrap();

        let removed = client.remove_item(0).unwrap();
        assert_eq!(removed.name, "Jute Bag");
        assert_eq!(client.cart().items()[0].name, "Silk Suit");
        assert_eq!(client.toasts().last().unwrap().message, "Item removed from cart");
    }

    #[test]
    fn test_remove_out_of_range_has_no_toast() {
        let mut client = client();
        let err = client.remove_item(3).unwrap_err();
        assert!(matches!(
            err,
            AppError::Cart(CartError::IndexOutOfRange { index: 3, len: 0 })
        ));
        assert!(client.toasts().is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut client = client();
        client.add_item("Jute Bag", Price::from_units(300), 4).unwrap();

        let change = client.set_quantity(0, 0).unwrap();
        assert!(matches!(change, QuantityChange::Removed(item) if item.name == "Jute Bag"));
        assert!(client.cart().is_empty());
        assert!(!client.badge().visible);
        assert_eq!(client.toasts().last().unwrap().message, "Item removed from cart");
    }

    #[test]
    fn test_set_quantity_updates() {
        let mut client = client();
        client.add_item("Jute Bag", Price::from_units(300), 1).unwrap();

        assert_eq!(client.set_quantity(0, 5).unwrap(), QuantityChange::Updated);
        assert_eq!(client.summary().grand_total, Price::from_units(1500));
    }

    #[test]
    fn test_clear() {
        let mut client = client();
        client.add_item("Jute Bag", Price::from_units(300), 1).unwrap();
        client.clear();

        assert!(client.cart().is_empty());
        assert_eq!(client.store().get(keys::CART).unwrap().as_deref(), Some("[]"));
        assert_eq!(client.toasts().last().unwrap().message, "Cart cleared");
    }

    #[test]
    fn test_toast_dismisses_after_duration() {
        let mut client = client();
        client.notify("hello", ToastKind::Info);

        client.advance(ms(2999));
        assert_eq!(client.toasts().len(), 1);
        client.advance(ms(1));
        assert!(client.toasts().is_empty());
    }

    #[test]
    fn test_manual_dismiss_then_timer_is_noop() {
        let mut client = client();
        let first = client.notify("first", ToastKind::Info);
        client.notify("second", ToastKind::Info);

        assert!(client.dismiss_toast(first));
        assert!(!client.dismiss_toast(first));
        assert_eq!(messages(&client), ["second"]);

        client.advance(ms(3000));
        assert!(client.toasts().is_empty());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut client = client();
        let err = client.proceed_to_checkout().unwrap_err();

        assert!(matches!(err, AppError::Checkout(CheckoutError::EmptyCart)));
        assert_eq!(messages(&client), ["Your cart is empty!"]);
        assert_eq!(client.toasts()[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_checkout_handoff() {
        let mut client = client();
        client.add_item("Kurta A", Price::from_units(500), 3).unwrap();

        let handoff = client.proceed_to_checkout().unwrap();
        assert_eq!(handoff.total, Price::from_units(1500));
        assert_eq!(Cart::from_json(&handoff.cart_json).unwrap(), *client.cart());
    }

    #[test]
    fn test_validate_form_toasts_each_rule_once() {
        let mut client = client();
        let form = CheckoutForm::new(vec![
            FormField::required("name", ""),
            FormField::required("address", ""),
            FormField::required(fields::MOBILE, "12345"),
            FormField::required(fields::PINCODE, "123456"),
        ]);

        let validation = client.validate_checkout_form(&form);
        assert!(!validation.is_valid());
        assert_eq!(
            messages(&client),
            [
                "Please fill in all required fields",
                "Please enter a valid mobile number"
            ]
        );
    }

    #[test]
    fn test_submit_checkout_sets_loading_then_resets() {
        let mut client = client();
        client.add_item("Kurta A", Price::from_units(500), 1).unwrap();
        let form = CheckoutForm::new(vec![
            FormField::required(fields::MOBILE, "9876543210"),
            FormField::required(fields::PINCODE, "123456"),
        ]);

        client.submit_checkout(&form, "place-order", "Place Order").unwrap();
        assert_eq!(
            client.loading_button("place-order").unwrap().original_label,
            "Place Order"
        );

        client.advance(ms(999));
        assert!(client.loading_button("place-order").is_some());
        client.advance(ms(1));
        assert!(client.loading_button("place-order").is_none());
    }

    #[test]
    fn test_submit_invalid_form_does_not_load() {
        let mut client = client();
        client.add_item("Kurta A", Price::from_units(500), 1).unwrap();
        let form = CheckoutForm::new(vec![FormField::required(fields::PINCODE, "12345")]);

        let err = client.submit_checkout(&form, "place-order", "Place Order").unwrap_err();
        assert!(matches!(err, AppError::Checkout(CheckoutError::InvalidForm { .. })));
        assert!(client.loading_button("place-order").is_none());
    }

    #[test]
    fn test_begin_loading_twice() {
        let mut client = client();
        assert!(client.begin_loading("add", "Add to Cart"));
        assert!(!client.begin_loading("add", "Add to Cart"));
        client.advance(ms(1000));
        assert!(client.begin_loading("add", "Add to Cart"));
    }

    #[test]
    fn test_load_products_shows_everything() {
        let mut client = client();
        client.load_products(&cards());

        assert_eq!(client.visibility(), [true, true, true]);
        assert!(client.is_revealed(2));
        assert_eq!(client.result_count().to_string(), "Showing 3 of 3 products");
        assert_eq!(client.category_options().len(), 4);
    }

    #[test]
    fn test_sort_reveals_in_display_order() {
        let mut client = client();
        client.load_products(&cards());

        let count = client.set_sort("price-low");
        assert_eq!(count.shown, 3);
        assert_eq!(client.outcome().order, [1, 0, 2]);
        assert!(!client.is_revealed(1));

        client.advance(ms(0));
        assert!(client.is_revealed(1));
        assert!(!client.is_revealed(0));
        client.advance(ms(100));
        assert!(client.is_revealed(0));
        assert!(!client.is_revealed(2));
        client.advance(ms(100));
        assert!(client.is_revealed(2));
    }

    #[test]
    fn test_refilter_cancels_pending_reveals() {
        let mut client = client();
        client.load_products(&cards());
        client.set_sort("price-high");
        client.set_search_query("jute");

        assert_eq!(client.outcome().order, [1]);
        client.advance(ms(500));
        assert!(client.is_revealed(1));
        assert!(!client.is_revealed(0));
        assert!(!client.is_revealed(2));
    }

    #[test]
    fn test_set_category() {
        let mut client = client();
        client.load_products(&cards());

        let count = client.set_category("bags").unwrap();
        assert_eq!(count.shown, 1);
        assert_eq!(client.visibility(), [false, true, false]);

        assert!(matches!(
            client.set_category("sarees"),
            Err(AppError::Category(_))
        ));
        assert_eq!(client.criteria().category.to_string(), "bags");
    }

    #[test]
    fn test_perform_search_announces_count() {
        let mut client = client();
        client.load_products(&cards());
        client.set_search_query("SILK");

        let count = client.perform_search();
        assert_eq!(count.shown, 1);
        assert_eq!(messages(&client), ["Found 1 products"]);
        assert_eq!(client.toasts()[0].kind, ToastKind::Info);
    }

    #[test]
    fn test_dispatch() {
        let mut client = client();
        let result = client
            .dispatch(Action::AddToCart {
                name: "Kurta A".to_string(),
                unit_price: Price::from_units(500),
                quantity: 3,
            })
            .unwrap();
        let Dispatched::Cart(summary) = result else {
            panic!("expected cart summary");
        };
        assert_eq!(summary.grand_total, Price::from_units(1500));

        let Dispatched::Checkout(handoff) = client.dispatch(Action::Checkout).unwrap() else {
            panic!("expected checkout hand-off");
        };
        assert_eq!(handoff.total, Price::from_units(1500));

        client.dispatch(Action::ClearCart).unwrap();
        assert!(client.dispatch(Action::Checkout).is_err());
        assert!(client.dispatch(Action::RemoveFromCart { index: 0 }).is_err());
    }
}
