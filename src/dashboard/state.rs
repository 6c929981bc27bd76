//! Dashboard state and its pure reducer
//!
//! The dashboard never mutates state in place from I/O code: the controller
//! turns every API outcome into an [`Action`] and feeds it to
//! [`DashboardState::reduce`].

use crate::core::Product;
use uuid::Uuid;

/// Everything the dashboard renders from
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Products in server order
    pub products: Vec<Product>,
    pub loading: bool,
    /// Message for the dismissible error banner
    pub error: Option<String>,
    pub form_visible: bool,
    /// Product being edited, `None` when the form creates
    pub editing_product: Option<Product>,
}

impl DashboardState {
    /// State before the first load completes
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            error: None,
            form_visible: false,
            editing_product: None,
        }
    }

    pub fn find(&self, id: &Uuid) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Apply one action, returning the next state
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::LoadStarted => {
                self.loading = true;
                self.error = None;
            }
            Action::Loaded(products) => {
                self.products = products;
                self.loading = false;
            }
            Action::LoadFailed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
            Action::Created(product) => {
                self.products.push(product);
                self.form_visible = false;
                self.editing_product = None;
                self.error = None;
            }
            Action::Updated(product) => {
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
                    *slot = product;
                }
                self.form_visible = false;
                self.editing_product = None;
                self.error = None;
            }
            Action::Deleted(id) => {
                self.products.retain(|p| p.id != id);
                self.error = None;
            }
            Action::Failed(message) => {
                self.error = Some(message);
            }
            Action::OpenCreateForm => {
                // The "new product" entry point is disabled while a form is open
                if !self.form_visible {
                    self.form_visible = true;
                    self.editing_product = None;
                }
            }
            Action::OpenEditForm(product) => {
                self.form_visible = true;
                self.editing_product = Some(product);
            }
            Action::CloseForm => {
                self.form_visible = false;
                self.editing_product = None;
            }
            Action::DismissError => {
                self.error = None;
            }
        }
        self
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// State transitions the dashboard understands
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStarted,
    Loaded(Vec<Product>),
    LoadFailed(String),
    Created(Product),
    Updated(Product),
    Deleted(Uuid),
    Failed(String),
    OpenCreateForm,
    OpenEditForm(Product),
    CloseForm,
    DismissError,
}
