//! Dashboard orchestration
//!
//! [`DashboardController`] owns a [`ProductApi`] and the [`DashboardState`].
//! Every call turns into one or more reducer actions; failures land in the
//! error banner and are also returned to the caller.

use super::api::{ApiError, ProductApi};
use super::form::{FormIntent, ProductForm};
use super::list_view::{ListIntent, ListView};
use super::state::{Action, DashboardState};
use crate::core::{NewProduct, Product};
use uuid::Uuid;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// Asks the user a yes/no question before a destructive operation
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct DashboardController<A: ProductApi> {
    api: A,
    state: DashboardState,
}

impl<A: ProductApi> DashboardController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: DashboardState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn view(&self) -> ListView {
        ListView::from_state(&self.state)
    }

    /// A fresh form for the current form state, `None` when it is closed
    pub fn form(&self) -> Option<ProductForm> {
        if !self.state.form_visible {
            return None;
        }
        Some(match &self.state.editing_product {
            Some(product) => ProductForm::for_product(product),
            None => ProductForm::new(),
        })
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    /// Initial load
    pub async fn mount(&mut self) -> Result<(), ApiError> {
        self.load().await
    }

    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.dispatch(Action::LoadStarted);
        match self.api.list_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "products loaded");
                self.dispatch(Action::Loaded(products));
                Ok(())
            }
            Err(e) => {
                self.dispatch(Action::LoadFailed(format!("Failed to load products: {}", e)));
                Err(e)
            }
        }
    }

    pub async fn create(&mut self, product: NewProduct) -> Result<Product, ApiError> {
        match self.api.create_product(&product).await {
            Ok(created) => {
                self.dispatch(Action::Created(created.clone()));
                Ok(created)
            }
            Err(e) => {
                self.dispatch(Action::Failed(format!("Failed to create product: {}", e)));
                Err(e)
            }
        }
    }

    /// Replace every editable field of `id` with the form values
    pub async fn update(&mut self, id: Uuid, product: NewProduct) -> Result<Product, ApiError> {
        match self.api.update_product(&id, &product.into_patch()).await {
            Ok(updated) => {
                self.dispatch(Action::Updated(updated.clone()));
                Ok(updated)
            }
            Err(e) => {
                self.dispatch(Action::Failed(format!("Failed to update product: {}", e)));
                Err(e)
            }
        }
    }

    /// Delete after confirmation. Returns `Ok(false)` when the user declined.
    pub async fn delete(&mut self, id: Uuid, confirm: &impl Confirm) -> Result<bool, ApiError> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(false);
        }

        match self.api.delete_product(&id).await {
            Ok(_) => {
                self.dispatch(Action::Deleted(id));
                Ok(true)
            }
            Err(e) => {
                self.dispatch(Action::Failed(format!("Failed to delete product: {}", e)));
                Err(e)
            }
        }
    }

    /// Validate and send the form. Returns true once the server accepted it.
    ///
    /// Invalid forms and forms already in flight are left untouched.
    pub async fn submit(&mut self, form: &mut ProductForm) -> bool {
        let intent = match form.begin_submit() {
            Ok(intent) => intent,
            Err(e) => {
                tracing::debug!(error = %e, "form not submitted");
                return false;
            }
        };

        let result = match intent {
            FormIntent::Create(product) => self.create(product).await,
            FormIntent::Update(id, product) => self.update(id, product).await,
        };
        form.finish_submit();
        result.is_ok()
    }

    /// React to a request raised by the list view
    pub async fn handle(
        &mut self,
        intent: ListIntent,
        confirm: &impl Confirm,
    ) -> Result<(), ApiError> {
        match intent {
            ListIntent::Edit(product) => {
                self.edit(product);
                Ok(())
            }
            ListIntent::Delete(id) => self.delete(id, confirm).await.map(|_| ()),
            ListIntent::Refresh => self.load().await,
        }
    }

    pub fn open_create_form(&mut self) {
        self.dispatch(Action::OpenCreateForm);
    }

    pub fn edit(&mut self, product: Product) {
        self.dispatch(Action::OpenEditForm(product));
    }

    pub fn cancel_form(&mut self) {
        self.dispatch(Action::CloseForm);
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(Action::DismissError);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProductPatch;
    use async_trait::async_trait;

    /// Api that refuses everything
    struct Offline;

    #[async_trait]
    impl ProductApi for Offline {
        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            Err(ApiError::Network("Failed to fetch products".to_string()))
        }
        async fn get_product(&self, _id: &Uuid) -> Result<Product, ApiError> {
            Err(ApiError::Network("Failed to fetch product".to_string()))
        }
        async fn create_product(&self, _product: &NewProduct) -> Result<Product, ApiError> {
            Err(ApiError::Network("Failed to create product".to_string()))
        }
        async fn update_product(
            &self,
            _id: &Uuid,
            _patch: &ProductPatch,
        ) -> Result<Product, ApiError> {
            Err(ApiError::Network("Failed to update product".to_string()))
        }
        async fn delete_product(&self, _id: &Uuid) -> Result<Product, ApiError> {
            Err(ApiError::Network("Failed to delete product".to_string()))
        }
    }

    #[tokio::test]
    async fn test_load_failure_sets_banner() {
        let mut dash = DashboardController::new(Offline);
        assert!(dash.mount().await.is_err());

        assert!(!dash.state().loading);
        assert_eq!(
            dash.state().error.as_deref(),
            Some("Failed to load products: Failed to fetch products")
        );
        dash.dismiss_error();
        assert!(dash.state().error.is_none());
    }

    #[tokio::test]
    async fn test_declined_delete_makes_no_call() {
        let mut dash = DashboardController::new(Offline);
        let asked = std::cell::Cell::new(None);
        let decline = |prompt: &str| {
            asked.set(Some(prompt.to_string()));
            false
        };

        assert_eq!(dash.delete(Uuid::new_v4(), &decline).await, Ok(false));
        assert_eq!(asked.take().as_deref(), Some(DELETE_PROMPT));
        assert!(dash.state().error.is_none());
    }

    #[tokio::test]
    async fn test_form_follows_state() {
        let mut dash = DashboardController::new(Offline);
        assert!(dash.form().is_none());

        dash.open_create_form();
        assert!(!dash.form().unwrap().is_editing());

        dash.cancel_form();
        assert!(dash.form().is_none());
    }
}
