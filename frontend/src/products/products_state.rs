use std::rc::Rc;

use futures_signals::signal::{Mutable, Signal};

use shared::types::{Product, ProductRequest};

use crate::api::{create_product, delete_product, list_products, update_product};
use crate::constants::MSG_CONNECTION;
use crate::elements::app_message::{Level, Messages};
use crate::error::{ApiError, ValidationError};
use crate::platform::Platform;
use crate::session::Session;

const LOAD_FALLBACK: &str = "Error al cargar productos";
const LOAD_UNKNOWN: &str = "Error desconocido";
const SUBMIT_FALLBACK: &str = "Error al procesar el producto";
const DELETE_CONFIRM: &str = "¿Estás seguro de que quieres eliminar este producto?";
const DELETE_SUCCESS: &str = "Producto eliminado exitosamente";
const DELETE_FALLBACK: &str = "Error al eliminar el producto";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Ready,
    /// Server rejected the request; holds the text for the placeholder.
    Failed(String),
    Offline,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn of(editing: &Option<Product>) -> Self {
        if editing.is_some() { FormMode::Edit } else { FormMode::Create }
    }

    pub fn title(&self) -> &'static str {
        match *self {
            FormMode::Create => "Agregar Producto",
            FormMode::Edit => "Editar Producto",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match *self {
            FormMode::Create => "Agregar Producto",
            FormMode::Edit => "Actualizar Producto",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match *self {
            FormMode::Create => "Agregando...",
            FormMode::Edit => "Actualizando...",
        }
    }

    fn success_message(&self) -> &'static str {
        match *self {
            FormMode::Create => "Producto creado exitosamente",
            FormMode::Edit => "Producto actualizado exitosamente",
        }
    }
}

/// State of the `/products` view: the loaded list, the form fields and the
/// product being edited, if any.
pub struct ProductsPage<P> {
    session: Rc<Session<P>>,
    pub products: Mutable<Vec<Product>>,
    pub status: Mutable<ListStatus>,
    pub editing: Mutable<Option<Product>>,
    pub name: Mutable<String>,
    pub kind: Mutable<String>,
    pub busy: Mutable<bool>,
    /// Idle text of the submit button.
    pub submit_label: Mutable<&'static str>,
    pub messages: Rc<Messages>,
}

impl<P: Platform> ProductsPage<P> {
    pub fn new(session: Rc<Session<P>>) -> Rc<Self> {
        Rc::new(Self {
            session,
            products: Mutable::new(Vec::new()),
            status: Mutable::new(ListStatus::Loading),
            editing: Mutable::new(None),
            name: Mutable::new(String::new()),
            kind: Mutable::new(String::new()),
            busy: Mutable::new(false),
            submit_label: Mutable::new(FormMode::Create.submit_label()),
            messages: Rc::new(Messages::default()),
        })
    }

    #[cfg(test)]
    pub fn session(&self) -> &Rc<Session<P>> {
        &self.session
    }

    pub fn mode(&self) -> FormMode {
        FormMode::of(&self.editing.lock_ref())
    }

    pub fn mode_signal(&self) -> impl Signal<Item=FormMode> {
        self.editing.signal_ref(FormMode::of)
    }

    pub async fn load(&self) {
        if !self.session.require_auth() {
            return;
        }
        self.status.set(ListStatus::Loading);
        match list_products(&self.session).await {
            Ok(products) => {
                log::info!("loaded {} products", products.len());
                self.products.set(products);
                self.status.set(ListStatus::Ready);
            }
            Err(ApiError::Unauthorized) => self.session.expire(),
            Err(err) if err.is_transport() => {
                log::error!("load products: {}", err);
                self.messages.show(Level::Danger, MSG_CONNECTION);
                self.status.set(ListStatus::Offline);
            }
            Err(err) => {
                self.messages.show(Level::Danger, err.describe(LOAD_FALLBACK, MSG_CONNECTION));
                self.status.set(ListStatus::Failed(err.describe(LOAD_UNKNOWN, MSG_CONNECTION).to_string()));
            }
        }
    }

    fn request(&self) -> Result<ProductRequest, ValidationError> {
        let name = self.name.get_cloned().trim().to_string();
        let kind = self.kind.get_cloned().trim().to_string();
        if name.is_empty() || kind.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(ProductRequest { name, kind })
    }

    pub async fn submit(&self) {
        let data = match self.request() {
            Ok(data) => data,
            Err(err) => {
                self.messages.show(Level::Warning, &err.to_string());
                return;
            }
        };

        let mode = self.mode();
        let restore_label = self.submit_label.get();
        let editing_id = self.editing.lock_ref().as_ref().map(|product| product.id.clone());
        self.busy.set(true);
        let result = match editing_id {
            Some(id) => update_product(&self.session, &id, &data).await,
            None => create_product(&self.session, &data).await,
        };

        let saved = match result {
            Ok(product) => {
                log::info!("saved product {}", product.id);
                self.messages.show(Level::Success, mode.success_message());
                self.cancel_edit();
                true
            }
            Err(ApiError::Unauthorized) => {
                self.session.expire();
                false
            }
            Err(err) => {
                self.messages.show(Level::Danger, err.describe(SUBMIT_FALLBACK, MSG_CONNECTION));
                false
            }
        };
        // the button gets back the text it had when the request started
        self.busy.set(false);
        self.submit_label.set(restore_label);

        if saved {
            self.load().await;
        }
    }

    /// Fills the form with the listed product `id`. Returns `false` when it is
    /// not in the list.
    pub fn begin_edit(&self, id: &str) -> bool {
        let product = self.products.lock_ref().iter().find(|product| product.id == id).cloned();
        match product {
            Some(product) => {
                self.name.set(product.name.clone());
                self.kind.set(product.kind.clone());
                self.editing.set(Some(product));
                self.submit_label.set(FormMode::Edit.submit_label());
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.name.set(String::new());
        self.kind.set(String::new());
        self.submit_label.set(FormMode::Create.submit_label());
    }

    pub async fn delete(&self, id: &str) {
        if !self.session.platform().confirm(DELETE_CONFIRM) {
            return;
        }
        match delete_product(&self.session, id).await {
            Ok(_) => {
                log::info!("deleted product {}", id);
                self.messages.show(Level::Success, DELETE_SUCCESS);
                self.load().await;
            }
            Err(ApiError::Unauthorized) => self.session.expire(),
            Err(err) => {
                self.messages.show(Level::Danger, err.describe(DELETE_FALLBACK, MSG_CONNECTION));
            }
        }
    }
}
