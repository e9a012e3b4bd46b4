use gamespace_core::store::DocumentStore;
use std::rc::Rc;
use yew::prelude::*;

/// Identity collaborator: the opaque authenticated-user handle, or none.
/// Login and logout happen outside this page.
#[derive(Clone, PartialEq, Default)]
pub struct SessionContext {
    pub user: Option<AttrValue>,
}

/// Shared handle to the document-store client.
#[derive(Clone)]
pub struct StoreContext {
    pub store: Rc<dyn DocumentStore>,
}

impl StoreContext {
    #[must_use]
    pub fn new(store: Rc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

impl PartialEq for StoreContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}
