//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::store::{AppStore, NotesVm};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// None when the API config could not be read
    vm: StoredValue<Option<NotesVm>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, vm: Option<NotesVm>) -> Self {
        Self {
            store,
            vm: StoredValue::new_local(vm),
        }
    }

    pub fn vm(&self) -> Option<NotesVm> {
        self.vm.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
