// Browser `localStorage` backend.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::{KeyValueStore, StoreError};

pub struct LocalStorageStore {
    storage: Storage,
}

fn js_err(key: &str, err: JsValue) -> StoreError {
    StoreError {
        key: key.to_string(),
        msg: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}

impl LocalStorageStore {
    /// Open `window.localStorage`.
    pub fn open() -> Result<Self, StoreError> {
        let unavailable = |msg: &str| StoreError { key: String::new(), msg: msg.to_string() };
        let window = web_sys::window().ok_or_else(|| unavailable("no window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| js_err("", e))?
            .ok_or_else(|| unavailable("localStorage is not available"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|e| js_err(key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|e| js_err(key, e))
    }
}
