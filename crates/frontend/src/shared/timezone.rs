//! Timezone preference.
//!
//! Only ids known to the tz database are ever stored. The placeholder
//! `UTC` is treated as "not chosen" and gives way to the detected zone.

use crate::shared::date_utils::{is_valid_timezone, parse_timezone};
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use chrono_tz::Tz;
use contracts::shared::preferences::{DEFAULT_TIMEZONE, TIMEZONE_STORAGE_KEY};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub struct TimezoneStore<S> {
    storage: S,
    timezone: String,
    detected: String,
}

impl<S: KeyValueStorage> TimezoneStore<S> {
    /// Restore the persisted zone if it is still valid, otherwise start from
    /// `detected`. A placeholder value is upgraded to the detected zone.
    pub fn load(storage: S, detected: &str) -> Self {
        let detected = if is_valid_timezone(detected) {
            detected.to_string()
        } else {
            DEFAULT_TIMEZONE.to_string()
        };

        let persisted = match storage.get(TIMEZONE_STORAGE_KEY) {
            Ok(value) => value.filter(|tz| is_valid_timezone(tz)),
            Err(e) => {
                log::warn!("Failed to read timezone: {}", e);
                None
            }
        };

        let mut store = Self {
            storage,
            timezone: persisted.unwrap_or_else(|| detected.clone()),
            detected,
        };

        if store.timezone.is_empty() || store.timezone == DEFAULT_TIMEZONE {
            let detected = store.detected.clone();
            if detected != store.timezone {
                store.set(&detected);
            }
        }
        store
    }

    pub fn get(&self) -> &str {
        &self.timezone
    }

    /// Active zone as a tz database entry.
    pub fn tz(&self) -> Tz {
        parse_timezone(&self.timezone).unwrap_or(Tz::UTC)
    }

    pub fn detected(&self) -> &str {
        &self.detected
    }

    /// Select `timezone`. Ids unknown to the tz database are ignored.
    pub fn set(&mut self, timezone: &str) {
        if !is_valid_timezone(timezone) {
            log::debug!("Rejected timezone '{}'", timezone);
            return;
        }
        self.timezone = timezone.to_string();
        if let Err(e) = self.storage.set(TIMEZONE_STORAGE_KEY, &self.timezone) {
            log::warn!("Failed to save timezone: {}", e);
        }
    }
}

/// Zone reported by `Intl.DateTimeFormat().resolvedOptions().timeZone`, or
/// `UTC` when the platform does not expose one.
pub fn detect_timezone() -> String {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    js_sys::Reflect::get(&format.resolved_options(), &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|tz| !tz.is_empty())
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string())
}

#[derive(Clone, Copy)]
pub struct TimezoneContext {
    store: RwSignal<TimezoneStore<BrowserStorage>>,
}

impl TimezoneContext {
    pub fn timezone(&self) -> String {
        self.store.with(|s| s.get().to_string())
    }

    pub fn tz(&self) -> Tz {
        self.store.with(|s| s.tz())
    }

    pub fn detected(&self) -> String {
        self.store.with(|s| s.detected().to_string())
    }

    pub fn set_timezone(&self, timezone: &str) {
        self.store.update(|s| s.set(timezone));
    }
}

#[component]
pub fn TimezoneProvider(children: Children) -> impl IntoView {
    let store = RwSignal::new(TimezoneStore::load(BrowserStorage, &detect_timezone()));
    provide_context(TimezoneContext { store });

    children()
}

pub fn use_timezone() -> TimezoneContext {
    use_context::<TimezoneContext>()
        .expect("TimezoneContext not found. Wrap your app with TimezoneProvider.")
}
