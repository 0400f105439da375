use contracts::shared::list::debounce::{DebounceDecision, DebouncePolicy};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// setTimeout-backed debounce scheduler for text inputs.
///
/// The timer handle lives in a `StoredValue` so the component closure stays
/// `Copy`; scheduling a new callback cancels the previous one.
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: i32,
    timer: StoredValue<Option<i32>>,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            timer: StoredValue::new(None),
        }
    }

    pub fn cancel(&self) {
        if let Some(timeout_id) = self.timer.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }
        self.timer.set_value(None);
    }

    pub fn schedule(&self, callback: impl Fn() + 'static) {
        self.cancel();

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(callback) as Box<dyn Fn()>);
        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            self.delay_ms,
        ) {
            self.timer.set_value(Some(timeout_id));
        }
        closure.forget();
    }

    /// Route one keystroke through the policy: apply immediately, drop it, or
    /// (re)arm the timer. `key` is `None` for the module-wide search box.
    pub fn dispatch(
        &self,
        policy: &DebouncePolicy,
        key: Option<&str>,
        value: &str,
        apply: Callback<String>,
    ) {
        let normalized = policy.normalize(key, value);
        let decision = policy.decide(key, value);
        if decision.disarms_timer() {
            self.cancel();
        }
        match decision {
            DebounceDecision::Immediate => apply.run(normalized),
            DebounceDecision::Suppress => {}
            DebounceDecision::Deferred => {
                self.schedule(move || apply.run(normalized.clone()));
            }
        }
    }
}
