use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

/// Base URL used when no build-time `API_URL` was provided: the local
/// server a desktop shell spawns, or a dev server on the same machine.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Host environment the app was loaded into, detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeKind {
    /// Inside the desktop shell, which injects a `__TAURI__` global.
    EmbeddedShell,
    /// A plain browser tab.
    Browser,
}

impl RuntimeKind {
    /// Probe the global object for the shell marker. Runs exactly once,
    /// when the config is constructed; everything else reads the stored
    /// result.
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let marker = wasm_bindgen::JsValue::from_str("__TAURI__");
        if js_sys::Reflect::has(&js_sys::global(), &marker).unwrap_or(false) {
            RuntimeKind::EmbeddedShell
        } else {
            RuntimeKind::Browser
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        RuntimeKind::Browser
    }
}

type Listener = Rc<dyn Fn(&str)>;

struct Inner {
    base_url: String,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Reactive handle to the API configuration.
///
/// Clones share the same underlying slot, so the composition root can hand
/// the same config to the request layer and to the settings UI. All access
/// is single-threaded and synchronous.
#[derive(Clone)]
pub struct ApiConfig {
    inner: Rc<RefCell<Inner>>,
    runtime: RuntimeKind,
}

impl ApiConfig {
    /// The config the app actually runs with: base URL baked in at build
    /// time via `API_URL` (web deployments), the local default otherwise
    /// (desktop shell, local dev).
    pub fn from_build_env() -> Self {
        let base_url = option_env!("API_URL").unwrap_or(DEFAULT_BASE_URL);
        Self::new(base_url, RuntimeKind::detect())
    }

    pub fn new(base_url: impl Into<String>, runtime: RuntimeKind) -> Self {
        ApiConfig {
            inner: Rc::new(RefCell::new(Inner {
                base_url: base_url.into(),
                next_id: 0,
                listeners: Vec::new(),
            })),
            runtime,
        }
    }

    /// Current base URL, snapshotted at the moment of the call.
    pub fn base_url(&self) -> String {
        self.inner.borrow().base_url.clone()
    }

    /// Replace the base URL and notify subscribers in subscription order.
    ///
    /// The value is stored verbatim; callers hand in a well-formed
    /// `scheme://host:port` prefix without a trailing slash.
    pub fn set_base_url(&self, url: impl Into<String>) {
        let url = url.into();
        debug!("API base URL set to {}", url);
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            inner.base_url = url.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        // Invoked outside the borrow so a listener may subscribe,
        // unsubscribe, or set the value again.
        for listener in listeners {
            listener(&url);
        }
    }

    /// Register `listener` and invoke it immediately with the current
    /// value. It fires again after every subsequent [`set_base_url`] until
    /// the returned guard is dropped.
    ///
    /// [`set_base_url`]: ApiConfig::set_base_url
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.base_url.clone())
        };
        listener(&current);
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn runtime(&self) -> RuntimeKind {
        self.runtime
    }

    /// True when the app runs inside the desktop shell.
    pub fn is_embedded_shell(&self) -> bool {
        self.runtime == RuntimeKind::EmbeddedShell
    }
}

// Context equality: same underlying slot, not same current value.
impl PartialEq for ApiConfig {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Keeps one listener registered; dropping it unsubscribes that listener
/// without affecting the others.
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn browser_config(base_url: &str) -> ApiConfig {
        ApiConfig::new(base_url, RuntimeKind::Browser)
    }

    #[test]
    fn get_returns_exactly_what_was_set() {
        let config = browser_config(DEFAULT_BASE_URL);
        for url in [
            "http://10.0.0.2:9999",
            "https://api.example.com",
            "not a url at all",
            "",
        ] {
            config.set_base_url(url);
            assert_eq!(config.base_url(), url);
        }
    }

    #[test]
    fn defaults_to_local_loopback_without_build_time_url() {
        let config = ApiConfig::from_build_env();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn subscriber_sees_current_value_then_every_change() {
        let config = browser_config("http://localhost:8080");
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _sub = {
            let seen = seen.clone();
            config.subscribe(move |url| seen.borrow_mut().push(url.to_string()))
        };
        config.set_base_url("http://a");
        config.set_base_url("http://b");

        assert_eq!(
            *seen.borrow(),
            vec![
                "http://localhost:8080".to_string(),
                "http://a".to_string(),
                "http://b".to_string(),
            ]
        );
    }

    #[test]
    fn subscribers_are_notified_in_subscription_order() {
        let config = browser_config("http://localhost:8080");
        let order = Rc::new(RefCell::new(Vec::new()));

        let _first = {
            let order = order.clone();
            config.subscribe(move |_| order.borrow_mut().push("first"))
        };
        let _second = {
            let order = order.clone();
            config.subscribe(move |_| order.borrow_mut().push("second"))
        };
        order.borrow_mut().clear();

        config.set_base_url("http://a");
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn dropping_one_subscription_leaves_others_active() {
        let config = browser_config("http://localhost:8080");
        let first_count = Rc::new(RefCell::new(0u32));
        let second_count = Rc::new(RefCell::new(0u32));

        let first = {
            let count = first_count.clone();
            config.subscribe(move |_| *count.borrow_mut() += 1)
        };
        let _second = {
            let count = second_count.clone();
            config.subscribe(move |_| *count.borrow_mut() += 1)
        };

        config.set_base_url("http://a");
        drop(first);
        config.set_base_url("http://b");

        assert_eq!(*first_count.borrow(), 2); // immediate + first change
        assert_eq!(*second_count.borrow(), 3); // immediate + both changes
    }

    #[test]
    fn listener_may_set_the_value_again_without_panicking() {
        let config = browser_config("http://localhost:8080");
        let _sub = {
            let config = config.clone();
            config.clone().subscribe(move |url| {
                if url == "http://redirect-me" {
                    config.set_base_url("http://redirected");
                }
            })
        };

        config.set_base_url("http://redirect-me");
        assert_eq!(config.base_url(), "http://redirected");
    }

    #[test]
    fn runtime_kind_is_fixed_per_config() {
        let shell = ApiConfig::new(DEFAULT_BASE_URL, RuntimeKind::EmbeddedShell);
        let browser = ApiConfig::new(DEFAULT_BASE_URL, RuntimeKind::Browser);

        assert!(shell.is_embedded_shell());
        assert!(!browser.is_embedded_shell());
        assert_eq!(shell.runtime(), RuntimeKind::EmbeddedShell);
    }

    #[test]
    fn detect_outside_wasm_reports_browser() {
        assert_eq!(RuntimeKind::detect(), RuntimeKind::Browser);
    }
}
