//! Navigation capability used by the auth gateway and route guard.
//!
//! Injected so the forced-logout redirect can be asserted in tests without
//! a browser; the real implementation wraps the leptos router.

use std::cell::RefCell;
use std::rc::Rc;

/// Issues "navigate to path" requests to the routing layer. Navigating to
/// the already-active route is a no-op in the router, so repeated requests
/// are safe.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Records requested paths instead of navigating. Cloning shares the log.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    requests: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.requests.borrow_mut().push(path.to_owned());
    }
}

/// Router-backed navigator. Captures the router's navigate closure, so it
/// must be constructed inside the `Router` component tree.
#[cfg(feature = "csr")]
pub struct RouterNavigator {
    navigate: Box<dyn Fn(&str)>,
}

#[cfg(feature = "csr")]
impl RouterNavigator {
    pub fn from_router() -> Self {
        let navigate = leptos_router::hooks::use_navigate();
        Self {
            navigate: Box::new(move |path| {
                navigate(path, leptos_router::NavigateOptions::default());
            }),
        }
    }
}

#[cfg(feature = "csr")]
impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }
}
