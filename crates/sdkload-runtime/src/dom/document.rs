use std::sync::Arc;

use tokio::sync::watch;

use crate::host::StyleSheet;

/// Load signal state of a stylesheet link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    Pending,
    Loaded,
    Failed(String),
}

/// Where a new element is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    Head,
    Root,
}

/// Handle to a `<link rel="stylesheet">` element living in some root.
#[derive(Debug, Clone)]
pub struct LinkElement {
    inner: Arc<LinkInner>,
}

#[derive(Debug)]
struct LinkInner {
    id: u64,
    href: String,
    state: watch::Sender<LinkState>,
}

impl LinkElement {
    pub fn new(id: u64, href: impl Into<String>) -> Self {
        let (state, _) = watch::channel(LinkState::Pending);
        Self {
            inner: Arc::new(LinkInner {
                id,
                href: href.into(),
                state,
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn href(&self) -> &str {
        &self.inner.href
    }

    pub fn state(&self) -> LinkState {
        self.inner.state.borrow().clone()
    }

    /// Fire the load signal.
    pub fn mark_loaded(&self) {
        self.inner.state.send_replace(LinkState::Loaded);
    }

    /// Fire the error signal.
    pub fn mark_failed(&self, reason: impl Into<String>) {
        self.inner.state.send_replace(LinkState::Failed(reason.into()));
    }

    /// Wait for the load or error signal. Returns immediately if either
    /// already fired (reused elements).
    pub async fn settled(&self) -> std::result::Result<(), String> {
        let mut rx = self.inner.state.subscribe();
        let state = rx
            .wait_for(|s| *s != LinkState::Pending)
            .await
            .map_err(|_| "element dropped".to_string())?
            .clone();
        match state {
            LinkState::Failed(reason) => Err(reason),
            _ => Ok(()),
        }
    }
}

impl PartialEq for LinkElement {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for LinkElement {}

/// Document or shadow-root-like target for stylesheet attachment.
///
/// Kept to the operations stylesheet attachment needs. Each check-then-insert
/// is a single call so implementations can make it atomic.
pub trait DocumentRoot: Send + Sync {
    /// Whether the root accepts constructed stylesheets.
    fn supports_adopted_stylesheets(&self) -> bool;

    fn has_head(&self) -> bool;

    /// Existing stylesheet link with exactly this href, or a new one inserted
    /// at `mount`. The bool is true when the link was created by this call.
    /// A new link's load/error signal fires once the root fetches it.
    fn link_or_insert(&self, href: &str, mount: Mount) -> (LinkElement, bool);

    fn adopted_stylesheets(&self) -> Vec<Arc<StyleSheet>>;

    /// Append `sheet` unless the same object is already adopted. Returns
    /// whether it was appended.
    fn adopt_if_absent(&self, sheet: &Arc<StyleSheet>) -> bool;
}
