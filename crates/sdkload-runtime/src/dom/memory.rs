//! In-memory document tree.
//!
//! Links settle as soon as they are appended: hrefs registered with
//! `mark_broken` fire the error signal, everything else fires load.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashSet;

use super::document::{DocumentRoot, LinkElement, Mount};
use crate::host::StyleSheet;

pub struct MemoryDocument {
    adoption: bool,
    next_id: AtomicU64,
    tree: Mutex<Tree>,
    adopted: Mutex<Vec<Arc<StyleSheet>>>,
    broken: DashSet<String>,
}

#[derive(Default)]
struct Tree {
    head: Option<Vec<LinkElement>>,
    root: Vec<LinkElement>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Document with a head and no constructed-stylesheet support.
    pub fn new() -> Self {
        Self {
            adoption: false,
            next_id: AtomicU64::new(1),
            tree: Mutex::new(Tree {
                head: Some(Vec::new()),
                root: Vec::new(),
            }),
            adopted: Mutex::new(Vec::new()),
            broken: DashSet::new(),
        }
    }

    /// Shadow-root-like: no head, links go straight under the root.
    pub fn without_head(mut self) -> Self {
        self.tree
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .head = None;
        self
    }

    pub fn with_adoption(mut self, enabled: bool) -> Self {
        self.adoption = enabled;
        self
    }

    /// Links to `href` fire the error signal once appended.
    pub fn mark_broken(&self, href: impl Into<String>) {
        self.broken.insert(href.into());
    }

    pub fn head_links(&self) -> Vec<String> {
        let tree = self.tree.lock().unwrap_or_else(PoisonError::into_inner);
        tree.head
            .iter()
            .flatten()
            .map(|l| l.href().to_string())
            .collect()
    }

    pub fn root_links(&self) -> Vec<String> {
        let tree = self.tree.lock().unwrap_or_else(PoisonError::into_inner);
        tree.root.iter().map(|l| l.href().to_string()).collect()
    }

    /// Number of link elements with exactly this href.
    pub fn link_count(&self, href: &str) -> usize {
        let tree = self.tree.lock().unwrap_or_else(PoisonError::into_inner);
        tree.head
            .iter()
            .flatten()
            .chain(tree.root.iter())
            .filter(|l| l.href() == href)
            .count()
    }
}

impl DocumentRoot for MemoryDocument {
    fn supports_adopted_stylesheets(&self) -> bool {
        self.adoption
    }

    fn has_head(&self) -> bool {
        let tree = self.tree.lock().unwrap_or_else(PoisonError::into_inner);
        tree.head.is_some()
    }

    fn link_or_insert(&self, href: &str, mount: Mount) -> (LinkElement, bool) {
        let link = {
            let mut tree = self.tree.lock().unwrap_or_else(PoisonError::into_inner);
            let Tree { head, root } = &mut *tree;
            if let Some(existing) = head
                .iter()
                .flatten()
                .chain(root.iter())
                .find(|l| l.href() == href)
            {
                return (existing.clone(), false);
            }

            let link = LinkElement::new(self.next_id.fetch_add(1, Ordering::Relaxed), href);
            match (mount, head.as_mut()) {
                (Mount::Head, Some(head)) => head.push(link.clone()),
                _ => root.push(link.clone()),
            }
            link
        };

        if self.broken.contains(href) {
            link.mark_failed(format!("failed to load {href}"));
        } else {
            link.mark_loaded();
        }
        (link, true)
    }

    fn adopted_stylesheets(&self) -> Vec<Arc<StyleSheet>> {
        self.adopted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn adopt_if_absent(&self, sheet: &Arc<StyleSheet>) -> bool {
        let mut adopted = self.adopted.lock().unwrap_or_else(PoisonError::into_inner);
        if adopted.iter().any(|s| Arc::ptr_eq(s, sheet)) {
            return false;
        }
        adopted.push(Arc::clone(sheet));
        true
    }
}
