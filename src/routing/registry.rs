//! Handler registry.
//!
//! # Responsibilities
//! - Collect named handlers with their mount prefixes at startup
//! - Reject duplicate names and prefixes
//! - Mount every handler's routes under its prefix
//!
//! # Design Decisions
//! - Built once, then frozen; there is no registration after startup
//! - Duplicates are logged and skipped, the first registration wins
//! - Registration order is kept, so the mounted router is deterministic

use std::fmt;

use axum::Router;

use crate::routing::handler::RouteHandler;

struct Entry {
    name: String,
    prefix: String,
    handler: Box<dyn RouteHandler>,
}

/// Collects handlers before the registry is frozen.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<Entry>,
}

impl RegistryBuilder {
    /// Register `handler` as `name`, mounted at `prefix`.
    pub fn register<H: RouteHandler>(
        mut self,
        name: impl Into<String>,
        prefix: impl Into<String>,
        handler: H,
    ) -> Self {
        let name = name.into();
        let prefix = match normalize_prefix(&prefix.into()) {
            Some(prefix) => prefix,
            None => {
                tracing::warn!(handler = %name, "Handler prefix must start with '/' and not be the root, skipping");
                return self;
            }
        };

        if self.entries.iter().any(|e| e.name == name) {
            tracing::warn!(handler = %name, "Attempt to recreate handler, skipping");
            return self;
        }

        if let Some(existing) = self.entries.iter().find(|e| e.prefix == prefix) {
            tracing::warn!(
                handler = %name,
                prefix = %prefix,
                existing = %existing.name,
                "Prefix already mounted, skipping"
            );
            return self;
        }

        tracing::debug!(handler = %name, prefix = %prefix, "Handler registered");
        self.entries.push(Entry {
            name,
            prefix,
            handler: Box::new(handler),
        });
        self
    }

    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable set of named handlers.
pub struct HandlerRegistry {
    entries: Vec<Entry>,
}

impl HandlerRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handler names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn prefix_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.prefix.as_str())
    }

    /// Mount every handler's routes under its prefix.
    pub fn router(&self) -> Router {
        self.entries.iter().fold(Router::new(), |router, entry| {
            tracing::info!(handler = %entry.name, prefix = %entry.prefix, "Mounting handler");
            router.nest(&entry.prefix, entry.handler.setup_routes())
        })
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (&e.name, &e.prefix)))
            .finish()
    }
}

/// `"/feed/"` → `"/feed"`; `None` for the root or a relative prefix.
fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !trimmed.starts_with('/') {
        return None;
    }
    Some(trimmed.to_string())
}
