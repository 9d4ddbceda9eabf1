use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::RegistryError;
use crate::tag::TagHandler;

/// Mapping from tag name to its handler.
///
/// Lookups are case sensitive. Consulted when parsing, to know which tags are self-closing, and when
/// rendering, to dispatch nodes to their handlers.
#[derive(Default)]
pub struct TagRegistry {
    tags: HashMap<String, Box<dyn TagHandler>>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its [TagHandler::tag] name.
    ///
    /// # Errors
    ///
    /// * [RegistryError::DuplicateTag] when the name is taken, the existing handler is kept.
    /// * [RegistryError::EmptyTagName] when the handler has an empty name.
    pub fn add(&mut self, handler: Box<dyn TagHandler>) -> Result<(), RegistryError> {
        let name = handler.tag().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyTagName);
        }
        if self.tags.contains_key(&name) {
            return Err(RegistryError::DuplicateTag(name));
        }

        debug!(
            "register tag {name:?}, self-closing: {}",
            handler.is_self_closing()
        );
        self.tags.insert(name, handler);
        Ok(())
    }

    /// Remove the handler for `name`, returns it if registered.
    ///
    /// Trees already built are not affected, they only hold tag names.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn TagHandler>> {
        let removed = self.tags.remove(name);
        if removed.is_some() {
            debug!("unregister tag {name:?}");
        }
        removed
    }

    /// Remove all handlers.
    pub fn clear(&mut self) {
        debug!("clear {} registered tags", self.tags.len());
        self.tags.clear();
    }

    pub fn get(&self, name: &str) -> Option<&dyn TagHandler> {
        self.tags.get(name).map(|x| x.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Check `name` is registered as self-closing.
    ///
    /// Unknown tags are not self-closing.
    pub fn is_self_closing(&self, name: &str) -> bool {
        self.get(name).is_some_and(|x| x.is_self_closing())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Registered tag names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.tags.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRegistry")
            .field("tags", &self.names())
            .finish()
    }
}
