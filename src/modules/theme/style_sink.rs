use std::collections::BTreeMap;
use std::sync::Mutex;

/// Port for the globally scoped style variables the rendered page consumes.
///
/// The web embedding maps this onto the document root's custom properties;
/// the in-memory implementation below backs tests and native embeddings.
pub trait StyleSink: Send + Sync {
    fn set_variable(&self, name: &str, value: &str);

    fn clear_variable(&self, name: &str);
}

/// Records variables in memory.
#[derive(Debug, Default)]
pub struct InMemoryStyleSink {
    vars: Mutex<BTreeMap<String, String>>,
}

impl InMemoryStyleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        let vars = self.vars.lock().unwrap_or_else(|e| e.into_inner());
        vars.get(name).cloned()
    }

    pub fn variables(&self) -> BTreeMap<String, String> {
        let vars = self.vars.lock().unwrap_or_else(|e| e.into_inner());
        vars.clone()
    }
}

impl StyleSink for InMemoryStyleSink {
    fn set_variable(&self, name: &str, value: &str) {
        let mut vars = self.vars.lock().unwrap_or_else(|e| e.into_inner());
        vars.insert(name.to_string(), value.to_string());
    }

    fn clear_variable(&self, name: &str) {
        let mut vars = self.vars.lock().unwrap_or_else(|e| e.into_inner());
        vars.remove(name);
    }
}
