use crate::report::document::Document;
use crate::report::html::HtmlBackend;
use crate::report::text::TextBackend;

/// Turns a laid-out document into bytes. Backends that depend on something
/// outside the process report it through `is_available`, which is checked on
/// every lookup.
pub trait DocumentBackend {
    fn name(&self) -> &'static str;

    fn extension(&self) -> &'static str;

    fn is_available(&self) -> bool {
        true
    }

    fn encode(&self, doc: &Document) -> Vec<u8>;
}

pub struct BackendRegistry {
    backends: Vec<Box<dyn DocumentBackend>>,
}

impl BackendRegistry {
    pub fn empty() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(HtmlBackend::default()));
        registry.register(Box::new(TextBackend::default()));
        registry
    }

    pub fn register(&mut self, backend: Box<dyn DocumentBackend>) {
        self.backends.retain(|b| b.name() != backend.name());
        self.backends.push(backend);
    }

    pub fn resolve(&self, name: &str) -> Option<&dyn DocumentBackend> {
        self.backends
            .iter()
            .find(|b| b.name().eq_ignore_ascii_case(name) && b.is_available())
            .map(|b| b.as_ref())
    }

    pub fn available_names(&self) -> Vec<&'static str> {
        self.backends
            .iter()
            .filter(|b| b.is_available())
            .map(|b| b.name())
            .collect()
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("backends", &self.available_names())
            .finish()
    }
}
