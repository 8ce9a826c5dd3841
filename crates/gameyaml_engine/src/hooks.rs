use spider_logging::spider_debug;

use crate::{CanonicalRecord, HookError};

/// A post-processing step run on every assembled record.
pub trait Hook {
    fn name(&self) -> &str;

    /// Returns the (possibly rewritten) record for `game_name`.
    fn setup(&self, game_name: &str, record: CanonicalRecord)
        -> Result<CanonicalRecord, HookError>;
}

/// Supplies already-discovered hooks, in the order they must run.
pub trait HookLoader {
    fn discover(&self) -> Vec<Box<dyn Hook>>;
}

/// Hooks in registration order. Empty means identity.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn Hook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_loader(loader: &dyn HookLoader) -> Self {
        loader.discover().into_iter().collect()
    }

    pub fn with(mut self, hook: impl Hook + 'static) -> Self {
        self.push(Box::new(hook));
        self
    }

    pub fn push(&mut self, hook: Box<dyn Hook>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Runs every hook first to last. The first failure stops the chain.
    pub fn apply(
        &self,
        game_name: &str,
        mut record: CanonicalRecord,
    ) -> Result<CanonicalRecord, HookError> {
        for hook in &self.hooks {
            spider_debug!("Running hook {} for {}", hook.name(), game_name);
            record = hook.setup(game_name, record)?;
        }
        Ok(record)
    }
}

impl FromIterator<Box<dyn Hook>> for HookChain {
    fn from_iter<T: IntoIterator<Item = Box<dyn Hook>>>(iter: T) -> Self {
        Self {
            hooks: iter.into_iter().collect(),
        }
    }
}
