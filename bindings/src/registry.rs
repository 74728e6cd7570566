use crate::args::CallArguments;
use crate::error::HarnessError;
use engine::Engine;
use serde::Serialize;
use std::collections::HashMap;
use values::Value;

/// Fixed calling convention for every exported thunk.
pub type Thunk = fn(&mut Engine, &mut CallArguments) -> Result<(), HarnessError>;

#[derive(Clone, Copy)]
pub struct ThunkEntry {
    pub suite: &'static str,
    pub name: &'static str,
    pub thunk: Thunk,
}

impl ThunkEntry {
    pub fn key(&self) -> String {
        format!("{}.{}", self.suite, self.name)
    }
}

/// Registration table mapping `suite.name` to an exported thunk.
///
/// Built once at startup; the harness selects a thunk by key, dispatches it
/// over marshaled values, and reads the drained return slot. Suite labels
/// are purely organizational.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, ThunkEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All built-in suites.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::function::register(&mut registry);
        registry
    }

    pub fn register(&mut self, suite: &'static str, name: &'static str, thunk: Thunk) {
        let entry = ThunkEntry { suite, name, thunk };
        self.entries.insert(entry.key(), entry);
    }

    pub fn lookup(&self, key: &str) -> Option<&ThunkEntry> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ThunkEntry> {
        self.entries.values()
    }

    pub fn suite<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a ThunkEntry> {
        self.entries.values().filter(move |e| e.suite == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the named thunk over `values`; the drained return slot is the
    /// result (`None` means the thunk produced no observable result).
    pub fn dispatch(
        &self,
        engine: &mut Engine,
        key: &str,
        values: Vec<Value>,
    ) -> Result<Option<Value>, HarnessError> {
        let entry = self
            .lookup(key)
            .ok_or_else(|| HarnessError::UnknownThunk(key.to_string()))?;
        let mut args = CallArguments::new(values);
        (entry.thunk)(engine, &mut args)?;
        Ok(args.ret.take())
    }

    /// Dispatch every registered thunk (key order) against caller-supplied
    /// fixture arguments and collect one report per thunk.
    pub fn run_all<F>(&self, engine: &mut Engine, mut fixture: F) -> Vec<RunReport>
    where
        F: FnMut(&ThunkEntry, &mut Engine) -> Vec<Value>,
    {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();

        let mut reports = Vec::with_capacity(keys.len());
        for key in keys {
            let entry = self.entries[key];
            let values = fixture(&entry, engine);
            let outcome = match self.dispatch(engine, key, values) {
                Ok(_) => RunOutcome::Passed,
                Err(err) => RunOutcome::Failed(err.to_string()),
            };
            reports.push(RunReport {
                suite: entry.suite.to_string(),
                name: entry.name.to_string(),
                outcome,
            });
        }
        reports
    }
}

/// Harness-side summary of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub suite: String,
    pub name: String,
    pub outcome: RunOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    Passed,
    Failed(String),
}
