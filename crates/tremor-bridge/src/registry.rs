// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native module registration and lifecycle.
//
// The registry is created once when the host initializes and torn down
// exactly once when the host context goes away. Modules are looked up by a
// stable name string; the scripting side reads each module's constants
// rather than hard-coding event names.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{info, instrument};

use tremor_core::error::{Result, TremorError};

/// A native-side bridge module hosted by the scripting runtime.
pub trait NativeModule: Send {
    /// Stable identifier used for registration lookup. The same constant
    /// across calls and across instances.
    fn name(&self) -> &'static str;

    /// Read-only configuration surface exposed to the scripting side.
    fn constants(&self) -> HashMap<String, Value> {
        HashMap::new()
    }

    /// Teardown hook, invoked once by the host lifecycle. Must be
    /// idempotent — a second call is a no-op.
    fn destroy(&mut self) {}
}

/// Holds every registered module for the lifetime of the host.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<&'static str, Box<dyn NativeModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its own name. Duplicate names are an error.
    #[instrument(skip_all, fields(module = module.name()))]
    pub fn register(&mut self, module: Box<dyn NativeModule>) -> Result<()> {
        let name = module.name();
        if self.modules.contains_key(name) {
            return Err(TremorError::DuplicateModule(name.to_string()));
        }
        self.modules.insert(name, module);
        info!("module registered");
        Ok(())
    }

    /// Constants of the named module.
    pub fn constants_of(&self, name: &str) -> Result<HashMap<String, Value>> {
        self.modules
            .get(name)
            .map(|module| module.constants())
            .ok_or_else(|| TremorError::ModuleNotFound(name.to_string()))
    }

    /// Names of all registered modules.
    pub fn names(&self) -> Vec<&'static str> {
        self.modules.keys().copied().collect()
    }

    /// Tear down every module and drain the registry.
    ///
    /// Invoked once by the host lifecycle at shutdown; each module's
    /// `destroy` runs exactly once. Calling this again is a no-op.
    #[instrument(skip(self))]
    pub fn destroy_all(&mut self) {
        for (name, mut module) in self.modules.drain() {
            module.destroy();
            info!(module = name, "module destroyed");
        }
    }
}
