//! Test Fixtures
//!
//! Dispatchers wired to recording fakes.

use super::mock_backends::{
    recorded, CallLog, MemoryPersistence, MockQueryService, MockScriptEngine, MockShell,
};
use cll::backends::Backends;
use cll::Dispatcher;

/// A dispatcher together with the logs of everything it sent out
pub struct TestHarness {
    pub dispatcher: Dispatcher,
    pub shell_calls: CallLog,
    pub script_calls: CallLog,
    pub query_calls: CallLog,
    pub persistence: MemoryPersistence,
}

impl TestHarness {
    /// Harness with default fakes and no aliases
    pub fn new() -> Self {
        Self::build(MockShell::new(), MockQueryService::new(), MemoryPersistence::new())
    }

    /// Harness with a customised shell
    pub fn with_shell(shell: MockShell) -> Self {
        Self::build(shell, MockQueryService::new(), MemoryPersistence::new())
    }

    /// Harness whose query service always fails
    pub fn with_unavailable_query() -> Self {
        Self::build(
            MockShell::new(),
            MockQueryService::unavailable(),
            MemoryPersistence::new(),
        )
    }

    /// Harness whose persistence starts with `aliases`
    pub fn with_aliases(aliases: &[(&str, &str)]) -> Self {
        Self::build(
            MockShell::new(),
            MockQueryService::new(),
            MemoryPersistence::with_aliases(aliases),
        )
    }

    pub fn build(shell: MockShell, query: MockQueryService, persistence: MemoryPersistence) -> Self {
        let script = MockScriptEngine::new();
        let shell_calls = shell.calls.clone();
        let script_calls = script.calls.clone();
        let query_calls = query.calls.clone();

        let backends = Backends::new(Box::new(shell), Box::new(script), Box::new(query));
        let dispatcher = Dispatcher::new(backends, Box::new(persistence.handle()));

        Self {
            dispatcher,
            shell_calls,
            script_calls,
            query_calls,
            persistence,
        }
    }

    pub fn shell_calls(&self) -> Vec<String> {
        recorded(&self.shell_calls)
    }

    pub fn script_calls(&self) -> Vec<String> {
        recorded(&self.script_calls)
    }

    pub fn query_calls(&self) -> Vec<String> {
        recorded(&self.query_calls)
    }

    /// Whether no collaborator has been called
    pub fn nothing_ran(&self) -> bool {
        self.shell_calls().is_empty()
            && self.script_calls().is_empty()
            && self.query_calls().is_empty()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A dispatcher with default fakes
pub fn create_test_dispatcher() -> Dispatcher {
    TestHarness::new().dispatcher
}
