use std::collections::HashMap;

use tracing::{debug, warn};

use shoal_state::WorldState;

use crate::envelope::{CallEnvelope, ResponseEnvelope};
use crate::handler::TransactionHandler;

/// Maps function names to handlers and guards the call boundary.
///
/// The registry is an explicit value built once at construction; nothing
/// can be registered afterwards. Each call runs to completion
/// synchronously: resolve the name, invoke the handler, convert the
/// outcome into exactly one [`ResponseEnvelope`]. A dispatch miss is a
/// call failure reported to the caller, never a process fault.
pub struct Dispatcher {
    handlers: HashMap<String, Box<dyn TransactionHandler>>,
}

impl Dispatcher {
    /// Build a dispatcher from its full handler set.
    ///
    /// When two handlers claim the same name the later one wins and the
    /// collision is logged.
    pub fn new(handlers: Vec<Box<dyn TransactionHandler>>) -> Self {
        let mut map: HashMap<String, Box<dyn TransactionHandler>> =
            HashMap::with_capacity(handlers.len());
        for handler in handlers {
            let name = handler.name().to_string();
            if map.insert(name.clone(), handler).is_some() {
                warn!(function = %name, "duplicate handler registration, keeping the later one");
            }
        }
        Self { handlers: map }
    }

    /// Number of registered functions.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if a handler is registered under `function`.
    pub fn contains(&self, function: &str) -> bool {
        self.handlers.contains_key(function)
    }

    /// Registered function names in sorted order.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run one call against the given world state.
    ///
    /// Every outcome — handler success, handler failure, unknown function —
    /// becomes exactly one envelope. Handler errors are rendered through
    /// their display form so the caller always receives a readable message.
    pub fn dispatch(&self, state: &dyn WorldState, call: &CallEnvelope) -> ResponseEnvelope {
        let Some(handler) = self.handlers.get(call.function.as_str()) else {
            debug!(function = %call.function, "dispatch miss");
            return ResponseEnvelope::failure(format!("unknown function: {}", call.function));
        };

        debug!(function = %call.function, args = call.args.len(), "dispatching");
        match handler.invoke(state, &call.args) {
            Ok(payload) => ResponseEnvelope::success(payload),
            Err(err) => {
                debug!(function = %call.function, error = %err, "call failed");
                ResponseEnvelope::failure(err.to_string())
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("functions", &self.function_names())
            .finish()
    }
}
