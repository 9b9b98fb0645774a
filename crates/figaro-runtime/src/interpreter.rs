//! Selection interpreter — classify a reasoning-service reply.
//!
//! Pure policy layer between the gateway and the dispatcher. Takes the reply
//! exactly as the gateway returned it plus the capability registry, and
//! produces a [`Selection`]. Nothing here performs I/O, so every policy rule
//! is unit-testable without a live reasoning service.
//!
//! Policy:
//! - No structured choice → the reply is prose, [`Selection::Text`]
//! - Several structured choices → the first wins, the rest are logged and
//!   dropped (the orchestrator dispatches at most one capability per turn)
//! - Unknown capability name → [`MalformedSelection::UnknownCapability`]
//! - Argument validation is *presence-only*: a required parameter supplied as
//!   JSON `null` passes interpretation and is left to the capability's own
//!   type checks. The first missing required parameter in schema order is
//!   the one reported.

use figaro_capabilities::registry::CapabilityRegistry;
use figaro_core::selection::{MalformedSelection, Selection};
use figaro_llm::gateway::GatewayReply;
use tracing::debug;

/// Interpret one gateway reply against the registered capability schemas.
#[must_use]
pub fn interpret(reply: &GatewayReply, registry: &CapabilityRegistry) -> Selection {
    let Some(choice) = reply.choices.first() else {
        return Selection::Text(reply.text.clone().unwrap_or_default());
    };
    if reply.choices.len() > 1 {
        debug!(
            chosen = %choice.name,
            dropped = reply.choices.len() - 1,
            "multiple capability choices in reply, using the first"
        );
    }

    let Some(capability) = registry.get(&choice.name) else {
        return Selection::Malformed(MalformedSelection::UnknownCapability {
            capability: choice.name.clone(),
        });
    };

    let spec = capability.spec();
    for parameter in spec.required_parameters() {
        if !choice.arguments.contains_key(&parameter.name) {
            return Selection::Malformed(MalformedSelection::MissingArgument {
                capability: choice.name.clone(),
                parameter: parameter.name.clone(),
            });
        }
    }

    Selection::Capability {
        name: choice.name.clone(),
        arguments: choice.arguments.clone(),
    }
}
