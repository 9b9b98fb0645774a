//! Dispatcher — execute exactly one interpreted selection.
//!
//! Terminal stage of a turn: every [`Selection`] maps to exactly one
//! [`TurnOutcome`], and a capability body runs at most once per turn. Errors
//! from the capability are folded into the outcome rather than propagated,
//! so callers never need their own recovery path.

use std::time::{Duration, Instant};

use figaro_capabilities::registry::CapabilityRegistry;
use figaro_capabilities::traits::CapabilityContext;
use figaro_core::outcome::TurnOutcome;
use figaro_core::selection::{MalformedSelection, Selection};
use tracing::{debug, info, warn};

/// Dispatch one selection against the registry.
///
/// Cancellation is observed before the capability body starts; once a
/// capability is running it is awaited to completion.
pub async fn dispatch(
    selection: Selection,
    registry: &CapabilityRegistry,
    ctx: &CapabilityContext,
) -> TurnOutcome {
    match selection {
        Selection::Text(text) => {
            debug!(turn_id = %ctx.turn_id, "reply carried no capability choice");
            TurnOutcome::NoOpText { text }
        }
        Selection::Malformed(reason) => {
            warn!(turn_id = %ctx.turn_id, %reason, "selection rejected");
            TurnOutcome::RejectedSelection { reason }
        }
        Selection::Capability { name, arguments } => {
            // The interpreter resolved the name already, but the registry is
            // the only authority on what is dispatchable.
            let Some(capability) = registry.get(&name) else {
                warn!(turn_id = %ctx.turn_id, capability = %name, "selection names unregistered capability");
                return TurnOutcome::RejectedSelection {
                    reason: MalformedSelection::UnknownCapability { capability: name },
                };
            };

            if ctx.cancellation.is_cancelled() {
                warn!(turn_id = %ctx.turn_id, capability = %name, "turn cancelled before dispatch");
                return TurnOutcome::CapabilityFailure {
                    capability: name,
                    error: "cancelled before dispatch".into(),
                };
            }

            let start = Instant::now();
            match capability.execute(arguments, ctx).await {
                Ok(result) => {
                    info!(
                        turn_id = %ctx.turn_id,
                        capability = %name,
                        duration_ms = duration_ceil_ms(start.elapsed()),
                        "capability dispatched"
                    );
                    TurnOutcome::Dispatched {
                        capability: name,
                        result,
                    }
                }
                Err(error) => {
                    warn!(
                        turn_id = %ctx.turn_id,
                        capability = %name,
                        duration_ms = duration_ceil_ms(start.elapsed()),
                        error = %error,
                        "capability failed"
                    );
                    TurnOutcome::CapabilityFailure {
                        capability: name,
                        error: error.to_string(),
                    }
                }
            }
        }
    }
}

/// Milliseconds for a duration, rounded up. `Duration::as_millis` truncates,
/// which logs fast capability runs as `0`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn duration_ceil_ms(duration: Duration) -> u64 {
    duration.as_micros().div_ceil(1_000) as u64
}
