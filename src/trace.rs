//! Diagnostic events emitted while a pipeline runs.
//!
//! With the `tracing` feature enabled these hooks report to the `tracing`
//! ecosystem under the `chainsmoke` target. Without it they compile to nothing.
//! Events never change what a stage returns.

use crate::types::RailroadKind;

#[cfg(feature = "tracing")]
const UNNAMED: &str = "<anonymous stage>";

/// A stage received a container on the failure track and skipped its body.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn short_circuit(stage: Option<&'static str>, kind: RailroadKind) {
    tracing::trace!(
        target: "chainsmoke",
        stage = stage.unwrap_or(UNNAMED),
        kind = kind.name(),
        "stage skipped on failure track"
    );
}

/// A stage body returned an error.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn stage_failed<E>(stage: Option<&'static str>, kind: RailroadKind, captured: bool) {
    tracing::debug!(
        target: "chainsmoke",
        stage = stage.unwrap_or(UNNAMED),
        kind = kind.name(),
        error_type = core::any::type_name::<E>(),
        captured,
        "stage body failed"
    );
}

/// A `Maybe` failure dropped the error that caused it.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn discarded<E>(_error: &E) {
    tracing::debug!(
        target: "chainsmoke",
        error_type = core::any::type_name::<E>(),
        "error discarded by Maybe::Nothing"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn short_circuit(_stage: Option<&'static str>, _kind: RailroadKind) {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn stage_failed<E>(_stage: Option<&'static str>, _kind: RailroadKind, _captured: bool) {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn discarded<E>(_error: &E) {}
