//! Initialization failures.
//!
//! Initialization is the only fallible entry point. Rendering and parameter
//! calls clamp instead of failing.

use reverie_core::DelayError;

use crate::storage::StorageStage;

/// Reasons [`ReverbEngine::initialize`](crate::ReverbEngine::initialize) refuses
/// to build an engine. No partially built engine is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// The network is tuned for one sample rate only.
    #[error("unsupported sample rate {0} Hz (engine runs at 48000 Hz only)")]
    UnsupportedSampleRate(u32),

    /// The host offered something other than stereo in / stereo out.
    #[error("unsupported channel geometry {inputs} in / {outputs} out (need 2 in / 2 out)")]
    ChannelGeometry {
        /// Input channels offered.
        inputs: u8,
        /// Output channels offered.
        outputs: u8,
    },

    /// The storage provider returned nothing for a stage.
    #[error("no storage available for the {stage} ({requested} samples requested)")]
    StorageUnavailable {
        /// Stage whose request failed.
        stage: StorageStage,
        /// Samples requested.
        requested: usize,
    },

    /// The storage provider returned a store that is too small.
    #[error("{stage} storage too small: {provided} samples provided, {required} required")]
    InsufficientStorage {
        /// Stage whose request was short.
        stage: StorageStage,
        /// Samples the stage needs.
        required: usize,
        /// Samples actually handed over.
        provided: usize,
    },

    /// A delay line could not be bound to its store.
    #[error(transparent)]
    Delay(#[from] DelayError),
}
