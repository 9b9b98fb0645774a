//! Production and stub implementations of the DI traits.
//!
//! Real providers are used for capabilities with full backend support.
//! Stub providers are used for capabilities whose backends aren't configured,
//! allowing them to appear in the capability registry while returning
//! "not configured" errors at execution time.

pub mod http;
pub mod stubs;

pub use http::ReqwestHttpClient;
pub use stubs::{
    StubCalendarClient, StubFileCourier, StubNotebookEditor, StubSpeechSynthesizer,
    StubStudyPipeline,
};
