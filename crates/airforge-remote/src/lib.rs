//! Remote build-and-push dispatch for airforge.
//!
//! One request, one POST: the dispatcher serializes a
//! [`BuildRequest`](airforge_core::BuildRequest) and submits it to the
//! build service. No retries, no polling — whatever orchestration the
//! service performs stays on its side of the wire.

pub mod client;
pub mod transport;

pub use client::{BuildClient, BuildResult, DispatchError};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
