//! The search backend as seen by the transformer.
//!
//! [`response`] models the multi-search envelope the backend returns and
//! [`client`] is the seam through which raw payloads are obtained.

pub mod client;
pub mod response;

pub use client::*;
pub use response::*;
