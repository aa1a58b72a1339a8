//! Shared plumbing for the `ionscope` and `ionscope-domains` binaries:
//! settings loading, credential resolution, error mapping, and the
//! report pipeline. The two mains differ only in their flag surface and
//! which credential chain they accept.

pub mod config;
pub mod error;
pub mod login;
pub mod run;
