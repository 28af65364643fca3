//! # Ports
//!
//! The inbound API of this subsystem is [`crate::service::StudyService`]
//! itself; only the outbound dependencies are abstracted here. The share
//! lifecycle's `TokenGenerator`, `Clock` and `ShareTokenDirectory` ports are
//! reused from lk-02.

pub mod outbound;
