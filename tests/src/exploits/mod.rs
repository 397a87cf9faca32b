//! # Exploit Simulations
//!
//! Forgery and side-channel attempts against signed messages.
