//! Integration tests for the Askbot relay
//!
//! These tests drive the real router and clients against wiremock
//! stand-ins for the Telegram Bot API and the completions endpoint.
