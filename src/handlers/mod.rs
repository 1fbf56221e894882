//! HTTP request handlers
//!
//! This module organizes all handlers into logical groups:
//! - `api` - Health check endpoint
//! - `swaig` - SWAIG webhook (dispatch + signature advertising)
//! - `transfer` - Call transfer function
//! - `message` - Outbound SMS function

pub mod api;
pub mod message;
pub mod swaig;
pub mod transfer;
