//! NFP Tools module
//!
//! MCP tool implementations for the Nutrition Facts Panel generator.

pub mod panels;
pub mod status;
