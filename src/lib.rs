//! Nutrition Facts Panel Generator (NFP) Library
//!
//! Regulatory rounding, %DV, amount formatting and dual-column panel layout,
//! with PNG/PDF rendering and an MCP service on top.

pub mod build_info;
pub mod config;
pub mod error;
pub mod layout;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod render;
pub mod tools;

pub use error::{PanelError, PanelResult};
pub use layout::generate_panel;
