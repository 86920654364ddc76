//! NFP MCP Server Implementation
//!
//! Implements the MCP server with all NFP tools.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::PanelError;
use crate::models::{PanelRequest, ProductMeta};
use crate::render::{ExportFormat, RenderOptions, DEFAULT_DPI};
use crate::tools::panels;
use crate::tools::status::StatusTracker;

/// NFP MCP Service
#[derive(Clone)]
pub struct NfpService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<NfpService>,
}

impl NfpService {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(output_dir))),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GeneratePanelParams {
    pub product_name: String,
    /// Serving size label as printed, e.g. "2/3 cup (124g)"
    pub serving_size: String,
    pub servings_per_container: i64,
    /// Per-serving amount for every nutrient id from list_nutrients
    pub amounts: BTreeMap<String, f64>,
    /// "png" or "pdf"; omit to skip writing a file
    pub export: Option<String>,
    #[serde(default)]
    pub include_layout: bool,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
}

fn default_dpi() -> u32 { DEFAULT_DPI }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RoundNutrientParams {
    /// Nutrient id, e.g. "sodium" or "total_fat"
    pub nutrient: String,
    pub amount: f64,
}

/// Caller-fixable errors become invalid_params, everything else is internal
fn tool_error(e: PanelError) -> McpError {
    if e.is_user_error() || matches!(e, PanelError::UnknownNutrientId(_)) {
        McpError::invalid_params(e.to_string(), None)
    } else {
        tracing::warn!("Tool failed: {}", e);
        McpError::internal_error(e.to_string(), None)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl NfpService {
    // --- Status ---

    #[tool(description = "Get the current status of the NFP service including build info, output directory, and process information")]
    async fn nfp_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = to_json(&status)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for generating a Nutrition Facts panel. Call this when unsure about nutrient ids, units, or rounding.")]
    fn panel_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PANEL_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PANEL_INSTRUCTIONS)]))
    }

    // --- Panels ---

    #[tool(description = "Generate a dual-column (per serving / per container) Nutrition Facts panel. Returns rounded values, %DV and display text for every nutrient; optionally exports a PNG or PDF.")]
    async fn generate_nutrition_panel(&self, Parameters(p): Parameters<GeneratePanelParams>) -> Result<CallToolResult, McpError> {
        let export = match p.export.as_deref() {
            Some(s) => Some(ExportFormat::from_str(s).ok_or_else(|| {
                McpError::invalid_params(format!("Unsupported export format '{}', expected png or pdf", s), None)
            })?),
            None => None,
        };

        let request = PanelRequest::new(
            ProductMeta {
                name: p.product_name,
                serving_size: p.serving_size,
                servings_per_container: p.servings_per_container,
            },
            p.amounts,
        );
        let options = RenderOptions::with_dpi(p.dpi).map_err(tool_error)?;
        let output_dir = self.status_tracker.lock().await.output_dir().clone();

        let result = panels::generate_panel(
            &request,
            export,
            p.include_layout,
            &output_dir,
            &options,
        )
        .map_err(tool_error)?;
        let json = to_json(&result)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Round a single per-serving amount with its nutrient's label rule and report the display text and %DV")]
    fn round_nutrient(&self, Parameters(p): Parameters<RoundNutrientParams>) -> Result<CallToolResult, McpError> {
        let result = panels::round_nutrient(&p.nutrient, p.amount).map_err(tool_error)?;
        let json = to_json(&result)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List supported nutrients in panel order with units, rounding rule and Daily Value")]
    fn list_nutrients(&self) -> Result<CallToolResult, McpError> {
        let json = to_json(&panels::list_nutrients())?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NfpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nfp".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutrition Facts Panel Generator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutrition Facts Panel Generator (NFP) - dual-column label rounding, layout and export. \
                 IMPORTANT: Call panel_instructions before generating a first panel. \
                 Panels: generate_nutrition_panel (optionally export png/pdf). \
                 Rules: round_nutrient, list_nutrients. \
                 Service: nfp_status."
                    .into(),
            ),
        }
    }
}
