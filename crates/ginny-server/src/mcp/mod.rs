//! MCP (Model Context Protocol) Server for Ginny
//!
//! Exposes the budget actions to the conversational assistant as MCP tools.
//! Unlike the REST budget endpoints, mutations here answer with guidance
//! strings, never HTTP errors, so the assistant can relay them as-is.
//!
//! # Architecture
//!
//! The MCP server runs on a separate port from the main REST API, using
//! HTTP/SSE (Streamable HTTP) transport. It shares the REST server's
//! session, so a change made through one is visible through the other.
//!
//! # Example
//!
//! ```bash
//! ginny serve --port 3000 --mcp-port 3001
//! ```
//!
//! # Available Tools
//!
//! - `update_income` / `update_expense` / `delete_expense` - Edit the budget
//! - `provide_suggestion` - Category or overall advice
//! - `what_if_scenario` - Project a change without applying it
//! - `roast_user_spending_habits` - Data for a roast of the budget
//! - `reset_budget` - Start over
//! - `get_budget_context` - Current budget as JSON

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use tracing::info;

use ginny_core::actions::{
    DeleteExpenseParams, ProvideSuggestionParams, ResetBudgetParams, RoastParams,
    UpdateExpenseParams, UpdateIncomeParams, WhatIfScenarioParams,
};
use ginny_core::ASSISTANT_INSTRUCTIONS;

use crate::SharedSession;

/// Ginny MCP Server state
#[derive(Clone)]
pub struct GinnyMcpServer {
    /// Session shared with the REST API
    session: SharedSession,
    /// Tool router for MCP operations
    tool_router: ToolRouter<Self>,
}

fn text(response: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(response)]))
}

impl GinnyMcpServer {
    pub fn new(session: SharedSession) -> Self {
        Self {
            session,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for GinnyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ginny".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Ginny Budgeting Assistant".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(ASSISTANT_INSTRUCTIONS.to_string()),
        }
    }
}

#[tool_router]
impl GinnyMcpServer {
    #[tool(description = "Update the user's monthly income")]
    async fn update_income(
        &self,
        Parameters(params): Parameters<UpdateIncomeParams>,
    ) -> Result<CallToolResult, McpError> {
        text(self.session.lock().await.update_income(params))
    }

    #[tool(description = "Add or update an expense category")]
    async fn update_expense(
        &self,
        Parameters(params): Parameters<UpdateExpenseParams>,
    ) -> Result<CallToolResult, McpError> {
        text(self.session.lock().await.update_expense(params))
    }

    #[tool(description = "Remove an expense category from the budget")]
    async fn delete_expense(
        &self,
        Parameters(params): Parameters<DeleteExpenseParams>,
    ) -> Result<CallToolResult, McpError> {
        text(self.session.lock().await.delete_expense(params))
    }

    #[tool(
        description = "Analyze the budget and provide a specific suggestion for improvement. Pass a category to focus on it."
    )]
    async fn provide_suggestion(
        &self,
        Parameters(params): Parameters<ProvideSuggestionParams>,
    ) -> Result<CallToolResult, McpError> {
        text(self.session.lock().await.provide_suggestion(params))
    }

    #[tool(
        description = "Show what would happen if the user changed a specific expense. Does not change the budget."
    )]
    async fn what_if_scenario(
        &self,
        Parameters(params): Parameters<WhatIfScenarioParams>,
    ) -> Result<CallToolResult, McpError> {
        text(self.session.lock().await.what_if_scenario(params))
    }

    #[tool(
        description = "Analyze the user's worst spending categories and savings rate, returning the data and instructions for a personalized roast."
    )]
    async fn roast_user_spending_habits(
        &self,
        Parameters(params): Parameters<RoastParams>,
    ) -> Result<CallToolResult, McpError> {
        text(self.session.lock().await.roast_user_spending_habits(params))
    }

    #[tool(description = "Clear the budget and start over")]
    async fn reset_budget(&self) -> Result<CallToolResult, McpError> {
        text(
            self.session
                .lock()
                .await
                .reset_budget(ResetBudgetParams::default()),
        )
    }

    #[tool(
        description = "Get the user's current budget data including income, expenses, and remaining savings"
    )]
    async fn get_budget_context(&self) -> Result<CallToolResult, McpError> {
        let context = self.session.lock().await.context();
        text(context.render())
    }
}

/// Start the MCP server on the given port
pub async fn start_mcp_server(session: SharedSession, host: &str, port: u16) -> anyhow::Result<()> {
    use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
    use rmcp::transport::streamable_http_server::StreamableHttpService;

    info!("Starting MCP server at http://{}:{}/mcp", host, port);

    let service = StreamableHttpService::new(
        move || Ok(GinnyMcpServer::new(session.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("MCP server ready at http://{}/mcp", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ginny_core::BudgetSession;

    fn server() -> GinnyMcpServer {
        GinnyMcpServer::new(crate::shared_session(BudgetSession::default()))
    }

    fn response_text(result: CallToolResult) -> String {
        let value = serde_json::to_value(&result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_tools_registered() {
        let server = server();
        let names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        for expected in [
            "update_income",
            "update_expense",
            "delete_expense",
            "provide_suggestion",
            "what_if_scenario",
            "roast_user_spending_habits",
            "reset_budget",
            "get_budget_context",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_server_info_carries_instructions() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "ginny");
        assert!(info.instructions.unwrap().contains("50/30/20"));
    }

    #[tokio::test]
    async fn test_tools_share_session() {
        let server = server();

        let result = server
            .update_income(Parameters(UpdateIncomeParams { amount: 4000.0 }))
            .await
            .unwrap();
        assert!(response_text(result).contains("$4000/month"));

        server
            .update_expense(Parameters(UpdateExpenseParams {
                category: "diningOut".to_string(),
                amount: 200.0,
            }))
            .await
            .unwrap();

        let context = response_text(server.get_budget_context().await.unwrap());
        assert!(context.contains("\"diningOut\": 200.0"));

        let suggestion = response_text(
            server
                .provide_suggestion(Parameters(ProvideSuggestionParams {
                    category: Some("diningOut".to_string()),
                }))
                .await
                .unwrap(),
        );
        assert!(suggestion.contains("save $120/month"));

        server.reset_budget().await.unwrap();
        assert!(!server.session.lock().await.store().has_budget());
    }
}
