//! Agent and agent-run models
//!
//! Covers `agent/v1/agents` (agent definitions) and `agent/v1/run`
//! (executions of an agent against a prompt).

use super::PageParams;
use crate::schema::enums::string_enum;
use crate::schema::{model_schema, FieldKind, FieldSpec, Item};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

string_enum! {
    /// Lifecycle state of an agent run
    pub enum RunStatus {
        /// Accepted, waiting for a sandbox
        Queued => "queued",
        /// Executing
        Running => "running",
        /// Finished successfully
        Completed => "completed",
        /// Finished with an error
        Failed => "failed",
        /// Stopped by the caller
        Cancelled => "cancelled",
    }
}

impl RunStatus {
    /// Whether the run can no longer change state
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed | RunStatus::Cancelled)
    }
}

string_enum! {
    /// Kind of a recorded run step
    pub enum StepType {
        /// Model text output
        Text => "text",
        /// The agent invoked a tool
        ToolCall => "tool_call",
        /// A tool returned a result
        ToolResult => "tool_result",
        /// Model reasoning
        Thinking => "thinking",
    }
}

/// Sandbox resources for agent runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentSandbox {
    /// vCPU count (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
    /// Memory in MiB (optional)
    #[serde(rename = "memoryMiB", skip_serializing_if = "Option::is_none")]
    pub memory_mib: Option<u32>,
}

impl AgentSandbox {
    /// Create an empty sandbox request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vCPU count
    pub fn with_cpu(mut self, cpu: u32) -> Self {
        self.cpu = Some(cpu);
        self
    }

    /// Set the memory size in MiB
    pub fn with_memory_mib(mut self, memory_mib: u32) -> Self {
        self.memory_mib = Some(memory_mib);
        self
    }
}

model_schema!(AgentSandbox, "AgentSandbox", [
    FieldSpec::optional("cpu", FieldKind::Integer),
    FieldSpec::optional("memoryMiB", FieldKind::Integer),
]);

/// Parameters for `POST agent/v1/agents`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentCreateParams {
    /// System instructions for the agent
    pub instructions: String,
    /// Display name
    pub name: String,
    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Model identifier (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Vaults the agent may read (optional)
    #[serde(rename = "vaultIds", skip_serializing_if = "Option::is_none")]
    pub vault_ids: Option<Vec<String>>,
    /// Tool allow-list (optional)
    #[serde(rename = "enabledTools", skip_serializing_if = "Option::is_none")]
    pub enabled_tools: Option<Vec<String>>,
    /// Tool deny-list (optional)
    #[serde(rename = "disabledTools", skip_serializing_if = "Option::is_none")]
    pub disabled_tools: Option<Vec<String>>,
    /// Sandbox resources (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<Item<AgentSandbox>>,
    /// Free-form metadata (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl AgentCreateParams {
    /// Create parameters from the required fields
    pub fn new(instructions: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            name: name.into(),
            description: None,
            model: None,
            vault_ids: None,
            enabled_tools: None,
            disabled_tools: None,
            sandbox: None,
            metadata: None,
        }
    }

    /// Replace the instructions
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Replace the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the vault IDs
    pub fn with_vault_ids<I, S>(mut self, vault_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vault_ids = Some(vault_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Set the enabled tools
    pub fn with_enabled_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_tools = Some(tools.into_iter().map(Into::into).collect());
        self
    }

    /// Set the disabled tools
    pub fn with_disabled_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_tools = Some(tools.into_iter().map(Into::into).collect());
        self
    }

    /// Set the sandbox, typed or raw
    pub fn with_sandbox(mut self, sandbox: impl Into<Item<AgentSandbox>>) -> Self {
        self.sandbox = Some(sandbox.into());
        self
    }

    /// Set the metadata
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

model_schema!(AgentCreateParams, "AgentCreateParams", [
    FieldSpec::required("instructions", FieldKind::String),
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("model", FieldKind::String),
    FieldSpec::optional("vaultIDs", FieldKind::String).wire("vaultIds").list(),
    FieldSpec::optional("enabledTools", FieldKind::String).list(),
    FieldSpec::optional("disabledTools", FieldKind::String).list(),
    FieldSpec::optional("sandbox", FieldKind::Model(AgentSandbox::schema)),
    FieldSpec::optional("metadata", FieldKind::Mixed),
]);

/// Parameters for `PATCH agent/v1/agents/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentUpdateParams {
    /// New name (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New instructions (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// New model (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// New vault IDs (optional)
    #[serde(rename = "vaultIds", skip_serializing_if = "Option::is_none")]
    pub vault_ids: Option<Vec<String>>,
    /// New sandbox (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<Item<AgentSandbox>>,
    /// New metadata (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl AgentUpdateParams {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the instructions
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the vault IDs
    pub fn with_vault_ids<I, S>(mut self, vault_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vault_ids = Some(vault_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Set the sandbox, typed or raw
    pub fn with_sandbox(mut self, sandbox: impl Into<Item<AgentSandbox>>) -> Self {
        self.sandbox = Some(sandbox.into());
        self
    }

    /// Set the metadata
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

model_schema!(AgentUpdateParams, "AgentUpdateParams", [
    FieldSpec::optional("name", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("instructions", FieldKind::String),
    FieldSpec::optional("model", FieldKind::String),
    FieldSpec::optional("vaultIDs", FieldKind::String).wire("vaultIds").list(),
    FieldSpec::optional("sandbox", FieldKind::Model(AgentSandbox::schema)),
    FieldSpec::optional("metadata", FieldKind::Mixed),
]);

/// An agent definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Agent ID
    pub id: String,
    /// Display name
    pub name: String,
    /// System instructions
    pub instructions: String,
    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Model identifier (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Vaults the agent may read (optional)
    #[serde(rename = "vaultIds", skip_serializing_if = "Option::is_none")]
    pub vault_ids: Option<Vec<String>>,
    /// Tool allow-list (optional)
    #[serde(rename = "enabledTools", skip_serializing_if = "Option::is_none")]
    pub enabled_tools: Option<Vec<String>>,
    /// Tool deny-list (optional)
    #[serde(rename = "disabledTools", skip_serializing_if = "Option::is_none")]
    pub disabled_tools: Option<Vec<String>>,
    /// Sandbox resources (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<AgentSandbox>,
    /// Whether the agent accepts runs (optional)
    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Free-form metadata (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Creation time (optional)
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time (optional)
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

model_schema!(Agent, "Agent", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::required("instructions", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("model", FieldKind::String),
    FieldSpec::optional("vaultIDs", FieldKind::String).wire("vaultIds").list(),
    FieldSpec::optional("enabledTools", FieldKind::String).list(),
    FieldSpec::optional("disabledTools", FieldKind::String).list(),
    FieldSpec::optional("sandbox", FieldKind::Model(AgentSandbox::schema)),
    FieldSpec::optional("isActive", FieldKind::Boolean),
    FieldSpec::optional("metadata", FieldKind::Mixed),
    FieldSpec::optional("createdAt", FieldKind::DateTime),
    FieldSpec::optional("updatedAt", FieldKind::DateTime),
]);

/// Parameters for `GET agent/v1/agents`
pub type AgentListParams = PageParams;

/// Response of `GET agent/v1/agents`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentListResponse {
    /// Agents on this page
    pub agents: Vec<Agent>,
}

model_schema!(AgentListResponse, "AgentListResponse", [
    FieldSpec::required("agents", FieldKind::Model(Agent::schema)).list(),
]);

/// Parameters for `POST agent/v1/run`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunCreateParams {
    /// Agent to run
    #[serde(rename = "agentId")]
    pub agent_id: String,
    /// Task prompt
    pub prompt: String,
    /// Extra guidance appended to the agent instructions (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
    /// Model override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl RunCreateParams {
    /// Create parameters from the required fields
    pub fn new(agent_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            prompt: prompt.into(),
            guidance: None,
            model: None,
        }
    }

    /// Replace the agent ID
    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = agent_id.into();
        self
    }

    /// Replace the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the guidance
    pub fn with_guidance(mut self, guidance: impl Into<String>) -> Self {
        self.guidance = Some(guidance.into());
        self
    }

    /// Set the model override
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

model_schema!(RunCreateParams, "RunCreateParams", [
    FieldSpec::required("agentID", FieldKind::String).wire("agentId"),
    FieldSpec::required("prompt", FieldKind::String),
    FieldSpec::optional("guidance", FieldKind::String),
    FieldSpec::optional("model", FieldKind::String),
]);

/// Response of `POST agent/v1/run`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunCreateResponse {
    /// Run ID
    pub id: String,
    /// Agent being run
    #[serde(rename = "agentId")]
    pub agent_id: String,
    /// Initial status
    pub status: RunStatus,
    /// Creation time (optional)
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

model_schema!(RunCreateResponse, "RunCreateResponse", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("agentID", FieldKind::String).wire("agentId"),
    FieldSpec::required("status", FieldKind::Enum(RunStatus::VALUES)),
    FieldSpec::optional("createdAt", FieldKind::DateTime),
]);

/// Parameters for `GET agent/v1/run`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunListParams {
    /// Only runs of this agent (optional)
    #[serde(rename = "agentId", skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    /// Only runs in this status (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    /// Page size (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page offset (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl RunListParams {
    /// Create an unfiltered listing
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by agent
    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    /// Filter by status, typed (`RunStatus::Queued`) or raw (`"queued"`)
    pub fn with_status(mut self, status: impl Into<RunStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page offset
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

model_schema!(RunListParams, "RunListParams", [
    FieldSpec::optional("agentID", FieldKind::String).wire("agentId"),
    FieldSpec::optional("status", FieldKind::Enum(RunStatus::VALUES)),
    FieldSpec::optional("limit", FieldKind::Integer),
    FieldSpec::optional("offset", FieldKind::Integer),
]);

/// One entry of a run listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Run ID
    pub id: String,
    /// Agent ID
    #[serde(rename = "agentId")]
    pub agent_id: String,
    /// Current status
    pub status: RunStatus,
    /// Creation time (optional)
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Completion time (optional)
    #[serde(rename = "completedAt", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

model_schema!(RunSummary, "RunSummary", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("agentID", FieldKind::String).wire("agentId"),
    FieldSpec::required("status", FieldKind::Enum(RunStatus::VALUES)),
    FieldSpec::optional("createdAt", FieldKind::DateTime),
    FieldSpec::optional("completedAt", FieldKind::DateTime),
]);

/// Response of `GET agent/v1/run`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunListResponse {
    /// Runs on this page
    pub runs: Vec<RunSummary>,
}

model_schema!(RunListResponse, "RunListResponse", [
    FieldSpec::required("runs", FieldKind::Model(RunSummary::schema)).list(),
]);

/// Response of `POST agent/v1/run/{id}/exec`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunExecResponse {
    /// Run ID
    pub id: String,
    /// Status after the start request
    pub status: RunStatus,
    /// Server message (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

model_schema!(RunExecResponse, "RunExecResponse", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("status", FieldKind::Enum(RunStatus::VALUES)),
    FieldSpec::optional("message", FieldKind::String),
]);

/// Response of `GET agent/v1/run/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunGetStatusResponse {
    /// Run ID
    pub id: String,
    /// Current status
    pub status: RunStatus,
    /// Wall-clock duration so far, in milliseconds (optional)
    #[serde(rename = "durationMs", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Start time (optional)
    #[serde(rename = "startedAt", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Completion time (optional)
    #[serde(rename = "completedAt", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

model_schema!(RunGetStatusResponse, "RunGetStatusResponse", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("status", FieldKind::Enum(RunStatus::VALUES)),
    FieldSpec::optional("durationMs", FieldKind::Integer),
    FieldSpec::optional("startedAt", FieldKind::DateTime),
    FieldSpec::optional("completedAt", FieldKind::DateTime),
]);

/// One recorded step of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStep {
    /// Step kind
    #[serde(rename = "type")]
    pub step_type: StepType,
    /// Text content (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Tool name for tool steps (optional)
    #[serde(rename = "toolName", skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    /// Tool input for tool calls (optional)
    #[serde(rename = "toolInput", skip_serializing_if = "Option::is_none")]
    pub tool_input: Option<Value>,
    /// Time the step was recorded (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

model_schema!(RunStep, "RunStep", [
    FieldSpec::required("type", FieldKind::Enum(StepType::VALUES)),
    FieldSpec::optional("content", FieldKind::String),
    FieldSpec::optional("toolName", FieldKind::String),
    FieldSpec::optional("toolInput", FieldKind::Mixed),
    FieldSpec::optional("timestamp", FieldKind::DateTime),
]);

/// Token and tool usage of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunUsage {
    /// Prompt tokens (optional)
    #[serde(rename = "inputTokens", skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    /// Completion tokens (optional)
    #[serde(rename = "outputTokens", skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    /// Tool invocations (optional)
    #[serde(rename = "toolCalls", skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<u64>,
}

model_schema!(RunUsage, "RunUsage", [
    FieldSpec::optional("inputTokens", FieldKind::Integer),
    FieldSpec::optional("outputTokens", FieldKind::Integer),
    FieldSpec::optional("toolCalls", FieldKind::Integer),
]);

/// Response of `GET agent/v1/run/{id}/details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunGetDetailsResponse {
    /// Run ID
    pub id: String,
    /// Agent ID
    #[serde(rename = "agentId")]
    pub agent_id: String,
    /// Current status
    pub status: RunStatus,
    /// Original prompt
    pub prompt: String,
    /// Final output (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Recorded steps (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<RunStep>>,
    /// Usage totals (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<RunUsage>,
    /// Start time (optional)
    #[serde(rename = "startedAt", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Completion time (optional)
    #[serde(rename = "completedAt", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

model_schema!(RunGetDetailsResponse, "RunGetDetailsResponse", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("agentID", FieldKind::String).wire("agentId"),
    FieldSpec::required("status", FieldKind::Enum(RunStatus::VALUES)),
    FieldSpec::required("prompt", FieldKind::String),
    FieldSpec::optional("output", FieldKind::String),
    FieldSpec::optional("steps", FieldKind::Model(RunStep::schema)).list(),
    FieldSpec::optional("usage", FieldKind::Model(RunUsage::schema)),
    FieldSpec::optional("startedAt", FieldKind::DateTime),
    FieldSpec::optional("completedAt", FieldKind::DateTime),
]);

/// Parameters for `POST agent/v1/run/{id}/watch`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunWatchParams {
    /// URL notified when the run finishes
    #[serde(rename = "callbackUrl")]
    pub callback_url: String,
}

impl RunWatchParams {
    /// Create parameters from the required callback URL
    pub fn new(callback_url: impl Into<String>) -> Self {
        Self { callback_url: callback_url.into() }
    }

    /// Replace the callback URL
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = callback_url.into();
        self
    }
}

model_schema!(RunWatchParams, "RunWatchParams", [
    FieldSpec::required("callbackURL", FieldKind::String).wire("callbackUrl"),
]);

/// Response of `POST agent/v1/run/{id}/watch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunWatchResponse {
    /// Whether the watcher was registered
    pub ok: bool,
    /// Registered callback (optional)
    #[serde(rename = "callbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

model_schema!(RunWatchResponse, "RunWatchResponse", [
    FieldSpec::required("ok", FieldKind::Boolean),
    FieldSpec::optional("callbackURL", FieldKind::String).wire("callbackUrl"),
]);

/// Response of `POST agent/v1/run/{id}/cancel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunCancelResponse {
    /// Run ID
    pub id: String,
    /// Status after cancellation
    pub status: RunStatus,
}

model_schema!(RunCancelResponse, "RunCancelResponse", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("status", FieldKind::Enum(RunStatus::VALUES)),
]);
