//! Automation agent: simulated side-effect tasks with static feedback.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use quartet_core::{Agent, AgentInput, AgentOutput, QuartetError, Result};

/// The closed set of simulated tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationTask {
    SendEmail,
    GenerateReport,
    TriggerTask,
}

impl AutomationTask {
    /// All tasks, in menu order.
    pub const ALL: [AutomationTask; 3] =
        [AutomationTask::SendEmail, AutomationTask::GenerateReport, AutomationTask::TriggerTask];

    /// The static confirmation each task produces. Severities mirror the
    /// original feedback: success, info, and warning respectively.
    fn feedback(self) -> AgentOutput {
        match self {
            AutomationTask::SendEmail => AgentOutput::success("Email sent (simulated)"),
            AutomationTask::GenerateReport => AgentOutput::info("Report generated (simulated)"),
            AutomationTask::TriggerTask => AgentOutput::warning("Task triggered (simulated)"),
        }
    }
}

impl fmt::Display for AutomationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AutomationTask::SendEmail => "email",
            AutomationTask::GenerateReport => "report",
            AutomationTask::TriggerTask => "task",
        };
        f.write_str(name)
    }
}

impl FromStr for AutomationTask {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "send email" => Ok(AutomationTask::SendEmail),
            "report" | "generate report" => Ok(AutomationTask::GenerateReport),
            "task" | "trigger task" => Ok(AutomationTask::TriggerTask),
            other => Err(format!("unknown task '{other}'")),
        }
    }
}

/// Simulates side effects with static feedback; no collaborator behind it.
#[derive(Debug, Default)]
pub struct AutomationAgent;

impl AutomationAgent {
    /// Create an automation agent.
    pub fn new() -> Self {
        Self
    }

    fn usage() -> String {
        let names: Vec<String> = AutomationTask::ALL.iter().map(|t| t.to_string()).collect();
        format!("Available tasks: {}", names.join(", "))
    }
}

#[async_trait]
impl Agent for AutomationAgent {
    fn name(&self) -> &str {
        "automation"
    }

    async fn handle(&self, input: AgentInput) -> Result<AgentOutput> {
        let AgentInput::Text(text) = input else {
            return Err(QuartetError::Unsupported("automation agent takes text input".into()));
        };

        match text.parse::<AutomationTask>() {
            Ok(task) => Ok(task.feedback()),
            Err(_) => Ok(AgentOutput::info(Self::usage())),
        }
    }
}
