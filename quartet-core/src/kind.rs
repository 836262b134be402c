//! The closed set of agent kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four agents the demo exposes.
///
/// Dispatch happens once at the boundary: the shell resolves an
/// `AgentKind` from the menu selection and constructs the matching
/// handler, rather than branching on a menu string per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Single-turn chat against a hosted language model.
    Chat,
    /// PDF ingestion and similarity-search retrieval.
    Document,
    /// Text-to-speech synthesis (only offered when configured).
    Voice,
    /// Simulated side-effect tasks with static feedback.
    Automation,
}

impl AgentKind {
    /// All kinds, in menu order.
    pub const ALL: [AgentKind; 4] =
        [AgentKind::Chat, AgentKind::Document, AgentKind::Voice, AgentKind::Automation];
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Chat => "chat",
            AgentKind::Document => "document",
            AgentKind::Voice => "voice",
            AgentKind::Automation => "automation",
        };
        f.write_str(name)
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(AgentKind::Chat),
            "document" | "doc" => Ok(AgentKind::Document),
            "voice" => Ok(AgentKind::Voice),
            "automation" | "auto" => Ok(AgentKind::Automation),
            other => Err(format!("unknown agent kind '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("doc".parse::<AgentKind>().unwrap(), AgentKind::Document);
        assert_eq!("Chat".parse::<AgentKind>().unwrap(), AgentKind::Chat);
        assert!("mystery".parse::<AgentKind>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for kind in AgentKind::ALL {
            assert_eq!(kind.to_string().parse::<AgentKind>().unwrap(), kind);
        }
    }
}
