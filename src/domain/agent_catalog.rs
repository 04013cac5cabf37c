//! Agent-type catalog shown alongside the form.

/// A group of example agents sharing a purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentCategory {
    pub name: &'static str,
    pub agents: [&'static str; 3],
}

/// Example agents per category, one per supported domain.
pub static AGENT_CATALOG: [AgentCategory; 3] = [
    AgentCategory {
        name: "Assistants",
        agents: [
            "Personal Healthcare Assistant",
            "Retail Shopping Assistant",
            "Banking Assistant",
        ],
    },
    AgentCategory {
        name: "Research Agents",
        agents: [
            "Medical Literature Analyzer",
            "Customer Sentiment Tracker",
            "Fraud Pattern Researcher",
        ],
    },
    AgentCategory {
        name: "Content Generators",
        agents: [
            "Healthcare Report Generator",
            "Retail Product Descriptions",
            "Compliance Report Generator",
        ],
    },
];

impl AgentCategory {
    /// Agents joined for single-line display.
    pub fn agent_list(&self) -> String {
        self.agents.join(", ")
    }
}
