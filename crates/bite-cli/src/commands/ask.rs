use serde::Serialize;

use bite_ai::OllamaClient;
use bite_config::BiteConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::output::{Reply, output};

#[derive(Debug, Serialize)]
pub struct Answer {
    pub model: String,
    pub response: String,
}

impl Reply for Answer {
    fn text(&self) -> String {
        self.response.clone()
    }
}

/// Join the prompt words back into one line.
fn prompt_text(args: &AskArgs) -> String {
    args.prompt.join(" ")
}

/// Handle `bitebot ask`. Runs without opening the catalog.
pub async fn handle(args: &AskArgs, config: &BiteConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = OllamaClient::new(&config.ollama)?;
    let response = client.generate(&prompt_text(args)).await?;
    let reply = Answer {
        model: client.model().to_string(),
        response,
    };
    output(&reply, flags.format)
}
