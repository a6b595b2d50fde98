use crate::config::Config;
use crate::models::{AffectTarget, ChatCompletionResponse, MoodAnalysis, MoodPayload};
use anyhow::{Context, Result};
use std::time::Duration;
use ureq::Agent;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are an experienced DJ and music psychologist. \
     Respond with a single JSON object and nothing else.";

/// Affect analysis backend for mood text.
///
/// Callers treat any error from these methods as a signal to fall back
/// to neutral values rather than abort.
#[cfg_attr(test, mockall::automock)]
pub trait MoodAnalyzer {
    /// Estimate valence, energy and a short diagnosis for a mood description
    fn analyze_mood(&self, mood_text: &str) -> Result<AffectTarget>;

    /// Estimate the affect target and pick matching genres from the catalog.
    /// An empty `genre_hint` means the listener gave no preference.
    fn analyze_mood_with_genres(
        &self,
        mood_text: &str,
        genre_hint: &str,
        catalog_genres: &[String],
    ) -> Result<MoodAnalysis>;
}

/// A simple OpenAI chat-completions client
pub struct OpenAiClient {
    agent: Agent,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Create a new client with configuration from environment
    pub fn new(config: Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();

        OpenAiClient {
            agent,
            api_key: config.api_key,
            model: config.model,
        }
    }

    /// Send one chat completion request and return the message content
    fn request_completion(&self, prompt: &str) -> Result<String> {
        let response = self
            .agent
            .post(CHAT_COMPLETIONS_URL)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(serde_json::json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                    {"role": "user", "content": prompt},
                ],
                "response_format": {"type": "json_object"},
            }))
            .map_err(|e| anyhow::anyhow!("Chat completion request failed: {e}"))?;

        let parsed: ChatCompletionResponse = response
            .into_json()
            .context("Failed to parse chat completion response")?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .context("Chat completion returned no choices")?;

        Ok(choice.message.content)
    }
}

impl MoodAnalyzer for OpenAiClient {
    fn analyze_mood(&self, mood_text: &str) -> Result<AffectTarget> {
        let content = self.request_completion(&affect_prompt(mood_text))?;
        parse_affect_payload(&content)
    }

    fn analyze_mood_with_genres(
        &self,
        mood_text: &str,
        genre_hint: &str,
        catalog_genres: &[String],
    ) -> Result<MoodAnalysis> {
        let prompt = analysis_prompt(mood_text, genre_hint, catalog_genres);
        let content = self.request_completion(&prompt)?;
        parse_analysis_payload(&content)
    }
}

fn affect_prompt(mood_text: &str) -> String {
    format!(
        "Analyze this mood description: \"{mood_text}\".\n\
         Return a JSON object with exactly these keys:\n\
         - \"valence\": positivity of the mood from 0.0 (sad) to 1.0 (euphoric)\n\
         - \"energy\": intensity of the mood from 0.0 (calm) to 1.0 (energetic)\n\
         - \"diagnosis\": a short description of the vibe in a few words"
    )
}

fn analysis_prompt(mood_text: &str, genre_hint: &str, catalog_genres: &[String]) -> String {
    let mut prompt = format!("Analyze this mood description: \"{mood_text}\".\n");
    if !genre_hint.trim().is_empty() {
        prompt.push_str(&format!(
            "The listener also asked for: \"{}\".\n",
            genre_hint.trim()
        ));
    }
    prompt.push_str(&format!(
        "Genres available in the song catalog: {}.\n",
        catalog_genres.join(", ")
    ));
    prompt.push_str(
        "Return a JSON object with exactly these keys:\n\
         - \"valence\": positivity of the mood from 0.0 (sad) to 1.0 (euphoric)\n\
         - \"energy\": intensity of the mood from 0.0 (calm) to 1.0 (energetic)\n\
         - \"diagnosis\": a short description of the vibe in a few words\n\
         - \"selected_genres\": an array of genre names copied verbatim from the \
         catalog list that fit the mood, or the string \"ALL\" when any genre works",
    );
    prompt
}

/// Parse a model response into an affect target, tolerating missing keys
pub(crate) fn parse_affect_payload(content: &str) -> Result<AffectTarget> {
    let payload: MoodPayload = serde_json::from_str(strip_code_fence(content))
        .context("Mood response was not valid JSON")?;
    Ok(payload.into_target())
}

/// Parse a model response into an affect target plus genre selection
pub(crate) fn parse_analysis_payload(content: &str) -> Result<MoodAnalysis> {
    let payload: MoodPayload = serde_json::from_str(strip_code_fence(content))
        .context("Mood response was not valid JSON")?;
    Ok(payload.into_analysis())
}

/// Strip a Markdown code fence if the model wrapped its JSON in one
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}
