//! Optional free-text narration of a finished result.
//!
//! The template narrator is deterministic and always available. Generative narrators call a
//! hosted model and are best-effort: [`narrate_with_fallback`] bounds them with a timeout and
//! substitutes the template text on any failure.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::result::AssessmentResult;
use super::scoring::RiskLevel;
use crate::config::{NarrationConfig, NarratorKind};

const SYSTEM_PROMPT: &str = "You are a career counselor for Indian students.";
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.7;
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("narrator API error: status={status}, body={body}")]
    Api { status: u16, body: String },
    #[error("narrator returned invalid response: {0}")]
    InvalidResponse(String),
    #[error("narrator timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait Narrator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn narrate(&self, result: &AssessmentResult) -> Result<String, NarrationError>;
}

/// Deterministic markdown summary built only from the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    pub fn render(result: &AssessmentResult) -> String {
        let best = result.best_career_path.label();
        let compatibility = result
            .best_score()
            .map(|score| score.percentage)
            .unwrap_or_default();
        let level = result.risk.level;

        format!(
            "## Your CareerManifest Analysis\n\
             \n\
             ### Recommended Path: {best}\n\
             \n\
             Based on your academic background, financial situation, personality traits, and career interests, **{best}** emerges as your strongest career match with a compatibility score of {compatibility:.0}%.\n\
             \n\
             ### Risk Assessment: {level} (Score: {score:.1}/10)\n\
             Your risk profile indicates a {lower} risk level. This means {meaning}\n\
             \n\
             ### Why This Path?\n\
             Your responses indicate strong alignment with the skills, temperament, and goals required for success in {best}. The scoring engine evaluated your answers across {careers} career paths, and this path scored highest based on weighted analysis of {features} profile features.\n\
             \n\
             ### Next Steps\n\
             Follow the preparation roadmap provided below. Focus on building the required skills and preparing for the suggested exams. Remember, career decisions are personal. Use this analysis as a guide, not a verdict.\n\
             \n\
             *This analysis was generated by CareerManifest's rule-based scoring engine.*",
            score = result.risk.score,
            lower = level.label().to_ascii_lowercase(),
            meaning = risk_meaning(level),
            careers = result.scores.len(),
            features = super::domain::FEATURE_COUNT,
        )
    }
}

fn risk_meaning(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "you have a stable foundation to pursue this career path with moderate pace. You can afford to take calculated risks in your career planning.",
        RiskLevel::Medium => "you should balance ambition with pragmatism. Consider having a backup plan while pursuing your primary career goal.",
        RiskLevel::High => "financial or family pressures require careful planning. Prioritize paths that offer quicker returns while keeping long-term goals in sight.",
    }
}

#[async_trait]
impl Narrator for TemplateNarrator {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn narrate(&self, result: &AssessmentResult) -> Result<String, NarrationError> {
        Ok(Self::render(result))
    }
}

/// Hosted model backends understood by [`GenerativeNarrator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerativeBackend {
    /// OpenAI-compatible chat completions (Groq).
    Groq,
    /// Anthropic messages API.
    Claude,
}

#[derive(Clone)]
pub struct GenerativeNarrator {
    backend: GenerativeBackend,
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GenerativeNarrator {
    pub fn new(
        backend: GenerativeBackend,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NarrationError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            backend,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        match self.backend {
            GenerativeBackend::Groq => format!("{base}/v1/chat/completions"),
            GenerativeBackend::Claude => format!("{base}/v1/messages"),
        }
    }

    async fn call_groq(&self, prompt: String) -> Result<String, NarrationError> {
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(NarrationError::Api { status, body });
        }

        let parsed: ChatResponse = res.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| NarrationError::InvalidResponse("no choices returned".to_string()))
    }

    async fn call_claude(&self, prompt: String) -> Result<String, NarrationError> {
        let payload = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let res = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(NarrationError::Api { status, body });
        }

        let parsed: MessagesResponse = res.json().await?;
        parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| NarrationError::InvalidResponse("no content blocks returned".to_string()))
    }
}

#[async_trait]
impl Narrator for GenerativeNarrator {
    fn name(&self) -> &'static str {
        match self.backend {
            GenerativeBackend::Groq => "groq",
            GenerativeBackend::Claude => "claude",
        }
    }

    async fn narrate(&self, result: &AssessmentResult) -> Result<String, NarrationError> {
        let prompt = build_prompt(result);
        match self.backend {
            GenerativeBackend::Groq => self.call_groq(prompt).await,
            GenerativeBackend::Claude => self.call_claude(prompt).await,
        }
    }
}

/// Counselling prompt sent to hosted models.
pub fn build_prompt(result: &AssessmentResult) -> String {
    let top = result
        .scores
        .iter()
        .take(3)
        .map(|score| format!("{} ({:.0}%)", score.category, score.percentage))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a career counselor specializing in Indian education and career paths.\n\
         \n\
         Based on the following career assessment result, provide:\n\
         1. A personalized explanation (2-3 paragraphs) of why this career path suits the student\n\
         2. A detailed 1-year preparation plan with monthly milestones\n\
         3. An overview of relevant exam syllabi they should prepare for\n\
         \n\
         Assessment Result:\n\
         - Best Career Path: {best}\n\
         - Risk Level: {level} (Score: {score:.1})\n\
         - Top 3 Career Scores: {top}\n\
         \n\
         Keep the tone encouraging but realistic. Focus on actionable Indian-specific advice.\n\
         Include specific Indian exam names, colleges, and salary expectations in INR.\n\
         Format with clear headings and bullet points.",
        best = result.best_career_path,
        level = result.risk.level,
        score = result.risk.score,
    )
}

/// Builds the narrator selected by configuration. `None` means narration is switched off.
pub fn build_narrator(config: &NarrationConfig) -> Result<Option<Arc<dyn Narrator>>, NarrationError> {
    let backend = match config.kind {
        NarratorKind::Disabled => return Ok(None),
        NarratorKind::Template => return Ok(Some(Arc::new(TemplateNarrator))),
        NarratorKind::Groq => GenerativeBackend::Groq,
        NarratorKind::Claude => GenerativeBackend::Claude,
    };

    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| NarrationError::Config("api key is required".to_string()))?;

    let narrator = GenerativeNarrator::new(
        backend,
        api_key,
        config.model.clone(),
        config.base_url.clone(),
        config.timeout,
    )?;
    Ok(Some(Arc::new(narrator)))
}

/// Runs `narrator` under `timeout`, falling back to the template text on any failure.
pub async fn narrate_with_fallback(
    narrator: &dyn Narrator,
    result: &AssessmentResult,
    timeout: Duration,
) -> String {
    let outcome = match tokio::time::timeout(timeout, narrator.narrate(result)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(NarrationError::Timeout(timeout)),
    };

    match outcome {
        Ok(text) => text,
        Err(error) => {
            warn!(
                narrator = narrator.name(),
                error = %error,
                "narration failed; using template text"
            );
            TemplateNarrator::render(result)
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{Feature, UserProfile};
    use crate::assessment::scoring::ScoringEngine;

    fn sample_result() -> AssessmentResult {
        let profile = UserProfile::default()
            .with(Feature::AcademicStrength, 0.9)
            .with(Feature::TechAffinity, 0.95);
        ScoringEngine::standard()
            .score_profile(&profile)
            .expect("standard catalog scores")
    }

    struct SlowNarrator;

    #[async_trait]
    impl Narrator for SlowNarrator {
        fn name(&self) -> &'static str {
            "slow"
        }

        async fn narrate(&self, _result: &AssessmentResult) -> Result<String, NarrationError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok("too late".to_string())
        }
    }

    #[test]
    fn template_mentions_best_career_and_risk_meaning() {
        let result = sample_result();
        let text = TemplateNarrator::render(&result);

        assert!(text.contains(&format!("### Recommended Path: {}", result.best_career_path)));
        assert!(text.contains(&format!("Risk Assessment: {}", result.risk.level)));
        assert!(text.contains(risk_meaning(result.risk.level)));
        assert_eq!(text, TemplateNarrator::render(&result));
    }

    #[test]
    fn prompt_lists_top_three_scores() {
        let result = sample_result();
        let prompt = build_prompt(&result);
        for score in result.scores.iter().take(3) {
            assert!(prompt.contains(score.category.label()));
        }
    }

    #[test]
    fn disabled_config_builds_no_narrator() {
        let narrator = build_narrator(&NarrationConfig::disabled()).expect("builds");
        assert!(narrator.is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_falls_back_to_template() {
        let result = sample_result();
        let narrator = GenerativeNarrator::new(
            GenerativeBackend::Groq,
            "key",
            "model",
            "http://127.0.0.1:9",
            Duration::from_secs(2),
        )
        .expect("client builds");

        let text = narrate_with_fallback(&narrator, &result, Duration::from_secs(3)).await;

        assert_eq!(text, TemplateNarrator::render(&result));
    }

    #[tokio::test]
    async fn slow_narrator_is_cut_off_by_timeout() {
        let result = sample_result();
        let text = narrate_with_fallback(&SlowNarrator, &result, Duration::from_millis(20)).await;
        assert_eq!(text, TemplateNarrator::render(&result));
    }
}
