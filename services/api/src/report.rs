use std::path::PathBuf;

use career_manifest::assessment::{
    build_narrator, narrate_with_fallback, read_answers, AssessmentResult, QuestionBank,
    ScoringEngine, TemplateNarrator,
};
use career_manifest::config::AppConfig;
use career_manifest::error::AppError;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer file: JSON array of {question_id, selected} or CSV with those headers
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Attach the configured narration (falls back to the template text)
    #[arg(long)]
    pub(crate) narrate: bool,
    /// Print the human-readable summary instead of JSON
    #[arg(long)]
    pub(crate) summary: bool,
}

pub(crate) async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let answers = read_answers(&args.answers)?;
    let questions = QuestionBank::standard().into_questions();
    let mut result = ScoringEngine::standard().compute(&answers, &questions)?;

    if args.narrate {
        let config = AppConfig::load()?;
        let text = match build_narrator(&config.narration)? {
            Some(narrator) => {
                narrate_with_fallback(narrator.as_ref(), &result, config.narration.timeout).await
            }
            None => TemplateNarrator::render(&result),
        };
        result.ai_explanation = Some(text);
    }

    if args.summary {
        println!("{}", render_summary(&result));
    } else {
        println!("{}", to_json(&result)?);
    }
    Ok(())
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let bank = QuestionBank::standard();
    println!("{}", to_json(bank.questions())?);
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Io(err.into()))
}

pub(crate) fn render_summary(result: &AssessmentResult) -> String {
    let mut lines = vec![format!(
        "Recommended path: {} (confidence {:.3}{})",
        result.best_career_path,
        result.confidence,
        if result.is_multi_fit { ", multi-fit" } else { "" }
    )];
    lines.push(format!(
        "Risk: {} ({:.2}/10)",
        result.risk.level, result.risk.score
    ));
    lines.push(String::from("Scores:"));
    for score in &result.scores {
        lines.push(format!(
            "  {:<28} {:>7.3} {:>6.2}%",
            score.category.label(),
            score.score,
            score.percentage
        ));
    }
    for explanation in &result.explanations {
        lines.push(String::new());
        lines.push(explanation.summary.clone());
    }
    if let Some(text) = &result.ai_explanation {
        lines.push(String::new());
        lines.push(text.clone());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_manifest::assessment::{Feature, UserProfile};

    #[test]
    fn summary_lists_every_scored_career() {
        let profile = UserProfile::default()
            .with(Feature::TechAffinity, 0.9)
            .with(Feature::AcademicStrength, 0.8);
        let result = ScoringEngine::standard()
            .score_profile(&profile)
            .expect("scores");

        let summary = render_summary(&result);

        assert!(summary.starts_with(&format!(
            "Recommended path: {}",
            result.best_career_path
        )));
        for score in &result.scores {
            assert!(summary.contains(score.category.label()));
        }
        assert!(summary.contains("recommended because:"));
    }
}
