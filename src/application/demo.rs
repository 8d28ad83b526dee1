//! Demo data: a ready-made survey and three respondents' submission
//! history, used to seed a fresh store so every dashboard view has
//! something to show.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::analytics::{ScoreCalculator, TimeReductionBand, TimeSavingsAnalyzer};
use crate::domain::foundation::{
    OrgId, QuestionId, RankLevel, RespondentId, Timestamp, ValidationError,
};
use crate::domain::ranking::RankDefinition;
use crate::domain::survey::{
    Answer, AnswerValue, Question, QuestionKind, QuestionOption, QuestionTag, Survey,
    SurveyResponse,
};

/// Title identifying the seeded demo survey.
pub const DEMO_SURVEY_TITLE: &str = "AI Literacy Pulse Survey";

const DEMO_RESPONDENTS: [(&str, &str); 3] = [
    ("Aiko Tanaka", "demo-user-1"),
    ("Ben Carter", "demo-user-2"),
    ("Chiara Rossi", "demo-user-3"),
];

const ROUNDS: u32 = 3;

/// Time-reduction answer per round: every respondent reports saving a
/// little more each month.
const TIME_BAND_STEPS: [&str; 3] = ["less_than_5", "5_to_10", "10_to_20"];

const FILLER_PHRASES: [&str; 4] = [
    "Drafting weekly reports with AI assistance",
    "Summarizing long meeting notes",
    "Translating customer emails",
    "Reviewing generated code suggestions",
];

/// Builds the demo survey published to `org_id`.
///
/// Carries the two tagged analytics questions plus a checkbox and a
/// free-text filler so generated responses exercise every answer shape.
pub fn demo_survey(org_id: OrgId) -> Result<Survey, ValidationError> {
    let taxonomy = RankDefinition::default_for(org_id.clone());
    let questions = vec![
        Question::new(
            QuestionId::new("self-assessment")?,
            QuestionKind::Rank,
            "Which level matches your current AI usage?",
            rank_options(&taxonomy),
        )
        .with_tag(QuestionTag::SelfAssessment),
        Question::new(
            QuestionId::new("time-reduction")?,
            QuestionKind::Radio,
            "Estimated weekly time reduction from using AI",
            band_options(),
        )
        .with_tag(QuestionTag::TimeReduction),
        Question::new(
            QuestionId::new("main-tasks")?,
            QuestionKind::Checkbox,
            "Which tasks do you use AI for?",
            vec![
                QuestionOption::new("Writing", "writing"),
                QuestionOption::new("Research", "research"),
                QuestionOption::new("Coding", "coding"),
                QuestionOption::new("Analysis", "analysis"),
            ],
        ),
        Question::new(
            QuestionId::new("recent-win")?,
            QuestionKind::Textarea,
            "Describe a recent task where AI helped you",
            vec![],
        ),
    ];
    Survey::new(org_id, DEMO_SURVEY_TITLE, questions)
}

/// Generates the demo submission history for `survey`.
///
/// Three respondents, three monthly rounds each, the oldest round
/// `months_back` months before now. Self-assessed ranks climb with a
/// per-respondent starting score, time-reduction answers step up one
/// band per round, and the denormalized analytics fields are filled
/// the same way live submission fills them.
pub fn generate_demo_responses(
    survey: &Survey,
    months_back: u32,
) -> Result<Vec<SurveyResponse>, ValidationError> {
    let mut rng = rand::thread_rng();
    let now = Timestamp::now();
    let mut responses = Vec::with_capacity(DEMO_RESPONDENTS.len() * ROUNDS as usize);

    for (index, (name, account)) in DEMO_RESPONDENTS.iter().enumerate() {
        for round in 0..ROUNDS {
            let submitted_at = now.months_back(months_back.saturating_sub(round));
            let target = target_score(index, round);
            let answers = demo_answers(survey, &mut rng, target, round)?;
            let response = SurveyResponse::new(
                survey.id,
                survey.org_id.clone(),
                *name,
                Some(RespondentId::new(*account)?),
                answers,
                submitted_at,
            )?;

            let scores = ScoreCalculator::calculate(&response, None);
            let hours =
                TimeSavingsAnalyzer::response_hours(&response, std::slice::from_ref(survey));
            responses.push(response.with_analytics(scores.overall(), hours));
        }
    }

    Ok(responses)
}

/// The score a respondent is steering toward in a given round: a
/// per-respondent start, growing 15 points a month, capped at 100.
fn target_score(respondent_index: usize, round: u32) -> f64 {
    let start = 30.0 + 10.0 * respondent_index as f64;
    (start + 15.0 * f64::from(round)).min(100.0)
}

fn demo_answers<R: Rng + ?Sized>(
    survey: &Survey,
    rng: &mut R,
    target: f64,
    round: u32,
) -> Result<Vec<Answer>, ValidationError> {
    let mut answers = Vec::new();
    for question in &survey.questions {
        let value = if question.kind == QuestionKind::Rank {
            Some(AnswerValue::from(RankLevel::from_score(target).as_str()))
        } else if question.tag == Some(QuestionTag::TimeReduction) {
            Some(AnswerValue::from(
                TIME_BAND_STEPS[round as usize % TIME_BAND_STEPS.len()],
            ))
        } else {
            filler_value(question, rng)
        };
        if let Some(value) = value {
            answers.push(Answer::try_new(question.id.clone(), question.kind, value)?);
        }
    }
    Ok(answers)
}

/// A plausible answer for a question outside the analytics pair, or
/// None when the question offers nothing to pick from.
fn filler_value<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Option<AnswerValue> {
    match question.kind {
        QuestionKind::Text | QuestionKind::Textarea => FILLER_PHRASES
            .choose(rng)
            .map(|phrase| AnswerValue::from(*phrase)),
        QuestionKind::Radio => question
            .options
            .choose(rng)
            .map(|option| AnswerValue::from(option.value.as_str())),
        QuestionKind::Checkbox => {
            if question.options.is_empty() {
                return None;
            }
            let count = rng.gen_range(1..=question.options.len());
            let values: Vec<String> = question
                .options
                .choose_multiple(rng, count)
                .map(|option| option.value.clone())
                .collect();
            Some(AnswerValue::from(values))
        }
        QuestionKind::Rank => None,
    }
}

fn rank_options(taxonomy: &RankDefinition) -> Vec<QuestionOption> {
    taxonomy
        .ranks
        .iter()
        .map(|item| QuestionOption::new(item.name.clone(), item.id.as_str()))
        .collect()
}

fn band_options() -> Vec<QuestionOption> {
    TimeReductionBand::ALL
        .iter()
        .map(|band| QuestionOption::new(band.label(), band.as_str()))
        .collect()
}
