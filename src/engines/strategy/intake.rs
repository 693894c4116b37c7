use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::archetype::{decide_archetypes, Archetype};
use super::guardrails::APPROVAL_GATE_PHRASES;
use super::library::{
    cadence_for, experiments_for, questions_for, secondary_stack_addon, stack_for,
    suggested_audience, suggested_goals, CadenceRule, Experiment, IntakeQuestion,
};
use super::signals::{
    confidence_score, detect_signals, grade_audience_clarity, signal_detected, ClarityLevel,
    Signal, SignalKey,
};

/// Free-text campaign request as captured by the intake form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRequest {
    pub intake_text: String,
    #[serde(default)]
    pub ideas_text: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
}

impl IntakeRequest {
    fn combined(&self) -> String {
        let mut parts = vec![self.intake_text.as_str()];
        for optional in [&self.ideas_text, &self.industry, &self.audience, &self.goals] {
            if let Some(text) = optional {
                parts.push(text.as_str());
            }
        }
        parts.join(" ").to_lowercase().trim().to_string()
    }
}

/// Full, purely derived output of the intake analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeAnalysis {
    pub signals: Vec<Signal>,
    pub stakeholders_clarity_level: ClarityLevel,
    pub audience_terms: Vec<String>,
    pub confidence_score: u32,
    pub primary_archetype: Archetype,
    pub secondary_archetype: Option<Archetype>,
    pub cadence: CadenceRule,
    pub experiments: Vec<Experiment>,
    pub missing_info_questions: Vec<IntakeQuestion>,
    /// Content must be archived for oversight review.
    pub requires_visibility_archive: bool,
    /// Content must pass an explicit approval gate before publishing.
    pub requires_approval_workflow: bool,
    pub recommended_stack: Vec<String>,
    pub suggested_audience: Vec<&'static str>,
    pub suggested_goals: Vec<&'static str>,
    pub planner_prompt: String,
}

/// Deterministic analysis of a free-text campaign request: same input, same
/// output, no external calls.
pub fn analyze_intake(request: &IntakeRequest) -> IntakeAnalysis {
    let combined = request.combined();

    let signals = detect_signals(&combined);
    let (clarity, audience_terms) = grade_audience_clarity(&combined);
    let confidence = confidence_score(&signals, clarity);
    let (primary, secondary) = decide_archetypes(&signals);
    let cadence = cadence_for(primary);
    let experiments = experiments_for(primary, secondary);
    let questions = questions_for(&signals, clarity);

    let requires_visibility_archive = signal_detected(&signals, SignalKey::Compliance)
        || signal_detected(&signals, SignalKey::ComplianceVisibility);
    let requires_approval_workflow = APPROVAL_GATE_PHRASES
        .iter()
        .any(|phrase| combined.contains(phrase));

    let mut recommended_stack: Vec<String> = stack_for(primary)
        .into_iter()
        .map(|line| line.to_string())
        .collect();
    if let Some(secondary) = secondary {
        recommended_stack.push(secondary_stack_addon(secondary).to_string());
    }

    let planner_prompt = compile_planner_prompt(
        request,
        &signals,
        clarity,
        primary,
        secondary,
        &cadence,
        &experiments,
        &questions,
        &recommended_stack,
    );

    IntakeAnalysis {
        signals,
        stakeholders_clarity_level: clarity,
        audience_terms,
        confidence_score: confidence,
        primary_archetype: primary,
        secondary_archetype: secondary,
        cadence,
        experiments,
        missing_info_questions: questions,
        requires_visibility_archive,
        requires_approval_workflow,
        recommended_stack,
        suggested_audience: suggested_audience(primary).to_vec(),
        suggested_goals: suggested_goals(primary).to_vec(),
        planner_prompt,
    }
}

/// Compiles the natural-language planning brief handed to downstream
/// planners. Pure formatting; section order is fixed and the constraints
/// preamble always comes first.
#[allow(clippy::too_many_arguments)]
fn compile_planner_prompt(
    request: &IntakeRequest,
    signals: &[Signal],
    clarity: ClarityLevel,
    primary: Archetype,
    secondary: Option<Archetype>,
    cadence: &CadenceRule,
    experiments: &[Experiment],
    questions: &[IntakeQuestion],
    stack: &[String],
) -> String {
    let mut prompt = String::new();

    writeln!(prompt, "MANDATORY CONSTRAINTS").expect("write constraints header");
    writeln!(
        prompt,
        "- Tone: warm, plain-language, professional; never promotional pressure."
    )
    .expect("write tone constraint");
    writeln!(
        prompt,
        "- No treatment outcome claims, effectiveness statistics, or guarantees of any kind."
    )
    .expect("write outcome constraint");
    writeln!(
        prompt,
        "- No urgency calls to action (no deadlines, scarcity, or pressure language)."
    )
    .expect("write urgency constraint");
    writeln!(
        prompt,
        "- No patient or client stories, quotes, or identifiable details without documented consent; default to none."
    )
    .expect("write story constraint");
    prompt.push('\n');

    writeln!(prompt, "CONTEXT").expect("write context header");
    if let Some(industry) = &request.industry {
        writeln!(prompt, "Industry: {industry}").expect("write industry");
    }
    if let Some(audience) = &request.audience {
        writeln!(prompt, "Stated audience: {audience}").expect("write audience");
    }
    if let Some(goals) = &request.goals {
        writeln!(prompt, "Stated goals: {goals}").expect("write goals");
    }
    writeln!(
        prompt,
        "Audience clarity: {}",
        clarity.as_str()
    )
    .expect("write clarity");
    prompt.push('\n');

    writeln!(prompt, "ENGINE ANALYSIS").expect("write analysis header");
    writeln!(prompt, "Primary archetype: {}", primary.as_str()).expect("write primary");
    if let Some(secondary) = secondary {
        writeln!(prompt, "Secondary archetype: {}", secondary.as_str()).expect("write secondary");
    }
    let detected: Vec<&str> = signals
        .iter()
        .filter(|signal| signal.detected)
        .map(|signal| signal.key.as_str())
        .collect();
    writeln!(
        prompt,
        "Detected signals: {}",
        if detected.is_empty() {
            "none".to_string()
        } else {
            detected.join(", ")
        }
    )
    .expect("write signals");
    writeln!(
        prompt,
        "Cadence ({}): email {}; social {}. {}",
        cadence.pattern_name, cadence.email_frequency, cadence.social_frequency, cadence.rationale
    )
    .expect("write cadence");
    if !experiments.is_empty() {
        writeln!(prompt, "Charter-safe experiments to consider:").expect("write experiments header");
        for experiment in experiments {
            writeln!(
                prompt,
                "- {}: A: {} / B: {}",
                experiment.name, experiment.variant_a, experiment.variant_b
            )
            .expect("write experiment");
        }
    }
    prompt.push('\n');

    writeln!(prompt, "INTAKE NOTES").expect("write notes header");
    writeln!(prompt, "{}", request.intake_text.trim()).expect("write intake text");
    if let Some(ideas) = &request.ideas_text {
        writeln!(prompt, "Ideas: {}", ideas.trim()).expect("write ideas");
    }
    prompt.push('\n');

    writeln!(prompt, "UNRESOLVED GAPS").expect("write gaps header");
    if questions.is_empty() {
        writeln!(prompt, "None identified.").expect("write no gaps");
    } else {
        for question in questions {
            writeln!(prompt, "- {}", question.question).expect("write question");
        }
    }
    prompt.push('\n');

    writeln!(prompt, "DELIVERABLES CHECKLIST").expect("write checklist header");
    for line in stack {
        writeln!(prompt, "[ ] {line}").expect("write deliverable");
    }

    prompt
}
