use std::sync::LazyLock;

use regex::Regex;

use crate::engines::governance::domain::{policy, Severity, Violation};

/// Curated stigmatizing terms, flagged unconditionally wherever they appear.
/// False positives are acceptable; every hit deserves an editorial look.
const STIGMA_TERMS: &[&str] = &[
    "addict",
    "addicts",
    "junkie",
    "junkies",
    "crackhead",
    "crackheads",
    "druggie",
    "druggies",
    "dopehead",
    "dope fiend",
    "pothead",
    "meth head",
    "tweaker",
    "stoner",
    "alcoholic",
    "alcoholics",
    "drunkard",
    "drunkards",
    "wino",
    "boozer",
    "substance abuser",
    "drug abuser",
    "crazy",
    "insane",
    "lunatic",
    "lunatics",
    "madman",
    "madwoman",
    "maniac",
    "maniacs",
    "psycho",
    "psychos",
    "schizo",
    "schizos",
    "schizophrenics",
    "nuts",
    "nutcase",
    "nut job",
    "nutjob",
    "deranged",
    "demented",
    "unhinged",
    "wacko",
    "whacko",
    "loony bin",
    "loony",
    "batty",
    "bonkers",
    "basket case",
    "head case",
    "mental case",
    "mental patient",
    "insane asylum",
    "madhouse",
    "committed suicide",
    "successful suicide",
    "unsuccessful suicide",
    "failed suicide attempt",
    "suicide victim",
    "retarded",
    "retard",
    "spaz",
    "spastic",
    "manic-depressive",
    "manic depressive",
    "victim of mental illness",
    "afflicted with mental illness",
    "mentally defective",
    "feeble-minded",
    "feeble minded",
    "imbecile",
    "moron",
    "disturbed individual",
    "nervous breakdown",
    "off their meds",
    "off his meds",
    "off her meds",
    "certifiable",
    "raving mad",
    "stark raving",
];

static STIGMA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Longer phrases first so "loony bin" wins over "loony".
    let mut terms: Vec<&str> = STIGMA_TERMS.to_vec();
    terms.sort_by_key(|term| std::cmp::Reverse(term.len()));
    let alternation = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("static stigma pattern compiles")
});

pub(crate) async fn check(content: &str) -> Vec<Violation> {
    STIGMA_PATTERN
        .find_iter(content)
        .map(|found| {
            Violation::at_match(
                policy::STIGMA_LANGUAGE,
                Severity::Medium,
                content,
                found.start(),
                found.end(),
                20,
                format!(
                    "\"{}\" is stigmatizing language; use person-first, non-judgmental phrasing.",
                    found.as_str()
                ),
            )
        })
        .collect()
}
