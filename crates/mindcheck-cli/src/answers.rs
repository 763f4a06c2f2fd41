use std::path::Path;

use serde::{Deserialize, Serialize};

use mindcheck_core::models::answer::{AnswerSet, CheckupAnswers};
use mindcheck_core::models::instrument::Instrument;
use mindcheck_instruments::questionnaire;

/// On-disk answers for a batch-scored checkup. `null` marks an unanswered item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswersFile {
    pub depression: Vec<Option<u8>>,
    pub anxiety: Vec<Option<u8>>,
    pub wellbeing: Vec<Option<u8>>,
}

impl AnswersFile {
    fn responses(&self, instrument: Instrument) -> &[Option<u8>] {
        match instrument {
            Instrument::Depression => &self.depression,
            Instrument::Anxiety => &self.anxiety,
            Instrument::Wellbeing => &self.wellbeing,
        }
    }

    /// Validate every instrument and build the answer sets.
    ///
    /// All problems across all instruments are reported together.
    pub fn into_answers(self) -> eyre::Result<CheckupAnswers> {
        let problems: Vec<String> = Instrument::ALL
            .into_iter()
            .flat_map(|i| questionnaire(i).validate_answers(self.responses(i)))
            .map(|e| e.to_string())
            .collect();
        if !problems.is_empty() {
            return Err(eyre::eyre!("invalid answers:\n  {}", problems.join("\n  ")));
        }

        Ok(CheckupAnswers {
            depression: AnswerSet::from_responses(Instrument::Depression, self.depression)?,
            anxiety: AnswerSet::from_responses(Instrument::Anxiety, self.anxiety)?,
            wellbeing: AnswerSet::from_responses(Instrument::Wellbeing, self.wellbeing)?,
        })
    }
}

pub fn parse_answers(json: &str) -> eyre::Result<CheckupAnswers> {
    let file: AnswersFile = serde_json::from_str(json)?;
    file.into_answers()
}

pub fn load_answers(path: &Path) -> eyre::Result<CheckupAnswers> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    parse_answers(&contents)
}
