//! Rule-based guidance derived from checkup scores.
//!
//! Output is always two entries: one primary entry from an ordered
//! first-match-wins cascade, then a wellbeing entry.

use mindcheck_core::models::recommendation::Recommendation;

/// The score inputs the rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    pub depression: u32,
    pub anxiety: u32,
    pub combined_index: u32,
    pub wellbeing_percent: u32,
}

impl Signals {
    pub fn new(depression: u32, anxiety: u32, wellbeing_percent: u32) -> Self {
        Self {
            depression,
            anxiety,
            combined_index: depression + anxiety,
            wellbeing_percent,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub title: &'static str,
    pub description: &'static str,
    pub applies: fn(&Signals) -> bool,
}

impl Rule {
    fn recommendation(&self) -> Recommendation {
        Recommendation {
            title: self.title.to_string(),
            description: self.description.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct RuleTable {
    pub rules: &'static [Rule],
    pub fallback: Rule,
}

impl RuleTable {
    pub fn select(&self, signals: &Signals) -> &Rule {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(signals))
            .unwrap_or(&self.fallback)
    }
}

fn always(_: &Signals) -> bool {
    true
}

fn severe_symptoms(s: &Signals) -> bool {
    s.depression >= 15 || s.anxiety >= 15 || s.combined_index >= 30
}

fn moderate_symptoms(s: &Signals) -> bool {
    s.depression >= 10 || s.anxiety >= 10 || s.combined_index >= 20
}

fn low_wellbeing(s: &Signals) -> bool {
    s.wellbeing_percent <= 50
}

pub const SEEK_PROFESSIONAL_SUPPORT: &str = "Seek professional support";
pub const CONSIDER_BRIEF_INTERVENTIONS: &str = "Consider brief interventions";
pub const MAINTAIN_HEALTHY_HABITS: &str = "Maintain and strengthen healthy habits";
pub const BUILD_WELLBEING: &str = "Build wellbeing";

pub static PRIMARY_RULES: RuleTable = RuleTable {
    rules: &[
        Rule {
            title: SEEK_PROFESSIONAL_SUPPORT,
            description: "Your scores are in a high or severe range for symptoms. Please consider \
                contacting a mental health professional for assessment and treatment options \
                (therapy, medication evaluation).",
            applies: severe_symptoms,
        },
        Rule {
            title: CONSIDER_BRIEF_INTERVENTIONS,
            description: "Your scores indicate moderate symptoms. Low-intensity interventions \
                (structured self-help, guided CBT apps) and a clinical check-in may be beneficial.",
            applies: moderate_symptoms,
        },
    ],
    fallback: Rule {
        title: MAINTAIN_HEALTHY_HABITS,
        description: "Your screening shows minimal or mild symptoms. Maintain regular sleep, \
            physical activity, social connection and mindful practices to support wellbeing.",
        applies: always,
    },
};

pub static WELLBEING_RULES: RuleTable = RuleTable {
    rules: &[Rule {
        title: BUILD_WELLBEING,
        description: "Your WHO-5 score suggests low wellbeing. Increase activities that bring \
            pleasure and meaning, and consider scheduling small achievable goals each day.",
        applies: low_wellbeing,
    }],
    fallback: Rule {
        title: BUILD_WELLBEING,
        description: "Keep up activities that support wellbeing: maintain routines, social \
            contact, and enjoyable hobby time.",
        applies: always,
    },
};

/// Practical steps listed with every report.
pub const NEXT_STEPS: [&str; 4] = [
    "If you have severe symptoms or are in crisis, contact emergency services immediately.",
    "Consider scheduling an appointment with a mental health professional for a full assessment.",
    "Try short evidence-based activities: 10 minutes of daily mindfulness, gentle exercise, a \
     sleep routine and small pleasurable activities.",
    "Share results with a trusted person if you feel comfortable; social support helps.",
];

pub const DISCLAIMER: &str = "PHQ-9, GAD-7 and WHO-5 are screening instruments only and are not \
     a substitute for clinical assessment.";

/// Primary entry, then the wellbeing entry.
pub fn recommend(signals: &Signals) -> Vec<Recommendation> {
    vec![
        PRIMARY_RULES.select(signals).recommendation(),
        WELLBEING_RULES.select(signals).recommendation(),
    ]
}
