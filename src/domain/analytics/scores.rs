//! Literacy score vectors.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;

/// The five literacy dimension scores for one response or aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteracyScores {
    pub basics: Score,
    pub prompting: Score,
    pub ethics: Score,
    pub tools: Score,
    pub automation: Score,
}

impl LiteracyScores {
    /// Creates a score vector from the five dimension values.
    pub fn new(
        basics: Score,
        prompting: Score,
        ethics: Score,
        tools: Score,
        automation: Score,
    ) -> Self {
        Self {
            basics,
            prompting,
            ethics,
            tools,
            automation,
        }
    }

    /// The zero vector, used when a response carries no usable
    /// self-assessment.
    pub fn zero() -> Self {
        Self::from_array([Score::ZERO; 5])
    }

    /// Creates a vector from dimension values in declaration order.
    pub fn from_array(values: [Score; 5]) -> Self {
        let [basics, prompting, ethics, tools, automation] = values;
        Self::new(basics, prompting, ethics, tools, automation)
    }

    /// Returns the dimension values in declaration order.
    pub fn as_array(&self) -> [Score; 5] {
        [self.basics, self.prompting, self.ethics, self.tools, self.automation]
    }

    /// Returns the dimensions paired with their display names.
    pub fn dimensions(&self) -> [(&'static str, Score); 5] {
        [
            ("basics", self.basics),
            ("prompting", self.prompting),
            ("ethics", self.ethics),
            ("tools", self.tools),
            ("automation", self.automation),
        ]
    }

    /// The overall score: unweighted mean of the five dimensions,
    /// rounded to the nearest whole point.
    pub fn overall(&self) -> u8 {
        let sum: f64 = self.as_array().iter().map(|s| s.value()).sum();
        (sum / 5.0).round() as u8
    }

    /// Rounds every dimension to the nearest whole point.
    pub fn rounded(&self) -> Self {
        let mut values = self.as_array();
        for value in &mut values {
            *value = value.rounded();
        }
        Self::from_array(values)
    }
}
