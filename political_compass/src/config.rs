// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// One of the three ideology dimensions scored independently.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Axis {
    Economic,
    Social,
    Political,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Economic, Axis::Social, Axis::Political];

    /// Reads the `type` label of a question.
    ///
    /// The labels are the literal Portuguese tags used in the question sheet.
    /// Any other label does not belong to an axis.
    pub fn from_label(label: &str) -> Option<Axis> {
        match label {
            "económico" => Some(Axis::Economic),
            "social" => Some(Axis::Social),
            "política" => Some(Axis::Political),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::Economic => "económico",
            Axis::Social => "social",
            Axis::Political => "política",
        }
    }

    /// The name of the score in the output records.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Economic => "economic",
            Axis::Social => "social",
            Axis::Political => "political",
        }
    }
}

/// The answer of a party to one question, as needed for scoring.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AxisAnswer {
    /// None if the question does not belong to any axis.
    pub axis: Option<Axis>,
    pub multiplier: i64,
    /// None if the party did not answer.
    pub answer: Option<i64>,
}

// ******** Output data structures *********

/// A 2-D position on the compass chart, as CSS percentages.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ScreenPosition {
    pub left: String,
    pub top: String,
}

#[derive(PartialEq, Debug, Clone)]
pub struct CompassScores {
    pub economic: f64,
    pub social: f64,
    pub political: f64,
    pub position: ScreenPosition,
}

impl CompassScores {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Economic => self.economic,
            Axis::Social => self.social,
            Axis::Political => self.political,
        }
    }
}

/// Errors that prevent the scores from being computed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ScoringErrors {
    /// No question belongs to this axis, the average is undefined.
    EmptyAxis(Axis),
}

impl Error for ScoringErrors {}

impl Display for ScoringErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringErrors::EmptyAxis(axis) => write!(
                f,
                "no question of type {:?} for the {} axis",
                axis.label(),
                axis.name()
            ),
        }
    }
}

// ********* Configuration **********

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ScoringRules {
    /// The largest magnitude of answer * multiplier for a single question.
    pub max_contribution: f64,
    /// Percentage subtracted from both coordinates, so that a marker icon
    /// is centered on its point.
    pub marker_offset: f64,
}

impl ScoringRules {
    pub const DEFAULT_RULES: ScoringRules = ScoringRules {
        max_contribution: 2.0,
        marker_offset: 3.0,
    };
}

impl Default for ScoringRules {
    fn default() -> Self {
        ScoringRules::DEFAULT_RULES
    }
}
