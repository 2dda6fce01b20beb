mod config;
pub mod manual;
use log::{debug, info};

pub use crate::config::*;

/// Computes the economic, social and political scores of one party.
///
/// Arguments:
/// * `answers` the answers of the party, one per question. Questions without an
/// axis are ignored.
/// * `rules` the scaling constants
///
/// Each score is the weighted sum of the answers on the axis divided by the
/// number of questions on the axis times `rules.max_contribution`, clamped to [-1, 1].
/// A missing answer adds nothing to the sum but still counts as a question.
pub fn compass_scores(
    answers: &[AxisAnswer],
    rules: &ScoringRules,
) -> Result<CompassScores, ScoringErrors> {
    info!("Scoring {:?} answers, rules: {:?}", answers.len(), rules);
    let economic = axis_score(answers, Axis::Economic, rules)?;
    let social = axis_score(answers, Axis::Social, rules)?;
    let political = axis_score(answers, Axis::Political, rules)?;

    let position = screen_position(economic, social, rules.marker_offset);
    Ok(CompassScores {
        economic,
        social,
        political,
        position,
    })
}

fn axis_score(
    answers: &[AxisAnswer],
    axis: Axis,
    rules: &ScoringRules,
) -> Result<f64, ScoringErrors> {
    let on_axis: Vec<&AxisAnswer> = answers.iter().filter(|a| a.axis == Some(axis)).collect();
    if on_axis.is_empty() {
        return Err(ScoringErrors::EmptyAxis(axis));
    }

    // Accumulated as floats: large answers saturate the score instead of overflowing.
    let weighted_sum: f64 = on_axis
        .iter()
        .filter_map(|a| a.answer.map(|x| x as f64 * a.multiplier as f64))
        .fold(0.0, |acc, x| acc + x);
    let normalized = weighted_sum / (on_axis.len() as f64 * rules.max_contribution);
    debug!(
        "axis_score: {:?}: questions: {:?} weighted sum: {:?} normalized: {:?}",
        axis,
        on_axis.len(),
        weighted_sum,
        normalized
    );
    Ok(normalized.clamp(-1.0, 1.0))
}

/// Maps a point of the compass to a CSS position, with the default marker offset.
///
/// `x = -1` is the left edge and `y = 1` is the top edge.
///
/// ```
/// use political_compass::map_to_screen_position;
///
/// let p = map_to_screen_position(0.0, 0.0);
/// assert_eq!(p.left, "47%");
/// assert_eq!(p.top, "47%");
/// ```
pub fn map_to_screen_position(x: f64, y: f64) -> ScreenPosition {
    screen_position(x, y, ScoringRules::DEFAULT_RULES.marker_offset)
}

/// Maps a point of the compass to a CSS position.
///
/// The values may fall slightly outside of [0%, 100%] at the edges because of the offset.
pub fn screen_position(x: f64, y: f64, offset: f64) -> ScreenPosition {
    let left = ((x + 1.0) / 2.0) * 100.0 - offset;
    // The y axis points up, CSS top points down.
    let top = ((1.0 - y) / 2.0) * 100.0 - offset;
    ScreenPosition {
        left: format!("{}%", left),
        top: format!("{}%", top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn ans(axis: Axis, multiplier: i64, answer: Option<i64>) -> AxisAnswer {
        AxisAnswer {
            axis: Some(axis),
            multiplier,
            answer,
        }
    }

    #[test]
    fn screen_position_corners() {
        let top_left = map_to_screen_position(-1.0, 1.0);
        assert_eq!(top_left.left, "-3%");
        assert_eq!(top_left.top, "-3%");

        let bottom_right = map_to_screen_position(1.0, -1.0);
        assert_eq!(bottom_right.left, "97%");
        assert_eq!(bottom_right.top, "97%");

        let center = map_to_screen_position(0.0, 0.0);
        assert_eq!(center.left, "47%");
        assert_eq!(center.top, "47%");
    }

    #[test]
    fn screen_position_custom_offset() {
        let p = screen_position(0.0, 0.5, 2.5);
        assert_eq!(p.left, "47.5%");
        assert_eq!(p.top, "22.5%");
    }

    #[test]
    fn single_question_per_axis() {
        init();
        let answers = vec![
            ans(Axis::Economic, 2, Some(1)),
            ans(Axis::Social, -1, Some(2)),
            ans(Axis::Political, 1, Some(0)),
        ];
        let scores = compass_scores(&answers, &ScoringRules::DEFAULT_RULES).unwrap();
        assert_eq!(scores.economic, 1.0);
        assert_eq!(scores.social, -1.0);
        assert_eq!(scores.political, 0.0);
        assert_eq!(scores.position.left, "97%");
        assert_eq!(scores.position.top, "97%");
    }

    #[test]
    fn scores_are_averaged() {
        init();
        let answers = vec![
            ans(Axis::Economic, 1, Some(1)),
            ans(Axis::Economic, 1, Some(-2)),
            ans(Axis::Economic, -1, Some(-1)),
            ans(Axis::Economic, 1, Some(1)),
            ans(Axis::Social, 1, Some(1)),
            ans(Axis::Political, 1, Some(-1)),
        ];
        let scores = compass_scores(&answers, &ScoringRules::DEFAULT_RULES).unwrap();
        // (1 - 2 + 1 + 1) / (4 * 2)
        assert_eq!(scores.economic, 0.125);
        assert_eq!(scores.social, 0.5);
        assert_eq!(scores.political, -0.5);
    }

    #[test]
    fn scores_are_clamped() {
        init();
        let answers = vec![
            ans(Axis::Economic, 3, Some(2)),
            ans(Axis::Social, 3, Some(-2)),
            ans(Axis::Political, 3, Some(2)),
        ];
        let scores = compass_scores(&answers, &ScoringRules::DEFAULT_RULES).unwrap();
        for axis in Axis::ALL {
            let s = scores.get(axis);
            assert!((-1.0..=1.0).contains(&s), "{:?} out of range: {}", axis, s);
        }
        assert_eq!(scores.economic, 1.0);
        assert_eq!(scores.social, -1.0);
    }

    #[test]
    fn large_answers_do_not_overflow() {
        init();
        let answers = vec![
            ans(Axis::Economic, 2, Some(5_000_000_000_000_000_000)),
            ans(Axis::Economic, i64::MAX, Some(i64::MAX)),
            ans(Axis::Social, -2, Some(i64::MAX)),
            ans(Axis::Political, 1, Some(1)),
        ];
        let scores = compass_scores(&answers, &ScoringRules::DEFAULT_RULES).unwrap();
        assert_eq!(scores.economic, 1.0);
        assert_eq!(scores.social, -1.0);
        assert_eq!(scores.political, 0.5);
    }

    #[test]
    fn missing_answers_count_as_zero() {
        init();
        let answers = vec![
            ans(Axis::Economic, 1, Some(2)),
            ans(Axis::Economic, 1, None),
            ans(Axis::Social, 1, None),
            ans(Axis::Political, 1, Some(1)),
        ];
        let scores = compass_scores(&answers, &ScoringRules::DEFAULT_RULES).unwrap();
        assert_eq!(scores.economic, 0.5);
        assert_eq!(scores.social, 0.0);
        assert!(scores.social.is_sign_positive());
    }

    #[test]
    fn unknown_axis_is_ignored() {
        init();
        let answers = vec![
            ans(Axis::Economic, 1, Some(1)),
            ans(Axis::Social, 1, Some(1)),
            ans(Axis::Political, 1, Some(1)),
            AxisAnswer {
                axis: None,
                multiplier: 1,
                answer: Some(-2),
            },
        ];
        let scores = compass_scores(&answers, &ScoringRules::DEFAULT_RULES).unwrap();
        assert_eq!(scores.economic, 0.5);
        assert_eq!(scores.social, 0.5);
        assert_eq!(scores.political, 0.5);
    }

    #[test]
    fn empty_axis_is_an_error() {
        init();
        let answers = vec![ans(Axis::Economic, 2, Some(1))];
        let res = compass_scores(&answers, &ScoringRules::DEFAULT_RULES);
        assert_eq!(res, Err(ScoringErrors::EmptyAxis(Axis::Social)));
    }

    #[test]
    fn axis_labels() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_label(axis.label()), Some(axis));
        }
        assert_eq!(Axis::from_label("economico"), None);
        assert_eq!(Axis::from_label("Social"), None);
    }
}
