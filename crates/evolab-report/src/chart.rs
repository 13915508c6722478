use evolab_engine::{GenerationResult, MalformedResultError};
use serde::Serialize;

/// Qualitative label for a generation's adaptation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant)]
pub enum AdaptationStatus {
    #[display("Well Adapted")]
    WellAdapted,
    #[display("Moderately Adapted")]
    ModeratelyAdapted,
    #[display("Poorly Adapted")]
    PoorlyAdapted,
}

impl AdaptationStatus {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::WellAdapted,
            40..70 => Self::ModeratelyAdapted,
            _ => Self::PoorlyAdapted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub generation: u8,
    pub score: u8,
    pub status: AdaptationStatus,
}

/// Builds one chart point per result, in history order.
///
/// Every result is checked first; a single malformed result fails the whole chart.
pub fn chart_points(history: &[GenerationResult]) -> Result<Vec<ChartPoint>, MalformedResultError> {
    history
        .iter()
        .map(|result| {
            result.check()?;
            Ok(ChartPoint {
                generation: result.generation(),
                score: result.adaptation_score(),
                status: AdaptationStatus::from_score(result.adaptation_score()),
            })
        })
        .collect()
}

/// Renders the points as horizontal bars, one line per generation.
///
/// `width` is the bar length of a score of 100; higher scores are capped at it.
///
/// ```text
/// Gen 1 ██████████████████████████████           75  Well Adapted
/// ```
#[must_use]
pub fn render_bars(points: &[ChartPoint], width: usize) -> String {
    if points.is_empty() {
        return "No simulation data available\n".to_owned();
    }
    points
        .iter()
        .map(|point| {
            let filled = (usize::from(point.score) * width / 100).min(width);
            let bar = "█".repeat(filled) + &" ".repeat(width - filled);
            format!(
                "Gen {} {bar} {:>3}  {}\n",
                point.generation, point.score, point.status
            )
        })
        .collect()
}
