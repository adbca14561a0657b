//! Aggregates over session history for progress displays.

use crate::difficulty::Difficulty;
use crate::history::HistoryRecord;
use chrono::{DateTime, Local};
use itertools::Itertools;

/// How many recent sessions the WPM chart shows by default
pub const DEFAULT_CHART_WINDOW: usize = 12;
/// The chart's y axis never tops out below this
pub const MIN_CHART_CEILING: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub timestamp: DateTime<Local>,
    pub label: String,
    pub wpm: f64,
}

impl From<&HistoryRecord> for TrendPoint {
    fn from(r: &HistoryRecord) -> Self {
        Self {
            timestamp: r.timestamp,
            label: r.timestamp.format("%m-%d %H:%M").to_string(),
            wpm: r.wpm,
        }
    }
}

/// Data for a recent-sessions WPM line chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<TrendPoint>,
    pub y_max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    pub sessions: usize,
    pub avg_wpm: f64,
    pub best_wpm: f64,
    pub avg_accuracy: f64,
    pub wpm_std_dev: f64,
    pub total_errors: usize,
}

pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        None
    } else {
        Some(data.iter().sum::<f64>() / data.len() as f64)
    }
}

/// Population standard deviation
pub fn std_dev(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let variance = data.iter().map(|v| (v - m).powi(2)).sum::<f64>() / data.len() as f64;
    Some(variance.sqrt())
}

/// Round the highest WPM up to the next multiple of ten, at least 60.
pub fn y_ceiling(max_wpm: f64) -> f64 {
    MIN_CHART_CEILING.max((max_wpm / 10.0).ceil() * 10.0)
}

pub fn summarize<'a, I>(records: I) -> Option<TrendSummary>
where
    I: IntoIterator<Item = &'a HistoryRecord>,
{
    let records: Vec<&HistoryRecord> = records.into_iter().collect();
    let wpms: Vec<f64> = records.iter().map(|r| r.wpm).collect();
    let accuracies: Vec<f64> = records.iter().map(|r| f64::from(r.accuracy)).collect();

    Some(TrendSummary {
        sessions: records.len(),
        avg_wpm: mean(&wpms)?,
        best_wpm: wpms.iter().copied().fold(0.0, f64::max),
        avg_accuracy: mean(&accuracies)?,
        wpm_std_dev: std_dev(&wpms)?,
        total_errors: records.iter().map(|r| r.errors).sum(),
    })
}

/// One summary per tier that has any sessions, easiest tier first.
pub fn summarize_by_difficulty(records: &[HistoryRecord]) -> Vec<(Difficulty, TrendSummary)> {
    let groups = records.iter().into_group_map_by(|r| r.difficulty);
    Difficulty::ALL
        .iter()
        .filter_map(|tier| {
            let group = groups.get(tier)?;
            summarize(group.iter().copied()).map(|s| (*tier, s))
        })
        .collect()
}

pub fn chart_series(records: &[HistoryRecord], window: usize) -> ChartSeries {
    let start = records.len().saturating_sub(window);
    let points: Vec<TrendPoint> = records[start..].iter().map(TrendPoint::from).collect();
    let max_wpm = points.iter().map(|p| p.wpm).fold(0.0, f64::max);
    ChartSeries {
        points,
        y_max: y_ceiling(max_wpm),
    }
}
