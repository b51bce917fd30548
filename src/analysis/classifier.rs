use super::metrics::ColorMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

const WARM_MIN_WARMTH: f64 = 0.15;
const WARM_MAX_GREEN_BALANCE: f64 = 0.36;
const COOL_MAX_WARMTH: f64 = 0.05;

/// Lower brightness bounds (exclusive), brightest bucket first.
const DEPTH_THRESHOLDS: &[(f64, Depth)] = &[
    (200.0, Depth::Light),
    (165.0, Depth::LightMedium),
    (125.0, Depth::Medium),
    (85.0, Depth::MediumDeep),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    pub const ALL: [Undertone; 3] = [Undertone::Warm, Undertone::Cool, Undertone::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Undertone::Warm => "warm",
            Undertone::Cool => "cool",
            Undertone::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Depth {
    Light,
    LightMedium,
    Medium,
    MediumDeep,
    Deep,
}

impl Depth {
    pub const ALL: [Depth; 5] = [
        Depth::Light,
        Depth::LightMedium,
        Depth::Medium,
        Depth::MediumDeep,
        Depth::Deep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::Light => "light",
            Depth::LightMedium => "light-medium",
            Depth::Medium => "medium",
            Depth::MediumDeep => "medium-deep",
            Depth::Deep => "deep",
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub undertone: Undertone,
    pub depth: Depth,
}

/// Warm needs both a clear red bias and a low green share; a red-biased but
/// green-heavy sample is neutral, never cool.
pub fn classify_undertone(metrics: &ColorMetrics) -> Undertone {
    if metrics.warmth > WARM_MIN_WARMTH && metrics.green_balance < WARM_MAX_GREEN_BALANCE {
        Undertone::Warm
    } else if metrics.warmth < COOL_MAX_WARMTH {
        Undertone::Cool
    } else {
        Undertone::Neutral
    }
}

pub fn classify_depth(metrics: &ColorMetrics) -> Depth {
    DEPTH_THRESHOLDS
        .iter()
        .find(|(threshold, _)| metrics.brightness > *threshold)
        .map(|(_, depth)| *depth)
        .unwrap_or(Depth::Deep)
}

pub fn classify(metrics: &ColorMetrics) -> Classification {
    Classification {
        undertone: classify_undertone(metrics),
        depth: classify_depth(metrics),
    }
}
