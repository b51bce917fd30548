use super::catalog::{RecommendationBundle, RecommendationCatalog};
use super::classifier::{classify, Depth, Undertone};
use super::metrics::{ColorMetrics, RgbSample};
use super::tone_name::ToneNamer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("RGB values required")]
    MissingInput,

    #[error("RGB values must be integers")]
    InvalidComponent,

    #[error("RGB values must be between 0 and 255")]
    OutOfRange,
}

/// How out of byte range components are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Values flow through the arithmetic untouched.
    #[default]
    Permissive,
    /// Values outside `[0, 255]` are rejected.
    Strict,
}

/// Raw analysis request, components are checked by [`PixelsRequest::to_sample`].
#[derive(Debug, Default, Deserialize)]
pub struct PixelsRequest {
    #[serde(default)]
    pub r: Option<Value>,
    #[serde(default)]
    pub g: Option<Value>,
    #[serde(default)]
    pub b: Option<Value>,
}

impl PixelsRequest {
    pub fn to_sample(&self) -> Result<RgbSample, AnalysisError> {
        let component = |value: &Option<Value>| -> Result<Option<i64>, AnalysisError> {
            match value {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Number(n)) => integer_component(n).map(Some),
                Some(_) => Err(AnalysisError::InvalidComponent),
            }
        };
        let components = [&self.r, &self.g, &self.b].map(component);
        // Absence is reported before malformed values.
        if components.iter().any(|c| matches!(c, Ok(None))) {
            return Err(AnalysisError::MissingInput);
        }
        let [r, g, b] = components;
        match (r?, g?, b?) {
            (Some(r), Some(g), Some(b)) => Ok(RgbSample::new(r, g, b)),
            _ => Err(AnalysisError::MissingInput),
        }
    }
}

/// Whole numbers written in float form (`200.0`, `2e2`) count as integers.
fn integer_component(n: &serde_json::Number) -> Result<i64, AnalysisError> {
    if let Some(value) = n.as_i64() {
        return Ok(value);
    }
    match n.as_f64() {
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(AnalysisError::InvalidComponent),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkinTone {
    pub name: String,
    pub undertone: Undertone,
    pub depth: Depth,
    pub rgb: RgbSample,
    pub hex: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinToneAnalysis {
    pub skin_tone: SkinTone,
    pub recommendations: &'static RecommendationBundle,
}

/// Maps a sample to its tone and recommendations. Holds only `'static`
/// tables, so a single instance can be shared by any number of callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecommendationResolver {
    namer: ToneNamer,
    catalog: RecommendationCatalog,
    range_policy: RangePolicy,
}

impl RecommendationResolver {
    pub fn new(namer: ToneNamer, catalog: RecommendationCatalog, range_policy: RangePolicy) -> Self {
        RecommendationResolver {
            namer,
            catalog,
            range_policy,
        }
    }

    pub fn with_range_policy(range_policy: RangePolicy) -> Self {
        RecommendationResolver {
            range_policy,
            ..Default::default()
        }
    }

    pub fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }

    /// Presence check, then [`RecommendationResolver::resolve_sample`].
    pub fn resolve(
        &self,
        r: Option<i64>,
        g: Option<i64>,
        b: Option<i64>,
    ) -> Result<SkinToneAnalysis, AnalysisError> {
        match (r, g, b) {
            (Some(r), Some(g), Some(b)) => self.resolve_sample(RgbSample::new(r, g, b)),
            _ => Err(AnalysisError::MissingInput),
        }
    }

    pub fn resolve_request(&self, request: &PixelsRequest) -> Result<SkinToneAnalysis, AnalysisError> {
        self.resolve_sample(request.to_sample()?)
    }

    pub fn resolve_sample(&self, sample: RgbSample) -> Result<SkinToneAnalysis, AnalysisError> {
        if self.range_policy == RangePolicy::Strict && !sample.is_within_byte_range() {
            return Err(AnalysisError::OutOfRange);
        }

        let metrics = ColorMetrics::from_sample(&sample);
        let classification = classify(&metrics);
        let name = self.namer.name(classification.depth, classification.undertone);
        // Depth only drives the name, never the bundle.
        let recommendations = self.catalog.bundle_for(classification.undertone);

        Ok(SkinToneAnalysis {
            skin_tone: SkinTone {
                name,
                undertone: classification.undertone,
                depth: classification.depth,
                rgb: sample,
                hex: sample.to_hex(),
            },
            recommendations,
        })
    }
}
