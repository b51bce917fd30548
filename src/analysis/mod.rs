//! Skin tone classification and styling recommendations.
//!
//! Everything in here is pure: a sample goes in, a tone and a `'static`
//! recommendation bundle come out.

pub mod catalog;
pub mod classifier;
pub mod metrics;
pub mod resolver;
pub mod tone_name;

pub use catalog::{RecommendationBundle, RecommendationCatalog};
pub use classifier::{classify, Classification, Depth, Undertone};
pub use metrics::{ColorMetrics, RgbSample};
pub use resolver::{
    AnalysisError, PixelsRequest, RangePolicy, RecommendationResolver, SkinTone, SkinToneAnalysis,
};
pub use tone_name::ToneNamer;
