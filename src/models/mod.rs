pub mod analysis;
pub mod attribute;
pub mod loaders;
pub mod perspective;
pub mod score;
pub mod thresholds;

pub use analysis::{
    AnalysisRequest, AnalysisResponse, AnalysisResponseBody, CommentaryRequest, ErrorBody,
    HighScore,
};
pub use attribute::Attribute;
pub use loaders::{load_threshold_table, parse_threshold_table};
pub use score::{AttributeScore, ScoreSet, ScoreSetVersion};
pub use thresholds::{ThresholdTable, DEFAULT_THRESHOLD};
