pub mod analysis_ctx;
pub mod analysis_flow;
pub mod decision;

pub use analysis_ctx::AnalysisCtx;
pub use analysis_flow::AnalysisFlow;
pub use decision::decide_commentary;
