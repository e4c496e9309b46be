pub mod commentary_service;
pub mod scoring_service;

pub use commentary_service::{CommentaryService, COMMENTARY_FAILURE_PLACEHOLDER};
pub use scoring_service::ScoringService;
