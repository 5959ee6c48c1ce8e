pub mod json_api;

pub use json_api::{
    chemistry_json, evaluate, evaluate_json, rank, rank_json, ChemistryRequest,
    ChemistryResponse, EvaluateRequest, EvaluateResponse, PlayerEvaluation, RankRequest,
    RankResponse, SCHEMA_VERSION,
};
