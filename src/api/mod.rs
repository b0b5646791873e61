pub mod match_response;

pub use match_response::{
    contract_type_label, match_level_label, skill_level_label, MatchResponse,
};
