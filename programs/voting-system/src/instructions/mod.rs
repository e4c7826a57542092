pub mod add_candidate;
pub mod cast_vote;
pub mod delete_voter;
pub mod initialize;
pub mod register_voter;
pub mod set_voting_status;
pub mod views;
