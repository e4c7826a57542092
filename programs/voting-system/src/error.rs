use anchor_lang::prelude::*;

#[error_code]
pub enum VotingError {
    #[msg("Only the registry owner can perform this action")]
    Unauthorized,

    #[msg("Invalid argument - empty name or zero address")]
    InvalidArgument,

    #[msg("Candidate name exceeds the maximum length")]
    NameTooLong,

    #[msg("Candidate description exceeds the maximum length")]
    DescriptionTooLong,

    #[msg("Candidate registry is full - maximum capacity reached")]
    CandidateLimitReached,

    #[msg("Voter is already registered and active")]
    AlreadyRegistered,

    #[msg("Voter record does not exist")]
    VoterNotFound,

    #[msg("Caller is not registered to vote")]
    NotRegistered,

    #[msg("Voter registration has been removed")]
    VoterInactive,

    #[msg("Voter has already cast a vote")]
    AlreadyVoted,

    #[msg("Voting is not currently active")]
    VotingInactive,

    #[msg("Candidate does not exist")]
    CandidateNotFound,

    #[msg("Candidate is not active")]
    CandidateInactive,

    #[msg("Arithmetic overflow in vote counter")]
    ArithmeticOverflow,
}
