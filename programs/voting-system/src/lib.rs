pub mod constants;
pub mod contexts;
pub mod error;
pub mod instructions;
pub mod state;
pub mod voter_account;

use anchor_lang::prelude::*;

pub use contexts::*;
pub use error::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Voting System: owner-managed candidate and voter registry
///
/// - The owner adds candidates, registers and removes voters, and opens or
///   closes the voting window
/// - Each registered, active voter casts exactly one vote while voting is open
/// - Removing a voter is a soft delete; tallies never move backwards
/// - Every state change is emitted as an event for off-chain indexers
#[program]
pub mod voting_system {
    use super::*;

    /// Create the registry; the signer becomes its owner
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Add a candidate (owner-only), returns the new candidate id
    pub fn add_candidate(
        ctx: Context<OwnerAction>,
        name: String,
        description: String,
    ) -> Result<u64> {
        instructions::add_candidate::handler(ctx, name, description)
    }

    /// Register or re-activate a voter (owner-only)
    pub fn register_voter(ctx: Context<RegisterVoter>, voter: Pubkey) -> Result<()> {
        instructions::register_voter::handler(ctx, voter)
    }

    /// Soft-delete a voter (owner-only)
    pub fn delete_voter(ctx: Context<DeleteVoter>, voter: Pubkey) -> Result<()> {
        instructions::delete_voter::handler(ctx, voter)
    }

    /// Open the voting window (owner-only, idempotent)
    pub fn start_voting(ctx: Context<OwnerAction>) -> Result<()> {
        instructions::set_voting_status::handler(ctx, true)
    }

    /// Close the voting window (owner-only, idempotent)
    pub fn stop_voting(ctx: Context<OwnerAction>) -> Result<()> {
        instructions::set_voting_status::handler(ctx, false)
    }

    /// Cast the signer's single vote
    pub fn vote(ctx: Context<CastVote>, candidate_id: u64) -> Result<()> {
        instructions::cast_vote::handler(ctx, candidate_id)
    }

    /// Active candidates in creation order, one page at a time starting at 0
    pub fn get_active_candidates(ctx: Context<ReadRegistry>, page: u32) -> Result<CandidatePage> {
        instructions::views::active_candidates(ctx, page)
    }

    pub fn get_candidate(ctx: Context<ReadRegistry>, candidate_id: u64) -> Result<Candidate> {
        instructions::views::candidate(ctx, candidate_id)
    }

    /// Voter record for `voter`; unregistered addresses read as all defaults
    pub fn get_voter(ctx: Context<ReadVoter>, voter: Pubkey) -> Result<VoterInfo> {
        instructions::views::voter(ctx, voter)
    }

    /// Candidate with the most votes, lowest id wins ties
    pub fn get_winner(ctx: Context<ReadRegistry>) -> Result<WinnerInfo> {
        instructions::views::winner(ctx)
    }

    pub fn get_voting_status(ctx: Context<ReadRegistry>) -> Result<VotingStatus> {
        instructions::views::voting_status(ctx)
    }
}
