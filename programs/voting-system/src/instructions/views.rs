use anchor_lang::prelude::*;
use crate::{
    contexts::{ReadRegistry, ReadVoter},
    state::{Candidate, CandidatePage, VoterInfo, VotingStatus, WinnerInfo},
    voter_account,
};

// Read-only instructions. Results travel back through return data;
// none of these write to an account.

pub fn active_candidates(ctx: Context<ReadRegistry>, page: u32) -> Result<CandidatePage> {
    Ok(ctx.accounts.voting_state.active_candidates_page(page))
}

pub fn candidate(ctx: Context<ReadRegistry>, candidate_id: u64) -> Result<Candidate> {
    ctx.accounts.voting_state.candidate(candidate_id).cloned()
}

pub fn voter(ctx: Context<ReadVoter>, _voter: Pubkey) -> Result<VoterInfo> {
    let record = voter_account::load(&ctx.accounts.voter_record.to_account_info())?;
    Ok(VoterInfo::from_record(record.as_ref()))
}

pub fn winner(ctx: Context<ReadRegistry>) -> Result<WinnerInfo> {
    let winner = ctx.accounts.voting_state.winner();
    msg!(
        "🏆 Leader: {} ({} votes)",
        winner.winner_id,
        winner.winner_vote_count
    );
    Ok(winner)
}

pub fn voting_status(ctx: Context<ReadRegistry>) -> Result<VotingStatus> {
    Ok(ctx.accounts.voting_state.status())
}
