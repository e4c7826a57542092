use anchor_lang::prelude::*;
use crate::{contexts::CastVote, voter_account};

pub fn handler(ctx: Context<CastVote>, candidate_id: u64) -> Result<()> {
    let voting_state = &mut ctx.accounts.voting_state;
    let voter_record = ctx.accounts.voter_record.to_account_info();
    let voter = ctx.accounts.voter.key();
    let clock = Clock::get()?;

    msg!("📝 Processing vote...");

    let mut record = voter_account::load(&voter_record)?;

    // Eligibility check and tally update are one transition on both accounts
    let event = voting_state.cast_vote(&voter, record.as_mut(), candidate_id, clock.unix_timestamp)?;
    if let Some(record) = &record {
        voter_account::store(&voter_record, record)?;
    }

    msg!(
        "✅ Vote recorded! Candidate {} now has {} (Total: {})",
        event.candidate_id,
        event.candidate_vote_count,
        event.total_votes
    );

    emit!(event);

    Ok(())
}
