use anchor_lang::prelude::*;
use crate::{contexts::DeleteVoter, voter_account};

pub fn handler(ctx: Context<DeleteVoter>, voter: Pubkey) -> Result<()> {
    let voting_state = &ctx.accounts.voting_state;
    let voter_record = ctx.accounts.voter_record.to_account_info();
    let caller = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    let mut record = voter_account::load(&voter_record)?;

    // Soft delete: tallies and vote history stay as they are
    let event = voting_state.delete_voter(&caller, voter, record.as_mut(), clock.unix_timestamp)?;
    if let Some(record) = &record {
        voter_account::store(&voter_record, record)?;
    }

    emit!(event);

    msg!("🗑️ Voter removed: {}", voter);
    msg!("   Total votes unchanged: {}", voting_state.total_votes);

    Ok(())
}
