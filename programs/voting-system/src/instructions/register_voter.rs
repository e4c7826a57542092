use anchor_lang::prelude::*;
use crate::contexts::RegisterVoter;

pub fn handler(ctx: Context<RegisterVoter>, voter: Pubkey) -> Result<()> {
    let voting_state = &ctx.accounts.voting_state;
    let voter_record = &mut ctx.accounts.voter_record;
    let caller = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    let event = voting_state.register_voter(
        &caller,
        voter,
        voter_record,
        ctx.bumps.voter_record,
        clock.unix_timestamp,
    )?;

    if event.reactivated {
        msg!("✅ Voter re-activated: {}", voter);
        msg!("   Has voted: {}", voter_record.has_voted);
    } else {
        msg!("✅ Voter registered: {}", voter);
    }

    // Indexers rebuild the voter list from these events
    emit!(event);

    Ok(())
}
