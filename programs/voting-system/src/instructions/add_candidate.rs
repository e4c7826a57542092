use anchor_lang::prelude::*;
use crate::contexts::OwnerAction;

pub fn handler(ctx: Context<OwnerAction>, name: String, description: String) -> Result<u64> {
    let voting_state = &mut ctx.accounts.voting_state;
    let caller = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    let event = voting_state.add_candidate(&caller, name, description, clock.unix_timestamp)?;
    let candidate_id = event.candidate_id;

    msg!("✅ Candidate added!");
    msg!("   Id: {}", candidate_id);
    msg!("   Name: {}", event.name);

    emit!(event);

    Ok(candidate_id)
}
