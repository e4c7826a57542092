use anchor_lang::prelude::*;
use crate::{contexts::Initialize, state::{RegistryInitialized, VotingState}};

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    // Voting starts closed with no candidates
    ctx.accounts
        .voting_state
        .set_inner(VotingState::new(owner, ctx.bumps.voting_state));

    emit!(RegistryInitialized {
        owner,
        timestamp: clock.unix_timestamp,
    });

    msg!("✅ Voting registry initialized!");
    msg!("   Owner: {}", owner);

    Ok(())
}
