use anchor_lang::prelude::*;
use crate::contexts::OwnerAction;

/// Opens (`active = true`) or closes the voting window.
/// Setting the current value again succeeds without emitting an event.
pub fn handler(ctx: Context<OwnerAction>, active: bool) -> Result<()> {
    let voting_state = &mut ctx.accounts.voting_state;
    let caller = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    match voting_state.set_voting_active(&caller, active, clock.unix_timestamp)? {
        Some(event) => {
            emit!(event);
            msg!(
                "📅 Voting {}",
                if active { "started" } else { "stopped" }
            );
        }
        None => msg!("Voting already {}", if active { "active" } else { "inactive" }),
    }

    Ok(())
}
