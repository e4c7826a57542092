use anchor_lang::prelude::*;

use crate::{constants::*, error::VotingError, state::*};

/// Create the voting registry; the signer becomes its owner
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Main registry PDA
    #[account(
        init,
        payer = owner,
        space = 8 + VotingState::INIT_SPACE,
        seeds = [VOTING_STATE_SEED],
        bump
    )]
    pub voting_state: Account<'info, VotingState>,

    pub system_program: Program<'info, System>,
}

/// Owner-only change to the registry itself (candidates, voting window)
#[derive(Accounts)]
pub struct OwnerAction<'info> {
    pub owner: Signer<'info>,

    /// Registry - must match owner
    #[account(
        mut,
        seeds = [VOTING_STATE_SEED],
        bump = voting_state.bump,
        constraint = voting_state.owner == owner.key() @ VotingError::Unauthorized
    )]
    pub voting_state: Account<'info, VotingState>,
}

/// Register (or re-activate) a voter (owner-only)
#[derive(Accounts)]
#[instruction(voter: Pubkey)]
pub struct RegisterVoter<'info> {
    /// Owner authority, pays for the voter record
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [VOTING_STATE_SEED],
        bump = voting_state.bump,
        constraint = voting_state.owner == owner.key() @ VotingError::Unauthorized
    )]
    pub voting_state: Account<'info, VotingState>,

    /// Voter record PDA - created on first registration, reused afterwards
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + VoterRecord::INIT_SPACE,
        seeds = [VOTER_SEED, voter.as_ref()],
        bump
    )]
    pub voter_record: Account<'info, VoterRecord>,

    pub system_program: Program<'info, System>,
}

/// Soft-delete a voter (owner-only)
#[derive(Accounts)]
#[instruction(voter: Pubkey)]
pub struct DeleteVoter<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [VOTING_STATE_SEED],
        bump = voting_state.bump,
        constraint = voting_state.owner == owner.key() @ VotingError::Unauthorized
    )]
    pub voting_state: Account<'info, VotingState>,

    /// CHECK: bound to the voter by seeds; decoded by `voter_account::load`,
    /// which reads an uncreated PDA as "not found"
    #[account(
        mut,
        seeds = [VOTER_SEED, voter.as_ref()],
        bump
    )]
    pub voter_record: UncheckedAccount<'info>,
}

/// Cast a vote (any registered voter)
#[derive(Accounts)]
pub struct CastVote<'info> {
    pub voter: Signer<'info>,

    /// Written together with the voter record, so votes are serialized
    #[account(
        mut,
        seeds = [VOTING_STATE_SEED],
        bump = voting_state.bump
    )]
    pub voting_state: Account<'info, VotingState>,

    /// CHECK: bound to the signer by seeds, so a signer can only spend its
    /// own record; an uncreated PDA decodes as "not registered"
    #[account(
        mut,
        seeds = [VOTER_SEED, voter.key().as_ref()],
        bump
    )]
    pub voter_record: UncheckedAccount<'info>,
}

/// Read-only access to the registry
#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [VOTING_STATE_SEED],
        bump = voting_state.bump
    )]
    pub voting_state: Account<'info, VotingState>,
}

/// Read-only access to one voter record
#[derive(Accounts)]
#[instruction(voter: Pubkey)]
pub struct ReadVoter<'info> {
    /// CHECK: bound to the voter by seeds; an uncreated PDA reads as defaults
    #[account(
        seeds = [VOTER_SEED, voter.as_ref()],
        bump
    )]
    pub voter_record: UncheckedAccount<'info>,
}
