use anchor_lang::prelude::*;

use crate::{constants::*, error::VotingError};

// ============================================================================
// VOTING STATE - Registry account (owner, lifecycle, candidates, tally)
// ============================================================================

#[account]
#[derive(InitSpace, Debug)]
pub struct VotingState {
    /// Owner authority who manages candidates, voters and the voting window
    pub owner: Pubkey,

    /// Is the registry currently accepting votes?
    pub voting_active: bool,

    /// Total votes cast (sum of all candidate vote counts)
    pub total_votes: u64,

    /// Number of candidates ever added; also the last assigned candidate id
    pub candidates_count: u64,

    /// Candidates in creation order
    #[max_len(MAX_CANDIDATES)]
    pub candidates: Vec<Candidate>,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: u64,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub vote_count: u64,
    pub is_active: bool,
}

// ============================================================================
// VOTER RECORD - One PDA per voter address, soft-deleted via `is_active`
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct VoterRecord {
    /// Address this record belongs to
    pub voter: Pubkey,

    pub is_registered: bool,

    pub has_voted: bool,

    /// Candidate voted for, `NO_CANDIDATE` until a vote is cast
    pub voted_candidate_id: u64,

    /// Cleared by `delete_voter`; history above is kept
    pub is_active: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

// ============================================================================
// VIEW TYPES - Returned through instruction return data
// ============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct VoterInfo {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_candidate_id: u64,
    pub is_active: bool,
}

/// One page of active candidates, sized to fit the return-data buffer
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidatePage {
    pub candidates: Vec<Candidate>,
    pub has_more: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WinnerInfo {
    pub winner_id: u64,
    pub winner_name: String,
    pub winner_vote_count: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct VotingStatus {
    pub owner: Pubkey,
    pub voting_active: bool,
    pub total_votes: u64,
    pub candidates_count: u64,
}

// ============================================================================
// EVENTS - Emitted for off-chain indexing
// ============================================================================

#[event]
#[derive(Debug, PartialEq)]
pub struct RegistryInitialized {
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
#[derive(Debug, PartialEq)]
pub struct CandidateAdded {
    pub candidate_id: u64,
    pub name: String,
    pub timestamp: i64,
}

#[event]
#[derive(Debug, PartialEq)]
pub struct VoterRegistered {
    pub voter: Pubkey,
    /// True when a previously deleted record was re-activated
    pub reactivated: bool,
    pub timestamp: i64,
}

#[event]
#[derive(Debug, PartialEq)]
pub struct VoterDeleted {
    pub voter: Pubkey,
    pub timestamp: i64,
}

#[event]
#[derive(Debug, PartialEq)]
pub struct VotingStatusChanged {
    pub voting_active: bool,
    pub timestamp: i64,
}

#[event]
#[derive(Debug, PartialEq)]
pub struct VoteCast {
    pub voter: Pubkey,
    pub candidate_id: u64,
    pub candidate_vote_count: u64,
    pub total_votes: u64,
    pub timestamp: i64,
}

// ============================================================================
// TRANSITIONS
//
// Every method validates all of its preconditions before it writes, so a
// failed call leaves the accounts exactly as they were.
// ============================================================================

impl VotingState {
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            voting_active: false,
            total_votes: 0,
            candidates_count: 0,
            candidates: Vec::new(),
            bump,
        }
    }

    fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, VotingError::Unauthorized);
        Ok(())
    }

    pub fn add_candidate(
        &mut self,
        caller: &Pubkey,
        name: String,
        description: String,
        now: i64,
    ) -> Result<CandidateAdded> {
        self.require_owner(caller)?;
        require!(!name.is_empty(), VotingError::InvalidArgument);
        require!(name.len() <= MAX_NAME_LEN, VotingError::NameTooLong);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            VotingError::DescriptionTooLong
        );
        require!(
            self.candidates.len() < MAX_CANDIDATES,
            VotingError::CandidateLimitReached
        );

        let candidate_id = self
            .candidates_count
            .checked_add(1)
            .ok_or(VotingError::ArithmeticOverflow)?;

        self.candidates.push(Candidate {
            id: candidate_id,
            name: name.clone(),
            description,
            vote_count: 0,
            is_active: true,
        });
        self.candidates_count = candidate_id;

        Ok(CandidateAdded {
            candidate_id,
            name,
            timestamp: now,
        })
    }

    /// Registers `voter` into `record`, or re-activates a deleted record.
    /// Re-activation keeps `has_voted` and `voted_candidate_id`.
    pub fn register_voter(
        &self,
        caller: &Pubkey,
        voter: Pubkey,
        record: &mut VoterRecord,
        bump: u8,
        now: i64,
    ) -> Result<VoterRegistered> {
        self.require_owner(caller)?;
        require!(voter != Pubkey::default(), VotingError::InvalidArgument);

        let reactivated = if record.is_registered {
            require!(!record.is_active, VotingError::AlreadyRegistered);
            record.is_active = true;
            true
        } else {
            *record = VoterRecord {
                voter,
                is_registered: true,
                has_voted: false,
                voted_candidate_id: NO_CANDIDATE,
                is_active: true,
                bump,
            };
            false
        };

        Ok(VoterRegistered {
            voter,
            reactivated,
            timestamp: now,
        })
    }

    pub fn delete_voter(
        &self,
        caller: &Pubkey,
        voter: Pubkey,
        record: Option<&mut VoterRecord>,
        now: i64,
    ) -> Result<VoterDeleted> {
        self.require_owner(caller)?;
        let record = record.ok_or(VotingError::VoterNotFound)?;
        require!(record.is_registered, VotingError::VoterNotFound);

        record.is_active = false;

        Ok(VoterDeleted {
            voter,
            timestamp: now,
        })
    }

    /// Sets the voting window. Returns `None` when the state already matched.
    pub fn set_voting_active(
        &mut self,
        caller: &Pubkey,
        active: bool,
        now: i64,
    ) -> Result<Option<VotingStatusChanged>> {
        self.require_owner(caller)?;
        if self.voting_active == active {
            return Ok(None);
        }

        self.voting_active = active;

        Ok(Some(VotingStatusChanged {
            voting_active: active,
            timestamp: now,
        }))
    }

    pub fn cast_vote(
        &mut self,
        caller: &Pubkey,
        record: Option<&mut VoterRecord>,
        candidate_id: u64,
        now: i64,
    ) -> Result<VoteCast> {
        require!(self.voting_active, VotingError::VotingInactive);

        let record = record.ok_or(VotingError::NotRegistered)?;
        require!(record.is_registered, VotingError::NotRegistered);
        require_keys_eq!(record.voter, *caller, VotingError::NotRegistered);
        require!(record.is_active, VotingError::VoterInactive);
        require!(!record.has_voted, VotingError::AlreadyVoted);

        let index = self.candidate_index(candidate_id)?;
        let candidate = &self.candidates[index];
        require!(candidate.is_active, VotingError::CandidateInactive);

        let candidate_vote_count = candidate
            .vote_count
            .checked_add(1)
            .ok_or(VotingError::ArithmeticOverflow)?;
        let total_votes = self
            .total_votes
            .checked_add(1)
            .ok_or(VotingError::ArithmeticOverflow)?;

        record.has_voted = true;
        record.voted_candidate_id = candidate_id;
        self.candidates[index].vote_count = candidate_vote_count;
        self.total_votes = total_votes;

        Ok(VoteCast {
            voter: *caller,
            candidate_id,
            candidate_vote_count,
            total_votes,
            timestamp: now,
        })
    }

    fn candidate_index(&self, candidate_id: u64) -> Result<usize> {
        self.candidates
            .iter()
            .position(|c| c.id == candidate_id)
            .ok_or_else(|| error!(VotingError::CandidateNotFound))
    }

    pub fn candidate(&self, candidate_id: u64) -> Result<&Candidate> {
        let index = self.candidate_index(candidate_id)?;
        Ok(&self.candidates[index])
    }

    pub fn active_candidates(&self) -> Vec<Candidate> {
        self.candidates
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect()
    }

    /// Active candidates in creation order, `CANDIDATES_PAGE_SIZE` per page.
    pub fn active_candidates_page(&self, page: u32) -> CandidatePage {
        let start = (page as usize).saturating_mul(CANDIDATES_PAGE_SIZE);
        let mut active = self.candidates.iter().filter(|c| c.is_active).skip(start);
        let candidates = active
            .by_ref()
            .take(CANDIDATES_PAGE_SIZE)
            .cloned()
            .collect();
        CandidatePage {
            candidates,
            has_more: active.next().is_some(),
        }
    }

    /// Candidate with the most votes. Ties go to the lowest id; with no
    /// candidates the result is all zero.
    pub fn winner(&self) -> WinnerInfo {
        let mut leader: Option<&Candidate> = None;
        for candidate in &self.candidates {
            match leader {
                Some(current) if candidate.vote_count <= current.vote_count => {}
                _ => leader = Some(candidate),
            }
        }

        leader
            .map(|c| WinnerInfo {
                winner_id: c.id,
                winner_name: c.name.clone(),
                winner_vote_count: c.vote_count,
            })
            .unwrap_or_default()
    }

    pub fn status(&self) -> VotingStatus {
        VotingStatus {
            owner: self.owner,
            voting_active: self.voting_active,
            total_votes: self.total_votes,
            candidates_count: self.candidates_count,
        }
    }
}

impl VoterInfo {
    /// View of an optional record; an address with no record reads as all defaults.
    pub fn from_record(record: Option<&VoterRecord>) -> Self {
        record
            .map(|r| VoterInfo {
                is_registered: r.is_registered,
                has_voted: r.has_voted,
                voted_candidate_id: r.voted_candidate_id,
                is_active: r.is_active,
            })
            .unwrap_or_default()
    }
}
