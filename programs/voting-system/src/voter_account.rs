//! Voter record PDA access.
//!
//! Instructions take the record as an unchecked, seed-bound account so that
//! the derived address of an address that was never registered is accepted
//! and reads as `None` instead of failing account validation.

use anchor_lang::prelude::*;

use crate::{constants::VOTER_SEED, state::VoterRecord};

/// PDA holding the record for `voter`.
pub fn voter_record_address(voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VOTER_SEED, voter.as_ref()], &crate::ID)
}

/// Decodes raw account contents. An account this program does not own, or
/// one with no data, has never been created and yields `None`.
pub fn decode(owner: &Pubkey, data: &[u8]) -> Result<Option<VoterRecord>> {
    if owner != &crate::ID || data.is_empty() {
        return Ok(None);
    }
    let mut bytes = data;
    VoterRecord::try_deserialize(&mut bytes).map(Some)
}

pub fn encode(record: &VoterRecord, data: &mut [u8]) -> Result<()> {
    let mut writer = data;
    record.try_serialize(&mut writer)
}

pub fn load(info: &AccountInfo) -> Result<Option<VoterRecord>> {
    let data = info.try_borrow_data()?;
    decode(info.owner, &data[..])
}

pub fn store(info: &AccountInfo, record: &VoterRecord) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    encode(record, &mut data[..])
}
