use anchor_lang::prelude::*;
use voting_system::{
    voter_account, VoterInfo, VoterRecord, VotingError, VotingState, WinnerInfo,
};

const NOW: i64 = 1_700_000_000;

fn expect_err<T: std::fmt::Debug>(result: Result<T>, expected: VotingError) {
    assert_eq!(result.unwrap_err(), anchor_lang::error::Error::from(expected));
}

/// Tally invariant: total == sum of candidate counts == number of voters who voted
fn assert_tally_consistent(state: &VotingState, records: &[VoterRecord]) {
    let candidate_sum: u64 = state.candidates.iter().map(|c| c.vote_count).sum();
    let voted = records.iter().filter(|r| r.has_voted).count() as u64;
    assert_eq!(state.total_votes, candidate_sum);
    assert_eq!(state.total_votes, voted);
}

#[test]
fn alice_and_bob_election() {
    let owner = Pubkey::new_unique();
    let mut state = VotingState::new(owner, 255);

    let alice = state
        .add_candidate(&owner, "Alice".into(), "Candidate A".into(), NOW)
        .unwrap();
    let bob = state
        .add_candidate(&owner, "Bob".into(), "Candidate B".into(), NOW)
        .unwrap();
    assert_eq!((alice.candidate_id, bob.candidate_id), (1, 2));

    let voter = Pubkey::new_unique();
    let mut record = VoterRecord::default();
    state
        .register_voter(&owner, voter, &mut record, 254, NOW)
        .unwrap();
    state.set_voting_active(&owner, true, NOW).unwrap();

    state.cast_vote(&voter, Some(&mut record), 1, NOW).unwrap();

    let info = VoterInfo::from_record(Some(&record));
    assert!(info.has_voted);
    assert_eq!(info.voted_candidate_id, 1);
    assert_eq!(state.candidate(1).unwrap().vote_count, 1);
    assert_eq!(state.total_votes, 1);

    expect_err(
        state.cast_vote(&voter, Some(&mut record), 2, NOW),
        VotingError::AlreadyVoted,
    );
    assert_eq!(state.candidate(2).unwrap().vote_count, 0);

    state.set_voting_active(&owner, false, NOW).unwrap();
    assert_eq!(
        state.winner(),
        WinnerInfo {
            winner_id: 1,
            winner_name: "Alice".into(),
            winner_vote_count: 1,
        }
    );
}

#[test]
fn unregistered_vote_changes_nothing() {
    let owner = Pubkey::new_unique();
    let mut state = VotingState::new(owner, 255);
    state
        .add_candidate(&owner, "Alice".into(), String::new(), NOW)
        .unwrap();
    state.set_voting_active(&owner, true, NOW).unwrap();

    expect_err(
        state.cast_vote(&Pubkey::new_unique(), None, 1, NOW),
        VotingError::NotRegistered,
    );
    assert_eq!(state.total_votes, 0);
    assert_eq!(state.candidate(1).unwrap().vote_count, 0);
}

#[test]
fn deleting_a_voter_keeps_the_tally() {
    let owner = Pubkey::new_unique();
    let mut state = VotingState::new(owner, 255);
    state
        .add_candidate(&owner, "Alice".into(), String::new(), NOW)
        .unwrap();
    let voter = Pubkey::new_unique();
    let mut record = VoterRecord::default();
    state
        .register_voter(&owner, voter, &mut record, 1, NOW)
        .unwrap();
    state.set_voting_active(&owner, true, NOW).unwrap();
    state.cast_vote(&voter, Some(&mut record), 1, NOW).unwrap();

    let deleted = state
        .delete_voter(&owner, voter, Some(&mut record), NOW)
        .unwrap();
    assert_eq!(deleted.voter, voter);

    assert_eq!(state.total_votes, 1);
    assert_eq!(state.candidate(1).unwrap().vote_count, 1);
    let info = VoterInfo::from_record(Some(&record));
    assert!(info.has_voted);
    assert!(!info.is_active);
    assert_tally_consistent(&state, &[record]);
}

#[test]
fn closed_window_rejects_eligible_voters() {
    let owner = Pubkey::new_unique();
    let mut state = VotingState::new(owner, 255);
    state
        .add_candidate(&owner, "Alice".into(), String::new(), NOW)
        .unwrap();
    let voter = Pubkey::new_unique();
    let mut record = VoterRecord::default();
    state
        .register_voter(&owner, voter, &mut record, 1, NOW)
        .unwrap();

    state.set_voting_active(&owner, true, NOW).unwrap();
    state.set_voting_active(&owner, false, NOW).unwrap();

    expect_err(
        state.cast_vote(&voter, Some(&mut record), 1, NOW),
        VotingError::VotingInactive,
    );
    assert!(!record.has_voted);
}

#[test]
fn tally_stays_consistent_across_mixed_operations() {
    let owner = Pubkey::new_unique();
    let mut state = VotingState::new(owner, 255);
    for name in ["A", "B", "C"] {
        state
            .add_candidate(&owner, name.into(), String::new(), NOW)
            .unwrap();
    }

    let voters: Vec<Pubkey> = (0..6).map(|_| Pubkey::new_unique()).collect();
    let mut records: Vec<VoterRecord> = vec![VoterRecord::default(); voters.len()];
    for (voter, record) in voters.iter().zip(records.iter_mut()) {
        state
            .register_voter(&owner, *voter, record, 1, NOW)
            .unwrap();
    }
    state
        .delete_voter(&owner, voters[5], Some(&mut records[5]), NOW)
        .unwrap();
    state.set_voting_active(&owner, true, NOW).unwrap();

    // Every voter tries twice, cycling through candidates 1..=4 (4 does not exist)
    let expected: [[Option<VotingError>; 6]; 2] = [
        [
            None,
            None,
            None,
            Some(VotingError::CandidateNotFound),
            None,
            Some(VotingError::VoterInactive),
        ],
        [
            Some(VotingError::AlreadyVoted),
            Some(VotingError::AlreadyVoted),
            Some(VotingError::AlreadyVoted),
            None,
            Some(VotingError::AlreadyVoted),
            Some(VotingError::VoterInactive),
        ],
    ];
    for (round, outcomes) in expected.iter().enumerate() {
        for (i, (voter, record)) in voters.iter().zip(records.iter_mut()).enumerate() {
            let candidate_id = (i + round) as u64 % 4 + 1;
            let result = state.cast_vote(voter, Some(record), candidate_id, NOW);
            match outcomes[i] {
                None => assert!(result.is_ok(), "voter {i}, round {round}: {result:?}"),
                Some(err) => expect_err(result, err),
            }
        }
        assert_tally_consistent(&state, &records);
    }

    // Voter 5 was deleted, voter 3 picked the missing candidate 4 first, then 1
    assert!(!records[5].has_voted);
    assert_eq!(records[3].voted_candidate_id, 1);
    assert_eq!(state.total_votes, 5);

    state.delete_voter(&owner, voters[0], Some(&mut records[0]), NOW).unwrap();
    assert_tally_consistent(&state, &records);
}

/// Walks the account path the instructions take: the record is read from the
/// voter's derived address whether or not it was ever created.
#[test]
fn derived_address_of_unregistered_voter() {
    let owner = Pubkey::new_unique();
    let mut state = VotingState::new(owner, 255);
    state
        .add_candidate(&owner, "Alice".into(), String::new(), NOW)
        .unwrap();
    state.set_voting_active(&owner, true, NOW).unwrap();

    let stranger = Pubkey::new_unique();
    let (address, _) = voter_account::voter_record_address(&stranger);
    assert_ne!(address, stranger);

    // Uncreated PDA: system-owned, no data
    let system_program = Pubkey::default();
    let loaded = voter_account::decode(&system_program, &[]).unwrap();
    assert_eq!(VoterInfo::from_record(loaded.as_ref()), VoterInfo::default());

    let mut loaded = voter_account::decode(&system_program, &[]).unwrap();
    expect_err(
        state.cast_vote(&stranger, loaded.as_mut(), 1, NOW),
        VotingError::NotRegistered,
    );
    expect_err(
        state.delete_voter(&owner, stranger, loaded.as_mut(), NOW),
        VotingError::VoterNotFound,
    );
    assert_eq!(state.total_votes, 0);
}

#[test]
fn stored_record_round_trips_through_a_vote() {
    let owner = Pubkey::new_unique();
    let mut state = VotingState::new(owner, 255);
    state
        .add_candidate(&owner, "Alice".into(), String::new(), NOW)
        .unwrap();
    let voter = Pubkey::new_unique();
    let (_, bump) = voter_account::voter_record_address(&voter);

    let mut data = vec![0u8; 8 + VoterRecord::INIT_SPACE];
    let mut record = VoterRecord::default();
    state
        .register_voter(&owner, voter, &mut record, bump, NOW)
        .unwrap();
    voter_account::encode(&record, &mut data).unwrap();
    state.set_voting_active(&owner, true, NOW).unwrap();

    let mut loaded = voter_account::decode(&voting_system::ID, &data).unwrap();
    state.cast_vote(&voter, loaded.as_mut(), 1, NOW).unwrap();
    voter_account::encode(loaded.as_ref().unwrap(), &mut data).unwrap();

    let mut reloaded = voter_account::decode(&voting_system::ID, &data).unwrap();
    let info = VoterInfo::from_record(reloaded.as_ref());
    assert!(info.has_voted);
    assert_eq!(info.voted_candidate_id, 1);
    expect_err(
        state.cast_vote(&voter, reloaded.as_mut(), 1, NOW),
        VotingError::AlreadyVoted,
    );

    // Another signer presenting this record is turned away
    expect_err(
        state.cast_vote(&Pubkey::new_unique(), reloaded.as_mut(), 1, NOW),
        VotingError::NotRegistered,
    );
    assert_eq!(state.total_votes, 1);
}
