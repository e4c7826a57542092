// ============================================================================
// SEEDS FOR PDA DERIVATION
// ============================================================================

pub const VOTING_STATE_SEED: &[u8] = b"voting_state";

pub const VOTER_SEED: &[u8] = b"voter";

// ============================================================================
// REGISTRY LIMITS
// ============================================================================

/// Maximum number of candidates the registry account holds.
/// The full registry stays under the 10 KiB limit for accounts created by CPI.
pub const MAX_CANDIDATES: usize = 64;

/// Active candidates returned per `get_active_candidates` page.
/// A full page stays under the 1024-byte return data limit.
pub const CANDIDATES_PAGE_SIZE: usize = 8;

/// Maximum candidate name length in bytes
pub const MAX_NAME_LEN: usize = 32;

/// Maximum candidate description length in bytes
pub const MAX_DESCRIPTION_LEN: usize = 64;

/// Candidate id meaning "no candidate" (ids start at 1)
pub const NO_CANDIDATE: u64 = 0;
