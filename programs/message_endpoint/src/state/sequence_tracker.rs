use anchor_lang::prelude::*;

/// Monotonic outgoing-message counter for one integrator.
#[account]
pub struct SequenceTracker {
    /// PDA bump seed
    pub bump: u8,

    /// Program ID of the integrator, used as a PDA seed
    pub integrator_program_id: Pubkey,

    /// Next sequence number to hand out
    pub sequence: u64,
}

impl SequenceTracker {
    pub const SIZE: usize = 1   // bump
        + 32                    // integrator_program_id
        + 8;                    // sequence

    /// Return the current sequence number and advance the counter.
    /// Overflow aborts the transaction (overflow-checks is enabled).
    pub fn next_sequence(&mut self) -> u64 {
        let sequence = self.sequence;
        self.sequence += 1;
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_are_gap_free_and_start_at_zero() {
        let mut tracker = SequenceTracker {
            bump: 255,
            integrator_program_id: Pubkey::new_unique(),
            sequence: 0,
        };
        for expected in 0..100u64 {
            assert_eq!(tracker.next_sequence(), expected);
        }
        assert_eq!(tracker.sequence, 100);
    }

    #[test]
    #[should_panic]
    fn sequence_overflow_panics() {
        let mut tracker = SequenceTracker {
            bump: 255,
            integrator_program_id: Pubkey::new_unique(),
            sequence: u64::MAX,
        };
        tracker.next_sequence();
    }
}
