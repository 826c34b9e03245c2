//! Round-robin pairing by the circle method.
//!
//! Slots are laid out as a ring plus one fixed anchor. With an even number of
//! participants the last one is the anchor; with an odd number the anchor is
//! an empty bye slot, so whoever faces it sits the round out. Each round the
//! ring turns one step, the anchor meets the ring's head and the rest of the
//! ring pairs up from the outside in.
//!
//! Home/away: the anchor's match alternates side by round parity. For every
//! other pair the ring is odd-sized, so exactly one of the two sits more than
//! half a turn ahead of the other; that one plays at home. Each ring member
//! hosts exactly half of its ring opponents, which keeps every participant's
//! home and away counts within one of each other.

use crate::models::{CompetitionError, Match, Participant, Schedule};

/// The fixed slot of the rotation: a participant, or the bye used to even out an odd count.
type Anchor<'a> = Option<&'a Participant>;

/// Generate every pairing of `participants` exactly once.
///
/// Matches come out grouped by round in ascending order, anchor match first
/// within a round. No participant appears twice in one round. `assign_dates`
/// relies on this order.
pub fn generate_schedule(participants: &[Participant]) -> Result<Schedule, CompetitionError> {
    let n = participants.len();
    if n < 2 {
        return Err(CompetitionError::InsufficientParticipants { found: n });
    }

    let (ring, anchor): (&[Participant], Anchor<'_>) = if n % 2 == 0 {
        (&participants[..n - 1], Some(&participants[n - 1]))
    } else {
        (participants, None)
    };

    let ring_len = ring.len();
    let half = (ring_len - 1) / 2;

    log::debug!(
        "Generating round robin for {} participants: {} rounds{}",
        n,
        ring_len,
        if anchor.is_none() { " with bye" } else { "" }
    );

    let mut matches = Vec::with_capacity(n * (n - 1) / 2);
    for round in 0..ring_len {
        let seat = |pos: usize| (pos + round) % ring_len;

        if let Some(anchor) = anchor {
            let (home, away) = if round % 2 == 0 {
                (&ring[seat(0)], anchor)
            } else {
                (anchor, &ring[seat(0)])
            };
            matches.push(Match::new(home.clone(), away.clone(), round));
        }

        for k in 1..=half {
            let (front, back) = (&ring[seat(k)], &ring[seat(ring_len - k)]);
            // `front` is 2k steps ahead of `back`.
            let (home, away) = if 2 * k > half {
                (front, back)
            } else {
                (back, front)
            };
            matches.push(Match::new(home.clone(), away.clone(), round));
        }
    }

    debug_assert_eq!(matches.len(), n * (n - 1) / 2);
    Ok(Schedule::new(matches))
}
