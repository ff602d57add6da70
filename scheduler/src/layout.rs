//! Pure helpers around the (tables, seats) layout.

/// Theoretical minimum number of rounds for one participant to meet every
/// other exactly once under even rotation: each round brings at most
/// `seats - 1` new acquaintances.
pub fn round_bound(participants: usize, seats: usize) -> usize {
    if participants > 1 && seats > 1 {
        (participants - 1).div_ceil(seats - 1)
    } else {
        1
    }
}

/// Suggest a (tables, seats) layout for `participants` people: the pair
/// minimizing |seats - tables| subject to tables * seats >= participants.
/// Ties favour fewer tables.
pub fn suggest_layout(participants: usize) -> (usize, usize) {
    if participants == 0 {
        return (1, 1);
    }

    let mut best = (1, participants);
    let mut best_gap = participants.abs_diff(1);

    for tables in 1..=participants {
        let seats = participants.div_ceil(tables);
        let gap = seats.abs_diff(tables);
        if gap < best_gap {
            best = (tables, seats);
            best_gap = gap;
        }
    }

    best
}
