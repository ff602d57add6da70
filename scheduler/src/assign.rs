//! Partitions a participant ordering into capacity-bounded tables.
//!
//! The ordering is supplied by the search (priority-sorted, randomized
//! tiebreaks); this module itself draws no randomness, so identical
//! orderings always produce identical partitions.

use session::model::ParticipantId;

/// Split `ordering` into at most `table_count` tables of at most
/// `seat_capacity` members each.
///
/// - Fewer than 2 participants, or a capacity below 2, yields an empty
///   partition: no table can hold the required minimum of 2.
/// - `min(table_count, n / 2)` tables are opened, each seeded with 2
///   participants from the front of the ordering.
/// - Every remaining participant goes to the least-occupied table still
///   under capacity.
/// - When every table is at capacity and participants remain (total
///   capacity structurally exceeded), the remainder is spread round-robin
///   so nobody is left unseated.
pub fn assign_tables(
    ordering: &[ParticipantId],
    table_count: usize,
    seat_capacity: usize,
) -> Vec<Vec<ParticipantId>> {
    if ordering.len() < 2 || seat_capacity < 2 {
        return Vec::new();
    }

    let effective_tables = table_count.min(ordering.len() / 2);
    if effective_tables == 0 {
        return Vec::new();
    }

    let mut tables: Vec<Vec<ParticipantId>> = Vec::with_capacity(effective_tables);
    let mut queue = ordering.iter().copied();

    for _ in 0..effective_tables {
        // Guaranteed to succeed: effective_tables <= n / 2.
        let pair: Vec<ParticipantId> = queue.by_ref().take(2).collect();
        tables.push(pair);
    }

    let mut overflow = Vec::new();
    for id in queue {
        match tables
            .iter_mut()
            .filter(|t| t.len() < seat_capacity)
            .min_by_key(|t| t.len())
        {
            Some(table) => table.push(id),
            None => overflow.push(id),
        }
    }

    let open = tables.len();
    for (i, id) in overflow.into_iter().enumerate() {
        tables[i % open].push(id);
    }

    debug_assert_eq!(
        tables.iter().map(Vec::len).sum::<usize>(),
        ordering.len(),
        "every participant must be seated exactly once"
    );

    tables
}
