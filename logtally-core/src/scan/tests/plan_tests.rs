use crate::scan::{ChunkRange, plan_chunks};
use pretty_assertions::assert_eq;
use std::num::NonZeroUsize;

fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn last_range_absorbs_remainder() {
    // Act
    let plan = plan_chunks(10, workers(3));

    // Assert
    assert_eq!(
        plan,
        vec![
            ChunkRange::new(0, 3),
            ChunkRange::new(3, 6),
            ChunkRange::new(6, 10),
        ]
    );
}

#[test]
fn single_worker_covers_whole_file() {
    // Act
    let plan = plan_chunks(1234, workers(1));

    // Assert
    assert_eq!(plan, vec![ChunkRange::new(0, 1234)]);
}

#[test]
fn empty_file_yields_empty_ranges() {
    // Act
    let plan = plan_chunks(0, workers(4));

    // Assert
    assert_eq!(plan.len(), 4);
    assert!(plan.iter().all(ChunkRange::is_empty));
}

#[test]
fn more_workers_than_bytes() {
    // Act
    let plan = plan_chunks(3, workers(5));

    // Assert
    assert_eq!(plan.len(), 5);
    assert!(plan[..4].iter().all(ChunkRange::is_empty));
    assert_eq!(plan[4], ChunkRange::new(0, 3));
}

#[test]
fn ranges_are_contiguous_and_cover_the_file() {
    for size in [0u64, 1, 7, 64, 1000, 4099] {
        for n in 1..=17 {
            // Act
            let plan = plan_chunks(size, workers(n));

            // Assert
            assert_eq!(plan.len(), n);
            assert_eq!(plan[0].start, 0);
            assert_eq!(plan[n - 1].end, size);
            for pair in plan.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "size={size} n={n}");
            }
            let covered: u64 = plan.iter().map(ChunkRange::len).sum();
            assert_eq!(covered, size);
        }
    }
}

#[test]
fn range_display_is_half_open() {
    assert_eq!(ChunkRange::new(3, 6).to_string(), "[3, 6)");
}
