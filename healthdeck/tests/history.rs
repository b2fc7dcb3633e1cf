//! History buffer laws: pre-filled start, FIFO eviction, snapshot reads.

use healthdeck::history::HistoryBuffer;
use healthdeck::types::{Health, HealthState};

fn sample(overall: HealthState) -> Health {
    Health {
        overall,
        ..Health::default()
    }
}

#[test]
fn fresh_buffer_is_full_of_unknown() {
    for cap in [1, 3, 60, 1000] {
        let buf = HistoryBuffer::new(cap);
        let series = buf.series();
        assert_eq!(series.len(), cap);
        assert!(series.iter().all(|s| *s == Health::default()));
    }
}

#[test]
fn append_evicts_oldest_first() {
    let mut buf = HistoryBuffer::new(3);
    let a = sample(HealthState::Ok);
    let b = sample(HealthState::Unhealthy);
    let c = sample(HealthState::Critical);
    let d = sample(HealthState::Ok);

    buf.append(a);
    buf.append(b.clone());
    buf.append(c.clone());
    buf.append(d.clone());

    assert_eq!(buf.series(), vec![b, c, d]);
}

#[test]
fn length_is_pinned_at_capacity() {
    let mut buf = HistoryBuffer::new(5);
    for _ in 0..37 {
        buf.append(sample(HealthState::Ok));
        assert_eq!(buf.series().len(), 5);
    }
}

#[test]
fn appending_more_than_capacity_keeps_the_last_n() {
    let mut buf = HistoryBuffer::new(4);
    for i in 0..10u64 {
        let mut s = sample(HealthState::Ok);
        s.memory.value.total = i;
        buf.append(s);
    }
    let totals: Vec<u64> = buf.series().iter().map(|s| s.memory.value.total).collect();
    assert_eq!(totals, vec![6, 7, 8, 9]);
}

#[test]
fn snapshot_is_detached_from_later_appends() {
    let mut buf = HistoryBuffer::new(2);
    let before = buf.series();
    buf.append(sample(HealthState::Critical));
    assert!(before.iter().all(|s| *s == Health::default()));
    assert_eq!(buf.series().last().unwrap().overall, HealthState::Critical);
}

#[test]
#[should_panic(expected = "capacity")]
fn zero_capacity_panics() {
    let _ = HistoryBuffer::new(0);
}
