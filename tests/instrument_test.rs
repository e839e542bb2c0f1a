// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Instrumentation layered over real transforms, and the counter/logger
//! combination the analyzer relies on.

use permutil::{reverse, rotate, Letters, Log, Op, Sequence, Stat};

#[test]
fn test_counter_around_reverse() {
    let mut seq = Letters::ascending(8);
    let mut stat = Stat::new(&mut seq);
    reverse(&mut stat);
    assert_eq!(stat.count(Op::Len), 1);
    assert_eq!(stat.count(Op::Less), 0);
    assert_eq!(stat.count(Op::Swap), 4);
    assert_eq!(stat.to_string(), "{len:1 less:0 swap:4}");
}

#[test]
fn test_scripted_tallies_are_exact() {
    let mut stat = Stat::new(Letters::new("a"));
    for _ in 0..3 {
        stat.len();
    }
    for _ in 0..14 {
        stat.less(0, 0);
    }
    for _ in 0..7 {
        stat.swap(0, 0);
    }
    assert_eq!(stat.count(Op::Len), 3);
    assert_eq!(stat.count(Op::Less), 14);
    assert_eq!(stat.count(Op::Swap), 7);
}

#[test]
fn test_position_touches_under_rotate() {
    let mut seq = Letters::ascending(4);
    let mut stat = Stat::with_positions(&mut seq);
    rotate(&mut stat, 1);
    // rotate(4, 1) resolves to the swaps (2,3), (1,2), (0,1): the interior
    // positions are touched twice, the ends once.
    assert_eq!(stat.swap_touches(), Some(vec![1, 2, 2, 1]));
    assert_eq!(stat.less_touches(), Some(vec![0, 0, 0, 0]));
    let summary = stat.swap_summary().unwrap();
    assert_eq!(summary.min, 1);
    assert_eq!(summary.max, 2);
    assert_eq!(summary.mean, 1.5);
    assert_eq!(summary.std_dev, 0.5);
}

#[test]
fn test_logger_over_counter_marks_and_counts() {
    let mut seq = Letters::new("cab");
    let mut buf = Vec::new();
    let mut stat = Stat::new(&mut seq);
    {
        let mut log = Log::new(&mut stat, &mut buf);
        log.len();
        log.less(0, 1);
        log.swap(0, 1);
    }
    assert_eq!(stat.count(Op::Len), 1);
    assert_eq!(stat.count(Op::Less), 1);
    assert_eq!(stat.count(Op::Swap), 1);
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "(cab).len() [3]\n(CAb).less(0, 1) [false]\n(CAb).swap(0, 1) [ACb]\n"
    );
}

#[test]
fn test_logger_goes_quiet_past_the_inline_limit() {
    let mut seq = Letters::ascending(30);
    let mut buf = Vec::new();
    {
        let mut log = Log::new(&mut seq, &mut buf);
        log.len();
        log.swap(0, 29);
    }
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "len() [30]\nswap( 0, 29)\n"
    );
}

#[test]
fn test_logger_threshold_reopens_for_short_sequences() {
    // The gate follows the cached length, so one logger can see both a long
    // and a short sequence render decisions correctly.
    let mut buf = Vec::new();
    {
        let mut long = Letters::ascending(30);
        let mut log = Log::new(&mut long, &mut buf);
        log.len();
    }
    {
        let mut short = Letters::new("ab");
        let mut log = Log::new(&mut short, &mut buf);
        log.len();
    }
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "len() [30]\n(ab).len() [2]\n"
    );
}
