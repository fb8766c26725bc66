//! Tests for the Monte Carlo driver.

use birthday_core::{
    find_shared_birthday, generate_birthdays, run_simulation, GroupSize, DAYS_IN_YEAR,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn pigeonhole_forces_a_match_beyond_domain_size() {
    // 366 draws from a 365-day domain must always contain a duplicate.
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..100 {
        let birthdays = generate_birthdays(&mut rng, DAYS_IN_YEAR as usize + 1);
        assert!(
            find_shared_birthday(&birthdays).is_some(),
            "366 draws from 365 days must collide"
        );
    }
}

#[test]
fn group_of_one_never_matches() {
    let mut rng = SmallRng::seed_from_u64(2);
    let group = GroupSize::new(1).unwrap();
    let summary = run_simulation(&mut rng, group, 10_000, |_| {});
    assert_eq!(summary.matches, 0);
    assert_eq!(summary.probability_percent, 0.0);
}

#[test]
fn classic_23_person_group_is_near_fifty_percent() {
    // Theoretical value ~50.73%. At 100k trials the standard error is
    // ~0.16%, so the 49..52 window is many standard errors wide.
    let mut rng = SmallRng::seed_from_u64(42);
    let group = GroupSize::new(23).unwrap();
    let summary = run_simulation(&mut rng, group, 100_000, |_| {});
    assert!(
        summary.probability_percent > 49.0 && summary.probability_percent < 52.0,
        "estimate {}% too far from theoretical 50.73%",
        summary.probability_percent
    );
}

#[test]
fn group_of_100_is_near_certain() {
    // Theoretical value ~99.99997%.
    let mut rng = SmallRng::seed_from_u64(5);
    let group = GroupSize::new(100).unwrap();
    let summary = run_simulation(&mut rng, group, 10_000, |_| {});
    assert!(
        summary.probability_percent > 99.9,
        "estimate {}% too low for a 100-person group",
        summary.probability_percent
    );
}

#[test]
fn estimates_tighten_with_more_trials() {
    // Across several seeds, 100k-trial estimates must cluster more tightly
    // around the theoretical value than 1k-trial estimates do.
    let theoretical = 50.73;
    let group = GroupSize::new(23).unwrap();

    let spread = |trials: u64| -> f64 {
        let estimates: Vec<f64> = (0..5u64)
            .map(|seed| {
                let mut rng = SmallRng::seed_from_u64(seed);
                run_simulation(&mut rng, group, trials, |_| {}).probability_percent
            })
            .collect();
        estimates
            .iter()
            .map(|e| (e - theoretical).abs())
            .fold(0.0, f64::max)
    };

    let small = spread(1_000);
    let large = spread(100_000);
    assert!(
        large < small,
        "100k-trial max deviation {large:.3} not tighter than 1k-trial {small:.3}"
    );
}

#[test]
fn identical_seeds_give_identical_summaries() {
    let group = GroupSize::new(23).unwrap();
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let first = run_simulation(&mut rng1, group, 20_000, |_| {});
    let second = run_simulation(&mut rng2, group, 20_000, |_| {});
    assert_eq!(first, second);
}

#[test]
fn progress_reports_at_one_percent_intervals() {
    let group = GroupSize::new(10).unwrap();
    let mut rng = SmallRng::seed_from_u64(8);
    let mut reported = Vec::new();
    run_simulation(&mut rng, group, 1_000, |i| reported.push(i));

    // 1000 trials → interval 10 → reports at 0, 10, ..., 990.
    assert_eq!(reported.len(), 100);
    assert_eq!(reported[0], 0);
    assert!(
        reported.windows(2).all(|w| w[0] < w[1]),
        "progress counts must be strictly increasing"
    );
    assert_eq!(*reported.last().unwrap(), 990);
}

#[test]
fn progress_callback_does_not_affect_the_estimate() {
    let group = GroupSize::new(23).unwrap();
    let mut rng1 = SmallRng::seed_from_u64(77);
    let mut rng2 = SmallRng::seed_from_u64(77);
    let silent = run_simulation(&mut rng1, group, 5_000, |_| {});
    let mut calls = 0u32;
    let noisy = run_simulation(&mut rng2, group, 5_000, |_| calls += 1);
    assert_eq!(silent, noisy);
    assert!(calls > 0);
}

#[test]
fn small_trial_counts_still_report_progress() {
    // trials < 100 clamps the interval to 1: one report per iteration.
    let group = GroupSize::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    let mut reported = Vec::new();
    run_simulation(&mut rng, group, 7, |i| reported.push(i));
    assert_eq!(reported, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn zero_trials_yields_empty_summary() {
    let group = GroupSize::new(23).unwrap();
    let mut rng = SmallRng::seed_from_u64(4);
    let summary = run_simulation(&mut rng, group, 0, |_| {});
    assert_eq!(summary.trials, 0);
    assert_eq!(summary.matches, 0);
    assert_eq!(summary.probability_percent, 0.0);
}

#[test]
fn probability_is_rounded_to_two_decimals() {
    let group = GroupSize::new(23).unwrap();
    let mut rng = SmallRng::seed_from_u64(6);
    let summary = run_simulation(&mut rng, group, 30_000, |_| {});
    let rescaled = summary.probability_percent * 100.0;
    assert!(
        (rescaled - rescaled.round()).abs() < 1e-9,
        "{} is not rounded to two decimals",
        summary.probability_percent
    );
}
