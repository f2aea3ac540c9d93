#![allow(missing_docs)]

use concat_bench::{size_for, Experiment, PlannedTrial, Sweep, Variant};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn float_sizes_match_integer_powers(base in 2u32..=10, power in 0u32..=15) {
        prop_assert_eq!(size_for(base, power), u64::from(base).pow(power));
    }

    #[test]
    fn every_measurement_has_length_equal_to_size(
        base in 2u32..=4,
        start in 0u32..=3,
        concat_limit in 0u32..=6,
        limit in 0u32..=6,
    ) {
        let args = [base, start, concat_limit, limit].map(|v| v.to_string());
        let config = Variant::Split.resolve(&args).unwrap();
        let mut measurements = Vec::new();
        let summary = Sweep::new(config)
            .run_with(|m| {
                measurements.push(m);
                Ok(())
            })
            .unwrap();

        let powers: Vec<u32> = (start..=limit).collect();
        prop_assert_eq!(summary.trials, powers.len());
        prop_assert_eq!(summary.lines, measurements.len());
        prop_assert!(summary.dropped.is_empty());

        for m in &measurements {
            prop_assert_eq!(m.size, u64::from(base).pow(m.power));
            prop_assert_eq!(m.length, m.size);
        }
        let builder_powers: Vec<u32> = measurements
            .iter()
            .filter(|m| m.experiment == Experiment::Builder)
            .map(|m| m.power)
            .collect();
        prop_assert_eq!(builder_powers, powers.clone());
        let concat_powers: Vec<u32> = measurements
            .iter()
            .filter(|m| m.experiment == Experiment::Concat)
            .map(|m| m.power)
            .collect();
        let expected: Vec<u32> = powers.into_iter().filter(|p| *p <= concat_limit).collect();
        prop_assert_eq!(concat_powers, expected);
    }

    #[test]
    fn strategies_agree_on_contents(size in 0u64..2_000) {
        let reference = Experiment::Builder.accumulate(size);
        for exp in [Experiment::Concat, Experiment::FastBuilder, Experiment::Join] {
            prop_assert_eq!(&exp.accumulate(size), &reference);
        }
    }
}

#[test]
fn plan_matches_executed_schedule() {
    let config = Variant::Split.resolve(&["3", "1", "2", "4"]).unwrap();
    let sweep = Sweep::new(config);
    let planned: Vec<(Experiment, u32)> = sweep
        .plan()
        .into_iter()
        .flat_map(|p| p.experiments.into_iter().map(move |e| (e, p.trial.power)))
        .collect();
    let mut executed = Vec::new();
    sweep
        .run_with(|m| {
            executed.push((m.experiment, m.power));
            Ok(())
        })
        .unwrap();
    assert_eq!(planned, executed);
    assert_eq!(executed.len(), 6);
}

#[test]
fn default_schedules_match_documented_ranges() {
    let decimal = Sweep::new(Variant::Decimal.defaults()).plan();
    assert_eq!(decimal.len(), 10);
    assert_eq!(decimal.last().unwrap().trial.size, 10_000_000_000);
    assert!(decimal.iter().all(|p| p.experiments.len() == 2));

    let split = Sweep::new(Variant::Split.defaults()).plan();
    assert_eq!(split.len(), 27);
    let concat_runs = split
        .iter()
        .filter(|p| p.experiments.contains(&Experiment::Concat))
        .count();
    assert_eq!(concat_runs, 21);
    assert_eq!(split.last().unwrap().trial.size, 1 << 27);
}

#[test]
fn simple_and_suite_defaults_sweep_to_two_to_the_27() {
    for variant in [Variant::Simple, Variant::Suite] {
        let plan: Vec<PlannedTrial> = Sweep::new(variant.defaults()).plan();
        assert_eq!(plan.len(), 27, "{variant:?}");
        assert_eq!(plan[0].trial.power, 1);
        assert!(
            plan.iter().all(|p| p.experiments.contains(&Experiment::Concat)),
            "{variant:?} should run concat at every exponent"
        );
        assert!(plan
            .iter()
            .all(|p| p.experiments.len() == variant.experiments().len()));
        assert_eq!(plan.last().unwrap().trial.size, 1 << 27);
    }
}
