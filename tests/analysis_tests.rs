// tests/analysis_tests.rs

use qsearch::analysis::{Bar, OTHERS_LABEL};
use qsearch::{
    GroverConfig, GroverError, GroverSimulator, Histogram, Sampler, TargetSet, Verdict, analyze,
    chart_series, winners,
};

#[test]
fn test_tie_straddling_cutoff_with_targets() -> Result<(), GroverError> {
    // 2 and 5 tie for the second slot; 2 is a target and wins on index.
    let targets = TargetSet::new(3, [2, 7])?;
    let histogram = Histogram::from_counts(3, [(7, 500), (5, 200), (2, 200), (0, 100)]);

    let outcome = analyze(&histogram, &targets);
    let states: Vec<usize> = outcome.winners.iter().map(|w| w.state).collect();
    assert_eq!(states, vec![7, 2]);
    assert_eq!(outcome.verdict, Verdict::Found { accuracy: 70.0 });
    Ok(())
}

#[test]
fn test_non_target_winner_fails() -> Result<(), GroverError> {
    let targets = TargetSet::from_bitstrings(4, ["1010"])?;
    let histogram = Histogram::from_counts(4, [(10, 30), (3, 31)]);

    let outcome = analyze(&histogram, &targets);
    assert!(!outcome.is_success());
    assert_eq!(outcome.winners[0].bits, "0011");
    Ok(())
}

#[test]
fn test_chart_series_from_a_real_run() -> Result<(), GroverError> {
    let config = GroverConfig::default().with_seed(3).with_shots(5000);
    let result = GroverSimulator::new(config).run()?;
    let top = &result.outcome().winners;

    let combined = chart_series(result.histogram(), top, true);
    assert_eq!(combined.winners.len(), 4);
    assert_eq!(combined.others.len(), 1);
    assert_eq!(combined.others[0].label, OTHERS_LABEL);
    let shown: u64 = combined.winners.iter().chain(&combined.others).map(|b| b.count).sum();
    assert_eq!(shown, 5000);

    let split = chart_series(result.histogram(), top, false);
    assert_eq!(split.others.len(), result.histogram().len() - 4);
    assert!(split.others.iter().all(|b| b.label.len() == 5));
    Ok(())
}

#[test]
fn test_others_bar_present_when_empty() {
    let histogram = Histogram::from_counts(1, [(1, 9)]);
    let top = winners(&histogram, 1);
    let series = chart_series(&histogram, &top, true);
    assert_eq!(series.others, vec![Bar { label: OTHERS_LABEL.to_string(), count: 0 }]);
}

#[test]
fn test_point_mass_is_always_found() -> Result<(), GroverError> {
    let mut probabilities = vec![0.0; 8];
    probabilities[6] = 1.0;
    let histogram = Sampler::seeded(0).sample(&probabilities, 250)?;
    assert_eq!(histogram.count(6), 250);
    assert_eq!(histogram.len(), 1);

    let outcome = analyze(&histogram, &TargetSet::new(3, [6])?);
    assert_eq!(outcome.accuracy(), Some(100.0));
    assert!(outcome.to_string().contains("Decimal = [6]"));
    Ok(())
}

#[test]
fn test_outcome_serializes() -> Result<(), GroverError> {
    let targets = TargetSet::new(2, [3])?;
    let outcome = analyze(&Histogram::from_counts(2, [(3, 4)]), &targets);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["winners"][0]["bits"], "11");
    assert_eq!(json["verdict"]["Found"]["accuracy"], 100.0);
    Ok(())
}
