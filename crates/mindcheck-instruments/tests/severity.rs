use mindcheck_core::models::instrument::Instrument;
use mindcheck_core::models::severity::{SeverityBand, Tone};
use mindcheck_instruments::severity::{classify, table};

#[test]
fn depression_bands_at_boundaries() {
    let cases = [
        (0, SeverityBand::Minimal),
        (4, SeverityBand::Minimal),
        (5, SeverityBand::Mild),
        (9, SeverityBand::Mild),
        (10, SeverityBand::Moderate),
        (14, SeverityBand::Moderate),
        (15, SeverityBand::ModeratelySevere),
        (19, SeverityBand::ModeratelySevere),
        (20, SeverityBand::Severe),
        (27, SeverityBand::Severe),
    ];
    for (score, band) in cases {
        assert_eq!(classify(Instrument::Depression, score).band, band, "score {score}");
    }
}

#[test]
fn anxiety_has_no_moderately_severe_band() {
    let cases = [
        (4, SeverityBand::Minimal),
        (5, SeverityBand::Mild),
        (10, SeverityBand::Moderate),
        (14, SeverityBand::Moderate),
        (15, SeverityBand::Severe),
        (21, SeverityBand::Severe),
    ];
    for (score, band) in cases {
        assert_eq!(classify(Instrument::Anxiety, score).band, band, "score {score}");
    }
    assert!(
        (0..=21).all(|s| classify(Instrument::Anxiety, s).band != SeverityBand::ModeratelySevere)
    );
}

#[test]
fn wellbeing_edges_belong_to_the_lower_band() {
    let cases = [
        (0, SeverityBand::Low),
        (50, SeverityBand::Low),
        (51, SeverityBand::Moderate),
        (70, SeverityBand::Moderate),
        (71, SeverityBand::Good),
        (100, SeverityBand::Good),
    ];
    for (percent, band) in cases {
        assert_eq!(classify(Instrument::Wellbeing, percent).band, band, "percent {percent}");
    }
}

#[test]
fn every_score_maps_to_a_band_the_table_declares() {
    for instrument in Instrument::ALL {
        let max = match instrument {
            Instrument::Wellbeing => 100,
            other => other.max_raw(),
        };
        let declared: Vec<SeverityBand> = table(instrument).bands().collect();
        for score in 0..=max {
            let band = classify(instrument, score).band;
            assert!(declared.contains(&band), "{instrument} {score}");
        }
    }
}

#[test]
fn bands_are_ordered_without_gaps() {
    // Walking up the score range, the band only ever changes to the next
    // band in the table, so no band appears in two separate stretches.
    for instrument in [Instrument::Depression, Instrument::Anxiety] {
        let mut seen: Vec<SeverityBand> = Vec::new();
        for score in 0..=instrument.max_raw() {
            let band = classify(instrument, score).band;
            if seen.last() != Some(&band) {
                assert!(!seen.contains(&band), "{instrument} band {band} reappears");
                seen.push(band);
            }
        }
        let expected: Vec<SeverityBand> = table(instrument).bands().collect::<Vec<_>>();
        let reversed: Vec<SeverityBand> = expected.into_iter().rev().collect();
        assert_eq!(seen, reversed);
    }
}

#[test]
fn labels_and_tones_follow_the_results_page() {
    let c = classify(Instrument::Depression, 16);
    assert_eq!(c.label, "Moderately severe");
    assert_eq!(c.tone, Tone::Warning);
    assert_eq!(c.tone.text_class(), "text-orange-600");

    let c = classify(Instrument::Wellbeing, 40);
    assert_eq!(c.label, "Low wellbeing");
    assert_eq!(c.tone.bg_class(), "bg-red-100");

    let c = classify(Instrument::Anxiety, 0);
    assert_eq!(c.label, "Minimal");
    assert_eq!(c.tone, Tone::Success);
}
