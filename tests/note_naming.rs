use maqam53::{note_name, GeneratedScale, IntervalTable};

#[test]
fn reference_anchors() {
    assert_eq!(note_name(440.0), "La4");
    assert_eq!(note_name(220.0), "La3");
    assert_eq!(note_name(110.0), "La2");
    assert_eq!(note_name(55.0), "La1");
}

#[test]
fn octave_boundary_names() {
    // MIDI 60 (middle C) is octave 4; MIDI 59 is Si3.
    let c4 = 440.0 * 2f64.powf((60.0 - 69.0) / 12.0);
    let b3 = 440.0 * 2f64.powf((59.0 - 69.0) / 12.0);
    assert_eq!(note_name(c4), "Do4");
    assert_eq!(note_name(b3), "Si3");
}

#[test]
fn marker_threshold_band() {
    let with_cents = |cents: f64| 440.0 * 2f64.powf(cents / 1200.0);

    // Within 10 cents: no marker.
    assert_eq!(note_name(with_cents(8.0)), "La4");
    assert_eq!(note_name(with_cents(-8.0)), "La4");

    // Between the thresholds: marked sharp or flat.
    assert_eq!(note_name(with_cents(30.0)), "La↑4");
    assert_eq!(note_name(with_cents(-30.0)), "La↓4");

    // Past 50 cents the label flips to the neighboring semitone.
    assert_eq!(note_name(with_cents(70.0)), "La♯↓4");
    assert_eq!(note_name(with_cents(-70.0)), "Sol♯↑4");

    // Within 10 cents of the neighbor: plain neighbor name.
    assert_eq!(note_name(with_cents(95.0)), "La♯4");
}

#[test]
fn labels_are_deterministic() {
    let steps = IntervalTable::lookup("Huzzam").unwrap();
    let scale = GeneratedScale::build(steps, 110.0).unwrap();
    for &freq in &scale.frequencies {
        assert_eq!(note_name(freq), note_name(freq));
        assert!(!note_name(freq).is_empty());
    }
}

#[test]
fn all_rast_labels() {
    let steps = IntervalTable::lookup("Rast").unwrap();
    let scale = GeneratedScale::build(steps, 110.0).unwrap();

    // The base octave of Rast from La2 walks up to La3.
    let labels: Vec<String> = scale.frequencies[9..=17]
        .iter()
        .map(|&f| note_name(f))
        .collect();
    assert_eq!(labels[0], "La2");
    assert_eq!(labels[8], "La3");
}
