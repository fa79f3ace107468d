//! Tests for severity levels and threshold filtering.

use patlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Emergency < Level::Alert);
    assert!(Level::Alert < Level::Critical);
    assert!(Level::Critical < Level::Error);
    assert!(Level::Error < Level::Warning);
    assert!(Level::Warning < Level::Notice);
    assert!(Level::Notice < Level::Info);
    assert!(Level::Info < Level::Debug);
    assert!(Level::Debug < Level::Always);
}

#[test]
fn level_display() {
    assert_eq!(Level::Emergency.to_string(), "emergency");
    assert_eq!(Level::Warning.to_string(), "warning");
    assert_eq!(Level::Always.to_string(), "always");
}

#[test]
fn level_labels() {
    let labels: Vec<&str> = Level::all().iter().map(|l| l.label()).collect();
    assert_eq!(
        labels,
        ["Emerg", "Alert", "Crit", "Error", "Warning", "Notice", "Info", "Debug", "Always"]
    );
}

#[test]
fn level_from_str() {
    assert_eq!("emerg".parse::<Level>().unwrap(), Level::Emergency);
    assert_eq!("CRIT".parse::<Level>().unwrap(), Level::Critical);
    assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("always".parse::<Level>().unwrap(), Level::Always);
}

#[test]
fn level_from_str_invalid() {
    assert!("trace".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Debug);
}

#[test]
fn threshold_admits_levels_at_or_below_it() {
    let threshold = Level::Warning;
    assert!(Level::Error.passes(threshold));
    assert!(Level::Warning.passes(threshold));
    assert!(!Level::Notice.passes(threshold));
    assert!(!Level::Debug.passes(threshold));
}

#[test]
fn always_passes_every_threshold() {
    for threshold in Level::all() {
        assert!(Level::Always.passes(threshold));
    }
}

#[test]
fn emergency_obeys_the_threshold_check_and_passes_the_lowest_one() {
    assert!(Level::Emergency.passes(Level::Emergency));
    assert!(!Level::Alert.passes(Level::Emergency));
}
