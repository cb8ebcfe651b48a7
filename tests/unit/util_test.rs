//! Tests for utility functions

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use xrn_util::util::{
    BasicForwardId, BasicRandomNumberGenerator, BasicTime, Clock, ClockSource, Id, Identifier,
    IntoTime, Rng, Time, TimeValue,
};

fn total_millis<V: TimeValue<Scalar = f32>>(values: &[V]) -> f32 {
    values.iter().map(TimeValue::as_millis).sum()
}

fn lookup<I: Identifier<Value = u64>>(names: &HashMap<u64, &'static str>, id: &I) -> &'static str {
    names.get(&id.id_value()).copied().unwrap_or("unknown")
}

#[test]
fn test_time_conversions() {
    let t = Time::from_secs(1.5);
    assert_eq!(t.get(), 1_500.0);
    assert_eq!(t.as_secs(), 1.5);
    assert_eq!(t.as_micros(), 1_500_000.0);
    assert_eq!(t.to_duration(), Duration::from_millis(1_500));
    assert_eq!(Time::from(Duration::from_millis(250)), 250.0);
    assert_eq!(Time::from_nanos(-1_000_000.0).to_duration(), Duration::ZERO);
}

#[test]
fn test_time_arithmetic() {
    let mut t = Time::from_millis(100.0);
    t += 50.0;
    assert_eq!(t, 150.0);
    t -= Time::from_millis(30.0);
    assert_eq!(t, 120.0);
    t *= 2.0;
    assert_eq!(t, 240.0);
    t /= Time::from_millis(4.0);
    assert_eq!(t, 60.0);
    t %= 7.0;
    assert_eq!(t, 4.0);
    assert_eq!(-t, -4.0);
    assert_eq!(10.0_f32 - t, 6.0);
    assert_eq!(3.0_f32 * t, 12.0);
}

#[test]
fn test_time_set_and_compare() {
    let mut t = Time::default();
    assert_eq!(t, 0.0);
    t.set(42.0_f32);
    assert_eq!(t, 42.0);
    t.set(1_i32.secs());
    assert!(t > 999.0);
    assert!(t < 2_i32.secs());
    assert_eq!(t.to_string(), "1000ms");
}

#[test]
fn test_time_literals() {
    assert_eq!(2_i32.secs(), Time::from_millis(2_000.0));
    assert_eq!(500_u32.ms(), Time::from_secs(0.5));
    assert_eq!(1_500_i64.micros(), 1.5_f32.ms());
    assert_eq!(3_000_000_u64.nanos(), 3_i32.ms());
}

#[test]
fn test_integer_time() {
    let t = BasicTime::<u64>::from_secs(2);
    assert_eq!(t, 2_000_u64);
    assert_eq!(t + 500_u64, 2_500_u64);
    assert_eq!(t.as_secs(), 2);
}

#[test]
fn test_time_values_are_interchangeable() {
    assert_eq!(total_millis(&[1.0_f32, 2.0, 3.0]), 6.0);
    assert_eq!(total_millis(&[1_i32.secs(), 500_i32.ms()]), 1_500.0);
}

#[test]
fn test_clock_measures_elapsed_time() {
    let mut clock = Clock::new();
    thread::sleep(Duration::from_millis(20));
    assert!(clock.has_elapsed(15.0_f32));
    assert!(clock.has_elapsed(10_i32.ms()));

    let lap = ClockSource::restart(&mut clock);
    assert!(lap >= 15.0_f32);
    assert!(clock.elapsed() < lap);

    clock.reset();
    assert!(!clock.has_elapsed(1_i32.secs()));
}

#[test]
fn test_ids_generate_forward() {
    let mut next = Id::default();
    let first = next.increment().unwrap();
    let second = next.increment().unwrap();
    assert!(first < second);
    assert_eq!(second.get(), 1);
    assert_eq!(second.next(), Some(Id::new(2)));
}

#[test]
fn test_ids_and_raw_values_are_interchangeable() {
    let names = HashMap::from([(1_u64, "one"), (2, "two")]);
    assert_eq!(lookup(&names, &Id::new(1)), "one");
    assert_eq!(lookup(&names, &2_u64), "two");
    assert_eq!(lookup(&names, &BasicForwardId::new(9_u64)), "unknown");
}

#[test]
fn test_id_exhaustion() {
    let mut id = BasicForwardId::new(u16::MAX);
    assert!(id.next().is_none());
    assert!(id.increment().is_err());
    assert_eq!(id.get(), u16::MAX);
}

#[test]
fn test_rng_ranges() {
    let mut rng = Rng::from_seed(2024);
    assert_eq!(rng.range(), (0, 100));
    for _ in 0..200 {
        assert!((0..=100).contains(&rng.generate()));
        assert!((-3..=3).contains(&rng.generate_in(-3, 3).unwrap()));
    }
    assert!(rng.generate_in(1, 0).is_err());
    assert!(Rng::with_range(5, 1).is_err());
}

#[test]
fn test_float_rng_rejects_non_finite_ranges() {
    let mut rng = BasicRandomNumberGenerator::<f64>::from_seed(1);
    assert!(rng.generate_in(f64::MIN, f64::MAX).is_err());
    assert!(rng.generate_in(0.0, f64::INFINITY).is_err());
    assert!(BasicRandomNumberGenerator::<f64>::with_seeded_range(1, f64::MIN, f64::MAX).is_err());
}

#[test]
fn test_rng_seed_is_reproducible() {
    let mut a = Rng::from_seed(99);
    let mut b = Rng::from_seed(99);
    for _ in 0..50 {
        assert_eq!(a.generate(), b.generate());
    }
}
