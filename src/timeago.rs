//! Relative-time formatting for server-rendered timestamps.

use wasm_bindgen::JsValue;

// Unit thresholds in seconds, coarsest first. Labels are invariant; the
// platform's copy never inflected them ("1 años" is faithful output).
const UNITS: [(i64, &str); 5] = [
    (31_536_000, "años"),
    (2_592_000, "meses"),
    (86_400, "días"),
    (3_600, "horas"),
    (60, "minutos"),
];

/// Formats elapsed whole seconds as `"<n> <unit>"`, picking the coarsest unit
/// whose span the elapsed time strictly exceeds; 60 seconds is still
/// `"60 segundos"`, 61 becomes `"1 minutos"`. Negative input (a timestamp in
/// the future) clamps to zero.
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    for (span, label) in UNITS {
        if seconds > span {
            return format!("{} {}", seconds / span, label);
        }
    }
    format!("{seconds} segundos")
}

/// Relative-time string for any value the JS `Date` constructor accepts
/// (the form the templates put in `data-timestamp`). `None` when the value
/// does not parse.
pub fn time_ago(date: &str) -> Option<String> {
    let parsed = js_sys::Date::new(&JsValue::from_str(date)).get_time();
    if parsed.is_nan() {
        return None;
    }
    let elapsed = ((crate::util::now_millis() - parsed) / 1000.0).floor() as i64;
    Some(format_elapsed(elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_coarsest_exceeded_unit() {
        assert_eq!(format_elapsed(40_000_000), "1 años");
        assert_eq!(format_elapsed(5_000_000), "1 meses");
        assert_eq!(format_elapsed(100_000), "1 días");
        assert_eq!(format_elapsed(4_000), "1 horas");
        assert_eq!(format_elapsed(90), "1 minutos");
        assert_eq!(format_elapsed(30), "30 segundos");
    }

    #[test]
    fn unit_boundaries_are_strict() {
        // Exactly one minute has not *exceeded* the minute span yet.
        assert_eq!(format_elapsed(60), "60 segundos");
        assert_eq!(format_elapsed(61), "1 minutos");
        assert_eq!(format_elapsed(3_600), "60 minutos");
        assert_eq!(format_elapsed(86_400), "24 horas");
    }

    #[test]
    fn magnitudes_floor() {
        assert_eq!(format_elapsed(119), "1 minutos");
        assert_eq!(format_elapsed(121), "2 minutos");
        assert_eq!(format_elapsed(63_072_000), "2 años");
    }

    #[test]
    fn future_timestamps_clamp_to_zero() {
        assert_eq!(format_elapsed(-1), "0 segundos");
        assert_eq!(format_elapsed(-5_000_000), "0 segundos");
        assert_eq!(format_elapsed(0), "0 segundos");
    }
}
