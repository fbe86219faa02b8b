/// Compact display form of a follower/following count.
///
/// Below one thousand the number is printed as-is; above that it gets one
/// decimal and a `K` or `M` suffix, with a trailing `.0` dropped.
pub fn format_count(n: u64) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => with_suffix(n, 1_000, "K"),
        _ => with_suffix(n, 1_000_000, "M"),
    }
}

fn with_suffix(n: u64, unit: u64, suffix: &str) -> String {
    // Truncate to one decimal so 999_999 reads 999.9K rather than 1000.0K.
    let tenths = n / (unit / 10);
    let (whole, frac) = (tenths / 10, tenths % 10);
    if frac == 0 {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{frac}{suffix}")
    }
}
