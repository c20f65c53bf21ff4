//! Human-readable size estimates
//!
//! Sizes are displayed as `N chars`, `N.Nk chars`, or `Nk chars`. The display
//! string is also the interchange format: totals are computed by parsing the
//! per-page strings back to character counts.

/// Scale applied to plain-text length to approximate rendered markdown size
pub const STRUCTURED_SIZE_FACTOR: f64 = 0.7;

const SUFFIX: &str = " chars";

/// Formats a character count
///
/// # Examples
///
/// ```
/// use sumi_scroll::extract::format_size;
///
/// assert_eq!(format_size(950), "950 chars");
/// assert_eq!(format_size(4500), "4.5k chars");
/// assert_eq!(format_size(4599), "4.5k chars");
/// assert_eq!(format_size(125_000), "125k chars");
/// ```
pub fn format_size(chars: usize) -> String {
    if chars < 1_000 {
        format!("{}{}", chars, SUFFIX)
    } else if chars < 10_000 {
        let tenths = chars / 100;
        format!("{}.{}k{}", tenths / 10, tenths % 10, SUFFIX)
    } else {
        let thousands = (chars as f64 / 1_000.0).round() as usize;
        format!("{}k{}", thousands, SUFFIX)
    }
}

/// Parses a string produced by [`format_size`] back to a character count
///
/// Returns None for strings outside that format.
///
/// # Examples
///
/// ```
/// use sumi_scroll::extract::parse_size;
///
/// assert_eq!(parse_size("950 chars"), Some(950));
/// assert_eq!(parse_size("4.5k chars"), Some(4500));
/// assert_eq!(parse_size("125k chars"), Some(125_000));
/// assert_eq!(parse_size("lots"), None);
/// ```
pub fn parse_size(formatted: &str) -> Option<usize> {
    let number = formatted.trim().strip_suffix(SUFFIX)?.trim();

    match number.strip_suffix('k') {
        Some(thousands) => {
            let value: f64 = thousands.parse().ok()?;
            (value.is_finite() && value >= 0.0).then(|| (value * 1_000.0).round() as usize)
        }
        None => number.parse().ok(),
    }
}

/// Sums formatted sizes and formats the total
///
/// Unparsable entries count as zero.
pub fn sum_sizes<'a, I>(sizes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let total: usize = sizes
        .into_iter()
        .map(|size| parse_size(size).unwrap_or(0))
        .sum();
    format_size(total)
}

/// Character count scaled to approximate markdown size
pub fn structured_size(plain_chars: usize) -> usize {
    (plain_chars as f64 * STRUCTURED_SIZE_FACTOR) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bands() {
        assert_eq!(format_size(0), "0 chars");
        assert_eq!(format_size(999), "999 chars");
        assert_eq!(format_size(1_000), "1.0k chars");
        assert_eq!(format_size(9_999), "9.9k chars");
        assert_eq!(format_size(10_000), "10k chars");
        assert_eq!(format_size(10_499), "10k chars");
        assert_eq!(format_size(10_500), "11k chars");
    }

    #[test]
    fn test_format_size_is_monotonic() {
        let mut previous = 0;
        for chars in (0..200_000).step_by(37) {
            let displayed = parse_size(&format_size(chars)).unwrap();
            assert!(displayed >= previous, "{} displayed below {}", chars, previous);
            previous = displayed;
        }
    }

    #[test]
    fn test_parse_size_rejects_garbage() {
        assert_eq!(parse_size(""), None);
        assert_eq!(parse_size("12 bytes"), None);
        assert_eq!(parse_size("abck chars"), None);
        assert_eq!(parse_size("-1.0k chars"), None);
    }

    #[test]
    fn test_sum_sizes() {
        assert_eq!(sum_sizes(["950 chars", "4.5k chars"]), "5.4k chars");
        assert_eq!(sum_sizes(["9.5k chars", "1.2k chars"]), "11k chars");
        assert_eq!(sum_sizes(["125k chars", "bogus"]), "125k chars");
        assert_eq!(sum_sizes(std::iter::empty()), "0 chars");
    }

    #[test]
    fn test_structured_size() {
        assert_eq!(structured_size(1_000), 700);
        assert_eq!(structured_size(15), 10);
    }
}
