//! Abbreviated count labels.
//!
//! Counts are rendered like d3's `.2s` format: rounded to two significant
//! digits with an SI prefix, keeping trailing zeros (`5` is `"5.0"`).

const PREFIXES: &[&str] = &["", "k", "M", "G", "T", "P", "E"];

/// Formats `n` with two significant digits and an SI prefix.
///
/// `0 → "0.0"`, `42 → "42"`, `100 → "100"`, `1234 → "1.2k"`,
/// `9999 → "10k"`, `1_500_000 → "1.5M"`.
#[must_use]
pub fn format_si_count(n: u64) -> String {
    // Two significant digits as an integer in 10..=99, plus the decimal
    // exponent of the leading digit.
    let (digits, exponent) = two_significant_digits(n);

    let prefix_index = (exponent / 3).min(PREFIXES.len() - 1);
    let integer_digits = exponent - prefix_index * 3 + 1;
    let coefficient = format!("{digits:02}");

    let body = match integer_digits {
        1 => format!("{}.{}", &coefficient[..1], &coefficient[1..]),
        2 => coefficient,
        more => format!("{coefficient}{}", "0".repeat(more - 2)),
    };

    format!("{body}{}", PREFIXES[prefix_index])
}

fn two_significant_digits(n: u64) -> (u64, usize) {
    if n == 0 {
        return (0, 0);
    }

    let exponent = n.ilog10() as usize;
    if exponent == 0 {
        return (n * 10, 0);
    }
    if exponent == 1 {
        return (n, 1);
    }

    let divisor = 10_u64.pow(u32::try_from(exponent - 1).unwrap_or(u32::MAX));
    let mut digits = n / divisor;
    if (n % divisor) * 2 >= divisor {
        digits += 1;
    }

    if digits == 100 {
        (10, exponent + 1)
    } else {
        (digits, exponent)
    }
}
