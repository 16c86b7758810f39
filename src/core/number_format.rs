//! en-US decimal formatting: comma grouping, at most `max_fraction_digits`
//! fraction digits, trailing zeros dropped, halves rounded away from zero.
//! Rounding works on the shortest decimal form of the value, so 1.005 rounds
//! to 1.01 even though the stored double is slightly below it.

const MAX_FRACTION_DIGITS: usize = 15;

pub fn format_decimal(value: f64, max_fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let digits = max_fraction_digits.min(MAX_FRACTION_DIGITS);
    let (integer, fraction) = round_parts(value.abs(), digits);

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

fn round_parts(abs: f64, digits: usize) -> (String, String) {
    // Display for f64 is the shortest round-trip form and never uses exponents.
    let repr = abs.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    if frac_part.len() <= digits {
        return (
            int_part.to_string(),
            frac_part.trim_end_matches('0').to_string(),
        );
    }

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..digits].bytes())
        .collect();

    if frac_part.as_bytes()[digits] >= b'5' {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let integer: String = kept[..int_len].iter().map(|&b| b as char).collect();
    let fraction: String = kept[int_len..].iter().map(|&b| b as char).collect();
    (integer, fraction.trim_end_matches('0').to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
