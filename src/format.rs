use std::fmt;

const SIGNIFICANT_DIGITS: i32 = 6;

/// Shortest general notation with six significant digits, the same text a
/// C `%g` conversion prints: fixed notation for decimal exponents in
/// [-4, 6), scientific otherwise, trailing zeros dropped.
#[derive(Clone, Copy, Debug)]
pub struct General(pub f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("nan");
        }
        if x.is_infinite() {
            return f.write_str(if x < 0.0 { "-inf" } else { "inf" });
        }
        if x == 0.0 {
            return f.write_str(if x.is_sign_negative() { "-0" } else { "0" });
        }

        // Round once to find the decimal exponent after rounding.
        let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, x);
        let (mantissa, exponent) = match sci.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (sci.as_str(), 0),
        };

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
        } else {
            let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, x);
            f.write_str(trim_zeros(&fixed))
        }
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
