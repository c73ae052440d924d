//! Single-purpose rules. Each takes the raw field text and returns a
//! [`Verdict`]; none of them reads the clock or the RNG.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Verdict;

static PLAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid regex"));

static AREA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]$").expect("valid regex"));

static STAFF_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

static STUDENT_LOCAL_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+\.[a-zA-Z]+$").expect("valid regex"));

/// Number of characters (Unicode scalar values) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Lenient integer read: skips leading whitespace, accepts one sign and
/// takes the leading run of ASCII digits, ignoring whatever follows.
///
/// Returns `None` when there are no digits. Values beyond `i64` saturate.
pub fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first().copied() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Whether the trimmed text reads as a finite number. Blank text reads
/// as zero and counts as numeric.
pub fn is_numeric(raw: &str) -> bool {
    let s = raw.trim();
    s.is_empty() || s.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Highest valid student code for `year`: the year followed by `99999`,
/// e.g. `202499999` for 2024.
pub fn code_upper_bound(year: i32) -> i64 {
    i64::from(year) * 100_000 + 99_999
}

/// Student code: an integer in `[floor, code_upper_bound(year)]`.
pub fn student_code(raw: &str, floor: i64, year: i32) -> Verdict {
    let top = code_upper_bound(year);
    let ok = leading_int(raw).is_some_and(|c| (floor..=top).contains(&c));
    Verdict::check(ok, || {
        format!("El código no es válido, debe tener 9\n  dígitos. Ej: {top}")
    })
}

/// National ID (NUIP): only the length is checked.
pub fn national_id(raw: &str, min_len: usize, max_len: usize) -> Verdict {
    let ok = (min_len..=max_len).contains(&char_len(raw));
    Verdict::check(ok, || {
        format!(
            "La cédula {raw} no es una cédula válida\n  esta debe contener entre {min_len}  y {max_len} digitos"
        )
    })
}

/// Academic plan: exactly four ASCII digits.
pub fn plan_code(raw: &str) -> Verdict {
    Verdict::check(PLAN_RE.is_match(raw), || {
        "Debe ingresar sólo 4 digitos".to_string()
    })
}

/// Dependency area.
///
/// The pattern accepts a single ASCII letter, although the message asks
/// for area names. Kept as-is until the intended format is confirmed.
pub fn dependency_area(raw: &str) -> Verdict {
    Verdict::check(AREA_RE.is_match(raw), || {
        "El área debe por ejemplo ser adminstrativa, psicología, etc".to_string()
    })
}

/// Any plausible mailbox, used for staff.
pub fn staff_email(raw: &str) -> Verdict {
    Verdict::check(STAFF_EMAIL_RE.is_match(raw), || {
        "Dirección de correo inválida".to_string()
    })
}

/// Institutional student mailbox: `first.last@<domain>`, letters only.
pub fn student_email(raw: &str, domain: &str) -> Verdict {
    let ok = raw
        .rsplit_once('@')
        .is_some_and(|(local, host)| host == domain && STUDENT_LOCAL_PART_RE.is_match(local));
    Verdict::check(ok, || {
        "La dirección de correo electrónico no corresponde a ningún estudiante".to_string()
    })
}
