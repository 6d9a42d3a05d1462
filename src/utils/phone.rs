pub const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 11;

pub fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats free-form input as `+7 (XXX) XXX-XX-XX` while the user types.
///
/// Non-digits are dropped, a leading trunk `8` becomes the `7` country code,
/// and anything past eleven digits is cut off. Partial input gets the
/// matching prefix of the mask.
pub fn format_phone(input: &str) -> String {
    let mut d = digits(input);
    if d.starts_with('8') {
        d.replace_range(0..1, "7");
    }
    d.truncate(MAX_PHONE_DIGITS);

    match d.len() {
        0 => String::new(),
        1 => format!("+{}", d),
        2..=4 => format!("+{} ({}", &d[..1], &d[1..]),
        5..=7 => format!("+{} ({}) {}", &d[..1], &d[1..4], &d[4..]),
        8..=9 => format!("+{} ({}) {}-{}", &d[..1], &d[1..4], &d[4..7], &d[7..]),
        _ => format!(
            "+{} ({}) {}-{}-{}",
            &d[..1],
            &d[1..4],
            &d[4..7],
            &d[7..9],
            &d[9..]
        ),
    }
}

pub fn is_valid_phone(input: &str) -> bool {
    digits(input).len() >= MIN_PHONE_DIGITS
}
