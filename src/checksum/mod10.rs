//! Mod 10 recursive checksum
//!
//! The carry starts at zero and walks the transition table one digit at a
//! time; the check digit completes the final carry to a multiple of ten.

/// Carry transition table, indexed as `MOD10_TABLE[carry][digit]`
pub const MOD10_TABLE: [[u8; 10]; 10] = [
    [0, 9, 4, 6, 8, 2, 7, 1, 3, 5],
    [9, 4, 6, 8, 2, 7, 1, 3, 5, 0],
    [4, 6, 8, 2, 7, 1, 3, 5, 0, 9],
    [6, 8, 2, 7, 1, 3, 5, 0, 9, 4],
    [8, 2, 7, 1, 3, 5, 0, 9, 4, 6],
    [2, 7, 1, 3, 5, 0, 9, 4, 6, 8],
    [7, 1, 3, 5, 0, 9, 4, 6, 8, 2],
    [1, 3, 5, 0, 9, 4, 6, 8, 2, 7],
    [3, 5, 0, 9, 4, 6, 8, 2, 7, 1],
    [5, 0, 9, 4, 6, 8, 2, 7, 1, 3],
];

/// Compute the Mod 10 recursive check digit of a digit string.
///
/// Characters that are not ASCII digits are skipped.
///
/// # Example
///
/// ```
/// use esrcore::checksum::mod10;
///
/// assert_eq!(mod10("010000394975"), 3);
/// assert_eq!(mod10(""), 0);
/// ```
pub fn mod10(digits: &str) -> u8 {
    let carry = digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u8, |carry, b| MOD10_TABLE[carry as usize][(b - b'0') as usize]);
    (10 - carry) % 10
}

/// Same as [`mod10`], returned as the printable character
pub fn check_digit(digits: &str) -> char {
    char::from(b'0' + mod10(digits))
}

/// Check whether the last digit of `number` is the Mod 10 check digit of the
/// digits before it. Spaces are ignored, so display-formatted reference
/// numbers can be verified directly.
pub fn is_valid(number: &str) -> bool {
    let compact: String = number.chars().filter(|c| *c != ' ').collect();
    if compact.is_empty() || !compact.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (body, last) = compact.split_at(compact.len() - 1);
    last.starts_with(check_digit(body))
}
