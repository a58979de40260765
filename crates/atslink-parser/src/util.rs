//! Small character scanning helpers shared by the field parsers.

use chrono::NaiveDate;

/// Index of the first ASCII digit in `s`.
pub(crate) fn first_digit_index(s: &str) -> Option<usize> {
    s.find(|c: char| c.is_ascii_digit())
}

/// Index of the first ASCII letter in `s`.
pub(crate) fn first_alpha_index(s: &str) -> Option<usize> {
    s.find(|c: char| c.is_ascii_alphabetic())
}

/// Index of the first forward slash in `s`.
pub(crate) fn first_slash_index(s: &str) -> Option<usize> {
    s.find('/')
}

/// True when `s` is a valid date of flight in YYMMDD format; the day is
/// validated against the month, February against leap years.
pub(crate) fn is_dof(s: &str) -> bool {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let parse = |range: std::ops::Range<usize>| s[range].parse::<u32>();
    let (Ok(yy), Ok(mm), Ok(dd)) = (parse(0..2), parse(2..4), parse(4..6)) else {
        return false;
    };
    NaiveDate::from_ymd_opt(2000 + yy as i32, mm, dd).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanning_helpers() {
        assert_eq!(first_digit_index("EGLL0800"), Some(4));
        assert_eq!(first_digit_index("EGLL"), None);
        assert_eq!(first_alpha_index("001ABC"), Some(3));
        assert_eq!(first_slash_index("A/C"), Some(1));
        assert_eq!(first_slash_index("AC"), None);
    }

    #[test]
    fn dof_validation() {
        assert!(is_dof("240101"));
        assert!(is_dof("240229")); // 2024 is a leap year
        assert!(!is_dof("230229"));
        assert!(!is_dof("241301"));
        assert!(!is_dof("240132"));
        assert!(!is_dof("24010"));
        assert!(!is_dof("24010A"));
    }
}
