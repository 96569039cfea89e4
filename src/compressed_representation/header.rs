use crate::board::Dimensions;
use crate::error::BoardInitError;

const HEADER_MARKER: char = 'B';
const DIMENSION_SEPARATOR: char = 'x';

/// parses a decimal number at the start of `s` the way `strtol` does: leading
/// whitespace and a `+` are skipped and anything after the digits is ignored.
/// No digits parses as zero, `None` means the value overflowed
fn leading_number(s: &str) -> Option<usize> {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let s = s.strip_prefix('+').unwrap_or(s);
    s.chars()
        .map_while(|c| c.to_digit(10))
        .try_fold(0usize, |acc, d| acc.checked_mul(10)?.checked_add(d as usize))
}

/// Reads the height and width out of a header token of the form
/// `B<height>x<width>`.
pub fn set_dimensions(dim_str: &str) -> Result<Dimensions, BoardInitError> {
    let rest = dim_str
        .strip_prefix(HEADER_MARKER)
        .ok_or(BoardInitError::BadChar)?;
    let (height_str, width_str) = rest
        .split_once(DIMENSION_SEPARATOR)
        .ok_or(BoardInitError::BadChar)?;

    let height = leading_number(height_str).ok_or(BoardInitError::BadChar)?;
    let width = leading_number(width_str).ok_or(BoardInitError::BadChar)?;

    Dimensions::new(height, width).ok_or(BoardInitError::BadChar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_header() {
        let d = set_dimensions("B24x80").unwrap();
        assert_eq!(d.height(), 24);
        assert_eq!(d.width(), 80);
    }

    #[test]
    fn test_trailing_junk_after_numbers_is_ignored() {
        let d = set_dimensions("B2junkx3zz").unwrap();
        assert_eq!((d.height(), d.width()), (2, 3));
    }

    #[test]
    fn test_leading_whitespace_and_plus_sign() {
        for header in ["B 5x3", "B+5x3", "B5x +3", "B\t5x\n3", "B  +5x3"] {
            let d = set_dimensions(header).unwrap();
            assert_eq!((d.height(), d.width()), (5, 3), "{:?}", header);
        }
    }

    #[test]
    fn test_bad_headers() {
        for header in [
            "24x80", "b24x80", "B2480", "B0x5", "B5x0", "Bx5", "B5x", "Bax5", "B-1x5", "B+-1x5",
            "B++1x5", "B+x5", "",
            "B99999999999999999999999x1",
        ] {
            assert_eq!(
                set_dimensions(header),
                Err(BoardInitError::BadChar),
                "{:?}",
                header
            );
        }
    }

    #[test]
    fn test_product_overflow_is_bad_char() {
        let header = format!("B{}x{}", usize::MAX / 2, 3);
        assert_eq!(set_dimensions(&header), Err(BoardInitError::BadChar));
    }
}
