//! Short code generation.

use rand::Rng;

/// Exclusive upper bound of the short code space.
const CODE_SPACE: u32 = 100_000;

/// Generates a short code: the decimal form of a random integer below
/// 100000.
///
/// Codes are not unique by construction; the insert path relies on the
/// unique index on `links.code` and redraws on collision.
///
/// # Examples
///
/// ```
/// let code = shorturl::utils::codegen::generate_code();
/// assert!(code.parse::<u32>().unwrap() < 100_000);
/// ```
pub fn generate_code() -> String {
    rand::rng().random_range(0..CODE_SPACE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_is_decimal() {
        let code = generate_code();

        assert!(!code.is_empty());
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_code_within_space() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(code.parse::<u32>().unwrap() < CODE_SPACE);
        }
    }

    #[test]
    fn test_generate_code_no_zero_padding() {
        for _ in 0..1000 {
            let code = generate_code();
            let n: u32 = code.parse().unwrap();
            assert_eq!(code, n.to_string());
        }
    }
}
