// crates/domain/src/lexer/charset.rs
//! ラベル文字の許可判定
//!
//! The scanner never hardcodes which bytes may appear inside a label; it asks
//! a [`LabelCharset`]. [`DnsLabelCharset`] is the built-in policy, and any
//! `Fn(u8) -> bool` closure can stand in for an alternate grammar.

/// Decides whether a byte may appear inside a label.
pub trait LabelCharset {
    fn is_permitted(&self, byte: u8) -> bool;
}

/// ASCII letters, digits, `-` and `.`.
///
/// `.` is outside the per-label character set of RFC 1035 but is accepted so
/// that lists of dotted names (`www.example`) pass through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DnsLabelCharset;

impl LabelCharset for DnsLabelCharset {
    #[inline]
    fn is_permitted(&self, byte: u8) -> bool {
        is_dns_label_byte(byte)
    }
}

impl<F> LabelCharset for F
where
    F: Fn(u8) -> bool,
{
    #[inline]
    fn is_permitted(&self, byte: u8) -> bool {
        self(byte)
    }
}

/// DNS ラベルとして許可されるバイトかどうか
#[inline]
pub const fn is_dns_label_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_hyphen_and_dot() {
        for byte in (b'a'..=b'z').chain(b'A'..=b'Z').chain(b'0'..=b'9') {
            assert!(DnsLabelCharset.is_permitted(byte), "rejected {}", byte as char);
        }
        assert!(DnsLabelCharset.is_permitted(b'-'));
        assert!(DnsLabelCharset.is_permitted(b'.'));
    }

    #[test]
    fn rejects_everything_else() {
        let permitted = (0u8..=255).filter(|b| is_dns_label_byte(*b)).count();
        assert_eq!(permitted, 26 + 26 + 10 + 2);

        for byte in [b'_', b' ', b'\t', b'\n', b'\r', b'/', b'@', b'*', 0x00, 0x7f, 0xc3, 0xff] {
            assert!(!DnsLabelCharset.is_permitted(byte), "accepted {byte:#04x}");
        }
    }

    #[test]
    fn closures_act_as_charsets() {
        let with_underscore = |b: u8| is_dns_label_byte(b) || b == b'_';
        assert!(with_underscore.is_permitted(b'_'));
        assert!(!with_underscore.is_permitted(b'*'));
    }
}
