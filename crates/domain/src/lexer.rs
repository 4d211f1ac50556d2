// crates/domain/src/lexer.rs
pub mod charset;
pub mod scanner;
pub mod token;

pub use charset::{DnsLabelCharset, LabelCharset, is_dns_label_byte};
pub use scanner::Scanner;
pub use token::{IllegalKind, Token, TokenKind};
