//! Decides which grammar a single host token belongs to.
//!
//! Some forms are textual subsets of others (a `/8` token also contains `/`), so
//! the checks run in a fixed order and the first match wins:
//!
//! 1. `192`, `172` and `10` alias their private networks.
//! 2. A `/8` suffix selects the sampler.
//! 3. Any other `/` is a CIDR block.
//! 4. Any letter makes the token an opaque hostname.
//! 5. A `-` is a range.
//! 6. Anything else must be a literal address.

/// The grammar a token was recognised as, borrowing the relevant text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// A shortcut for a private network, holding the CIDR it stands for.
    PrivateAlias(&'static str),
    /// A /8 network, holding the address in front of the `/8` suffix.
    SampledNetwork(&'a str),
    Cidr(&'a str),
    Hostname(&'a str),
    Range(&'a str),
    Literal(&'a str),
}

pub fn classify(token: &str) -> TokenKind<'_> {
    if let Some(cidr) = private_alias(token) {
        return TokenKind::PrivateAlias(cidr);
    }

    if let Some(base) = token.strip_suffix("/8") {
        return TokenKind::SampledNetwork(base);
    }

    if token.contains('/') {
        return TokenKind::Cidr(token);
    }

    if token.chars().any(|c| c.is_ascii_alphabetic()) {
        return TokenKind::Hostname(token);
    }

    if token.contains('-') {
        return TokenKind::Range(token);
    }

    TokenKind::Literal(token)
}

fn private_alias(token: &str) -> Option<&'static str> {
    match token {
        "192" => Some("192.168.0.0/16"),
        "172" => Some("172.16.0.0/12"),
        "10" => Some("10.0.0.0/8"),
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
