const MAX_LENGTH: usize = 253;
const MAX_PARTS: usize = 127;
const MAX_PART_LENGTH: usize = 63;

fn is_dot(c: char) -> bool {
    matches!(c, '.' | '\u{3002}' | '\u{FF0E}' | '\u{FF61}')
}

fn is_dash(c: char) -> bool {
    c == '-' || c == '_'
}

fn validate_part(part: &str, is_final: bool) -> bool {
    let Some(first) = part.chars().next() else {
        return false;
    };
    let last = part.chars().next_back().unwrap_or(first);

    if part.chars().count() > MAX_PART_LENGTH {
        return false;
    }
    // Non-ASCII characters are left to IDNA; only the ASCII subset is checked.
    if !part
        .chars()
        .filter(char::is_ascii)
        .all(|c| c.is_ascii_alphanumeric() || is_dash(c))
    {
        return false;
    }
    if is_dash(first) || is_dash(last) {
        return false;
    }
    !(is_final && first.is_ascii_digit())
}

/// Syntactic check for an internet domain name such as `dns.example.org`.
pub fn validate_hostname(hostname: &str) -> bool {
    let normalized: String = hostname
        .chars()
        .map(|c| if is_dot(c) { '.' } else { c })
        .collect();
    let name = normalized.strip_suffix('.').unwrap_or(&normalized);

    if name.chars().count() > MAX_LENGTH {
        return false;
    }

    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > MAX_PARTS {
        return false;
    }

    let last = parts.len() - 1;
    parts
        .iter()
        .enumerate()
        .all(|(index, part)| validate_part(part, index == last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hostnames() {
        assert!(validate_hostname("dns.google"));
        assert!(validate_hostname("one.one.one.one"));
        assert!(validate_hostname("security-filter-dns.cleanbrowsing.org"));
        assert!(validate_hostname("dns.example.org."));
        assert!(validate_hostname("localhost"));
        assert!(validate_hostname("under_score.example.com"));
        assert!(validate_hostname("1.example.com"));
        assert!(validate_hostname("dns\u{3002}example\u{3002}org"));
        assert!(validate_hostname("bücher.example"));
    }

    #[test]
    fn test_invalid_hostnames() {
        assert!(!validate_hostname(""));
        assert!(!validate_hostname("."));
        assert!(!validate_hostname("not a domain!!"));
        assert!(!validate_hostname("dns..example.org"));
        assert!(!validate_hostname("-dns.example.org"));
        assert!(!validate_hostname("dns-.example.org"));
        assert!(!validate_hostname("dns.example._org"));
        assert!(!validate_hostname("dns.example.1org"));
        assert!(!validate_hostname("1.1.1.1"));
        assert!(!validate_hostname("https://dns.google"));
    }

    #[test]
    fn test_length_limits() {
        let label = "a".repeat(63);
        assert!(validate_hostname(&format!("{}.com", label)));
        assert!(!validate_hostname(&format!("{}a.com", label)));

        let long = vec!["abcdefghi"; 26].join(".");
        assert!(long.len() > MAX_LENGTH);
        assert!(!validate_hostname(&long));

        let many = vec!["a"; 128].join(".");
        assert!(!validate_hostname(&many));
    }
}
