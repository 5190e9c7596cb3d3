/// Fixed pattern set covering SQL injection markers, HTML/script
/// injection, path traversal, and shell/template injection markers.
/// Matching is case-insensitive substring search.
const SUSPICIOUS_PATTERNS: &[&str] = &[
    // SQL injection
    "union select",
    "or 1=1",
    "' or '",
    "drop table",
    "insert into",
    "delete from",
    "; --",
    // HTML / script injection
    "<script",
    "javascript:",
    "onerror=",
    // Path traversal
    "../",
    "..\\",
    "etc/passwd",
    // Shell / template injection
    "$(",
    "${",
    "{{",
    "eval(",
];

/// Scans request URLs and bodies for a fixed set of adversarial
/// markers. Matches are reported for logging; enforcement is the
/// middleware's decision.
pub struct SuspiciousPatternScanner {
    patterns: Vec<&'static str>,
}

impl Default for SuspiciousPatternScanner {
    fn default() -> Self {
        Self {
            patterns: SUSPICIOUS_PATTERNS.to_vec(),
        }
    }
}

impl SuspiciousPatternScanner {
    /// First matching pattern in `text`, if any
    pub fn scan(&self, text: &str) -> Option<&'static str> {
        let text = text.to_lowercase();
        self.patterns
            .iter()
            .find(|pattern| text.contains(**pattern))
            .copied()
    }
}
