/// Schemes that must never be followed from an href
///
/// The explicitly named variants cover the schemes browsers commonly embed in
/// anchors; `Other` catches every remaining non-web scheme so the policy
/// stays closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsafeScheme {
    Javascript,
    Mailto,
    Tel,
    Data,
    Other(String),
}

/// Classification of a raw href value before URL resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HrefClass {
    /// No explicit scheme, or an explicit http/https scheme; eligible for
    /// resolution against the crawl base.
    Resolvable,

    /// Carries a scheme that must not be followed.
    Unsafe(UnsafeScheme),
}

impl HrefClass {
    /// Returns true if the href may proceed to URL resolution
    pub fn is_resolvable(&self) -> bool {
        matches!(self, Self::Resolvable)
    }
}

/// Classifies a raw href value by its explicit scheme, if any.
///
/// An href carries an explicit scheme when a colon appears before any slash.
/// Only `http` and `https` survive; every other explicit scheme is unsafe.
/// Scheme-less values (relative paths, `./`, `../`, root-relative `/...`,
/// protocol-relative `//host/...`) are resolvable. Matching is
/// case-insensitive.
pub fn classify_href(raw: &str) -> HrefClass {
    let lower = raw.trim().to_ascii_lowercase();

    let colon = match lower.find(':') {
        Some(i) => i,
        None => return HrefClass::Resolvable,
    };

    // A colon after a slash is part of the path, not a scheme delimiter.
    if let Some(slash) = lower.find('/') {
        if slash < colon {
            return HrefClass::Resolvable;
        }
    }

    match &lower[..colon] {
        "http" | "https" => HrefClass::Resolvable,
        "javascript" => HrefClass::Unsafe(UnsafeScheme::Javascript),
        "mailto" => HrefClass::Unsafe(UnsafeScheme::Mailto),
        "tel" => HrefClass::Unsafe(UnsafeScheme::Tel),
        "data" => HrefClass::Unsafe(UnsafeScheme::Data),
        other => HrefClass::Unsafe(UnsafeScheme::Other(other.to_string())),
    }
}
