//! Caller identity resolution.
//!
//! Ownership checks compare against a plain identity string. How that string
//! is derived from the caller's credential is the host's concern; the engine
//! only consumes the result. Resolution is total: any parse failure yields
//! the empty identity, which later fails ownership checks rather than being
//! its own error class.

/// Turns an opaque credential blob into an identity string.
pub trait IdentityResolver {
    /// Resolve a credential to an identity. Returns `""` on any failure.
    fn resolve(&self, credential: &[u8]) -> String;
}

/// Extracts the `CN=` attribute from a UTF-8 subject line.
///
/// Accepts the common `,`- or `/`-separated subject forms, e.g.
/// `CN=alice,O=MPL` or `/O=MPL/CN=alice`. No certificate cryptography
/// happens here; the blob is trusted as handed in by the environment.
#[derive(Debug, Default)]
pub struct SubjectNameResolver;

impl SubjectNameResolver {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityResolver for SubjectNameResolver {
    fn resolve(&self, credential: &[u8]) -> String {
        let Ok(subject) = std::str::from_utf8(credential) else {
            return String::new();
        };

        for part in subject.split(|c| c == ',' || c == '/') {
            if let Some(value) = part.trim().strip_prefix("CN=") {
                return value.trim().to_string();
            }
        }
        String::new()
    }
}

/// Resolver that always yields a known identity, for tests and embedding.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl IdentityResolver for FixedIdentity {
    fn resolve(&self, _credential: &[u8]) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_comma_separated_subject() {
        let resolver = SubjectNameResolver::new();
        assert_eq!(resolver.resolve(b"CN=alice,O=MPL,C=FR"), "alice");
    }

    #[test]
    fn test_resolve_slash_separated_subject() {
        let resolver = SubjectNameResolver::new();
        assert_eq!(resolver.resolve(b"/C=FR/O=MPL/CN=bob"), "bob");
    }

    #[test]
    fn test_resolve_missing_cn_is_empty() {
        let resolver = SubjectNameResolver::new();
        assert_eq!(resolver.resolve(b"O=MPL,C=FR"), "");
    }

    #[test]
    fn test_resolve_invalid_utf8_is_empty() {
        let resolver = SubjectNameResolver::new();
        assert_eq!(resolver.resolve(&[0xFF, 0xFE, 0x00]), "");
    }

    #[test]
    fn test_fixed_identity() {
        let resolver = FixedIdentity("carol".to_string());
        assert_eq!(resolver.resolve(b"ignored"), "carol");
    }
}
