// SPDX-License-Identifier: MPL-2.0
//! Hands social and contact links to the platform's default handler.

use crate::error::{Error, Result};

const ALLOWED_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Returns true if `target` uses a scheme the page links to.
#[must_use]
pub fn is_openable(target: &str) -> bool {
    let lower = target.trim().to_ascii_lowercase();
    ALLOWED_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
}

/// Opens `target` in the default browser or mail client.
///
/// # Errors
///
/// Returns [`Error::Io`] for unsupported schemes or when the platform
/// launcher fails.
pub async fn open_external(target: String) -> Result<()> {
    if !is_openable(&target) {
        return Err(Error::Io(format!("refusing to open {target:?}")));
    }

    tracing::debug!(%target, "opening link");
    tokio::task::spawn_blocking(move || open::that_detached(target.trim()))
        .await
        .map_err(|e| Error::Io(e.to_string()))??;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_and_mail_links_are_openable() {
        assert!(is_openable("https://www.instagram.com/naomiokolo"));
        assert!(is_openable("mailto:naomi.okolo@email.com"));
        assert!(is_openable("  HTTP://example.com"));
    }

    #[test]
    fn other_schemes_are_refused() {
        assert!(!is_openable("file:///etc/passwd"));
        assert!(!is_openable("javascript:alert(1)"));
        assert!(!is_openable("https://"));
        assert!(!is_openable(""));
    }

    #[tokio::test]
    async fn refused_link_returns_error() {
        assert!(matches!(
            open_external("file:///tmp/x".into()).await,
            Err(Error::Io(_))
        ));
    }
}
