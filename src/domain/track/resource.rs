// SPDX-License-Identifier: MPL-2.0
//! Exclusively owned media resources.
//!
//! A [`ResourceHandle`] wraps either a locator for a resource the host
//! already knows about (a built-in subtitle file, a bundled video) or the
//! bytes of a user-supplied file. Handles are not `Clone`: whoever holds the
//! handle owns the resource, and dropping it runs the release hook exactly
//! once. Hosts that mint object URLs for uploaded files hook their revoke
//! call in here so the backing buffer cannot outlive its track.

use std::fmt;

type ReleaseHook = Box<dyn FnOnce(&str) + Send>;

enum Content {
    Locator,
    Bytes(Vec<u8>),
}

/// Owned reference to byte content or a host resource locator.
pub struct ResourceHandle {
    locator: String,
    content: Content,
    on_release: Option<ReleaseHook>,
}

impl ResourceHandle {
    /// Handle to a resource the host resolves by locator.
    #[must_use]
    pub fn locator(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            content: Content::Locator,
            on_release: None,
        }
    }

    /// Handle owning the loaded bytes of a file, addressed by `locator`.
    #[must_use]
    pub fn from_bytes(locator: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            locator: locator.into(),
            content: Content::Bytes(bytes),
            on_release: None,
        }
    }

    /// Registers a hook that runs when the handle is dropped.
    ///
    /// The hook receives the locator, which is what hosts need to revoke
    /// object URLs or unmap buffers.
    #[must_use]
    pub fn with_release<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&str) + Send + 'static,
    {
        self.on_release = Some(Box::new(hook));
        self
    }

    /// Returns the locator the host uses to address this resource.
    #[must_use]
    pub fn locator_str(&self) -> &str {
        &self.locator
    }

    /// Returns the owned bytes, if this handle carries file content.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.content {
            Content::Bytes(bytes) => Some(bytes),
            Content::Locator => None,
        }
    }

    /// Returns the size of the owned content in bytes (0 for locator-only handles).
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes().map_or(0, <[u8]>::len)
    }

    /// Returns true if the handle owns no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for ResourceHandle {
    fn drop(&mut self) {
        if let Some(hook) = self.on_release.take() {
            tracing::debug!(locator = %self.locator, "releasing resource");
            hook(&self.locator);
        }
    }
}

impl fmt::Debug for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("locator", &self.locator)
            .field("bytes", &self.len())
            .field("has_release_hook", &self.on_release.is_some())
            .finish()
    }
}
