use crate::compat::String;
use crate::helpers::{prune_fragment, split_query};

/// URL collaborator for [`QueryComponent`](crate::QueryComponent).
///
/// Anything that can expose its raw (still percent-encoded) query component
/// and rebuild itself around a replacement query can act as the URL side of
/// parsing and splicing. Implementations are provided for [`String`] and,
/// with the `url` feature, for [`url::Url`].
pub trait QueryUrl: Sized {
    /// The raw query component without its leading `?`, still
    /// percent-encoded.
    ///
    /// `None` when the URL has no query component at all; a URL ending in a
    /// bare `?` yields `Some("")` instead, which is a different state.
    fn raw_query(&self) -> Option<&str>;

    /// Rebuild this URL with its query component replaced.
    ///
    /// `Some(query)` installs `?query` (the string must already be
    /// percent-encoded); `None` removes the query component entirely.
    /// Scheme, authority, path, and fragment carry over unchanged.
    fn with_query(&self, query: Option<&str>) -> Self;
}

impl QueryUrl for String {
    fn raw_query(&self) -> Option<&str> {
        // Fragment comes off first so a '?' inside it is not mistaken
        // for a query delimiter
        let (without_fragment, _) = prune_fragment(self);
        split_query(without_fragment).1
    }

    fn with_query(&self, query: Option<&str>) -> Self {
        let (without_fragment, fragment) = prune_fragment(self);
        let (base, _) = split_query(without_fragment);

        let mut out = Self::with_capacity(self.len() + query.map_or(0, str::len) + 2);
        out.push_str(base);
        if let Some(query) = query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

#[cfg(feature = "url")]
impl QueryUrl for url::Url {
    fn raw_query(&self) -> Option<&str> {
        self.query()
    }

    fn with_query(&self, query: Option<&str>) -> Self {
        let mut url = self.clone();
        url.set_query(query);
        url
    }
}
