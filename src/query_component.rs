use crate::compat::{BTreeMap, String, ToString, Vec};
use crate::encoding::{decode_component, encode_component_into};
use crate::error::{ParseError, Result};
use crate::query_url::QueryUrl;

/// Represents the query component of a URL as an ordered, duplicate-preserving
/// sequence of `(name, value)` pairs.
/// Provides methods to parse, inspect, grow, and serialize the component.
///
/// Names are case sensitive and not required to be unique: a name appearing
/// more than once is a multi-valued parameter, and all its values are kept in
/// insertion order. Entries are only ever added, never edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryComponent {
    entries: Vec<(String, String)>,
}

/// Value view for one parameter name in [`QueryComponent::to_map`]:
/// a bare string when the name occurs exactly once, the ordered list of
/// values when it occurs more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// The name occurs exactly once
    Single(String),
    /// The name occurs more than once; values in insertion order
    Multiple(Vec<String>),
}

impl ParamValue {
    /// All values behind this name as a slice, regardless of variant.
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(value) => core::slice::from_ref(value),
            Self::Multiple(values) => values,
        }
    }
}

impl QueryComponent {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse from a raw query string (with or without leading `?`)
    ///
    /// Tokens are separated by `&`; empty tokens (`a=1&&b=2`) are skipped.
    /// Each token splits on the first `=` only, so further `=` characters
    /// belong to the value; a token without `=` yields an empty value.
    ///
    /// # Errors
    ///
    /// Fails on a malformed percent escape anywhere in the query. No
    /// partially decoded component is produced.
    pub fn parse(query: &str) -> Result<Self> {
        Self::parse_pairs(query.strip_prefix('?').unwrap_or(query))
    }

    /// Parse the query component of a URL
    ///
    /// The component is split exactly as the URL carries it: only the `?`
    /// separating it from the path is a delimiter, so a further `?` at the
    /// start of the query stays part of the first parameter name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoQuery`] if the URL carries no query component
    /// at all (an empty query parses to an empty component instead), or
    /// [`ParseError::InvalidPercentEncoding`] if the query does not decode
    /// cleanly.
    pub fn from_url<U: QueryUrl>(url: &U) -> Result<Self> {
        let query = url.raw_query().ok_or(ParseError::NoQuery)?;
        Self::parse_pairs(query)
    }

    /// Split an exact query component into decoded entries.
    fn parse_pairs(query: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = match pair.split_once('=') {
                Some((name, value)) => (decode_component(name)?, decode_component(value)?),
                None => (decode_component(pair)?, String::new()),
            };
            entries.push((name, value));
        }

        Ok(Self { entries })
    }

    /// Append one `(name, value)` entry.
    /// Entries with the same name are not merged: duplicates accumulate.
    pub fn append(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// Append every pair from an ordered sequence, in sequence order.
    ///
    /// Relative order between different names follows the iterator, so an
    /// unordered map as input leaves cross-name order unspecified.
    pub fn append_pairs<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in pairs {
            self.append(name.as_ref(), value.as_ref());
        }
    }

    /// Get the first value for a name. Case sensitive.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a name, in insertion order. Case sensitive.
    /// An absent name yields an empty vec.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Distinct parameter names, in first-occurrence order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (name, _) in &self.entries {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
        names
    }

    /// Map view of the parameters: a name occurring exactly once maps to
    /// [`ParamValue::Single`], a name occurring more than once maps to
    /// [`ParamValue::Multiple`] with its values in insertion order.
    pub fn to_map(&self) -> BTreeMap<String, ParamValue> {
        let mut map: BTreeMap<String, ParamValue> = BTreeMap::new();
        for (name, value) in &self.entries {
            map.entry(name.clone())
                .and_modify(|slot| match slot {
                    ParamValue::Single(first) => {
                        let mut values = Vec::with_capacity(2);
                        values.push(core::mem::take(first));
                        values.push(value.clone());
                        *slot = ParamValue::Multiple(values);
                    }
                    ParamValue::Multiple(values) => values.push(value.clone()),
                })
                .or_insert_with(|| ParamValue::Single(value.clone()));
        }
        map
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the component has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render the entries as a percent-encoded query string: `name=value`
    /// tokens joined by `&`, in insertion order, so duplicate names appear
    /// as separate tokens at their original positions.
    ///
    /// Only the RFC 3986 unreserved characters stay bare; everything else
    /// (space included) encodes as uppercase `%XX` from the UTF-8 bytes.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            encode_component_into(&mut out, name);
            out.push('=');
            encode_component_into(&mut out, value);
        }
        out
    }

    /// Return a new URL identical to the input in scheme, authority, path,
    /// and fragment, with its query component replaced by
    /// [`encode`](Self::encode)'s output. Any existing query is replaced,
    /// never appended to. A component with zero entries produces a URL with
    /// no query component at all (not an empty one).
    pub fn splice_into_url<U: QueryUrl>(&self, url: &U) -> U {
        if self.entries.is_empty() {
            url.with_query(None)
        } else {
            url.with_query(Some(&self.encode()))
        }
    }
}

impl core::fmt::Display for QueryComponent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for QueryComponent {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        self.append_pairs(pairs);
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for QueryComponent {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut component = Self::new();
        component.append_pairs(pairs);
        component
    }
}
