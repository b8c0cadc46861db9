/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
/// Fragment is returned WITHOUT the leading '#'
/// Optimization: Uses SIMD-accelerated memchr for fast '#' search
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split a query (?search) off a URL string that has already had its
/// fragment pruned. Returns (`url_without_query`, `query_without_question_mark`).
/// A URL with a bare trailing '?' yields `Some("")`, which is distinct from
/// having no query component at all.
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}
