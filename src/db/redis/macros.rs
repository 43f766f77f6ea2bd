/// Read-through caching for an async computation.
///
/// Returns the cached value for `$key` when present. Otherwise awaits
/// `$future`, queues the result for a background write with `$ttl` seconds to
/// live, and returns it. Errors from the cache read or the computation are
/// propagated with `?`, so the surrounding function must return an
/// `AppResult`.
///
/// # Example
/// ```rust,ignore
/// let key = CacheKey::RecipeSearch(query.to_string());
/// cached!(cache, key, 300, match_recipes(catalog, matcher, query))
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $future:expr) => {{
        if let Some(hit) = $cache.get_from_cache(&$key).await? {
            Ok(hit)
        } else {
            let value = $future.await?;
            $cache.set_in_background(&$key, &value, $ttl);
            Ok(value)
        }
    }};
}
