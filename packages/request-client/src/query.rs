use url::form_urlencoded;

/// Form-encodes `params` (`application/x-www-form-urlencoded`), keeping the
/// iteration order of the input. An empty input yields an empty string.
pub fn encode_query<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

/// Builds `{base}/{endpoint}?{query}`.
///
/// Neither `base` nor `endpoint` is normalised or escaped, and the `?` is
/// present even when there are no parameters.
pub fn build_url<I, K, V>(base: &str, endpoint: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    format!("{}/{}?{}", base, endpoint, encode_query(params))
}
