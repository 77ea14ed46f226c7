//! URL helpers shared by the paging strategy and the connections.

use libs::url::{form_urlencoded, ParseError, Url};

/// Sets `key` to `value` in the query of `url`.
///
/// The first occurrence of `key` is replaced; when there is none,
/// `key=value` is appended. Every other pair keeps its position and its raw
/// encoding, and `key`/`value` are written as given. Applying it twice with
/// the same arguments gives the same URL as applying it once.
///
/// ```
/// use linkedin::util::replace_or_add_query_parameter;
///
/// let url = "https://api.linkedin.com/v2/shares?q=owners&start=0";
/// let url = replace_or_add_query_parameter(url, "start", "10").unwrap();
/// let url = replace_or_add_query_parameter(&url, "count", "10").unwrap();
/// assert_eq!(url, "https://api.linkedin.com/v2/shares?q=owners&start=10&count=10");
/// ```
pub fn replace_or_add_query_parameter(url: &str, key: &str, value: &str) -> Result<String, ParseError> {
    // Validation only. Everything outside the query is kept as written.
    Url::parse(url)?;

    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = rest.split_once('?').unwrap_or((rest, ""));
    let replacement = format!("{key}={value}");

    let mut replaced = false;
    let mut pairs = if query.is_empty() {
        Vec::new()
    } else {
        query
            .split('&')
            .map(|pair| {
                let name = pair.split_once('=').map_or(pair, |(name, _)| name);
                if !replaced && name == key {
                    replaced = true;
                    replacement.clone()
                } else {
                    pair.to_owned()
                }
            })
            .collect::<Vec<_>>()
    };

    if !replaced {
        pairs.push(replacement);
    }

    let mut rewritten = format!("{base}?{}", pairs.join("&"));
    if let Some(fragment) = fragment {
        rewritten.push('#');
        rewritten.push_str(fragment);
    }
    Ok(rewritten)
}

/// Percent encodes a URN so it can be used as a path segment or inside a
/// Rest.li list, e.g. `urn%3Ali%3Aorganization%3A1`.
#[must_use]
pub fn encode_urn(urn: &str) -> String {
    form_urlencoded::byte_serialize(urn.as_bytes()).collect()
}

/// Rest.li 2.0 list syntax, `List(urn%3Ali%3Aperson%3A1,...)`. The
/// parentheses and commas must stay unencoded, so the result is meant to be
/// inserted with [`replace_or_add_query_parameter`].
#[must_use]
pub fn restli_list<'a>(urns: impl IntoIterator<Item = &'a str>) -> String {
    let encoded = urns.into_iter().map(encode_urn).collect::<Vec<_>>();
    format!("List({})", encoded.join(","))
}

/// Appends the query pairs to `url`, form encoding them.
pub fn with_query<'a>(
    url: &str,
    params: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<String, ParseError> {
    let mut url = Url::parse(url)?;
    {
        let mut pairs = params.into_iter().peekable();
        if pairs.peek().is_some() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
    }
    Ok(url.into())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_adds_missing_parameter() {
        let url = replace_or_add_query_parameter("https://test.com/test", "start", "5").unwrap();
        assert_eq!(url, "https://test.com/test?start=5");
    }

    #[test]
    fn test_replaces_first_occurrence_only() {
        let url =
            replace_or_add_query_parameter("https://test.com/test?start=1&a=b&start=2", "start", "9")
                .unwrap();
        assert_eq!(url, "https://test.com/test?start=9&a=b&start=2");
    }

    #[test]
    fn test_keeps_other_encodings() {
        let url = "https://api.linkedin.com/v2/ugcPosts?q=authors&authors=List(urn%3Ali%3Aperson%3A1)#frag";
        let url = replace_or_add_query_parameter(url, "count", "10").unwrap();
        assert_eq!(
            url,
            "https://api.linkedin.com/v2/ugcPosts?q=authors&authors=List(urn%3Ali%3Aperson%3A1)&count=10#frag"
        );
    }

    #[test]
    fn test_key_without_value_is_replaced() {
        let url = replace_or_add_query_parameter("https://test.com/?start&x=1", "start", "0").unwrap();
        assert_eq!(url, "https://test.com/?start=0&x=1");
    }

    #[test]
    fn test_keeps_url_as_written() {
        let url = replace_or_add_query_parameter("https://Test.COM:443/a/./b/../test?x=1", "start", "10")
            .unwrap();
        assert_eq!(url, "https://Test.COM:443/a/./b/../test?x=1&start=10");

        let url = replace_or_add_query_parameter("https://test.com?x=1", "start", "10").unwrap();
        assert_eq!(url, "https://test.com?x=1&start=10");

        let url = replace_or_add_query_parameter("https://test.com/café?q=a b", "start", "10").unwrap();
        assert_eq!(url, "https://test.com/café?q=a b&start=10");
    }

    #[test]
    fn test_empty_query_and_fragment() {
        let url = replace_or_add_query_parameter("https://test.com/test?#a?b", "count", "5").unwrap();
        assert_eq!(url, "https://test.com/test?count=5#a?b");
    }

    #[test]
    fn test_is_idempotent() {
        let once = replace_or_add_query_parameter("https://test.com/test?q=a", "count", "5").unwrap();
        let twice = replace_or_add_query_parameter(&once, "count", "5").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(replace_or_add_query_parameter("/v2/shares", "start", "0").is_err());
    }

    #[test]
    fn test_restli_list() {
        let list = restli_list(["urn:li:person:1", "urn:li:person:2"]);
        assert_eq!(list, "List(urn%3Ali%3Aperson%3A1,urn%3Ali%3Aperson%3A2)");
    }

    #[test]
    fn test_with_query() {
        let url = with_query(
            "https://api.linkedin.com/rest/posts",
            [("q", "author"), ("author", "urn:li:organization:1")],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://api.linkedin.com/rest/posts?q=author&author=urn%3Ali%3Aorganization%3A1"
        );

        let url = with_query(
            "https://api.linkedin.com/v2/userinfo",
            Vec::<(&str, &str)>::new(),
        )
        .unwrap();
        assert_eq!(url, "https://api.linkedin.com/v2/userinfo");
    }
}
