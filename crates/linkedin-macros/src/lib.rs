/// Create a [`HashSet`](std::collections::HashSet) from a list of `&str` to
/// easily create scopes for `Token` or `OAuth`.
///
/// Example:
///
/// ```
/// use linkedin_macros::scopes;
/// use std::collections::HashSet;
///
/// let with_macro = scopes!("openid", "profile");
/// let mut manually = HashSet::new();
/// manually.insert("openid".to_owned());
/// manually.insert("profile".to_owned());
/// assert_eq!(with_macro, manually);
/// ```
#[macro_export]
macro_rules! scopes {
    ($($key:expr),*) => {{
        let mut container = ::std::collections::HashSet::new();
        $(
            container.insert($key.to_owned());
        )*
        container
    }};
}

/// Build a list of query parameters, skipping every `Option` that is `None`.
///
/// Mandatory pairs are written as `key: value`, optional ones as
/// `key?: value`:
///
/// ```
/// use linkedin_macros::query;
///
/// let count = Some("10".to_owned());
/// let start: Option<String> = None;
/// let params = query! {
///     "q": "author",
///     "count"?: count.as_deref(),
///     "start"?: start.as_deref()
/// };
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("count"), Some(&"10"));
/// ```
#[macro_export]
macro_rules! query {
    (@acc $params:ident;) => {};
    (@acc $params:ident; $key:literal ?: $val:expr $(, $($rest:tt)*)?) => {
        if let Some(val) = $val {
            $params.insert($key, val);
        }
        $crate::query!(@acc $params; $($($rest)*)?);
    };
    (@acc $params:ident; $key:literal : $val:expr $(, $($rest:tt)*)?) => {
        $params.insert($key, $val);
        $crate::query!(@acc $params; $($($rest)*)?);
    };
    ($($body:tt)*) => {{
        let mut params = ::std::collections::HashMap::<&str, &str>::new();
        $crate::query!(@acc params; $($body)*);
        params
    }};
}
