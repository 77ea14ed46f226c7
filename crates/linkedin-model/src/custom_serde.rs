pub mod duration_second {
    use chrono::Duration;
    use serde::{de, Deserialize, Serializer};

    /// Deserialize `chrono::Duration` from an integer that represents seconds
    pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let duration: i64 = Deserialize::deserialize(d)?;
        Ok(Duration::seconds(duration))
    }

    /// Serialize `chrono::Duration` to an integer that represents seconds
    pub fn serialize<S>(x: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_i64(x.num_seconds())
    }
}

/// LinkedIn answers the token endpoint with comma separated scopes, while the
/// authorization URL takes them space separated. Both are accepted here.
pub mod separated_scopes {
    use std::collections::HashSet;

    use serde::{de, Deserialize, Serializer};

    pub fn deserialize<'de, D>(d: D) -> Result<HashSet<String>, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let scopes: String = Deserialize::deserialize(d)?;
        Ok(scopes
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|scope| !scope.is_empty())
            .map(ToOwned::to_owned)
            .collect())
    }

    pub fn serialize<S>(scopes: &HashSet<String>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut scopes = scopes.iter().map(String::as_str).collect::<Vec<_>>();
        scopes.sort_unstable();
        s.serialize_str(&scopes.join(","))
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Scoped {
        #[serde(with = "super::separated_scopes")]
        scope: HashSet<String>,
    }

    #[test]
    fn test_scopes_accept_commas_and_spaces() {
        let scoped: Scoped =
            serde_json::from_str(r#"{"scope": "openid,profile email"}"#).unwrap();
        assert_eq!(scoped.scope.len(), 3);
        assert!(scoped.scope.contains("email"));

        let json = serde_json::to_string(&scoped).unwrap();
        assert_eq!(json, r#"{"scope":"email,openid,profile"}"#);
    }
}
