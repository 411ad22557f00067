use serde::Deserialize;

use crate::config::types::Author;

// Custom deserializer that accepts either a bare author name or a mapping
// with `name` and `email`
pub fn deserialize_author<'de, D>(deserializer: D) -> Result<Option<Author>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct NameOrMap;

    impl<'de> serde::de::Visitor<'de> for NameOrMap {
        type Value = Option<Author>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("author name or mapping with a name key")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(Author {
                name: Some(value.to_string()),
                email: None,
            }))
        }

        fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let author = Author::deserialize(serde::de::value::MapAccessDeserializer::new(map))?;
            Ok(Some(author))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(NameOrMap)
}
