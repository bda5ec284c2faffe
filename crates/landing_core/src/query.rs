use url::form_urlencoded;

/// One recognized location/search parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    Term,
    Domain,
    Tag,
    Year,
    Region,
}

impl QueryField {
    /// Canonical serialization order.
    pub const ALL: [QueryField; 5] = [
        QueryField::Term,
        QueryField::Domain,
        QueryField::Tag,
        QueryField::Year,
        QueryField::Region,
    ];

    pub fn key(self) -> &'static str {
        match self {
            QueryField::Term => "term",
            QueryField::Domain => "domain",
            QueryField::Tag => "tag",
            QueryField::Year => "year",
            QueryField::Region => "region",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Free-text search plus optional filter criteria.
///
/// Optional fields hold `None` when the dimension is unfiltered. Values are
/// stored trimmed; a whitespace-only value is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub text: String,
    pub domain: Option<String>,
    pub tag: Option<String>,
    pub year: Option<String>,
    pub region: Option<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: normalize(text.into()).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn with(mut self, field: QueryField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: QueryField) -> Option<&str> {
        let value = match field {
            QueryField::Term => Some(self.text.as_str()),
            QueryField::Domain => self.domain.as_deref(),
            QueryField::Tag => self.tag.as_deref(),
            QueryField::Year => self.year.as_deref(),
            QueryField::Region => self.region.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Sets a field; an empty or whitespace-only value clears it.
    pub fn set(&mut self, field: QueryField, value: impl Into<String>) {
        let value = normalize(value.into());
        match field {
            QueryField::Term => self.text = value.unwrap_or_default(),
            QueryField::Domain => self.domain = value,
            QueryField::Tag => self.tag = value,
            QueryField::Year => self.year = value,
            QueryField::Region => self.region = value,
        }
    }

    /// True when no field carries a value.
    pub fn is_blank(&self) -> bool {
        QueryField::ALL
            .into_iter()
            .all(|field| self.get(field).is_none())
    }

    /// Encodes the non-empty fields in canonical order.
    ///
    /// Empty fields are omitted entirely, so the output never contains pairs
    /// such as `domain=`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for field in QueryField::ALL {
            if let Some(value) = self.get(field) {
                serializer.append_pair(field.key(), value);
            }
        }
        serializer.finish()
    }

    /// Decodes a location query string, ignoring unknown keys.
    ///
    /// A leading `?` is accepted. When a key repeats, the last value wins.
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut query = Self::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if let Some(field) = QueryField::from_key(&key) {
                query.set(field, value.into_owned());
            }
        }
        query
    }
}

fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_ignored() {
        let query = SearchQuery::from_query_string("?utm_source=mail&term=rust&page=2");
        assert_eq!(query, SearchQuery::new("rust"));
    }

    #[test]
    fn canonical_order_does_not_follow_input_order() {
        let query = SearchQuery::from_query_string("region=eu&term=a&year=2020");
        assert_eq!(query.to_query_string(), "term=a&year=2020&region=eu");
    }

    #[test]
    fn whitespace_values_count_as_absent() {
        let query = SearchQuery::new("  ").with(QueryField::Tag, " \t");
        assert!(query.is_blank());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn values_are_percent_encoded() {
        let query = SearchQuery::new("rust & wasm").with(QueryField::Domain, "a=b");
        let encoded = query.to_query_string();
        assert_eq!(encoded, "term=rust+%26+wasm&domain=a%3Db");
        assert_eq!(SearchQuery::from_query_string(&encoded), query);
    }
}
