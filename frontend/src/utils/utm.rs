use url::form_urlencoded;

/// Campaign attribution copied from the landing URL into the signup payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmParams {
    pub source: Option<String>,
    pub campaign: Option<String>,
}

impl UtmParams {
    /// Parses a `location.search` string (leading `?` optional). The first
    /// occurrence of each key wins; a present-but-empty value stays `Some("")`.
    pub fn from_query(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "utm_source" if params.source.is_none() => params.source = Some(value.into_owned()),
                "utm_campaign" if params.campaign.is_none() => {
                    params.campaign = Some(value.into_owned())
                }
                _ => {}
            }
        }
        params
    }
}
