//! Query-string codec for navigation requests.

use url::form_urlencoded;

use crate::model::NavigationRequest;

pub const INNERPAGE_PARAM: &str = "innerpage";
pub const WORD_PARAM: &str = "word";
pub const MATCH_PARAM: &str = "match";

/// Parse `location.search` (with or without the leading `?`).
/// Unknown parameters are ignored; the first non-empty value of each
/// recognized parameter wins.
pub fn parse_request(search: &str) -> NavigationRequest {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut request = NavigationRequest::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            INNERPAGE_PARAM => &mut request.innerpage,
            WORD_PARAM => &mut request.word,
            MATCH_PARAM => &mut request.match_id,
            _ => continue,
        };
        if slot.is_none() && !value.is_empty() {
            *slot = Some(value.into_owned());
        }
    }
    request
}

/// Serialize a request as `?innerpage=..&word=..&match=..`, emitting only the
/// present fields in that fixed order. An empty request yields `""`.
pub fn build_url(request: &NavigationRequest) -> String {
    let fields = [
        (INNERPAGE_PARAM, request.innerpage.as_deref()),
        (WORD_PARAM, request.word.as_deref()),
        (MATCH_PARAM, request.match_id.as_deref()),
    ];
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            serializer.append_pair(key, value);
        }
    }
    let query = serializer.finish();
    if query.is_empty() {
        query
    } else {
        format!("?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(innerpage: Option<&str>, word: Option<&str>, match_id: Option<&str>) -> NavigationRequest {
        NavigationRequest {
            innerpage: innerpage.map(str::to_owned),
            word: word.map(str::to_owned),
            match_id: match_id.map(str::to_owned),
        }
    }

    #[test]
    fn every_field_subset_round_trips() {
        let ids = ["intro", "fer ment&co=1", "m/7?x#y"];
        for mask in 0u8..8 {
            let r = request(
                (mask & 1 != 0).then_some(ids[0]),
                (mask & 2 != 0).then_some(ids[1]),
                (mask & 4 != 0).then_some(ids[2]),
            );
            assert_eq!(parse_request(&build_url(&r)), r, "mask {mask}");
        }
    }

    #[test]
    fn fields_are_emitted_in_fixed_order() {
        let r = request(Some("a"), Some("b"), Some("c"));
        assert_eq!(build_url(&r), "?innerpage=a&word=b&match=c");
        assert_eq!(build_url(&NavigationRequest::word("ferment")), "?word=ferment");
        assert_eq!(build_url(&NavigationRequest::default()), "");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let url = build_url(&NavigationRequest::word("a&b=c"));
        assert_eq!(url, "?word=a%26b%3Dc");
    }

    #[test]
    fn parse_ignores_unknown_and_empty_parameters() {
        let r = parse_request("?lang=de&word=&word=hops&innerpage=about");
        assert_eq!(r, request(Some("about"), Some("hops"), None));
        assert_eq!(parse_request(""), NavigationRequest::default());
        assert_eq!(parse_request("?"), NavigationRequest::default());
    }

    #[test]
    fn parse_decodes_percent_escapes() {
        assert_eq!(
            parse_request("match=caf%C3%A9%20noir"),
            NavigationRequest::match_detail("café noir")
        );
    }
}
