use super::normalize::ListingPage;
use crate::model::PostSummary;
use crate::types::ContinuationRef;
use serde::{Deserialize, Deserializer, Serialize};

/// The listing as accumulated so far.
///
/// `results` only ever grows at the end; `next_page` is always the
/// continuation stated by the most recently fetched page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaginationState {
    #[serde(default, deserialize_with = "optional_continuation")]
    pub next_page: Option<ContinuationRef>,
    #[serde(default)]
    pub results: Vec<PostSummary>,
}

/// A stored empty continuation reads back as "no more pages".
fn optional_continuation<'de, D>(deserializer: D) -> Result<Option<ContinuationRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ContinuationRef::from_optional(Option::<String>::deserialize(
        deserializer,
    )?))
}

impl PaginationState {
    /// State seeded from the first page of the listing.
    pub fn from_initial(page: ListingPage) -> Self {
        Self {
            next_page: page.next_page,
            results: page.results,
        }
    }

    /// Old state + new page → new state.
    pub fn append_page(mut self, page: ListingPage) -> Self {
        self.results.extend(page.results);
        self.next_page = page.next_page;
        self
    }

    /// Whether another page can be requested.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostData;
    use crate::types::PostUid;

    fn summary(uid: &str) -> PostSummary {
        PostSummary {
            uid: PostUid::parse(uid).unwrap(),
            first_publication_date: None,
            data: PostData {
                title: uid.to_uppercase(),
                ..Default::default()
            },
        }
    }

    fn page(uids: &[&str], next: Option<&str>) -> ListingPage {
        ListingPage {
            results: uids.iter().map(|u| summary(u)).collect(),
            next_page: ContinuationRef::from_optional(next.map(str::to_string)),
        }
    }

    fn uids(state: &PaginationState) -> Vec<&str> {
        state.results.iter().map(|s| s.uid.as_str()).collect()
    }

    #[test]
    fn test_append_concatenates_in_call_order() {
        let state = PaginationState::from_initial(page(&["a"], Some("/page2")))
            .append_page(page(&["b", "c"], Some("/page3")))
            .append_page(page(&["d"], None));

        assert_eq!(uids(&state), vec!["a", "b", "c", "d"]);
        assert!(!state.has_more());
    }

    #[test]
    fn test_continuation_tracks_latest_page() {
        let state = PaginationState::from_initial(page(&["a"], Some("/page2")))
            .append_page(page(&["b"], Some("/page3")));

        assert_eq!(
            state.next_page.as_ref().map(ContinuationRef::as_str),
            Some("/page3")
        );
    }

    #[test]
    fn test_empty_page_still_updates_continuation() {
        let state = PaginationState::from_initial(page(&["a"], Some("/page2")))
            .append_page(page(&[], None));

        assert_eq!(uids(&state), vec!["a"]);
        assert_eq!(state.next_page, None);
    }

    #[test]
    fn test_serialized_shape_matches_listing_contract() {
        let state = PaginationState::from_initial(page(&["a"], Some("/page2")));
        let value = serde_json::to_value(&state).unwrap();

        assert_eq!(value["next_page"], "/page2");
        assert_eq!(value["results"][0]["uid"], "a");
    }

    #[test]
    fn test_deserialized_empty_continuation_is_absent() {
        for stored in [r#"{"next_page":"","results":[]}"#, r#"{"next_page":"  "}"#] {
            let state: PaginationState = serde_json::from_str(stored).unwrap();
            assert_eq!(state.next_page, None, "from {}", stored);
            assert!(!state.has_more());
        }

        let state: PaginationState =
            serde_json::from_str(r#"{"next_page":"/page2","results":[]}"#).unwrap();
        assert_eq!(
            state.next_page.as_ref().map(ContinuationRef::as_str),
            Some("/page2")
        );
    }
}
