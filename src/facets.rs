// Copyright © 2016, Canal TP and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
//     the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
//     powered by Canal TP (www.canaltp.fr).
// Help us simplify mobility and open public transport:
//     a non ending quest to the responsive locomotion way of traveling!
//
// LICENCE: This program is free software; you can redistribute it
// and/or modify it under the terms of the GNU Affero General Public
// License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public
// License along with this program. If not, see
// <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// IRC #navitia on freenode
// https://groups.google.com/d/forum/navitia
// www.navitia.io

//! Bindings for the terms facet search used to count words.
//!
//! The query asks for no hits and one facet named `terms` over the
//! `lowercase_word_split_text` field. The answer is read from
//! `facets.terms.terms`, a list of `{term, count}` buckets.

use serde::{Deserialize, Serialize};

/// Field whose distinct values are counted.
pub const TERMS_FIELD: &str = "lowercase_word_split_text";

/// Maximum number of buckets asked to the server.
pub const MAX_TERMS: u64 = 1_000_000;

#[derive(Debug, Clone, Serialize)]
pub struct TermsFacetQuery {
    pub size: u64,
    pub facets: FacetsQuery,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetsQuery {
    pub terms: TermsFacetDefinition,
}

#[derive(Debug, Clone, Serialize)]
pub struct TermsFacetDefinition {
    pub terms: TermsParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct TermsParameters {
    pub field: &'static str,
    pub size: u64,
}

impl Default for TermsFacetQuery {
    fn default() -> Self {
        TermsFacetQuery {
            size: 0,
            facets: FacetsQuery {
                terms: TermsFacetDefinition {
                    terms: TermsParameters {
                        field: TERMS_FIELD,
                        size: MAX_TERMS,
                    },
                },
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TermsFacetResponse {
    pub facets: FacetsResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacetsResult {
    pub terms: TermsFacetResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TermsFacetResult {
    pub terms: Vec<TermBucket>,
}

/// One distinct word and the number of documents containing it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TermBucket {
    pub term: String,
    pub count: u64,
}

impl TermsFacetResponse {
    /// The buckets, in the order sent by the server.
    pub fn into_buckets(self) -> Vec<TermBucket> {
        self.facets.terms.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_body_asks_for_a_million_terms_and_no_hits() {
        let body = serde_json::to_value(TermsFacetQuery::default()).unwrap();
        assert_eq!(
            body,
            json!({
                "size": 0,
                "facets": {
                    "terms": {
                        "terms": {
                            "field": "lowercase_word_split_text",
                            "size": 1_000_000
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn buckets_keep_the_server_order() {
        let response: TermsFacetResponse = serde_json::from_str(
            r#"{
                "took": 3,
                "hits": {"total": 12, "hits": []},
                "facets": {"terms": {
                    "_type": "terms",
                    "missing": 0,
                    "terms": [
                        {"term": "zebra", "count": 1},
                        {"term": "cat", "count": 5},
                        {"term": "dog", "count": 3}
                    ]
                }}
            }"#,
        )
        .unwrap();
        let terms: Vec<_> = response
            .into_buckets()
            .into_iter()
            .map(|b| (b.term, b.count))
            .collect();
        assert_eq!(
            terms,
            vec![
                ("zebra".to_string(), 1),
                ("cat".to_string(), 5),
                ("dog".to_string(), 3)
            ]
        );
    }

    #[test]
    fn non_ascii_terms_are_kept() {
        let response: TermsFacetResponse =
            serde_json::from_str(r#"{"facets":{"terms":{"terms":[{"term":"café","count":2}]}}}"#)
                .unwrap();
        assert_eq!(response.into_buckets()[0].term, "café");
    }

    #[test]
    fn missing_facets_is_an_error() {
        let res = serde_json::from_str::<TermsFacetResponse>(r#"{"hits":{"hits":[]}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn missing_bucket_list_is_an_error() {
        let res = serde_json::from_str::<TermsFacetResponse>(r#"{"facets":{"terms":{}}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn non_integer_count_is_an_error() {
        let res = serde_json::from_str::<TermsFacetResponse>(
            r#"{"facets":{"terms":{"terms":[{"term":"cat","count":"five"}]}}}"#,
        );
        assert!(res.is_err());
    }
}
