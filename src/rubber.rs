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

use crate::error::Error;
use crate::facets::{TermBucket, TermsFacetQuery, TermsFacetResponse};
use reqwest::blocking::{Client, Request};
use std::time::Duration;

/// Something able to answer a terms facet query on an index.
pub trait TermsFacet {
    fn terms_facet(&self, index: &str) -> Result<Vec<TermBucket>, Error>;
}

/// Blocking Elasticsearch client for the word frequency facets.
pub struct Rubber {
    base_url: String,
    client: Client,
    query: TermsFacetQuery,
}

impl Rubber {
    /// `cnx` is the node url, e.g. `http://localhost:9200`.
    ///
    /// Requests have no timeout: a slow facet computation is waited for.
    pub fn new(cnx: &str) -> Result<Rubber, Error> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .no_proxy()
            .build()
            .map_err(|cause| Error::Client { cause })?;
        info!("elasticsearch node {}", cnx);
        Ok(Rubber {
            base_url: cnx.trim_end_matches('/').to_string(),
            client,
            query: TermsFacetQuery::default(),
        })
    }

    pub fn search_url(&self, index: &str) -> String {
        format!("{}/{}/_search", self.base_url, index)
    }

    /// The POST sent for `index`, with the terms facet query as json body.
    pub fn terms_facet_request(&self, index: &str) -> Result<Request, Error> {
        let url = self.search_url(index);
        self.client
            .post(&url)
            .json(&self.query)
            .build()
            .map_err(|cause| Error::Request { url, cause })
    }
}

impl TermsFacet for Rubber {
    fn terms_facet(&self, index: &str) -> Result<Vec<TermBucket>, Error> {
        let url = self.search_url(index);
        let request = self.terms_facet_request(index)?;
        debug!("querying terms facet"; "index" => index, "url" => %url);
        let response = self
            .client
            .execute(request)
            .map_err(|cause| Error::Request {
                url: url.clone(),
                cause,
            })?;
        let status = response.status();
        let facets: TermsFacetResponse =
            serde_json::from_reader(response).map_err(|cause| Error::InvalidResponse {
                url,
                status,
                cause,
            })?;
        Ok(facets.into_buckets())
    }
}
