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
use crate::output;
use crate::rubber::TermsFacet;
use std::path::{Path, PathBuf};

/// Fetch the terms facet of `index` and write it to `words_<index>.csv`
/// in `output_dir`.
///
/// The facet is fetched and decoded before the file is opened, so a bad
/// response leaves no file behind for this index.
pub fn dump<S>(source: &S, index: &str, output_dir: &Path) -> Result<PathBuf, Error>
where
    S: TermsFacet + ?Sized,
{
    let terms = source.terms_facet(index)?;
    let path = output::output_path(output_dir, index);
    output::write_terms_file(&path, &terms)?;
    info!("word frequencies dumped";
          "index" => index, "terms" => terms.len(), "path" => %path.display());
    Ok(path)
}

/// Dump every index in order and stop at the first error.
///
/// Files written before the error are left in place.
pub fn dump_all<S>(source: &S, indexes: &[&str], output_dir: &Path) -> Result<Vec<PathBuf>, Error>
where
    S: TermsFacet + ?Sized,
{
    indexes
        .iter()
        .map(|index| dump(source, index, output_dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::{TermBucket, TermsFacetResponse};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Answers from a fixed map, fails with an invalid response otherwise.
    #[derive(Default)]
    struct FakeFacets {
        answers: HashMap<&'static str, Vec<TermBucket>>,
        queried: RefCell<Vec<String>>,
    }

    impl FakeFacets {
        fn with(mut self, index: &'static str, terms: &[(&str, u64)]) -> Self {
            let terms = terms
                .iter()
                .map(|(term, count)| TermBucket {
                    term: term.to_string(),
                    count: *count,
                })
                .collect();
            self.answers.insert(index, terms);
            self
        }
    }

    impl TermsFacet for FakeFacets {
        fn terms_facet(&self, index: &str) -> Result<Vec<TermBucket>, Error> {
            self.queried.borrow_mut().push(index.to_string());
            match self.answers.get(index) {
                Some(terms) => Ok(terms.clone()),
                None => Err(Error::InvalidResponse {
                    url: format!("fake/{}/_search", index),
                    status: reqwest::StatusCode::NOT_FOUND,
                    cause: serde_json::from_str::<TermsFacetResponse>("{}").unwrap_err(),
                }),
            }
        }
    }

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn dump_writes_the_buckets_in_received_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeFacets::default().with("mainstream", &[("cat", 5), ("dog", 3)]);
        let path = dump(&source, "mainstream", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("words_mainstream.csv"));
        assert_eq!(
            read_lines(&path),
            vec!["word,documents containing word", "cat,5", "dog,3"]
        );
    }

    #[test]
    fn empty_facet_gives_a_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeFacets::default().with("detailed", &[]);
        let path = dump(&source, "detailed", dir.path()).unwrap();
        assert_eq!(read_lines(&path), vec!["word,documents containing word"]);
    }

    #[test]
    fn failed_facet_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeFacets::default();
        assert!(dump(&source, "government", dir.path()).is_err());
        assert!(!dir.path().join("words_government.csv").exists());
    }

    #[test]
    fn dump_all_processes_indexes_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeFacets::default()
            .with("government", &[("tax", 10)])
            .with("mainstream", &[("cat", 5)])
            .with("detailed", &[])
            .with("service-manual", &[("agile", 7)]);
        let paths = dump_all(&source, &crate::INDEXES, dir.path()).unwrap();
        assert_eq!(
            *source.queried.borrow(),
            vec!["government", "mainstream", "detailed", "service-manual"]
        );
        assert_eq!(paths.len(), 4);
        assert_eq!(
            read_lines(&dir.path().join("words_service-manual.csv")),
            vec!["word,documents containing word", "agile,7"]
        );
    }

    #[test]
    fn dump_all_stops_at_the_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeFacets::default()
            .with("government", &[("tax", 10)])
            .with("detailed", &[("form", 2)]);
        let res = dump_all(&source, &crate::INDEXES, dir.path());
        assert!(res.is_err());
        assert_eq!(*source.queried.borrow(), vec!["government", "mainstream"]);
        assert!(dir.path().join("words_government.csv").exists());
        assert!(!dir.path().join("words_mainstream.csv").exists());
        assert!(!dir.path().join("words_detailed.csv").exists());
    }
}
