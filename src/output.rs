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
use crate::facets::TermBucket;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 2] = ["word", "documents containing word"];

/// `<dir>/words_<index>.csv`, the index name is used verbatim.
pub fn output_path(dir: &Path, index: &str) -> PathBuf {
    dir.join(format!("words_{}.csv", index))
}

pub fn write_terms<W: Write>(writer: W, terms: &[TermBucket]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    wtr.write_record(&HEADER)?;
    for bucket in terms {
        wtr.write_record(&[bucket.term.as_str(), bucket.count.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write the terms into it.
///
/// The parent directory is not created.
pub fn write_terms_file(path: &Path, terms: &[TermBucket]) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::output(path, e.into()))?;
    write_terms(file, terms).map_err(|e| Error::output(path, e))
}
