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

use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dump_word_frequencies",
    about = "Dump the word frequencies of the search indexes to CSV files"
)]
pub struct Args {
    /// Directory receiving the `words_<index>.csv` files.
    ///
    /// The directory must already exist.
    #[structopt(
        short = "o",
        long = "output-dir",
        parse(from_os_str),
        default_value = "tmp"
    )]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_writes_to_tmp() {
        let args = Args::from_iter(&["dump_word_frequencies"]);
        assert_eq!(args.output_dir, PathBuf::from("tmp"));
    }

    #[test]
    fn output_dir_can_be_given() {
        let args = Args::from_iter(&["dump_word_frequencies", "-o", "/var/tmp/words"]);
        assert_eq!(args.output_dir, PathBuf::from("/var/tmp/words"));
    }
}
