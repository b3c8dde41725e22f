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

use slog::{Drain, Never};
use std::env;

/// Install the global logger.
///
/// Logs go to stderr, in compact text, or in json when `RUST_LOG_JSON` is
/// set (`RUST_LOG_JSON=pretty` for indented json). The level is `info`
/// unless overridden by `RUST_LOG`. Records of the `log` crate (emitted by
/// the http client) are forwarded too.
///
/// Keep the returned guard alive until the end of the program.
pub fn logger_init() -> Result<slog_scope::GlobalLoggerGuard, failure::Error> {
    if let Ok(s) = env::var("RUST_LOG_JSON") {
        let mut drain = slog_json::Json::new(std::io::stderr())
            .add_default_keys()
            .add_key_value(o!(
                        "module" => slog::FnValue(|rinfo : &slog::Record<'_>| {
                            rinfo.module()
                        })
            ));
        if s == "pretty" {
            drain = drain.set_pretty(true);
        }
        configure_logger(drain.build().fuse())
    } else {
        configure_logger(
            slog_term::CompactFormat::new(slog_term::PlainDecorator::new(std::io::stderr()))
                .build()
                .fuse(),
        )
    }
}

fn configure_logger<T>(drain: T) -> Result<slog_scope::GlobalLoggerGuard, failure::Error>
where
    T: Drain<Ok = (), Err = Never> + Send + 'static,
{
    let builder = slog_envlogger::LogBuilder::new(drain).filter(None, slog::FilterLevel::Info);
    let builder = match env::var("RUST_LOG") {
        Ok(s) => builder.parse(&s),
        Err(_) => builder,
    };
    let drain = slog_async::Async::new(builder.build())
        .chan_size(256)
        .build();

    let log = slog::Logger::root(drain.fuse(), o!("app" => env!("CARGO_PKG_NAME")));
    let scope_guard = slog_scope::set_global_logger(log);
    slog_stdlog::init()?;
    Ok(scope_guard)
}
