// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::str::FromStr;

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Coloured,
    Plain,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coloured" => Ok(LogFormat::Coloured),
            "plain" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "unknown log type '{other}', expected coloured, plain or json"
            )),
        }
    }
}

pub struct Log {
    level: tracing::Level,
    filter: String,
    format: LogFormat,
}

impl Log {
    pub fn new(level: tracing::Level, filter: String) -> Self {
        Self {
            level,
            filter,
            format: LogFormat::default(),
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn subscriber(
        &self,
    ) -> SubscriberBuilder<DefaultFields, Format, EnvFilter> {
        // Default log level plus the optional filter directives
        tracing_subscriber::fmt::Subscriber::builder().with_env_filter(
            EnvFilter::new(self.filter.as_str())
                .add_directive(self.level.into()),
        )
    }

    pub fn register(self) -> Result<(), SetGlobalDefaultError> {
        let subscriber = self.subscriber();
        match self.format {
            LogFormat::Json => {
                let subscriber = subscriber
                    .json()
                    .with_current_span(false)
                    .flatten_event(true)
                    .finish();

                tracing::subscriber::set_global_default(subscriber)
            }
            LogFormat::Plain => {
                let subscriber = subscriber.with_ansi(false).finish();
                tracing::subscriber::set_global_default(subscriber)
            }
            LogFormat::Coloured => {
                let subscriber = subscriber.finish();
                tracing::subscriber::set_global_default(subscriber)
            }
        }
    }
}
