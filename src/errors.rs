use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("unknown view `{}`", view))]
    UnknownViewError { view: String },

    #[snafu(display("unknown metric `{}`", metric))]
    UnknownMetricError { metric: String },

    #[snafu(display("failed parsing fixture data: {}", source))]
    FixtureError { source: serde_json::Error },

    #[snafu(display("failed registering template `{}`: {}", name, source))]
    TemplateError {
        name: String,
        source: handlebars::TemplateError,
    },

    #[snafu(display("failed rendering template `{}`: {}", name, source))]
    RenderError {
        name: String,
        source: handlebars::RenderError,
    },

    #[snafu(display("invalid value for setting {}: `{}`", key, value))]
    InvalidSettingError { key: String, value: String },

    #[snafu(display("failed setting up logging: {}", source))]
    LoggingError { source: fern::InitError },

    #[snafu(display("io error: {}", source))]
    IoError { source: std::io::Error },
}

pub type CustomResult<T> = Result<T, Error>;
