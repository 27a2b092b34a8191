use handlebars::{no_escape, Handlebars};
use serde::Serialize;
use snafu::ResultExt;

use crate::errors::{CustomResult, RenderSnafu, TemplateSnafu};
use crate::modules::helpers::handelbars::bar::Bar;
use crate::modules::helpers::handelbars::format::Format;
use crate::modules::helpers::handelbars::format_date::FormatDateHelper;
use crate::modules::helpers::handelbars::format_points::FormatPoints;
use crate::modules::helpers::handelbars::format_race_status::FormatRaceStatus;

const TEMPLATES: [(&str, &str); 7] = [
    ("header", include_str!("../../templates/header.hbs")),
    ("dashboard", include_str!("../../templates/dashboard.hbs")),
    ("drivers", include_str!("../../templates/drivers.hbs")),
    ("teams", include_str!("../../templates/teams.hbs")),
    ("races", include_str!("../../templates/races.hbs")),
    ("comparison", include_str!("../../templates/comparison.hbs")),
    ("telemetry", include_str!("../../templates/telemetry.hbs")),
];

/// # template registry
/// all panel templates with the helpers they use. rendering is strict and
/// writes plain text, nothing is escaped.
///
/// ## Returns
/// * `Handlebars` - the registry
pub fn build_registry() -> CustomResult<Handlebars<'static>> {
    let mut registry = Handlebars::new();
    registry.register_helper("formatPoints", Box::new(FormatPoints));
    registry.register_helper("formatRaceStatus", Box::new(FormatRaceStatus));
    registry.register_helper("formatDate", Box::new(FormatDateHelper));
    registry.register_helper("format", Box::new(Format));
    registry.register_helper("bar", Box::new(Bar));
    registry.set_strict_mode(true);
    registry.register_escape_fn(no_escape);

    for (name, source) in TEMPLATES {
        registry
            .register_template_string(name, source)
            .context(TemplateSnafu { name })?;
    }

    Ok(registry)
}

pub fn render<T: Serialize>(registry: &Handlebars, name: &str, data: &T) -> CustomResult<String> {
    registry.render(name, data).context(RenderSnafu { name })
}
