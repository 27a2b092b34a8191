use chrono::NaiveDate;
use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError};

use crate::modules::helpers::handelbars::format_race_status::check_param_count;

/// # date formatting helper
///
/// ### usage
/// ```handlebars
/// {{formatDate "2025-03-16"}}
/// ```
///
/// ### output
/// ```text
/// Sun 16 Mar 2025
/// ```
#[derive(Clone, Copy)]
pub struct FormatDateHelper;

impl HelperDef for FormatDateHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper, _: &Handlebars, _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output) -> HelperResult {
        check_param_count(h, 1)?;

        let date_param = match h.param(0) {
            Some(param) => param,
            None => return Ok(()),
        };

        let date: NaiveDate = serde_json::from_value(date_param.value().clone())
            .map_err(|error| RenderError::new(format!("formatDate expects a date: {}", error)))?;
        out.write(&format!("{}", date.format("%a %e %b %Y")))?;

        Ok(())
    }
}
