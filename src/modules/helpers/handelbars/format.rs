use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError};
use inflections::Inflect;

use crate::modules::helpers::handelbars::format_race_status::check_param_count;

/// # general formatting helper
/// turns identifiers into a human readable title
///
/// ### usage
/// ```handlebars
/// {{format "fastest_laps"}}
/// ```
///
/// ### output
/// ```text
/// Fastest Laps
/// ```
#[derive(Clone, Copy)]
pub struct Format;

impl HelperDef for Format {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;

        let text = helper
            .param(0)
            .and_then(|param| param.value().as_str())
            .ok_or_else(|| RenderError::new("format expects a string"))?;

        out.write(&text.to_title_case())?;
        Ok(())
    }
}
