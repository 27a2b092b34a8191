use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError};

use crate::modules::helpers::handelbars::format_race_status::check_param_count;

/// # number formatting helper
/// whole numbers are written without decimals, everything else with one
///
/// ### usage
/// ```handlebars
/// {{formatPoints 215}}
/// {{formatPoints 21.46}}
/// ```
///
/// ### output
/// ```text
/// 215
/// 21.5
/// ```
#[derive(Clone, Copy)]
pub struct FormatPoints;

impl HelperDef for FormatPoints {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;

        let number = helper
            .param(0)
            .and_then(|param| param.value().as_f64())
            .ok_or_else(|| RenderError::new("formatPoints expects a number"))?;

        out.write(&format_number(number))?;
        Ok(())
    }
}

pub fn format_number(number: f64) -> String {
    if number.fract() == 0.0 {
        format!("{:.0}", number)
    } else {
        format!("{:.1}", number)
    }
}
