use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError};

use crate::modules::helpers::handelbars::format_race_status::check_param_count;
use crate::modules::helpers::math::Math;

pub const BAR_WIDTH: usize = 20;

/// # bar chart helper
/// draws `value` as a horizontal bar relative to `max`
///
/// ### usage
/// ```handlebars
/// {{bar 150 300}}
/// ```
///
/// ### output
/// ```text
/// ##########..........
/// ```
#[derive(Clone, Copy)]
pub struct Bar;

impl HelperDef for Bar {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 2)?;

        let value = number_param(helper, 0)?;
        let max = number_param(helper, 1)?;

        out.write(&draw_bar(value, max))?;
        Ok(())
    }
}

fn number_param(helper: &Helper, index: usize) -> Result<f64, RenderError> {
    helper
        .param(index)
        .and_then(|param| param.value().as_f64())
        .ok_or_else(|| RenderError::new(format!("bar expects a number as argument {}", index + 1)))
}

/// a bar of `BAR_WIDTH` characters, filled for the share of `value` in `max`
pub fn draw_bar(value: f64, max: f64) -> String {
    let share = Math::points_share(value, max).clamp(0.0, 100.0);
    let filled = ((share / 100.0) * BAR_WIDTH as f64).round() as usize;

    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_full_bar() {
        assert_eq!(draw_bar(150.0, 300.0), "##########..........");
    }

    #[test]
    fn bar_is_clamped() {
        assert_eq!(draw_bar(900.0, 300.0), "#".repeat(BAR_WIDTH));
        assert_eq!(draw_bar(-5.0, 300.0), ".".repeat(BAR_WIDTH));
    }

    #[test]
    fn bar_with_zero_max_is_empty() {
        assert_eq!(draw_bar(10.0, 0.0), ".".repeat(BAR_WIDTH));
    }
}
