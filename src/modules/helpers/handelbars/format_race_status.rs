use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError};

/// # race status formatting helper
/// a formatter to nicely display if a race has been run or not
///
/// ### usage
/// ```handlebars
/// {{formatRaceStatus true}}
/// {{formatRaceStatus false}}
/// ```
///
/// ### output
/// ```text
/// Completed
/// Upcoming
/// ```
#[derive(Clone, Copy)]
pub struct FormatRaceStatus;

impl HelperDef for FormatRaceStatus {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;

        let completed = helper
            .param(0)
            .and_then(|param| param.value().as_bool())
            .ok_or_else(|| RenderError::new("formatRaceStatus expects a boolean"))?;

        if completed {
            out.write("Completed")?;
        } else {
            out.write("Upcoming")?;
        }

        Ok(())
    }
}

pub fn check_param_count(h: &Helper, n: u64) -> Result<(), RenderError> {
    if h.params().len() != n as usize {
        return Err(RenderError::new(format!(
            "Wrong number of arguments for helper \"{}\", {n} was expected but {} were given",
            h.name(),
            h.params().len()
        )));
    }

    Ok(())
}
