use crate::config::PRINT_SINK_CALLS;
use crate::domain::{Attributes, OutputTarget, PlotSpec, SettingItem, SettingValue, Token};
use crate::error::{PlotError, Result};
use crate::sink::PlotSink;

/// Split a mapping into flag tokens (absent values) followed by named tokens.
pub fn split_attributes(attrs: &Attributes) -> Vec<Token> {
    let flags = attrs
        .iter()
        .filter(|(_, v)| v.is_none())
        .map(|(k, _)| Token::Flag(k.to_string()));
    let named = attrs
        .iter()
        .filter_map(|(k, v)| v.map(|v| Token::Named(k.to_string(), v.clone())));
    flags.chain(named).collect()
}

/// Token lists for one settings entry; each inner list is one `set` call.
pub fn expand_setting(value: &SettingValue) -> Vec<Vec<Token>> {
    match value {
        SettingValue::Flag => vec![vec![]],
        SettingValue::Scalar(s) => vec![vec![Token::Positional(s.clone())]],
        SettingValue::Map(attrs) => vec![split_attributes(attrs)],
        SettingValue::List(items) => items
            .iter()
            .map(|item| match item {
                SettingItem::Scalar(s) => vec![Token::Positional(s.clone())],
                SettingItem::Map(attrs) => split_attributes(attrs),
            })
            .collect(),
    }
}

/// Drive `sink` with every setting of `spec`, in insertion order, then one `plot`.
///
/// Nothing is validated here beyond structure; the first sink error aborts
/// the call and is returned as-is.
pub fn emit<S: PlotSink + ?Sized>(spec: &PlotSpec, sink: &mut S) -> Result<()> {
    for (key, value) in spec.settings().iter() {
        for tokens in expand_setting(value) {
            if PRINT_SINK_CALLS {
                log::debug!("set {} {:?}", key, tokens);
            }
            sink.set(key, &tokens)?;
        }
    }

    if PRINT_SINK_CALLS {
        log::debug!("plot {} series", spec.series().len());
    }
    sink.plot(spec.series())
}

/// `emit`, preceded by an output target switch when one is given.
pub fn render<S: PlotSink + ?Sized>(
    spec: &PlotSpec,
    target: Option<&OutputTarget>,
    sink: &mut S,
) -> Result<()> {
    if let Some(target) = target {
        sink.set_output_target(target)?;
    }
    emit(spec, sink)
}

/// Several specs on one page, filled row by row.
///
/// Each panel starts from a `reset` so settings of one panel never leak into
/// the next; the output target (if any) is set once, before the layout.
pub fn emit_multiplot<S: PlotSink + ?Sized>(
    specs: &[PlotSpec],
    rows: usize,
    cols: usize,
    target: Option<&OutputTarget>,
    sink: &mut S,
) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(PlotError::invalid("multiplot layout needs at least one row and one column"));
    }
    if specs.len() > rows * cols {
        return Err(PlotError::invalid(format!(
            "{} plots do not fit a {}x{} layout",
            specs.len(),
            rows,
            cols
        )));
    }

    if let Some(target) = target {
        sink.set_output_target(target)?;
    }
    sink.set_multiplot_layout(rows, cols)?;
    for spec in specs {
        sink.reset()?;
        emit(spec, sink)?;
    }
    sink.unset_multiplot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Scalar, SeriesArg, Settings};
    use crate::sink::{Recorder, SinkCall};

    fn set(key: &str, tokens: Vec<Token>) -> SinkCall {
        SinkCall::Set {
            key: key.to_string(),
            tokens,
        }
    }

    fn one_series() -> Vec<SeriesArg> {
        vec![SeriesArg::columns(vec![vec![0.0, 1.0], vec![1.0, 2.0]], Attributes::new())]
    }

    #[test]
    fn list_values_become_one_call_each_in_order() {
        let a = Scalar::raw("A");
        let b = Scalar::raw("B");
        let mut settings = Settings::new();
        settings
            .push("xtics", vec![SettingItem::from(a.clone()), SettingItem::from(b.clone())])
            .flag("grid");
        let spec = PlotSpec::new(one_series(), settings);

        let mut rec = Recorder::new();
        emit(&spec, &mut rec).unwrap();

        assert_eq!(
            rec.calls()[..3],
            [
                set("xtics", vec![Token::Positional(a)]),
                set("xtics", vec![Token::Positional(b)]),
                set("grid", vec![]),
            ]
        );
        assert_eq!(rec.calls().len(), 4);
        assert!(matches!(rec.calls()[3], SinkCall::Plot(_)));
    }

    #[test]
    fn mapping_puts_flags_before_named_values() {
        let attrs = Attributes::new()
            .with("by", -45)
            .flag("rotate")
            .with("scale", 0)
            .flag("nomirror");
        let tokens = split_attributes(&attrs);
        assert_eq!(
            tokens,
            vec![
                Token::Flag("rotate".into()),
                Token::Flag("nomirror".into()),
                Token::Named("by".into(), Scalar::Int(-45)),
                Token::Named("scale".into(), Scalar::Int(0)),
            ]
        );
    }

    #[test]
    fn list_of_mappings_splits_each_element() {
        let value = SettingValue::List(vec![
            SettingItem::Map(Attributes::new().flag("data").flag("histogram")),
            SettingItem::Map(Attributes::new().flag("histogram").flag("cluster").with("gap", 1)),
        ]);
        let calls = expand_setting(&value);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].len(), 3);
        assert_eq!(calls[1][2], Token::Named("gap".into(), Scalar::Int(1)));
    }

    #[test]
    fn emitting_twice_records_identical_calls() {
        let mut settings = Settings::new();
        settings
            .push("yrange", Scalar::range(0.0, 50.0))
            .push("style", Attributes::new().flag("fill_solid").with("border", -1))
            .flag("grid");
        let spec = PlotSpec::new(one_series(), settings);

        let mut first = Recorder::new();
        let mut second = Recorder::new();
        emit(&spec, &mut first).unwrap();
        emit(&spec, &mut second).unwrap();
        assert_eq!(first.calls(), second.calls());
    }

    #[test]
    fn sink_rejection_is_passed_through() {
        let mut settings = Settings::new();
        settings.flag("grid").push("bogus", Scalar::Int(1)).flag("key");
        let spec = PlotSpec::new(one_series(), settings);

        let mut rec = Recorder::rejecting("bogus");
        let err = emit(&spec, &mut rec).unwrap_err();
        assert_eq!(err, PlotError::SinkRejected("unsupported key: bogus".into()));
        // Aborted: nothing after the rejected call
        assert_eq!(rec.set_keys(), vec!["grid"]);
        assert_eq!(rec.plot_count(), 0);
    }

    #[test]
    fn render_sets_target_first() {
        let spec = PlotSpec::new(one_series(), Settings::new());
        let mut rec = Recorder::new();
        render(&spec, Some(&OutputTarget::gif("a.gif")), &mut rec).unwrap();
        assert_eq!(rec.calls()[0], SinkCall::OutputTarget(OutputTarget::gif("a.gif")));
        assert_eq!(rec.plot_count(), 1);
    }

    #[test]
    fn multiplot_wraps_each_panel() {
        let spec = PlotSpec::new(one_series(), Settings::new());
        let specs = vec![spec.clone(), spec];
        let mut rec = Recorder::new();
        emit_multiplot(&specs, 1, 2, None, &mut rec).unwrap();

        let calls = rec.calls();
        assert_eq!(calls[0], SinkCall::MultiplotLayout { rows: 1, cols: 2 });
        assert_eq!(calls[1], SinkCall::Reset);
        assert_eq!(calls.last(), Some(&SinkCall::UnsetMultiplot));
        assert_eq!(rec.plot_count(), 2);
    }

    #[test]
    fn multiplot_rejects_too_small_layout() {
        let spec = PlotSpec::new(one_series(), Settings::new());
        let specs = vec![spec.clone(), spec.clone(), spec];
        let mut rec = Recorder::new();
        let err = emit_multiplot(&specs, 1, 2, None, &mut rec).unwrap_err();
        assert!(matches!(err, PlotError::InvalidInput(_)));
        assert!(rec.calls().is_empty());
    }
}
